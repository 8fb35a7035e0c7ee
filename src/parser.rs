//! Line-oriented parser for plain-text mowing plans.
//!
//! The format is tolerant: a malformed mower record is skipped with a
//! diagnostic and parsing continues with the next record. Only an empty
//! input or an unparseable lawn line aborts the whole plan.

use crate::mower::{Orientation, Pose};
use crate::plan::{Lawn, MowerDefinition, MowingPlan};
use glam::IVec2;

/// Fatal parse failures.
///
/// Per-record problems are not errors; the record is dropped and reported
/// through `tracing` instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained nothing but whitespace.
    #[error("empty mowing plan")]
    EmptyInput,
    /// The first line could not be read as lawn dimensions.
    #[error("invalid lawn line: {line:?}")]
    InvalidLawn { line: String },
}

/// Parses a full mowing plan out of `content`.
///
/// Line 0 carries the lawn dimensions; every following pair of lines is one
/// mower (position line, then instruction line). Lines are trimmed before
/// interpretation. Malformed mower records are skipped, never fatal; the
/// surviving definitions keep their input order.
pub fn parse(content: &str) -> Result<MowingPlan, ParseError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
    let lawn = parse_lawn(lines[0])?;

    let mut mowers = Vec::new();
    for record in lines[1..].chunks(2) {
        let position = record[0];
        let instructions = record.get(1).copied().unwrap_or_default();
        if instructions.is_empty() {
            tracing::warn!(position, "mower record has no instruction line, skipping");
            continue;
        }
        if let Some(mower) = parse_mower(position, instructions) {
            mowers.push(mower);
        }
    }

    Ok(MowingPlan { lawn, mowers })
}

/// Reads lawn dimensions from the first line of a plan.
///
/// All but the last character encode `max.x`; the last character alone
/// encodes `max.y`, so `"55"` is a 5 × 5 lawn and `"105"` is 10 × 5.
fn parse_lawn(line: &str) -> Result<Lawn, ParseError> {
    let invalid = || ParseError::InvalidLawn {
        line: line.to_owned(),
    };
    let mut head = line.chars();
    let last = head.next_back().ok_or_else(invalid)?;
    let max_x: u32 = head.as_str().parse().map_err(|_| invalid())?;
    let max_y = last.to_digit(10).ok_or_else(invalid)?;
    Ok(Lawn::new(max_x as i32, max_y as i32))
}

/// Reads one mower record, or `None` (after a diagnostic) when the record
/// is malformed.
///
/// A position line looks like `12 N`: digit `x`, digit `y`, one separator
/// character whose value is not checked, then the orientation letter.
fn parse_mower(position: &str, instructions: &str) -> Option<MowerDefinition> {
    let symbols: Vec<char> = position.chars().collect();
    if symbols.len() < 3 {
        tracing::warn!(position, "mower position line too short, skipping");
        return None;
    }
    let x = symbols[0].to_digit(10);
    let y = symbols[1].to_digit(10);
    let orientation = symbols.get(3).copied().and_then(Orientation::from_letter);
    let (Some(x), Some(y), Some(orientation)) = (x, y, orientation) else {
        tracing::warn!(position, "mower position line not valid, skipping");
        return None;
    };
    Some(MowerDefinition {
        start: Pose {
            position: IVec2::new(x as i32, y as i32),
            orientation,
        },
        instructions: instructions.to_owned(),
    })
}

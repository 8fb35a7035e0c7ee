//! Mowing plan data model: the lawn boundary and the mowers to run on it.

use crate::mower::Pose;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A rectangular lawn covering the inclusive grid `[0, max.x] × [0, max.y]`.
///
/// The bottom-left corner is always the origin. Immutable once parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawn {
    /// Top-right corner of the lawn.
    pub max: IVec2,
}

impl Lawn {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max: IVec2::new(max_x, max_y),
        }
    }

    /// Whether `position` lies on the lawn.
    pub fn contains(&self, position: IVec2) -> bool {
        position.cmpge(IVec2::ZERO).all() && position.cmple(self.max).all()
    }
}

/// A mower's starting pose plus its raw instruction string.
///
/// Instructions are kept unvalidated on purpose: unknown characters are
/// dealt with at simulation time, not parse time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerDefinition {
    /// Where the mower starts and which way it faces.
    pub start: Pose,

    /// Raw instruction characters, replayed left to right.
    pub instructions: String,
}

/// A parsed plan: one lawn and the mowers to run on it, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowingPlan {
    pub lawn: Lawn,
    pub mowers: Vec<MowerDefinition>,
}

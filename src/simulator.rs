//! Replays instruction strings against the mower state machine.

use crate::mower::{MowerOp, Orientation, Pose};
use crate::plan::{Lawn, MowerDefinition, MowingPlan};
use glam::IVec2;

/// Runs one mower's instruction string to completion and returns the final
/// pose.
///
/// Total over all inputs: unknown instruction characters are ignored with a
/// diagnostic, and a forward step that would leave the lawn is absorbed as
/// a no-op. The definition itself is never mutated.
pub fn simulate(mower: &MowerDefinition, lawn: &Lawn) -> Pose {
    let mut pose = mower.start;
    for symbol in mower.instructions.chars() {
        match MowerOp::from_symbol(symbol) {
            MowerOp::TurnLeft => pose.orientation = pose.orientation.turned_left(),
            MowerOp::TurnRight => pose.orientation = pose.orientation.turned_right(),
            MowerOp::Forward => pose.position = forward(pose, lawn),
            MowerOp::Ignore => tracing::debug!(%symbol, "unknown instruction ignored"),
        }
    }
    pose
}

/// Simulates every mower in the plan, strictly in plan order, and collects
/// the final poses in that same order.
pub fn run(plan: &MowingPlan) -> Vec<Pose> {
    plan.mowers
        .iter()
        .map(|mower| simulate(mower, &plan.lawn))
        .collect()
}

/// One forward step, gated per axis so the mower never crosses the lawn
/// boundary. A blocked step leaves the position unchanged.
fn forward(pose: Pose, lawn: &Lawn) -> IVec2 {
    let IVec2 { x, y } = pose.position;
    match pose.orientation {
        Orientation::North if y < lawn.max.y => IVec2::new(x, y + 1),
        Orientation::East if x < lawn.max.x => IVec2::new(x + 1, y),
        Orientation::South if y > 0 => IVec2::new(x, y - 1),
        Orientation::West if x > 0 => IVec2::new(x - 1, y),
        _ => pose.position,
    }
}

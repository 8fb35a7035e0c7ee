//! # mower-sim
//!
//! A UI-agnostic simulation core for programmable lawn mowers: a plain-text
//! plan goes in, the final pose of every mower comes out.
//!
//! It decouples the *plan* (lawn size, starting poses, instruction strings)
//! from the *presentation* (CLI, web frontend, tests), producing plain value
//! types that any shell can render. Parsing is tolerant per record, and the
//! simulation engine is total: it never fails, whatever the instructions.

pub mod mower;
pub mod parser;
pub mod plan;
pub mod simulator;

pub use mower::*;
pub use parser::*;
pub use plan::*;
pub use simulator::*;

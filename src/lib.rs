//! Risk attack planner library.
//!
//! Brute-force search over troop combinations and attack orders for a
//! simplified conquest game. Exposes the board model, candidate generation,
//! evaluation, search, and the input/output layers used by the binary.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod plan;
pub mod protocol;
pub mod render;
pub mod search;

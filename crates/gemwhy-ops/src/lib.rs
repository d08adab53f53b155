//! High-level operations wiring the CLI to the engine.

pub mod ops_why;
pub mod render;

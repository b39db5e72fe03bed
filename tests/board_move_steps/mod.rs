//! Step definitions for board movement BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

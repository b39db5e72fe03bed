//! Board configuration loaded by the host application.
//!
//! A board is seeded once from a JSON document describing its columns, task
//! records and WIP policy, then handed to a
//! [`BoardCoordinator`](crate::board::services::BoardCoordinator) for the
//! rest of the session.

mod seed;

pub use seed::{BoardSeed, BoardSeedError};

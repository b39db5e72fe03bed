//! Kanban core: the state engine behind an interactive task board.
//!
//! This crate owns everything about a board that is not presentation: the
//! ordered columns, the task records, how tasks are reordered and moved, and
//! how WIP limits gate those moves.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and rules with no infrastructure dependencies
//! - **Services**: The coordinator that owns the board snapshot and applies
//!   mutations atomically
//! - **Config**: JSON seeding of the initial board
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, ordering, WIP policy and the board coordinator

pub mod board;

//! Kanban board state engine.
//!
//! Columns hold ordered task references; tasks move within and between
//! columns subject to per-column WIP limits. The module follows hexagonal
//! architecture:
//!
//! - Domain types and pure rules in [`domain`]
//! - Mutation orchestration in [`services`]
//! - Seed loading in [`config`]
//!
//! Rendering, drag gesture capture and persistence belong to the host
//! application, which translates user gestures into coordinator calls.

pub mod config;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

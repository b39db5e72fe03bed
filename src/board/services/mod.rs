//! Application services for board mutations.

mod coordinator;
mod requests;

pub use coordinator::BoardCoordinator;
pub use requests::{CreateTaskRequest, MoveTaskRequest};

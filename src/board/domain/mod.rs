//! Domain model for the task board.
//!
//! Users own exactly one board. A board holds tasks moving through a fixed
//! four-stage pipeline and the labels used to tag them. Nothing in this module
//! performs I/O; persistence and session handling live in the service layer.

mod board;
mod error;
mod ids;
mod label;
mod task;
mod user;

pub use board::BoardState;
pub use error::{BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::{LabelId, TaskId, UserId};
pub use label::{LABEL_PALETTE, Label, LabelName, default_labels};
pub use task::{NewTask, Task, TaskPriority, TaskStatus};
pub use user::{Passcode, User, Username};

//! Personal task board: accounts, boards, and the status pipeline.
//!
//! Each user owns one private board of tasks and labels. Tasks move freely
//! between four pipeline statuses; deleting a label removes it from every
//! task in the same write. All users are persisted together as one aggregate
//! after every change. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Runtime settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

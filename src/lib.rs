//! Taskboard: the state core of a personal task board.
//!
//! This crate manages private workspaces of tasks and labels. Users register
//! and sign in with a username and passcode, then move tasks through a fixed
//! pipeline of statuses and tag them with their own labels. Presentation is
//! out of scope; a user interface drives the crate through the services in
//! [`board::services`].
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, HTTP APIs, memory)
//!
//! # Modules
//!
//! - [`board`]: Accounts, boards, persistence, and description enhancement

pub mod board;

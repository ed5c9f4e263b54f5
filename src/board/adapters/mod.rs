//! Adapter implementations for board ports.

pub mod fs;
pub mod gemini;
pub mod memory;

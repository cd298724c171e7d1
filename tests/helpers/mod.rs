//! Test helpers module
//!
//! This module provides utilities for testing lingokit: temporary
//! translation directories, sample dictionaries and one-time log setup.

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;

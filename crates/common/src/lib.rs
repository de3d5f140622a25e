//! Common utilities used across the lexeth codebase.
//!
//! This crate provides shared functionality for the lexeth toolkit, such as
//! hex encoding helpers and file manipulation.

/// General utility functions and types for common tasks.
pub mod utils;

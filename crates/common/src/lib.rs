//! Shared runtime plumbing: logging setup and startup environment checks.

pub mod env;
pub mod utils;

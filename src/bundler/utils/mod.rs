//! Shared utilities for pipeline stages.

pub mod fs;

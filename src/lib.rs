//! APK bundler - build-and-sign pipeline for template-based containers.
//!
//! This library injects application-specific bundle data into a pre-built
//! template container, re-archives it, cryptographically signs it and
//! publishes the result, orchestrating three external tools over a scratch
//! workspace. It can be used both as a CLI tool and as a library dependency
//! of a hosting application.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};

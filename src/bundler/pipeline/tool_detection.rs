//! External tool availability checking.
//!
//! Used by the CLI for preflight warnings before a pipeline invocation;
//! the pipeline itself gates on exit codes, not on detection.

use std::path::Path;

/// Checks whether a configured tool can plausibly be spawned.
///
/// Absolute paths are checked on disk; bare program names are resolved on
/// `PATH`. A `false` here means the corresponding stage is certain to fail.
pub fn tool_available(tool: &Path) -> bool {
    if tool.is_absolute() {
        return tool.is_file();
    }

    match which::which(tool) {
        Ok(found) => {
            log::debug!("found {} at {}", tool.display(), found.display());
            true
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {e}", tool.display());
            false
        }
    }
}

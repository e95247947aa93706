//! External tool invocation gated on exit codes.
//!
//! All three tool invocations of the pipeline share one shape: set the
//! working directory, start the process, block until it exits, compare the
//! exit code against the tool's normal code.

use std::ffi::OsStr;
use std::path::Path;

/// Runs an external tool to completion and gates on its exit code.
///
/// Blocks until the child exits. No timeout is enforced, so an unresponsive
/// tool stalls the pipeline; there is no cancellation once the child has
/// started.
///
/// Returns the failure reason when the tool cannot be started, is killed by
/// a signal, or exits with anything other than `expected_exit`.
pub(crate) async fn run_tool<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    working_dir: &Path,
    expected_exit: i32,
) -> std::result::Result<(), String> {
    log::debug!(
        "running {} in {}",
        program.display(),
        working_dir.display()
    );

    let status = tokio::process::Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .status()
        .await
        .map_err(|e| format!("failed to start {}: {e}", program.display()))?;

    match status.code() {
        Some(code) if code == expected_exit => Ok(()),
        Some(code) => Err(format!(
            "{} exited with status {code} (expected {expected_exit})",
            program.display()
        )),
        None => Err(format!("{} terminated by signal", program.display())),
    }
}

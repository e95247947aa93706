//! Progress reporting for pipeline invocations.
//!
//! The pipeline emits (percent, phase) pairs at fixed checkpoints. The
//! values are advisory and carry no internal semantics; 100 is implicit when
//! the call returns.

/// Observer receiving advisory progress notifications.
///
/// Invoked synchronously at each checkpoint on the pipeline's own task.
/// Implementations must not block.
pub trait ProgressSink: Send + Sync {
    /// Reports that a phase is beginning, with a percentage in `0..=100`.
    fn progress(&self, percent: u8, message: &str);
}

/// Progress sink forwarding checkpoints to the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn progress(&self, percent: u8, message: &str) {
        log::info!("[{percent:3}%] {message}");
    }
}

/// Progress sink discarding all notifications.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn progress(&self, _percent: u8, _message: &str) {}
}

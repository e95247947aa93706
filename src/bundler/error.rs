//! Error types for the build-and-sign pipeline.
//!
//! Internally the pipeline reports structured errors carrying paths, exit
//! codes and io sources. Hosts that only care about the coarse outcome reduce
//! them to [`GenerationResult`], which is the contract the surrounding
//! application observes.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building and signing a container.
#[derive(Error, Debug)]
pub enum Error {
    /// The editor collaborator yielded an empty bundle payload.
    #[error("editor produced no bundle data")]
    EmptyBundle,

    /// A filesystem operation failed while staging workspace files.
    #[error("{context} ({}): {source}", path.display())]
    Fs {
        /// What the pipeline was doing when the operation failed
        context: String,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// A file copy failed.
    ///
    /// Raised by both the template-container copy and the final publish copy;
    /// the paths disambiguate which one in the logs.
    #[error("copying {} to {} failed: {source}", from.display(), to.display())]
    Copy {
        /// Source path of the copy
        from: PathBuf,
        /// Destination path of the copy
        to: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The archiver could not be started or exited with an unexpected status.
    #[error("archiver failed: {reason}")]
    Archiver {
        /// Failure description including the exit status when available
        reason: String,
    },

    /// The signing tool chain could not be started or exited with an
    /// unexpected status.
    #[error("signer failed: {reason}")]
    Signer {
        /// Failure description including the exit status when available
        reason: String,
    },

    /// Settings were incomplete or inconsistent.
    #[error("{0}")]
    Config(String),
}

/// Flat, externally observable outcome of one pipeline invocation.
///
/// Exactly one of these is produced per call. It is the sole result the
/// hosting application sees besides the output path and the progress stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationResult {
    /// The signed container was published to the output directory.
    Success,
    /// Upstream content generation produced nothing.
    BundleProblem,
    /// A filesystem copy or staging operation failed.
    CopyProblem,
    /// The archiver exited with an unexpected status.
    ZipProblem,
    /// The signing tool exited with an unexpected status.
    SignApkProblem,
}

impl GenerationResult {
    /// Reduces a pipeline outcome to its flat result code.
    pub fn of<T>(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => Self::Success,
            Err(e) => e.generation_result(),
        }
    }
}

impl std::fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::BundleProblem => "bundle problem",
            Self::CopyProblem => "copy problem",
            Self::ZipProblem => "zip problem",
            Self::SignApkProblem => "signapk problem",
        };
        f.write_str(label)
    }
}

impl Error {
    /// Maps this error onto the flat outcome reported to the host.
    ///
    /// Filesystem and configuration failures all fall under
    /// [`GenerationResult::CopyProblem`]; the structured error keeps the
    /// detail the flat code drops.
    pub fn generation_result(&self) -> GenerationResult {
        match self {
            Self::EmptyBundle => GenerationResult::BundleProblem,
            Self::Fs { .. } | Self::Copy { .. } | Self::Config(_) => GenerationResult::CopyProblem,
            Self::Archiver { .. } => GenerationResult::ZipProblem,
            Self::Signer { .. } => GenerationResult::SignApkProblem,
        }
    }
}

/// Extension trait attaching filesystem context to io results.
pub trait ErrorExt<T> {
    /// Wraps an io error with the operation description and the path touched.
    fn fs_context(self, context: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait turning missing values into configuration errors.
pub trait Context<T> {
    /// Converts `None` into [`Error::Config`] with the given message.
    fn context(self, message: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, message: &str) -> Result<T> {
        self.ok_or_else(|| Error::Config(message.to_string()))
    }
}

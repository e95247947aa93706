//! File system utilities for workspace staging.
//!
//! Provides copy and directory operations with automatic parent creation
//! and idempotent removal, shared by the pipeline stages.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory tree", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory tree", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails with [`Error::Copy`] if the source path is missing, is not a regular
/// file, or the copy itself fails.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy_error = |source: io::Error| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(from).await.map_err(&copy_error)?;
    if !metadata.is_file() {
        return Err(copy_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source is not a regular file",
        )));
    }

    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await.map_err(&copy_error)?;
    }
    fs::copy(from, to).await.map_err(&copy_error)?;
    Ok(())
}

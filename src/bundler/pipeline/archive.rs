//! Payload staging and container assembly.
//!
//! Writes the bundle payload into the workspace, copies the template
//! container next to it, then folds the assets subtree into the container
//! with the external archiver.

use super::process;
use crate::bundler::error::{Error, ErrorExt, Result};
use crate::bundler::settings::Settings;
use crate::bundler::template::EntryPoint;
use crate::bundler::utils;
use crate::bundler::workspace::{ASSETS_DIR, Workspace};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Exit code the archiver reports on a normal run.
const ZIP_EXIT_NORMAL: i32 = 0;

/// Writes the bundle payload verbatim as UTF-8 into the workspace assets file.
///
/// The file is flushed and synced before returning so the archiver never
/// races a buffered writer.
pub(crate) async fn write_payload(
    workspace: &Workspace,
    file_name: &str,
    payload: &str,
) -> Result<PathBuf> {
    let path = workspace.asset_file(file_name);

    let mut file = tokio::fs::File::create(&path)
        .await
        .fs_context("creating bundle content file", &path)?;
    file.write_all(payload.as_bytes())
        .await
        .fs_context("writing bundle data", &path)?;
    file.flush().await.fs_context("flushing bundle data", &path)?;
    file.sync_all()
        .await
        .fs_context("syncing bundle data", &path)?;

    log::debug!("bundle data staged at {}", path.display());
    Ok(path)
}

/// Copies the pre-built template container into the workspace root under the
/// caller-provided target file name.
pub(crate) async fn copy_template(
    settings: &Settings,
    entry_point: &dyn EntryPoint,
    workspace: &Workspace,
    container_name: &str,
) -> Result<PathBuf> {
    let from = settings
        .templates_path()
        .join(entry_point.base_folder())
        .join(entry_point.mobile_application_apk_file());
    let to = workspace.container_file(container_name);

    utils::fs::copy_file(&from, &to).await?;
    Ok(to)
}

/// Folds the assets subtree into the container archive.
///
/// The archiver runs with the workspace root as its working directory, in
/// move mode, so the assets directory is consumed rather than left behind.
pub(crate) async fn inject_assets(
    settings: &Settings,
    workspace: &Workspace,
    container_name: &str,
) -> Result<()> {
    process::run_tool(
        settings.zip_utility_path(),
        &["-m", "-r", container_name, ASSETS_DIR],
        workspace.root(),
        ZIP_EXIT_NORMAL,
    )
    .await
    .map_err(|reason| Error::Archiver { reason })
}

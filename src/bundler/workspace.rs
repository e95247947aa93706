//! Workspace management for pipeline invocations.
//!
//! The workspace is an ephemeral scratch tree keyed by the product name,
//! created fresh per invocation and torn down on every exit path. Two
//! simultaneous invocations would share the same tree, so callers must
//! serialize calls to the pipeline.

use crate::bundler::error::Result;
use crate::bundler::utils;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Name of the subtree the archiver folds into the container.
pub const ASSETS_DIR: &str = "assets";

/// Supplies scratch and output locations and owns scratch teardown.
///
/// Implementations must make [`clean_workspace`](Self::clean_workspace)
/// idempotent: it is called before any scratch state exists and again after
/// every invocation, success or failure.
#[async_trait]
pub trait WorkspaceManager: Send + Sync {
    /// Root under which the per-product scratch directory is created.
    fn temp_directory(&self) -> &Path;

    /// Directory receiving finished artifacts.
    fn output_directory(&self) -> &Path;

    /// Removes the product scratch tree. Safe to call when nothing exists.
    async fn clean_workspace(&self) -> Result<()>;
}

/// Filesystem-backed [`WorkspaceManager`] keyed by a fixed product name.
#[derive(Debug)]
pub struct DirWorkspaceManager {
    temp_root: PathBuf,
    output_dir: PathBuf,
    product: String,
}

impl DirWorkspaceManager {
    /// Creates a manager staging scratch state under `<temp_root>/<product>`.
    pub fn new<P, Q>(temp_root: P, output_dir: Q, product: impl Into<String>) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            temp_root: temp_root.into(),
            output_dir: output_dir.into(),
            product: product.into(),
        }
    }

    fn product_root(&self) -> PathBuf {
        self.temp_root.join(&self.product)
    }
}

#[async_trait]
impl WorkspaceManager for DirWorkspaceManager {
    fn temp_directory(&self) -> &Path {
        &self.temp_root
    }

    fn output_directory(&self) -> &Path {
        &self.output_dir
    }

    async fn clean_workspace(&self) -> Result<()> {
        utils::fs::remove_dir_all(&self.product_root()).await
    }
}

/// Scratch directory tree staged for one pipeline invocation.
///
/// Owned exclusively by the pipeline for the duration of the call; nothing
/// inside it survives past the terminal cleanup.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    assets: PathBuf,
}

impl Workspace {
    /// Workspace root, used as the working directory of external tools.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `assets` subtree consumed by the archiver.
    pub fn assets_dir(&self) -> &Path {
        &self.assets
    }

    /// Path of a file inside the assets subtree.
    pub fn asset_file(&self, name: &str) -> PathBuf {
        self.assets.join(name)
    }

    /// Path of a container file staged at the workspace root.
    pub fn container_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Clears any prior scratch state and creates a fresh workspace tree.
///
/// Delegates the clearing to the manager's idempotent
/// [`clean_workspace`](WorkspaceManager::clean_workspace), then creates
/// `<temp_root>/<product>/assets/`.
pub async fn prepare(manager: &dyn WorkspaceManager, product: &str) -> Result<Workspace> {
    manager.clean_workspace().await?;

    let root = manager.temp_directory().join(product);
    let assets = root.join(ASSETS_DIR);
    utils::fs::create_dir_all(&assets, false).await?;

    log::debug!("workspace prepared at {}", root.display());
    Ok(Workspace { root, assets })
}

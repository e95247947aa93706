//! Publishing the signed container to the output directory.

use crate::bundler::error::Result;
use crate::bundler::utils;
use crate::bundler::workspace::Workspace;
use std::path::{Path, PathBuf};

/// Copies the signed container into the output directory, dropping the
/// signing-stage suffix.
///
/// Returns the final path, the only producer of the published output
/// location.
pub(crate) async fn publish(
    workspace: &Workspace,
    output_dir: &Path,
    signed_name: &str,
    container_name: &str,
) -> Result<PathBuf> {
    let from = workspace.container_file(signed_name);
    let to = output_dir.join(container_name);

    utils::fs::copy_file(&from, &to).await?;

    log::debug!("published {}", to.display());
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::error::GenerationResult;
    use crate::bundler::workspace::{self, DirWorkspaceManager};

    #[tokio::test]
    async fn publish_renames_away_the_signing_suffix() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = tempfile::tempdir().expect("tempdir");
        let manager = DirWorkspaceManager::new(temp.path(), out.path(), "demoapp");
        let ws = workspace::prepare(&manager, "demoapp").await.expect("prepare");

        tokio::fs::write(ws.container_file("app.apk.new"), b"signed")
            .await
            .expect("seed signed container");

        let path = publish(&ws, out.path(), "app.apk.new", "app.apk")
            .await
            .expect("publish");

        assert_eq!(path, out.path().join("app.apk"));
        assert_eq!(
            tokio::fs::read(&path).await.expect("read published"),
            b"signed"
        );
    }

    #[tokio::test]
    async fn missing_signed_container_is_a_copy_problem() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = tempfile::tempdir().expect("tempdir");
        let manager = DirWorkspaceManager::new(temp.path(), out.path(), "demoapp");
        let ws = workspace::prepare(&manager, "demoapp").await.expect("prepare");

        let err = publish(&ws, out.path(), "app.apk.new", "app.apk")
            .await
            .unwrap_err();

        assert_eq!(err.generation_result(), GenerationResult::CopyProblem);
    }
}

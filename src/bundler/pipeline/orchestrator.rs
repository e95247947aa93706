//! Pipeline orchestration and stage sequencing.
//!
//! This module provides the [`BundleBuilder`] controller that sequences the
//! five pipeline stages: workspace preparation, content export, archive
//! injection, container signing and output publishing.

use super::{archive, publish, signing};
use crate::bundler::error::Result;
use crate::bundler::progress::ProgressSink;
use crate::bundler::settings::Settings;
use crate::bundler::template::TemplateCore;
use crate::bundler::workspace::{self, WorkspaceManager};
use std::path::PathBuf;
use std::sync::Arc;

/// Build-and-sign pipeline controller.
///
/// Sequences the stages strictly forward; any failure aborts the remainder.
/// The terminal workspace cleanup runs on every exit path, success or
/// failure, before the call returns.
///
/// One invocation at a time: the workspace is keyed by the fixed product
/// name, so concurrent calls would corrupt each other's state. Callers must
/// serialize.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use apk_bundler::bundler::{
///     BundleBuilder, DirWorkspaceManager, LogProgress, Settings,
/// };
///
/// # async fn example(settings: Settings, core: &dyn apk_bundler::bundler::TemplateCore)
/// # -> apk_bundler::bundler::Result<()> {
/// let workspace = Arc::new(DirWorkspaceManager::new(
///     settings.temp_directory(),
///     settings.output_directory(),
///     settings.product_name(),
/// ));
/// let builder = BundleBuilder::new(settings, workspace, Arc::new(LogProgress));
///
/// let published = builder.generate(core, "app.apk").await?;
/// println!("published {}", published.display());
/// # Ok(())
/// # }
/// ```
pub struct BundleBuilder {
    settings: Settings,
    workspace: Arc<dyn WorkspaceManager>,
    progress: Arc<dyn ProgressSink>,
}

impl BundleBuilder {
    /// Creates a pipeline controller over the given collaborators.
    pub fn new(
        settings: Settings,
        workspace: Arc<dyn WorkspaceManager>,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            settings,
            workspace,
            progress,
        }
    }

    /// Returns a reference to the pipeline settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs one full build-and-sign invocation.
    ///
    /// Injects the payload produced by the core's editor into a copy of its
    /// template container, signs it, and publishes it to the output
    /// directory under `container_file_name`. Returns the final path.
    ///
    /// The workspace is torn down before returning regardless of the
    /// outcome; a failed teardown is logged and never masks the pipeline
    /// result.
    pub async fn generate(
        &self,
        core: &dyn TemplateCore,
        container_file_name: &str,
    ) -> Result<PathBuf> {
        let outcome = self.run_stages(core, container_file_name).await;

        // Terminal cleanup, once per call on every exit path.
        if let Err(e) = self.workspace.clean_workspace().await {
            log::warn!("workspace cleanup failed: {e}");
        }

        match &outcome {
            Ok(path) => log::info!("published container at {}", path.display()),
            Err(e) => log::error!("generation failed: {e}"),
        }
        outcome
    }

    async fn run_stages(
        &self,
        core: &dyn TemplateCore,
        container_file_name: &str,
    ) -> Result<PathBuf> {
        self.report(5, "Preparing workspace...");
        let ws = workspace::prepare(self.workspace.as_ref(), self.settings.product_name()).await?;

        self.report(10, "Extracting raw data from editor...");
        let payload = core.editor().produce_bundle_data().await;
        if payload.is_empty() {
            // No data received, nothing to inject. Single attempt, no retry.
            return Err(crate::bundler::Error::EmptyBundle);
        }

        self.report(20, "Writing bundle data into file...");
        archive::write_payload(&ws, self.settings.content_file_name(), &payload).await?;

        self.report(30, "Copying template apk file...");
        archive::copy_template(&self.settings, core.entry_point(), &ws, container_file_name)
            .await?;

        self.report(40, "Inserting data into apk file...");
        archive::inject_assets(&self.settings, &ws, container_file_name).await?;

        self.report(60, "Signing apk file...");
        let signed_name = signing::sign_container(&self.settings, &ws, container_file_name).await?;

        self.report(70, "Copying final apk file to output directory...");
        let published = publish::publish(
            &ws,
            self.workspace.output_directory(),
            &signed_name,
            container_file_name,
        )
        .await?;

        self.report(90, "Cleaning up workspace...");
        Ok(published)
    }

    fn report(&self, percent: u8, message: &str) {
        self.progress.progress(percent, message);
    }
}

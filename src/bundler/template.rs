//! Collaborator contracts supplied by the hosting application.
//!
//! The pipeline depends only on these capability interfaces, never on a
//! concrete host type. The editor produces the bundle payload, the entry
//! point names the pre-built template container, and [`TemplateCore`] ties
//! them together per product type.

use async_trait::async_trait;
use std::path::PathBuf;

/// Editor collaborator that materializes application content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Produces the serialized bundle payload.
    ///
    /// May be empty when the editor holds no content; the pipeline treats
    /// that as unrecoverable and makes no further attempt.
    async fn produce_bundle_data(&self) -> String;
}

/// Template metadata locating the pre-built container for a product type.
pub trait EntryPoint: Send + Sync {
    /// Path segment under the templates root for this product type.
    fn base_folder(&self) -> &str;

    /// File name of the pre-built template container.
    fn mobile_application_apk_file(&self) -> &str;
}

/// Capability interface implemented per product type.
pub trait TemplateCore: Send + Sync {
    /// The editor producing this product's bundle payload.
    fn editor(&self) -> &dyn ContentSource;

    /// Metadata locating this product's template container.
    fn entry_point(&self) -> &dyn EntryPoint;
}

/// Plain-value [`EntryPoint`] for products with static metadata.
#[derive(Debug, Clone)]
pub struct TemplateEntryPoint {
    base_folder: String,
    apk_file: String,
}

impl TemplateEntryPoint {
    /// Creates an entry point from a base folder segment and container name.
    pub fn new(base_folder: impl Into<String>, apk_file: impl Into<String>) -> Self {
        Self {
            base_folder: base_folder.into(),
            apk_file: apk_file.into(),
        }
    }
}

impl EntryPoint for TemplateEntryPoint {
    fn base_folder(&self) -> &str {
        &self.base_folder
    }

    fn mobile_application_apk_file(&self) -> &str {
        &self.apk_file
    }
}

/// Minimal [`TemplateCore`] wiring an arbitrary editor to static metadata.
pub struct StaticTemplateCore {
    editor: Box<dyn ContentSource>,
    entry_point: TemplateEntryPoint,
}

impl StaticTemplateCore {
    /// Creates a core from an editor and its entry-point metadata.
    pub fn new(editor: Box<dyn ContentSource>, entry_point: TemplateEntryPoint) -> Self {
        Self { editor, entry_point }
    }
}

impl TemplateCore for StaticTemplateCore {
    fn editor(&self) -> &dyn ContentSource {
        self.editor.as_ref()
    }

    fn entry_point(&self) -> &dyn EntryPoint {
        &self.entry_point
    }
}

/// Content source backed by a file on disk, used by the CLI binary.
///
/// Read failures degrade to an empty payload, which the pipeline reports as
/// a bundle problem.
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    /// Creates a source reading the payload from the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn produce_bundle_data(&self) -> String {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) => {
                log::warn!("reading bundle data from {}: {}", self.path.display(), e);
                String::new()
            }
        }
    }
}

//! Build-and-sign pipeline for template-based application containers.
//!
//! Injects editor-produced bundle data into a pre-built APK-style template
//! container, re-archives it with an external archiver, signs it with an
//! external signing tool chain, and publishes the result to an output
//! directory. The hosting application supplies the collaborators; the
//! external tools are black boxes gated on exit codes.

pub mod error;
pub mod pipeline;
pub mod progress;
pub mod settings;
pub mod template;
pub mod utils;
pub mod workspace;

// Re-export commonly used types
pub use error::{Context, Error, ErrorExt, GenerationResult, Result};
pub use pipeline::BundleBuilder;
pub use progress::{LogProgress, NullProgress, ProgressSink};
pub use settings::{Settings, SettingsBuilder, SettingsProfile};
pub use template::{
    ContentSource, EntryPoint, FileContentSource, StaticTemplateCore, TemplateCore,
    TemplateEntryPoint,
};
pub use workspace::{DirWorkspaceManager, Workspace, WorkspaceManager};

//! Command line interface for the apk bundler.
//!
//! Loads a settings profile, wires a file-backed content source into the
//! pipeline, runs one invocation and maps the flat outcome to a process
//! exit code.

mod args;

pub use args::Args;

use crate::bundler::{
    BundleBuilder, DirWorkspaceManager, FileContentSource, GenerationResult, LogProgress,
    Settings, SettingsProfile, StaticTemplateCore, TemplateEntryPoint,
    pipeline::tool_detection,
};
use crate::error::{AppError, CliError, Result};
use std::sync::Arc;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| AppError::Cli(CliError::InvalidArguments { reason }))?;

    let settings = SettingsProfile::load(&args.profile)?.into_settings()?;
    preflight(&settings);

    let workspace = Arc::new(DirWorkspaceManager::new(
        settings.temp_directory(),
        settings.output_directory(),
        settings.product_name(),
    ));
    let core = StaticTemplateCore::new(
        Box::new(FileContentSource::new(&args.bundle_data)),
        TemplateEntryPoint::new(args.base_folder, args.template_apk),
    );
    let builder = BundleBuilder::new(settings, workspace, Arc::new(LogProgress));

    let outcome = builder.generate(&core, &args.output_apk).await;
    let result = GenerationResult::of(&outcome);

    match &outcome {
        Ok(path) => println!("{}", path.display()),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(exit_code(result))
}

/// Warns about tools that are certain to fail before the pipeline runs.
fn preflight(settings: &Settings) {
    for (name, tool) in [
        ("archiver", settings.zip_utility_path()),
        ("interpreter", settings.java_interpreter_path()),
    ] {
        if !tool_detection::tool_available(tool) {
            log::warn!("{name} {} does not look runnable", tool.display());
        }
    }
}

/// Maps the flat pipeline outcome onto a process exit code.
fn exit_code(result: GenerationResult) -> i32 {
    match result {
        GenerationResult::Success => 0,
        GenerationResult::BundleProblem => 2,
        GenerationResult::CopyProblem => 3,
        GenerationResult::ZipProblem => 4,
        GenerationResult::SignApkProblem => 5,
    }
}

//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Build-and-sign pipeline for template-based application containers
#[derive(Parser, Debug)]
#[command(
    name = "apk_bundler",
    version,
    about = "Injects bundle data into a template APK, signs it and publishes it",
    long_about = "Injects a serialized bundle payload into a pre-built template container \
(an APK-style archive), re-archives it, signs it with the configured signing tool chain \
and copies the result to the output directory.

Usage:
  apk_bundler --profile bundler.toml --bundle-data content.xml \\
      --base-folder demoapp --template-apk template.apk --output-apk app.apk

Exit code 0 = the signed container exists in the output directory."
)]
pub struct Args {
    /// Settings profile (TOML) describing tool, template and output locations
    #[arg(short = 'p', long, value_name = "FILE")]
    pub profile: PathBuf,

    /// File holding the serialized bundle payload to inject
    #[arg(short = 'b', long, value_name = "FILE")]
    pub bundle_data: PathBuf,

    /// Template base folder under the templates root
    #[arg(long, value_name = "DIR")]
    pub base_folder: String,

    /// File name of the pre-built template container inside the base folder
    #[arg(long, value_name = "FILE")]
    pub template_apk: String,

    /// File name for the produced container in the output directory
    #[arg(short = 'o', long, value_name = "NAME")]
    pub output_apk: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.output_apk.is_empty() {
            return Err("Output apk name cannot be empty".to_string());
        }

        // The output name is staged inside the workspace, so it must be a
        // bare file name rather than a path.
        if self.output_apk.contains(['/', '\\']) {
            return Err(format!(
                "Output apk must be a bare file name, got: {}",
                self.output_apk
            ));
        }

        Ok(())
    }
}

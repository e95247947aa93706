//! APK Bundler - build-and-sign pipeline for template-based containers.
//!
//! This binary injects a bundle payload into a template APK, signs it with
//! the configured tool chain and publishes it, reporting the outcome via the
//! process exit code.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match apk_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

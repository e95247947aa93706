//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Main settings for pipeline invocations.
///
/// Central configuration for the pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Everything here is supplied
/// by the hosting application; the pipeline owns none of these locations
/// beyond a single call.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product name keying the per-invocation scratch directory.
    product_name: String,

    /// Root directory holding template assets per product type.
    templates_path: PathBuf,

    /// Root directory holding signing certificate material.
    certificates_path: PathBuf,

    /// Certificate file, relative to the certificates root.
    certificate_file: PathBuf,

    /// Private key file, relative to the certificates root.
    key_file: PathBuf,

    /// Archiver executable.
    zip_utility: PathBuf,

    /// Runtime interpreter executable invoking the signing utility.
    java_interpreter: PathBuf,

    /// Signing utility archive passed to the interpreter.
    sign_apk_utility: PathBuf,

    /// File name the payload is written under inside the assets subtree.
    content_file_name: String,

    /// Root under which the scratch workspace is created.
    temp_directory: PathBuf,

    /// Directory receiving published containers.
    output_directory: PathBuf,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the template assets root.
    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Resolves the certificate file under the certificates root.
    pub fn certificate_path(&self) -> PathBuf {
        self.certificates_path.join(&self.certificate_file)
    }

    /// Resolves the private key file under the certificates root.
    pub fn key_path(&self) -> PathBuf {
        self.certificates_path.join(&self.key_file)
    }

    /// Returns the archiver executable path.
    pub fn zip_utility_path(&self) -> &Path {
        &self.zip_utility
    }

    /// Returns the runtime interpreter executable path.
    pub fn java_interpreter_path(&self) -> &Path {
        &self.java_interpreter
    }

    /// Returns the signing utility archive path.
    pub fn sign_apk_utility_path(&self) -> &Path {
        &self.sign_apk_utility
    }

    /// Returns the payload file name used inside the assets subtree.
    pub fn content_file_name(&self) -> &str {
        &self.content_file_name
    }

    /// Returns the scratch root.
    pub fn temp_directory(&self) -> &Path {
        &self.temp_directory
    }

    /// Returns the output directory for published containers.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        product_name: String,
        templates_path: PathBuf,
        certificates_path: PathBuf,
        certificate_file: PathBuf,
        key_file: PathBuf,
        zip_utility: PathBuf,
        java_interpreter: PathBuf,
        sign_apk_utility: PathBuf,
        content_file_name: String,
        temp_directory: PathBuf,
        output_directory: PathBuf,
    ) -> Self {
        Self {
            product_name,
            templates_path,
            certificates_path,
            certificate_file,
            key_file,
            zip_utility,
            java_interpreter,
            sign_apk_utility,
            content_file_name,
            temp_directory,
            output_directory,
        }
    }
}

//! Builder for constructing Settings.

use super::Settings;
use crate::bundler::error::Context;
use std::path::{Path, PathBuf};

/// Payload file name used when none is configured.
const DEFAULT_CONTENT_FILE_NAME: &str = "template_content.xml";

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API with validation at [`build`](Self::build) time.
///
/// # Examples
///
/// ```no_run
/// use apk_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> apk_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .product_name("demoapp")
///     .templates_path("/usr/share/demoapp/templates")
///     .certificates_path("/usr/share/demoapp/certs")
///     .certificate_file("certificate.pem")
///     .key_file("key.pk8")
///     .zip_utility("/usr/bin/zip")
///     .java_interpreter("/usr/bin/java")
///     .sign_apk_utility("/usr/share/demoapp/signapk.jar")
///     .output_directory("/home/user/generated")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    product_name: Option<String>,
    templates_path: Option<PathBuf>,
    certificates_path: Option<PathBuf>,
    certificate_file: Option<PathBuf>,
    key_file: Option<PathBuf>,
    zip_utility: Option<PathBuf>,
    java_interpreter: Option<PathBuf>,
    sign_apk_utility: Option<PathBuf>,
    content_file_name: Option<String>,
    temp_directory: Option<PathBuf>,
    output_directory: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the product name keying the scratch directory.
    ///
    /// # Required
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the template assets root.
    ///
    /// # Required
    pub fn templates_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.templates_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the certificate material root.
    ///
    /// # Required
    pub fn certificates_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.certificates_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the certificate file, relative to the certificates root.
    ///
    /// # Required
    pub fn certificate_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.certificate_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the private key file, relative to the certificates root.
    ///
    /// # Required
    pub fn key_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.key_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archiver executable.
    ///
    /// # Required
    pub fn zip_utility<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.zip_utility = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the runtime interpreter executable.
    ///
    /// # Required
    pub fn java_interpreter<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.java_interpreter = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the signing utility archive.
    ///
    /// # Required
    pub fn sign_apk_utility<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sign_apk_utility = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the payload file name inside the assets subtree.
    ///
    /// Default: `template_content.xml`
    pub fn content_file_name(mut self, name: impl Into<String>) -> Self {
        self.content_file_name = Some(name.into());
        self
    }

    /// Sets the scratch root.
    ///
    /// Default: the system temporary directory
    pub fn temp_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.temp_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory for published containers.
    ///
    /// # Required
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing required field.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        Ok(Settings::new(
            self.product_name.context("product_name is required")?,
            self.templates_path.context("templates_path is required")?,
            self.certificates_path
                .context("certificates_path is required")?,
            self.certificate_file
                .context("certificate_file is required")?,
            self.key_file.context("key_file is required")?,
            self.zip_utility.context("zip_utility is required")?,
            self.java_interpreter
                .context("java_interpreter is required")?,
            self.sign_apk_utility
                .context("sign_apk_utility is required")?,
            self.content_file_name
                .unwrap_or_else(|| DEFAULT_CONTENT_FILE_NAME.to_string()),
            self.temp_directory.unwrap_or_else(std::env::temp_dir),
            self.output_directory
                .context("output_directory is required")?,
        ))
    }
}

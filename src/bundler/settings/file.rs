//! Settings profiles loaded from TOML files.

use super::{Settings, SettingsBuilder};
use crate::bundler::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk form of [`Settings`], one profile per TOML file.
///
/// Optional fields fall back to the builder defaults.
///
/// ```toml
/// product_name = "demoapp"
/// templates_path = "/usr/share/demoapp/templates"
/// certificates_path = "/usr/share/demoapp/certs"
/// certificate_file = "certificate.pem"
/// key_file = "key.pk8"
/// zip_utility = "/usr/bin/zip"
/// java_interpreter = "/usr/bin/java"
/// sign_apk_utility = "/usr/share/demoapp/signapk.jar"
/// output_directory = "/home/user/generated"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsProfile {
    product_name: String,
    templates_path: PathBuf,
    certificates_path: PathBuf,
    certificate_file: PathBuf,
    key_file: PathBuf,
    zip_utility: PathBuf,
    java_interpreter: PathBuf,
    sign_apk_utility: PathBuf,
    content_file_name: Option<String>,
    temp_directory: Option<PathBuf>,
    output_directory: PathBuf,
}

impl SettingsProfile {
    /// Loads a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).fs_context("reading settings profile", path)?;
        toml::from_str(&raw).map_err(|e| {
            Error::Config(format!("invalid settings profile {}: {e}", path.display()))
        })
    }

    /// Converts the profile into validated [`Settings`].
    pub fn into_settings(self) -> Result<Settings> {
        let mut builder = SettingsBuilder::new()
            .product_name(self.product_name)
            .templates_path(self.templates_path)
            .certificates_path(self.certificates_path)
            .certificate_file(self.certificate_file)
            .key_file(self.key_file)
            .zip_utility(self.zip_utility)
            .java_interpreter(self.java_interpreter)
            .sign_apk_utility(self.sign_apk_utility)
            .output_directory(self.output_directory);

        if let Some(name) = self.content_file_name {
            builder = builder.content_file_name(name);
        }
        if let Some(dir) = self.temp_directory {
            builder = builder.temp_directory(dir);
        }

        builder.build()
    }
}

//! Configuration for the build-and-sign pipeline.
//!
//! Settings name the externally configured locations the pipeline touches:
//! template assets, certificate material, the three external tools, and the
//! scratch and output roots. Construct them with [`SettingsBuilder`] or load
//! a TOML profile with [`SettingsProfile`].

mod builder;
mod core;
mod file;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use file::SettingsProfile;

//! The build-and-sign pipeline stages and their controller.

mod archive;
mod orchestrator;
mod process;
mod publish;
mod signing;
pub mod tool_detection;

pub use orchestrator::BundleBuilder;

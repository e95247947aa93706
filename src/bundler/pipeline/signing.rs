//! Container signing via the external interpreter and signing utility.

use super::process;
use crate::bundler::error::{Error, Result};
use crate::bundler::settings::Settings;
use crate::bundler::workspace::Workspace;
use std::ffi::OsString;

/// Exit code the signing utility reports while working normally.
const SIGNAPK_EXIT_WORKING: i32 = 0;

/// Suffix the signing stage appends to the container name.
pub(crate) const SIGNED_SUFFIX: &str = ".new";

/// Signs the assembled container, producing `<container>.new` alongside it.
///
/// Resolves the certificate and key under the configured certificate root
/// and invokes the interpreter with the signing utility in the workspace
/// root. The original container is left in place; the publish stage drops
/// the suffix.
pub(crate) async fn sign_container(
    settings: &Settings,
    workspace: &Workspace,
    container_name: &str,
) -> Result<String> {
    let signed_name = format!("{container_name}{SIGNED_SUFFIX}");

    let args: Vec<OsString> = vec![
        OsString::from("-jar"),
        settings.sign_apk_utility_path().into(),
        settings.certificate_path().into_os_string(),
        settings.key_path().into_os_string(),
        OsString::from(container_name),
        OsString::from(&signed_name),
    ];

    process::run_tool(
        settings.java_interpreter_path(),
        &args,
        workspace.root(),
        SIGNAPK_EXIT_WORKING,
    )
    .await
    .map_err(|reason| Error::Signer { reason })?;

    Ok(signed_name)
}

//! End-to-end pipeline tests with fake external tools.
//!
//! The archiver and the signing interpreter are replaced by shell scripts
//! that emulate their observable behavior (consume the assets subtree,
//! produce the `.new` container) or fail with a chosen exit code.

#![cfg(unix)]

use apk_bundler::bundler::{
    BundleBuilder, ContentSource, DirWorkspaceManager, GenerationResult, ProgressSink, Result,
    Settings, SettingsBuilder, StaticTemplateCore, TemplateEntryPoint, WorkspaceManager,
};
use async_trait::async_trait;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const PRODUCT: &str = "demoapp";
const TEMPLATE_APK: &str = "template.apk";
const TEMPLATE_BYTES: &[u8] = b"PK-template-container";
const PAYLOAD: &str = "<xml/>";

/// Editor stub yielding a fixed payload.
struct StaticContent(String);

#[async_trait]
impl ContentSource for StaticContent {
    async fn produce_bundle_data(&self) -> String {
        self.0.clone()
    }
}

/// Workspace manager counting cleanup invocations.
struct CountingWorkspace {
    inner: DirWorkspaceManager,
    cleanups: AtomicUsize,
}

impl CountingWorkspace {
    fn new(inner: DirWorkspaceManager) -> Self {
        Self {
            inner,
            cleanups: AtomicUsize::new(0),
        }
    }

    fn cleanups(&self) -> usize {
        self.cleanups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkspaceManager for CountingWorkspace {
    fn temp_directory(&self) -> &Path {
        self.inner.temp_directory()
    }

    fn output_directory(&self) -> &Path {
        self.inner.output_directory()
    }

    async fn clean_workspace(&self) -> Result<()> {
        self.cleanups.fetch_add(1, Ordering::SeqCst);
        self.inner.clean_workspace().await
    }
}

/// Progress sink recording the checkpoint percentages.
#[derive(Default)]
struct RecordingProgress(Mutex<Vec<u8>>);

impl RecordingProgress {
    fn checkpoints(&self) -> Vec<u8> {
        self.0.lock().expect("progress lock").clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn progress(&self, percent: u8, _message: &str) {
        self.0.lock().expect("progress lock").push(percent);
    }
}

/// One fully wired pipeline over fake tools in a temp tree.
struct Harness {
    _root: tempfile::TempDir,
    temp_root: PathBuf,
    out_dir: PathBuf,
    builder: BundleBuilder,
    workspace: Arc<CountingWorkspace>,
    progress: Arc<RecordingProgress>,
}

impl Harness {
    fn workspace_root(&self) -> PathBuf {
        self.temp_root.join(PRODUCT)
    }

    async fn generate(&self, payload: &str, container: &str) -> Result<PathBuf> {
        let core = StaticTemplateCore::new(
            Box::new(StaticContent(payload.to_string())),
            TemplateEntryPoint::new(PRODUCT, TEMPLATE_APK),
        );
        self.builder.generate(&core, container).await
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod script");
}

/// Archiver emulation: consume the assets subtree like `zip -m` would.
const ZIP_OK: &str = "rm -rf \"$4\"\nexit 0";
/// Signer emulation: produce the `.new` container next to the original.
const JAVA_OK: &str = "cp \"$5\" \"$6\"\nexit 0";

/// Builds a harness with the given fake tool bodies and an optional template
/// container seeded under the templates root.
fn harness(zip_body: &str, java_body: &str, with_template: bool) -> Harness {
    let root = tempfile::tempdir().expect("tempdir");
    let base = root.path();

    let temp_root = base.join("tmp");
    let out_dir = base.join("out");
    let templates = base.join("templates");
    let certs = base.join("certs");
    let bin = base.join("bin");
    for dir in [&temp_root, &out_dir, &templates, &certs, &bin] {
        std::fs::create_dir_all(dir).expect("create dir");
    }

    if with_template {
        let template_dir = templates.join(PRODUCT);
        std::fs::create_dir_all(&template_dir).expect("template dir");
        std::fs::write(template_dir.join(TEMPLATE_APK), TEMPLATE_BYTES).expect("seed template");
    }

    std::fs::write(certs.join("certificate.pem"), b"cert").expect("seed cert");
    std::fs::write(certs.join("key.pk8"), b"key").expect("seed key");
    std::fs::write(base.join("signapk.jar"), b"jar").expect("seed jar");

    let zip = bin.join("zip");
    let java = bin.join("java");
    write_script(&zip, zip_body);
    write_script(&java, java_body);

    let settings: Settings = SettingsBuilder::new()
        .product_name(PRODUCT)
        .templates_path(&templates)
        .certificates_path(&certs)
        .certificate_file("certificate.pem")
        .key_file("key.pk8")
        .zip_utility(&zip)
        .java_interpreter(&java)
        .sign_apk_utility(base.join("signapk.jar"))
        .temp_directory(&temp_root)
        .output_directory(&out_dir)
        .build()
        .expect("settings");

    let workspace = Arc::new(CountingWorkspace::new(DirWorkspaceManager::new(
        &temp_root, &out_dir, PRODUCT,
    )));
    let progress = Arc::new(RecordingProgress::default());
    let builder = BundleBuilder::new(settings, workspace.clone(), progress.clone());

    Harness {
        _root: root,
        temp_root,
        out_dir,
        builder,
        workspace,
        progress,
    }
}

#[tokio::test]
async fn success_publishes_signed_container_to_output_directory() {
    let h = harness(ZIP_OK, JAVA_OK, true);

    let published = h.generate(PAYLOAD, "app.apk").await.expect("generate");

    assert_eq!(published, h.out_dir.join("app.apk"));
    assert_eq!(
        std::fs::read(&published).expect("read published"),
        TEMPLATE_BYTES
    );
    // Workspace must not survive the call.
    assert!(!h.workspace_root().exists());
    // Initial clear plus the terminal cleanup.
    assert_eq!(h.workspace.cleanups(), 2);
    assert_eq!(h.progress.checkpoints(), vec![5, 10, 20, 30, 40, 60, 70, 90]);
}

#[tokio::test]
async fn empty_bundle_data_is_a_bundle_problem_and_starts_no_tools() {
    let marker_dir = tempfile::tempdir().expect("tempdir");
    let zip_marker = marker_dir.path().join("zip-ran");
    let java_marker = marker_dir.path().join("java-ran");
    let h = harness(
        &format!("touch {}\nexit 0", zip_marker.display()),
        &format!("touch {}\nexit 0", java_marker.display()),
        true,
    );

    let outcome = h.generate("", "app.apk").await;

    assert_eq!(
        GenerationResult::of(&outcome),
        GenerationResult::BundleProblem
    );
    assert!(!zip_marker.exists());
    assert!(!java_marker.exists());
    assert!(!h.workspace_root().exists());
    assert_eq!(h.workspace.cleanups(), 2);
    assert!(std::fs::read_dir(&h.out_dir).expect("out dir").next().is_none());
    // Pipeline stops right after the export checkpoint.
    assert_eq!(h.progress.checkpoints(), vec![5, 10]);
}

#[tokio::test]
async fn missing_template_is_a_copy_problem_and_skips_the_archiver() {
    let marker_dir = tempfile::tempdir().expect("tempdir");
    let zip_marker = marker_dir.path().join("zip-ran");
    let h = harness(
        &format!("touch {}\nexit 0", zip_marker.display()),
        JAVA_OK,
        false,
    );

    let outcome = h.generate(PAYLOAD, "app.apk").await;

    assert_eq!(GenerationResult::of(&outcome), GenerationResult::CopyProblem);
    assert!(!zip_marker.exists());
    assert!(!h.workspace_root().exists());
    assert_eq!(h.workspace.cleanups(), 2);
}

#[tokio::test]
async fn archiver_failure_is_a_zip_problem_and_skips_the_signer() {
    let marker_dir = tempfile::tempdir().expect("tempdir");
    let java_marker = marker_dir.path().join("java-ran");
    let h = harness(
        "echo archiver noise on stdout\nexit 12",
        &format!("touch {}\nexit 0", java_marker.display()),
        true,
    );

    let outcome = h.generate(PAYLOAD, "app.apk").await;

    assert_eq!(GenerationResult::of(&outcome), GenerationResult::ZipProblem);
    assert!(!java_marker.exists());
    assert!(!h.workspace_root().exists());
    assert_eq!(h.workspace.cleanups(), 2);
}

#[tokio::test]
async fn signer_failure_is_a_sign_apk_problem_and_publishes_nothing() {
    let h = harness(ZIP_OK, "exit 1", true);

    let outcome = h.generate(PAYLOAD, "app.apk").await;

    assert_eq!(
        GenerationResult::of(&outcome),
        GenerationResult::SignApkProblem
    );
    assert!(std::fs::read_dir(&h.out_dir).expect("out dir").next().is_none());
    assert!(!h.workspace_root().exists());
    assert_eq!(h.workspace.cleanups(), 2);
}

#[tokio::test]
async fn payload_is_on_disk_verbatim_when_the_archiver_runs() {
    let capture_dir = tempfile::tempdir().expect("tempdir");
    let capture = capture_dir.path().join("seen-payload");
    let h = harness(
        &format!(
            "cp assets/template_content.xml {}\nrm -rf \"$4\"\nexit 0",
            capture.display()
        ),
        JAVA_OK,
        true,
    );

    h.generate(PAYLOAD, "app.apk").await.expect("generate");

    assert_eq!(
        std::fs::read_to_string(&capture).expect("captured payload"),
        PAYLOAD
    );
}

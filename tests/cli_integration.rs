use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[gallery]]
name = "travel"

[[gallery.item]]
src = "img/forest.jpg"
tag = "nature"

[[gallery.item]]
src = "img/street.jpg"
tag = "city"

[[gallery.item]]
src = "img/lake.jpg"
tag = "nature"

[[gallery]]
name = "clips"
options = { navigation = false }

[[gallery.item]]
src = "clips/tram.mp4"
tag = "city"
"#;

/// Binary with an isolated config file, so the user's own is never touched.
fn tessera(tmp: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tessera"));
    cmd.arg("--config").arg(tmp.join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn with_manifest() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let manifest = tmp.path().join("gallery.toml");
    fs::write(&manifest, MANIFEST).expect("write manifest");
    (tmp, manifest)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_no_panic(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "unexpected panic: {}", stderr);
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_tessera"))
        .arg("--help")
        .output()
        .expect("failed to run");
    assert!(output.status.success(), "tessera --help should exit 0");
    assert!(
        stdout(&output).contains("Tag-filterable media gallery"),
        "help should contain description"
    );
}

#[test]
fn test_version_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_tessera"))
        .arg("--version")
        .output()
        .expect("failed to run");
    assert!(output.status.success(), "tessera --version should exit 0");
    assert!(
        stdout(&output).contains("tessera"),
        "version output should contain crate name"
    );
}

#[test]
fn test_tags_lists_counts_in_bar_order() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .arg("tags")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "all\t3\nnature\t2\ncity\t1\n");
    assert!(tmp.path().join("config.toml").exists(), "default config written");
}

#[test]
fn test_list_filters_by_tag() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["list", "--tag", "nature"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "0\tnature\timage\timg/forest.jpg\n2\tnature\timage\timg/lake.jpg\n"
    );
}

#[test]
fn test_list_json_selects_named_gallery() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["--gallery", "clips", "list", "--json"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(items[0]["src"], "clips/tram.mp4");
    assert_eq!(items[0]["kind"], "other");
}

#[test]
fn test_list_unknown_tag_fails() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["list", "--tag", "mountains"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_no_panic(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown tag 'mountains'"));
}

#[test]
fn test_replay_follows_filtered_navigation() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["replay", "tag:nature", "open:0", "next", "next", "prev"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("> tag:nature\n  unhighlight all\n  highlight nature\n"));
    assert!(out.contains("  hide 1\n"));
    assert!(out.contains("  viewer #galleryLightbox shown\n"));
    assert!(out.ends_with("final: filter=nature viewer=open item=2 src=img/lake.jpg\n"));
}

#[test]
fn test_replay_json_reports_dropped_events() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["replay", "--json", "tag:all", "close"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(report["gallery"], "travel");
    assert_eq!(report["steps"][0]["changed"], false);
    assert_eq!(report["final"]["viewer_open"], false);
}

#[test]
fn test_replay_rejects_bad_event() {
    let (tmp, manifest) = with_manifest();
    let output = tessera(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .args(["replay", "open:x"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_no_panic(&output);
}

#[test]
fn test_directory_scan_tags_by_folder() {
    let tmp = TempDir::new().expect("tempdir");
    let media = tmp.path().join("media");
    fs::create_dir_all(media.join("city")).expect("mkdir");
    fs::create_dir_all(media.join("sea")).expect("mkdir");
    fs::write(media.join("city").join("a.jpg"), b"").expect("write");
    fs::write(media.join("sea").join("b.png"), b"").expect("write");
    fs::write(media.join("readme.txt"), b"").expect("write");

    let output = tessera(tmp.path())
        .arg("--dir")
        .arg(&media)
        .arg("tags")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "all\t2\ncity\t1\nsea\t1\n");
}

#[test]
fn test_missing_dir_fails_gracefully() {
    let tmp = TempDir::new().expect("tempdir");
    let output = tessera(tmp.path())
        .args(["--dir", "/tmp/tessera_test_nonexistent_dir_12345", "tags"])
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    assert_no_panic(&output);
}

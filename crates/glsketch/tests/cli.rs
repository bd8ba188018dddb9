//! End-to-end tests for the glsketch binary
//!
//! External stages are disabled so the tests exercise argument parsing,
//! validation, and the file-writing pipeline without touching npm or git.

use assert_cmd::Command;
use predicates::prelude::*;

fn glsketch() -> Command {
    Command::cargo_bin("glsketch").unwrap()
}

/// Flags that turn off every external-tool stage
const OFFLINE: &[&str] = &["--no-install", "--no-git", "--no-code", "--no-run"];

#[test]
fn help_exits_zero() {
    glsketch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shader-sketch"));
}

#[test]
fn scaffolds_a_default_project() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .arg("demo")
        .args(OFFLINE)
        .assert()
        .success();

    let dir = tmp.path().join("demo");
    for file in [
        "package.json",
        "vite.config.js",
        "index.html",
        ".gitignore",
        "src/main.js",
        "src/shaders/vert.glsl",
        "src/shaders/frag.glsl",
        "README.md",
    ] {
        assert!(dir.join(file).is_file(), "missing {}", file);
    }
    assert!(!dir.join("src/shaders/lygia").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "demo");
}

#[test]
fn rejects_invalid_project_name() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .arg("my sketch")
        .args(OFFLINE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("letters, digits"));

    assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
}

#[test]
fn rejects_reserved_project_name() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .arg("dist")
        .args(OFFLINE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn refuses_non_empty_target_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("demo");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep.txt"), "hello").unwrap();

    glsketch()
        .current_dir(tmp.path())
        .arg("demo")
        .args(OFFLINE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(std::fs::read_to_string(target.join("keep.txt")).unwrap(), "hello");
    assert!(!target.join("package.json").exists());
}

#[test]
fn raw_template_inlines_shaders() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .args(["demo", "--template", "raw"])
        .args(OFFLINE)
        .assert()
        .success();

    let dir = tmp.path().join("demo");
    assert!(!dir.join("src/shaders").exists());
    let main = std::fs::read_to_string(dir.join("src/main.js")).unwrap();
    assert!(main.contains("mainImage"));
}

#[test]
fn pm_flag_overrides_detection() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .env("npm_config_user_agent", "yarn/4.1.0 npm/? node/v20.11.0 linux x64")
        .args(["demo", "--pm", "pnpm"])
        .args(OFFLINE)
        .assert()
        .success();

    let readme = std::fs::read_to_string(tmp.path().join("demo/README.md")).unwrap();
    assert!(readme.contains("pnpm install"));
}

#[test]
fn run_flag_attempts_dev_server_even_without_install() {
    let tmp = tempfile::tempdir().unwrap();

    // Empty PATH: the dev-server launch must still be attempted, and its
    // failure downgraded to a warning naming the manual command.
    let output = glsketch()
        .current_dir(tmp.path())
        .env("PATH", "")
        .args(["demo", "--no-install", "--no-git", "--no-code", "--run", "--pm", "npm"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.contains("Dev server failed"), "no attempt logged:\n{}", combined);
    assert!(combined.contains("npm run dev"));
}

#[test]
fn no_lygia_with_git_enabled_never_creates_the_submodule_path() {
    let tmp = tempfile::tempdir().unwrap();

    let output = glsketch()
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("GIT_AUTHOR_NAME", "test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .args(["demo", "--no-install", "--no-lygia", "--no-code", "--no-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let dir = tmp.path().join("demo");
    assert!(!dir.join("src/shaders/lygia").exists());

    let git_available = std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if git_available {
        assert!(dir.join(".git").exists());
    }
}

#[test]
fn user_agent_hint_selects_the_package_manager() {
    let tmp = tempfile::tempdir().unwrap();

    glsketch()
        .current_dir(tmp.path())
        .env("npm_config_user_agent", "yarn/4.1.0 npm/? node/v20.11.0 linux x64")
        .arg("demo")
        .args(OFFLINE)
        .assert()
        .success();

    let readme = std::fs::read_to_string(tmp.path().join("demo/README.md")).unwrap();
    assert!(readme.contains("yarn install"));
    assert!(readme.contains("yarn dev"));
}

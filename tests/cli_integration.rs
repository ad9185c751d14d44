//! CLI integration tests.
//!
//! These tests drive the binary over fixture bundles and verify the
//! generated launcher configuration byte-for-byte.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIGURATOR: &str = "org.eclipse.equinox.simpleconfigurator";
const FRAMEWORK: &str = "org.eclipse.osgi";

/// Get the binary command.
fn equinox_launch() -> Command {
    Command::cargo_bin("equinox-launch").unwrap()
}

/// Create a directory-form bundle with the given identity.
fn write_bundle(root: &Path, dir: &str, name: &str, version: &str) -> PathBuf {
    let path = root.join(dir);
    fs::create_dir_all(path.join("META-INF")).unwrap();
    fs::write(
        path.join("META-INF/MANIFEST.MF"),
        format!("Bundle-SymbolicName: {name}\nBundle-Version: {version}\n"),
    )
    .unwrap();
    path
}

/// A canonicalized temp root, so generated paths compare exactly.
fn temp_root() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    (tmp, root)
}

// ============================================================================
// equinox-launch generate
// ============================================================================

#[test]
fn test_generate_writes_exact_config_ini() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");

    equinox_launch()
        .args(["generate", "--project-id", "com.example.product"])
        .args(["--bundle", sc.to_str().unwrap()])
        .args(["--bundle", osgi.to_str().unwrap()])
        .args(["--out-root", root.join("out").to_str().unwrap()])
        .assert()
        .success();

    let config_dir = root.join("out/com.example.product/configuration");
    let bundles_info = config_dir.join(CONFIGURATOR).join("bundles.info");
    let config_ini = fs::read_to_string(config_dir.join("config.ini")).unwrap();

    let expected = [
        format!("osgi.bundles=reference\\:file\\:{}@1\\:start", sc.display()),
        "osgi.bundles.defaultStartLevel=4".to_string(),
        format!(
            "osgi.install.area=file:{}",
            root.join("out/com.example.product/install").display()
        ),
        format!("osgi.framework=file:{}", osgi.display()),
        "eclipse.p2.data.area=@config.dir/.p2".to_string(),
        format!(
            "org.eclipse.equinox.simpleconfigurator.configUrl=file:{}",
            bundles_info.display()
        ),
        "osgi.configuration.cascaded=false".to_string(),
    ];
    let lines: Vec<&str> = config_ini.lines().collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_generate_writes_bundles_info_without_framework() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");
    let app = write_bundle(&root, "app", "com.example.app", "1.0.0");

    equinox_launch()
        .args(["generate", "--project-id", "app"])
        .args(["--bundle", sc.to_str().unwrap()])
        .args(["--bundle", osgi.to_str().unwrap()])
        .args(["--bundle", app.to_str().unwrap()])
        .args(["--out-root", root.join("out").to_str().unwrap()])
        .assert()
        .success();

    let bundles_info = fs::read_to_string(
        root.join("out/app/configuration")
            .join(CONFIGURATOR)
            .join("bundles.info"),
    )
    .unwrap();

    let lines: Vec<&str> = bundles_info.lines().collect();
    assert_eq!(lines[0], "#encoding=UTF-8");
    assert_eq!(lines[1], "#version=1");
    assert_eq!(
        lines[2],
        format!("com.example.app,1.0.0,file:{},4,false", app.display())
    );
    assert_eq!(
        lines[3],
        format!("{CONFIGURATOR},1.4.0,file:{},1,true", sc.display())
    );
    // The framework bundle is excluded from the registry.
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_generate_is_idempotent() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");

    let run = || {
        equinox_launch()
            .args(["generate", "--project-id", "app"])
            .args(["--bundle", sc.to_str().unwrap()])
            .args(["--bundle", osgi.to_str().unwrap()])
            .args(["--out-root", root.join("out").to_str().unwrap()])
            .assert()
            .success();
        fs::read(root.join("out/app/configuration/config.ini")).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_generate_fails_without_configurator() {
    let (_tmp, root) = temp_root();
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");

    equinox_launch()
        .args(["generate", "--project-id", "app"])
        .args(["--bundle", osgi.to_str().unwrap()])
        .args(["--out-root", root.join("out").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported launcher"));

    // Nothing was written.
    assert!(!root.join("out").exists());
}

#[test]
fn test_generate_fails_without_framework() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");

    equinox_launch()
        .args(["generate", "--project-id", "app"])
        .args(["--bundle", sc.to_str().unwrap()])
        .args(["--out-root", root.join("out").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(FRAMEWORK));

    assert!(!root.join("out").exists());
}

#[test]
fn test_generate_fails_without_project_id() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");

    equinox_launch()
        .current_dir(&root)
        .args(["generate", "--bundle", sc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project id is required"));
}

#[test]
fn test_generate_fails_on_missing_manifest() {
    let (_tmp, root) = temp_root();
    let empty = root.join("not-a-bundle");
    fs::create_dir_all(&empty).unwrap();

    equinox_launch()
        .args(["generate", "--project-id", "app"])
        .args(["--bundle", empty.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MANIFEST.MF"));
}

// ============================================================================
// --plan
// ============================================================================

#[test]
fn test_plan_prints_json_and_writes_nothing() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");

    equinox_launch()
        .args(["generate", "--plan", "--project-id", "app"])
        .args(["--bundle", sc.to_str().unwrap()])
        .args(["--bundle", osgi.to_str().unwrap()])
        .args(["--out-root", root.join("out").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"symbolic_name\": \"org.eclipse.osgi\""))
        .stdout(predicate::str::contains("\"start_level\": -1"));

    assert!(!root.join("out").exists());
}

// ============================================================================
// launch.toml
// ============================================================================

#[test]
fn test_generate_from_launch_toml_with_overrides() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let osgi = write_bundle(&root, "osgi", FRAMEWORK, "3.18.0");
    let app = write_bundle(&root, "app", "com.example.app", "1.0.0");

    fs::write(
        root.join("launch.toml"),
        format!(
            r#"
[project]
id = "com.example.product"

[launch]
bundles = ["{}", "{}", "{}"]
out-root = "out"

[start-levels]
"com.example.app" = 7
"#,
            sc.display(),
            osgi.display(),
            app.display()
        ),
    )
    .unwrap();

    equinox_launch()
        .args(["generate", "--config"])
        .arg(root.join("launch.toml"))
        .assert()
        .success();

    let config_dir = root.join("out/com.example.product/configuration");
    let bundles_info =
        fs::read_to_string(config_dir.join(CONFIGURATOR).join("bundles.info")).unwrap();

    // The override table replaces the builtin defaults: the app bundle is
    // managed at level 7, the configurator becomes unmanaged.
    assert!(bundles_info.contains(&format!("com.example.app,1.0.0,file:{},7,true", app.display())));
    assert!(bundles_info.contains(&format!("{CONFIGURATOR},1.4.0,file:{},4,false", sc.display())));

    let config_ini = fs::read_to_string(config_dir.join("config.ini")).unwrap();
    assert!(config_ini.starts_with(&format!(
        "osgi.bundles=reference\\:file\\:{}@start",
        sc.display()
    )));
}

// ============================================================================
// equinox-launch inspect
// ============================================================================

#[test]
fn test_inspect_prints_resolved_metadata() {
    let (_tmp, root) = temp_root();
    let sc = write_bundle(&root, "sc", CONFIGURATOR, "1.4.0");
    let app = write_bundle(&root, "app", "com.example.app;singleton:=true", "2.1.0");

    equinox_launch()
        .args(["inspect"])
        .args(["--bundle", sc.to_str().unwrap()])
        .args(["--bundle", app.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SYMBOLIC NAME"))
        .stdout(predicate::str::contains("com.example.app"))
        .stdout(predicate::str::contains("2.1.0"))
        .stdout(predicate::str::contains(CONFIGURATOR));
}

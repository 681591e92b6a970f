// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const MANIFEST: &str = "name: demo\ndescription: A demo app\nversion: 1.0.0+1\n\nmsix_config:\n  display_name: Demo\n  msix_version: 1.0.0.0\n";
const RESOURCE: &str = "#ifdef FLUTTER_BUILD_NAME\n#else\n#define VERSION_AS_STRING \"1.0.0\"\n#endif\n";
const INSTALLER: &str = "#define MyAppName \"Demo\"\n#define MyAppVersion \"1.0.0\"\n[Setup]\nAppVersion={#MyAppVersion}\n";
const WIDGET_TEST: &str = "void main() {\n  testWidgets('smoke', (tester) async {\n    await tester.pumpWidget(Provider(\n      child: const MyApp(version: '1.0.0'),\n    ));\n  });\n}\n";

fn verstamp(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_verstamp"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute verstamp")
}

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn read(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative)).unwrap()
}

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let root = temp_dir.path();
    write(root, "pubspec.yaml", MANIFEST);
    write(root, "windows/runner/Runner.rc", RESOURCE);
    write(root, "build_script/inno_setup.iss", INSTALLER);
    write(root, "test/widget_test.dart", WIDGET_TEST);
    temp_dir
}

fn snapshot(dir: &Path) -> Vec<String> {
    [
        "pubspec.yaml",
        "windows/runner/Runner.rc",
        "build_script/inno_setup.iss",
        "test/widget_test.dart",
    ]
    .iter()
    .map(|f| read(dir, f))
    .collect()
}

#[test]
fn test_verstamp_help() {
    let dir = TempDir::new().unwrap();
    let output = verstamp(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("verstamp"));
    assert!(stdout.contains("Propagate a version string"));
}

#[test]
fn test_verstamp_version_flag() {
    let dir = TempDir::new().unwrap();
    let output = verstamp(dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("verstamp "));
}

#[test]
fn test_updates_all_files() {
    let project = setup_project();
    let root = project.path();

    let output = verstamp(root, &["2.0.1"]);
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        read(root, "pubspec.yaml"),
        MANIFEST
            .replace("version: 1.0.0+1", "version: 2.0.1+1")
            .replace("msix_version: 1.0.0.0", "msix_version: 2.0.1.0")
    );
    assert_eq!(
        read(root, "windows/runner/Runner.rc"),
        RESOURCE.replace("\"1.0.0\"", "\"2.0.1\"")
    );
    assert_eq!(
        read(root, "build_script/inno_setup.iss"),
        INSTALLER.replace("\"1.0.0\"", "\"2.0.1\"")
    );
    assert_eq!(
        read(root, "test/widget_test.dart"),
        WIDGET_TEST.replace("'1.0.0'", "'2.0.1'")
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("5 of 5 rules updated"));
}

#[test]
fn test_invalid_version_touches_nothing() {
    let project = setup_project();
    let root = project.path();
    let before = snapshot(root);

    let output = verstamp(root, &["abc"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid version format"));
    assert_eq!(snapshot(root), before);
}

#[test]
fn test_missing_version_exits_one() {
    let project = setup_project();
    let root = project.path();
    let before = snapshot(root);

    let output = verstamp(root, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("target version is required"));
    assert_eq!(snapshot(root), before);
}

#[test]
fn test_missing_files_still_exit_zero() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "build_script/inno_setup.iss", INSTALLER);

    let output = verstamp(root, &["3.0.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(read(root, "build_script/inno_setup.iss")
        .contains("#define MyAppVersion \"3.0.0\""));
    assert!(!root.join("pubspec.yaml").exists());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 of 5 rules updated"));
}

#[test]
fn test_pattern_not_found_keeps_bytes() {
    let project = setup_project();
    let root = project.path();
    let untouched = "// resource file without a version macro\r\n";
    write(root, "windows/runner/Runner.rc", untouched);

    let output = verstamp(root, &["1.2.3"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read(root.join("windows/runner/Runner.rc")).unwrap(),
        untouched.as_bytes()
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Pattern not found"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = setup_project();
    let root = project.path();
    let before = snapshot(root);

    let output = verstamp(root, &["--dry-run", "5.0.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(snapshot(root), before);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Would update"));
    assert!(stdout.contains("5 of 5 rules would be updated"));
}

#[test]
fn test_dir_flag_overrides_cwd() {
    let project = setup_project();
    let elsewhere = TempDir::new().unwrap();
    let dir_arg = project.path().to_str().unwrap();

    let output = verstamp(elsewhere.path(), &["-C", dir_arg, "7.1.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(read(project.path(), "pubspec.yaml").contains("version: 7.1.0+1"));
}

#[test]
fn test_project_config_replaces_default_rules() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "verstamp.toml",
        r#"
[[rules]]
name = "crate manifest"
file = "Cargo.toml"
pattern = '(?m)^version = "[^"]*"'
replacement = 'version = "{version}"'
"#,
    );
    write(
        root,
        "Cargo.toml",
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dependencies]\nfoo = { version = \"1\" }\n",
    );

    let output = verstamp(root, &["0.2.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        read(root, "Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"0.2.0\"\n\n[dependencies]\nfoo = { version = \"1\" }\n"
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 of 1 rules updated"));
}

#[test]
fn test_bad_pattern_is_fatal() {
    let project = setup_project();
    let root = project.path();
    write(
        root,
        "broken.toml",
        "[[rules]]\nfile = \"pubspec.yaml\"\npattern = '(unclosed'\nreplacement = '{version}'\n",
    );
    let before = snapshot(root);

    let output = verstamp(root, &["--config", "broken.toml", "1.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(snapshot(root), before);
}

#[test]
fn test_list_rules() {
    let dir = TempDir::new().unwrap();
    let output = verstamp(dir.path(), &["--list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pubspec.yaml"));
    assert!(stdout.contains("build_script/inno_setup.iss"));
}

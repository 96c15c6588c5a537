use pretty_assertions::assert_eq;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn cargo_bin() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_edi834") {
        return PathBuf::from(path);
    }

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| repo_root().join("target"));
    let executable_name = format!("edi834{}", std::env::consts::EXE_SUFFIX);
    let fallback = target_dir.join("debug").join(executable_name);

    if fallback.exists() {
        return fallback;
    }

    panic!(
        "CARGO_BIN_EXE_edi834 is not set and fallback binary was not found at {}",
        fallback.display()
    );
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn testdata_path(path: &str) -> PathBuf {
    repo_root().join("testdata/834").join(path)
}

fn run(args: &[&str]) -> Output {
    Command::new(cargo_bin())
        .args(args)
        .output()
        .expect("edi834 should execute")
}

fn run_render(document: &Path, extra: &[&str]) -> Output {
    let document = document.to_string_lossy();
    let mut args = vec!["render", document.as_ref()];
    args.extend_from_slice(extra);
    run(&args)
}

fn assert_exit_code(output: &Output, expected: i32) {
    let actual = output.status.code().unwrap_or(-1);
    assert_eq!(
        actual,
        expected,
        "unexpected exit code; stdout: {}; stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn render_writes_enveloped_document_to_stdout() {
    let output = run_render(&testdata_path("enrollment.yaml"), &[]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines[0].starts_with("ISA*00*"));
    assert!(lines[0].ends_with("*000000042*0*T*:~"));
    assert_eq!(lines[3], "BGN*00*REF-0001*20230415*1200~");
    assert_eq!(lines[7], "INS*Y*18*021*28*A***FT~");
    assert_eq!(lines[11], "NM1*IL*1*DOE*JANE****34*123456789~");
    assert_eq!(lines[17], "SE*16*0001~");
    assert_eq!(lines[19], "IEA*1*000000042~");
}

#[test]
fn render_writes_output_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let out = dir.path().join("enrollment.edi");
    let output = run_render(
        &testdata_path("enrollment.yaml"),
        &["-o", out.to_string_lossy().as_ref()],
    );
    assert_exit_code(&output, 0);
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&out).expect("output file should exist");
    assert!(written.starts_with("ISA*"));
    assert!(written.ends_with("IEA*1*000000042~\n"));
}

#[test]
fn render_without_envelope_emits_body_only() {
    let output = run_render(&testdata_path("enrollment.yaml"), &["--no-envelope"]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 14);
    assert!(stdout.starts_with("BGN*"));
    assert!(!stdout.contains("ISA*"));
}

#[test]
fn render_json_document_with_custom_separator() {
    let output = run_render(&testdata_path("enrollment.json"), &[]);
    assert_exit_code(&output, 0);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "N3|123 MAIN ST|APT 4~\nN4|LANSING|MI|48933~\n"
    );
}

#[test]
fn render_refuses_invalid_document() {
    let output = run_render(&testdata_path("invalid.yaml"), &[]);
    assert_exit_code(&output, 2);
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 issue(s)"), "{stderr}");
    assert!(stderr.contains("BGN02 (Reference Identification) is required"));
}

#[test]
fn render_reports_missing_file() {
    let output = run_render(Path::new("does/not/exist.yaml"), &[]);
    assert_exit_code(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load"));
}

#[test]
fn codes_lists_catalog_and_members() {
    let output = run(&["codes"]);
    assert_exit_code(&output, 0);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line == "Individual Relationship Code"));

    let output = run(&["codes", "gender code"]);
    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("F    Female"));
}

#[test]
fn codes_resolve_synonym() {
    let output = run(&["codes", "Coverage Level Code", "resolve", "ee+spouse"]);
    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("ESP "));

    let output = run(&["codes", "Coverage Level Code", "resolve", "everyone"]);
    assert_exit_code(&output, 2);
}

#[test]
fn codes_unknown_list_fails() {
    let output = run(&["codes", "Favourite Colour"]);
    assert_exit_code(&output, 1);
}

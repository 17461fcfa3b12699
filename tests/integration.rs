use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn asref_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("asref");
    path
}

fn run_asref(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = asref_binary();
    let output = Command::new(&binary)
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run asref binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_resolve_query_with_surrounding_words() {
    let tmp = TempDir::new().unwrap();
    let (stdout, stderr, success) =
        run_asref(tmp.path(), &["resolve", "Explain AS 12 with example"]);
    assert!(success, "resolve failed: {}", stderr);
    assert!(stdout.contains("--- AS 12 ---"));
    assert!(stdout.contains("AS 12: Government Grants"));
    assert!(stdout.contains("Real-life Examples:"));
    assert!(stdout.contains("1."));
}

#[test]
fn test_resolve_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_asref(tmp.path(), &["resolve", "summarize as 10"]);
    assert!(success);
    assert!(stdout.contains("AS 10: Property, Plant and Equipment"));
}

#[test]
fn test_resolve_unknown_code_prints_warning() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_asref(tmp.path(), &["resolve", "AS 99"]);
    // A miss is a rendered outcome, not a process failure.
    assert!(success);
    assert!(stdout.contains("couldn't find a summary"));
    assert!(!stdout.contains("Real-life Examples:"));
}

#[test]
fn test_resolve_prefix_code_not_shadowed() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_asref(tmp.path(), &["resolve", "Summarize AS 10"]);
    assert!(success);
    assert!(stdout.contains("--- AS 10 ---"));
    assert!(!stdout.contains("AS 1: Disclosure"));
}

#[test]
fn test_show_explicit_code() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_asref(tmp.path(), &["show", "AS 2"]);
    assert!(success);
    assert!(stdout.contains("AS 2: Valuation of Inventories"));
}

#[test]
fn test_show_unknown_code_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_asref(tmp.path(), &["show", "AS 99"]);
    assert!(!success);
    assert!(stderr.contains("couldn't find a summary"));
}

#[test]
fn test_list_enumerates_all_standards() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_asref(tmp.path(), &["list"]);
    assert!(success);
    assert!(stdout.contains("26 standards:"));
    assert!(stdout.contains("AS 1: Disclosure of Accounting Policies"));
    assert!(stdout.contains("AS 29: Provisions, Contingent Liabilities"));
}

#[test]
fn test_export_writes_derived_filename() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_asref(tmp.path(), &["export", "AS 1"]);
    assert!(success, "export failed: {}", stderr);

    let path = tmp.path().join("AS1_Summary.pdf");
    assert!(path.exists(), "expected {} to exist", path.display());

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
    assert!(text.contains("AS 1: Disclosure of Accounting Policies"));
    assert!(text.contains("Real-life Examples:"));
}

#[test]
fn test_export_with_output_path() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out").join("summary.pdf");
    let (_, _, success) = run_asref(
        tmp.path(),
        &["export", "AS 10", "--output", out.to_str().unwrap()],
    );
    assert!(success);
    assert!(out.exists());
}

#[test]
fn test_export_unknown_code_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_asref(tmp.path(), &["export", "AS 99"]);
    assert!(!success);
    assert!(stderr.contains("couldn't find a summary"));
    assert!(!tmp.path().join("AS99_Summary.pdf").exists());
}

#[test]
fn test_ask_without_provider_renders_warning() {
    let tmp = TempDir::new().unwrap();
    // No config file in the temp dir, so the assistant stays disabled.
    let (stdout, stderr, success) = run_asref(tmp.path(), &["ask", "Summarize AS 10"]);
    assert!(success);
    assert!(stdout.contains("the assistant is unavailable"));
    assert!(stderr.contains("disabled"));
}

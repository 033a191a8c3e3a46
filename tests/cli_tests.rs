use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn ddlpress() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ddlpress"))
}

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("schema.sql");
    fs::write(
        &path,
        "CREATE TABLE users (\n  id bigint NOT NULL,\n  email varchar(100) NOT NULL,\n  PRIMARY KEY (id),\n  UNIQUE KEY uk_email (email)\n) COMMENT='accounts';\nCREATE TABLE orders (\n  id bigint NOT NULL,\n  user_id bigint NOT NULL,\n  PRIMARY KEY (id),\n  CONSTRAINT fk_o FOREIGN KEY (user_id) REFERENCES users (id)\n);\n",
    )
    .unwrap();
    path
}

#[test]
fn test_renders_compact_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let output = ddlpress().arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("users { -- accounts"));
    assert!(stdout.contains("  id: bigint PK"));
    assert!(stdout.contains("FK: user_id → users(id)"));
}

#[test]
fn test_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let out_path = dir.path().join("schema.json");

    let output = ddlpress()
        .arg(&input)
        .args(["-f", "json", "-o"])
        .arg(&out_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let written = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["orders"]["relations"][0], "users.id");
}

#[test]
fn test_lists_formats() {
    let output = ddlpress().arg("--list-formats").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Available formats:"));
    for name in ["compact", "json", "markdown", "layered", "erd", "minimal"] {
        assert!(stdout.contains(name), "missing format {name}");
    }
}

#[test]
fn test_include_narrows_the_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let output = ddlpress()
        .arg(&input)
        .args(["--include", "users", "-f", "minimal"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("users("));
    assert!(!stdout.contains("orders("));
}

#[test]
fn test_compare_logs_token_estimate_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let output = ddlpress().arg(&input).arg("--compare").output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Token estimate:"));
}

#[test]
fn test_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);

    let output = ddlpress().arg(&input).args(["-f", "yaml"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown format type: yaml"));
}

#[test]
fn test_missing_input_file_fails() {
    let output = ddlpress().arg("/nonexistent/schema.sql").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn test_input_is_required_without_list_formats() {
    let output = ddlpress().output().unwrap();
    assert!(!output.status.success());
}

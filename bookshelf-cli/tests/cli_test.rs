//! Integration tests for the bookshelf binary
//!
//! These run the compiled binary the way a user would, feeding stdin
//! for the interactive session.

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run bookshelf with arguments and optional stdin
fn run_bookshelf(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut input) = child.stdin.take() {
        input.write_all(stdin.as_bytes())?;
    }

    Ok(child.wait_with_output()?)
}

fn json_ids(stdout: &[u8]) -> Result<Vec<u64>> {
    let value: serde_json::Value = serde_json::from_slice(stdout)?;
    Ok(value
        .as_array()
        .map(|books| books.iter().filter_map(|b| b["id"].as_u64()).collect())
        .unwrap_or_default())
}

#[test]
fn test_interactive_search_and_quit() -> Result<()> {
    let output = run_bookshelf(&[], "1\n村上\n0\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("========== 書籍検索システム ==========\n"));
    assert!(stdout.contains("合計: 3件"));
    assert!(stdout.contains("ノルウェイの森"));
    assert!(stdout.ends_with("システムを終了します。\n"));
    Ok(())
}

#[test]
fn test_interactive_end_of_input_exits_cleanly() -> Result<()> {
    let output = run_bookshelf(&[], "9\n")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("無効な選択です。もう一度お試しください。"));
    assert!(!stdout.contains("システムを終了します。"));
    Ok(())
}

#[test]
fn test_search_json() -> Result<()> {
    let output = run_bookshelf(&["search", "村上", "--json"], "")?;
    assert!(output.status.success());
    assert_eq!(json_ids(&output.stdout)?, vec![8, 9, 10]);
    Ok(())
}

#[test]
fn test_search_table_without_matches() -> Result<()> {
    let output = run_bookshelf(&["search", "存在しない"], "")?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "No books found.\n");
    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let output = run_bookshelf(&["list", "--json"], "")?;
    assert!(output.status.success());
    assert_eq!(json_ids(&output.stdout)?, (1..=15).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_custom_catalog_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("books.yaml");
    fs::write(
        &path,
        "apiVersion: bookshelf.dev/v1\nkind: Catalog\nbooks:\n  - {id: 42, title: Snow Country, author: Yasunari Kawabata, publicationYear: 1948}\n",
    )?;

    let path_arg = path.to_string_lossy().to_string();
    let output = run_bookshelf(&["--catalog", &path_arg, "search", "KAWABATA", "--json"], "")?;
    assert!(output.status.success());
    assert_eq!(json_ids(&output.stdout)?, vec![42]);
    Ok(())
}

#[test]
fn test_invalid_catalog_file_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dupes.yaml");
    fs::write(
        &path,
        "apiVersion: bookshelf.dev/v1\nkind: Catalog\nbooks:\n  - {id: 1, title: A, author: B, publicationYear: 1}\n  - {id: 1, title: C, author: D, publicationYear: 2}\n",
    )?;

    let path_arg = path.to_string_lossy().to_string();
    let output = run_bookshelf(&["--catalog", &path_arg, "list"], "")?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to load catalog"));
    Ok(())
}

//! Every `t!("...")` key used in `src/` must exist in the fallback bundle,
//! and the fallback should not carry keys nothing renders.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_FTL: &str = include_str!("../../i18n/en-US/fitbuddy_ui.ftl");

fn message_ids(ftl: &str) -> BTreeSet<String> {
    ftl.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Literal first arguments of `t!(` calls.
fn referenced_keys(source: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut keys = BTreeSet::new();
    let mut rest = source;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                keys.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }
    keys
}

fn all_referenced_keys() -> BTreeSet<String> {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    rust_sources(&src)
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|content| referenced_keys(&content))
        .collect()
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = message_ids(FALLBACK_FTL);
    let missing: Vec<_> = all_referenced_keys()
        .into_iter()
        .filter(|key| !fallback.contains(key))
        .collect();

    assert!(
        missing.is_empty(),
        "t! keys missing from en-US/fitbuddy_ui.ftl:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let referenced = all_referenced_keys();
    let unused: Vec<_> = message_ids(FALLBACK_FTL)
        .into_iter()
        .filter(|key| !referenced.contains(key))
        .collect();

    assert!(
        unused.is_empty(),
        "fallback keys never rendered (remove them or use them):\n  {}",
        unused.join("\n  ")
    );
}

#[test]
fn key_scanner_reads_literal_first_argument() {
    let keys = referenced_keys(r#"let a = t!("nav-planner"); let b = t!("planner-do-empty");"#);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["nav-planner".to_string(), "planner-do-empty".to_string()]
    );
}

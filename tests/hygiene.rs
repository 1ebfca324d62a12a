//! Hygiene: source-level checks run with the normal test suite.
//!
//! Scans `src/` for patterns that panic in the browser or drop errors
//! silently. Budgets are zero; a page script has nobody to read a panic.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: [(&str, usize, &str); 9] = [
    (".unwrap()", 0, "panics in the browser"),
    (".expect(", 0, "panics in the browser"),
    ("panic!(", 0, "panics in the browser"),
    ("unreachable!(", 0, "panics in the browser"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards an error without logging it"),
    (".ok()", 0, "discards an error without logging it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn is_test(&self) -> bool {
        self.path.ends_with("_test.rs")
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path.to_string_lossy().into_owned(), content });
            }
        }
    }
}

fn hits(files: &[&SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn finds_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn production_code_stays_within_budgets() {
    let files = source_files();
    let production: Vec<&SourceFile> = files.iter().filter(|f| !f.is_test()).collect();

    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&production, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern:?} ({why}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn unit_tests_do_not_need_a_browser() {
    let files = source_files();
    let tests: Vec<&SourceFile> = files.iter().filter(|f| f.is_test()).collect();
    let found = hits(&tests, "web_sys");
    assert!(found.is_empty(), "unit tests must run natively, found web_sys in {found:?}");
}

//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for antipatterns. Each has a budget (ideally zero). If you
//! must add one, fix an existing one first; the budget never grows.
//!
//! Also keeps browser crates out of the native core, so everything outside
//! `dom/` and `net.rs` stays testable with plain `cargo test`.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics: a panic in a page handler kills every behavior on the page.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with ? or log" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with ? or log" },
    Budget { pattern: "panic!(", max: 0, why: "return a PageError" },
    Budget { pattern: "unreachable!(", max: 0, why: "return a PageError" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss: discards errors without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "log the error" },
    // The one allowed hit is gloo's `Response::ok()` status check in net.rs.
    Budget { pattern: ".ok()", max: 1, why: "log the error" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the code" },
];

/// Paths (relative to `src/`) allowed to name browser-only crates.
const BROWSER_PATHS: &[&str] = &["dom/", "net.rs", "error.rs", "lib.rs"];
const BROWSER_CRATES: &[&str] = &["web_sys::", "wasm_bindgen", "js_sys::", "gloo_net::", "console_log::"];

struct SourceFile {
    /// Path relative to `src/`, with `/` separators.
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), Path::new("src"), &mut files);
    files
}

fn collect_rs_files(root: &Path, dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(root, &path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let rel = path.strip_prefix(root).unwrap_or(&path).to_string_lossy().replace('\\', "/");
            if rel.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: rel, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  src/{path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path == "lib.rs"), "run from the crate root");
    assert!(files.iter().any(|f| f.path.starts_with("dom/")));
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn browser_crates_stay_in_glue_modules() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !BROWSER_PATHS.iter().any(|allowed| f.path.starts_with(allowed)))
        .collect();
    for krate in BROWSER_CRATES {
        let found = hits(&files, krate);
        assert!(found.is_empty(), "{krate} used outside the browser glue:\n{}", format_hits(&found));
    }
}

#[test]
fn every_module_is_declared() {
    let files = source_files();
    let Some(lib) = files.iter().find(|f| f.path == "lib.rs") else {
        panic!("src/lib.rs missing");
    };
    for file in files.iter().filter(|f| !f.path.contains('/') && f.path != "lib.rs") {
        let module = file.path.trim_end_matches(".rs");
        assert!(lib.content.contains(&format!("pub mod {module};")), "src/{} is not declared in lib.rs", file.path);
    }
}

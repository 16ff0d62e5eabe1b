//! Hygiene — scans `sitelogic/src` for antipatterns at test time.
//!
//! The decision-logic crate is meant to be panic-free and lossless: the UI
//! layer renders whatever it returns, so a crash or a silently swallowed
//! error here takes the whole page down with it. Every budget is zero and
//! stays zero.

use std::fs;
use std::path::Path;

/// (pattern, budget) pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    // Panics crash the WASM module.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn source_stays_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let mut count = 0;
        for (name, content) in &files {
            for (line_no, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    count += 1;
                    violations.push(format!("  {name}:{}: {pattern}", line_no + 1));
                }
            }
        }
        assert!(
            count <= *budget,
            "{pattern} budget exceeded: found {count}, max {budget}\n{}",
            violations.join("\n")
        );
    }
}

//! Hash domain governance.
//!
//! 1. The canonical domain set has the expected count.
//! 2. Domain byte strings are unique, null-terminated, and `PATHLAB::*::V1\0`.
//! 3. No raw `PATHLAB::` domain literals appear in production source outside
//!    `hash_domain.rs`.
//! 4. Production source does not `unwrap()` or `expect()`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pathlab_kernel::proof::hash_domain::HashDomain;

const PRODUCTION_DIRS: [&str; 3] = [
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
];

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_are_well_formed() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain}");
        assert!(bytes.starts_with(b"PATHLAB::"), "{domain} lacks PATHLAB::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn production_dirs_exist() {
    for dir in PRODUCTION_DIRS {
        assert!(Path::new(dir).is_dir(), "{dir} not found");
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let violations = scan(&["b\"PATHLAB::"], Some("hash_domain.rs"));
    assert!(
        violations.is_empty(),
        "raw PATHLAB:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_unwrap_or_expect_in_production_code() {
    let violations = scan(&[".unwrap()", ".expect("], None);
    assert!(
        violations.is_empty(),
        "unwrap/expect found in production code:\n{}",
        violations.join("\n")
    );
}

/// Lines matching any of `patterns` in production `.rs` files, skipping
/// comments and `#[cfg(test)]` blocks.
fn scan(patterns: &[&str], authority_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in PRODUCTION_DIRS {
        for path in walk(Path::new(dir)) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if authority_file.is_some() && path.file_name().and_then(|n| n.to_str()) == authority_file
            {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            scan_source(&path, &content, patterns, &mut violations);
        }
    }
    violations
}

fn scan_source(path: &Path, content: &str, patterns: &[&str], violations: &mut Vec<String>) {
    // Brace-depth tracking to skip `#[cfg(test)]` modules.
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();

        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }

        brace_depth = brace_depth.saturating_add(opens);
        brace_depth = brace_depth.saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }

        if trimmed.starts_with("//") {
            continue;
        }

        if patterns.iter().any(|p| trimmed.contains(p)) {
            violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
        }
    }
}

/// Recursive file listing.
fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walk(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! File selection: glob expansion and the catalog allow-list filter

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::PickerConfig;
use crate::Result;

/// Which files a selection keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFilter {
    /// Only extensions on the configured allow-list
    Catalog,
    /// Everything
    AllFiles,
}

/// Check if a path passes the filter
pub fn accepts(path: &Path, filter: PickerFilter, config: &PickerConfig) -> bool {
    match filter {
        PickerFilter::AllFiles => true,
        PickerFilter::Catalog => path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| config.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
            .unwrap_or(false),
    }
}

/// Keep the selected paths that pass `filter`, preserving order.
/// An empty (cancelled) selection yields an empty list.
pub fn filter_selection(paths: Vec<PathBuf>, filter: PickerFilter, config: &PickerConfig) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| {
            let keep = accepts(p, filter, config);
            if !keep {
                debug!("Skipping {:?}: extension not on the catalog list", p);
            }
            keep
        })
        .collect()
}

/// Expand shell-style patterns into absolute file paths.
///
/// Literal paths are passed through even if they do not exist, so missing
/// files surface as per-item failures rather than disappearing silently.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir()?;
    let mut paths = Vec::new();

    for pattern in patterns {
        if !pattern.contains(|c| matches!(c, '*' | '?' | '[')) {
            paths.push(absolutize(&cwd, Path::new(pattern)));
            continue;
        }

        let mut matched = 0;
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) if path.is_file() => {
                    paths.push(absolutize(&cwd, &path));
                    matched += 1;
                }
                Ok(_) => {}
                Err(e) => warn!("Unreadable path while expanding {}: {}", pattern, e),
            }
        }
        if matched == 0 {
            warn!("Pattern matched no files: {}", pattern);
        }
    }

    Ok(paths)
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

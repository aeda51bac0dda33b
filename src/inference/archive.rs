// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Zip-family archive inspection.
//!
//! Entries are listed from the central directory and read one at a time
//! through a streaming reader, so the archive is never fully decoded in
//! memory. All operations are blocking; callers on the async runtime should
//! wrap them in `spawn_blocking`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

use crate::{CatalogError, Result};

const PREVIEW_KEYWORDS: &[&str] = &["preview", "thumbnail", "cover"];
const PREVIEW_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// One file entry of an archive. The index is the accessor for its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub index: usize,
    pub name: String,
}

/// An opened archive
pub struct ArchiveInspector {
    archive: ZipArchive<File>,
    path: PathBuf,
}

impl ArchiveInspector {
    /// Open an archive, failing with `ArchiveRead` if it is corrupt or unreadable
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| CatalogError::ArchiveRead(format!("Failed to open {:?}: {}", path, e)))?;
        let archive = ZipArchive::new(file)
            .map_err(|e| CatalogError::ArchiveRead(format!("Failed to open ZIP: {}", e)))?;

        Ok(Self {
            archive,
            path: path.to_path_buf(),
        })
    }

    /// List file entries in archive order, skipping directories.
    ///
    /// Only central-directory metadata is touched, so encrypted entries are
    /// listed too; reading one of them later fails on its own.
    pub fn list_entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.archive.len());

        for index in 0..self.archive.len() {
            let file = self.archive.by_index_raw(index)?;
            if file.is_dir() {
                continue;
            }
            entries.push(ArchiveEntry {
                index,
                name: file.name().to_string(),
            });
        }

        debug!("Listed {} entries in {:?}", entries.len(), self.path);
        Ok(entries)
    }

    /// Read up to `max_bytes` of an entry as text, lossily decoded
    pub fn read_text(&mut self, entry: &ArchiveEntry, max_bytes: u64) -> Result<String> {
        let file = self.archive.by_index(entry.index)?;
        let mut buf = Vec::new();
        file.take(max_bytes)
            .read_to_end(&mut buf)
            .map_err(|e| CatalogError::ArchiveRead(format!("Failed to read {}: {}", entry.name, e)))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Stream an entry into `dir` under a generated name that keeps the
    /// entry's extension. The directory is created if missing.
    pub fn extract_to_temp(&mut self, entry: &ArchiveEntry, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let extension = Path::new(&entry.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        let target = dir.join(format!("preview_{}{}", uuid::Uuid::new_v4().simple(), extension));

        let mut source = self.archive.by_index(entry.index)?;
        let mut out = File::create(&target)?;
        std::io::copy(&mut source, &mut out)?;

        debug!("Extracted {} to {:?}", entry.name, target);
        Ok(std::fs::canonicalize(&target).unwrap_or(target))
    }
}

/// First entry that looks like a preview image, in archive order
pub fn find_preview_image(entries: &[ArchiveEntry]) -> Option<&ArchiveEntry> {
    entries.iter().find(|entry| {
        let name = entry.name.to_lowercase();
        PREVIEW_KEYWORDS.iter().any(|k| name.contains(k))
            && PREVIEW_EXTENSIONS.iter().any(|e| name.ends_with(e))
    })
}

/// First `readme*.txt` or `*description.txt` entry, in archive order
pub fn find_description_text(entries: &[ArchiveEntry]) -> Option<&ArchiveEntry> {
    entries.iter().find(|entry| {
        let name = entry.name.to_lowercase();
        name.ends_with(".txt") && (name.contains("readme") || name.ends_with("description.txt"))
    })
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Inference engine: one file path in, one catalog record out

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::archive::{self, ArchiveInspector};
use super::classifier::{self, PreviewSource};
use super::{
    extension_of, file_url, CatalogRecord, Category, InferenceWarning, Inferencer, NO_DESCRIPTION,
};
use crate::config::InferenceConfig;
use crate::{AppConfig, CatalogError, Result};

/// What a successful archive inspection found
#[derive(Debug, Default)]
struct ContainerFindings {
    entry_names: Vec<String>,
    preview: Option<PathBuf>,
    description: Option<String>,
    warnings: Vec<InferenceWarning>,
}

/// Combines the archive inspector and the classifier for single files
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    config: InferenceConfig,
    preview_dir: PathBuf,
}

impl InferenceEngine {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.inference.clone(),
            preview_dir: config.previews.resolve_dir(),
        }
    }

    /// Directory extracted previews are written to
    pub fn preview_dir(&self) -> &Path {
        &self.preview_dir
    }

    /// Infer a record for `path`.
    ///
    /// Fails only with `FileAccess`; archive problems degrade to
    /// extension-based classification.
    pub async fn infer_file(&self, path: &Path) -> Result<CatalogRecord> {
        debug!("Starting inference for {:?}", path);

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| CatalogError::file_access(path, e.to_string()))?;
        if !metadata.is_file() {
            return Err(CatalogError::file_access(path, "not a regular file"));
        }

        let mut warnings = Vec::new();
        if metadata.len() == 0 {
            warn!("Empty file: {:?}", path);
            warnings.push(InferenceWarning::EmptyFile);
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(path);
        let title = classifier::derive_title(&file_name);

        let canonical = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());
        let download_url = file_url(&canonical);
        let mut image_url = classifier::placeholder_url(&self.config.placeholder_base_url, &title);

        let (category, description) = if classifier::is_container(&extension) {
            info!("Inspecting container: {}", file_name);
            match self.inspect_container(&canonical).await {
                Ok(findings) => {
                    let classification =
                        classifier::classify(&title, &extension, Some(&findings.entry_names));
                    if classification.category == Category::EmptyArchive {
                        warn!("Empty archive: {}", file_name);
                        warnings.push(InferenceWarning::EmptyArchive);
                    }
                    if let Some(preview) = findings.preview {
                        image_url = file_url(&preview);
                    }
                    warnings.extend(findings.warnings);
                    (
                        classification.category,
                        findings.description.unwrap_or(classification.description),
                    )
                }
                Err(e) => {
                    warn!("Failed to read archive {}: {}", file_name, e);
                    warnings.push(InferenceWarning::ArchiveUnreadable);
                    let fallback = classifier::container_fallback(&title, &extension);
                    (fallback.category, fallback.description)
                }
            }
        } else {
            let classification = classifier::classify(&title, &extension, None);
            if classification.preview == PreviewSource::SourceFile {
                image_url = download_url.clone();
            }
            if classification.category == Category::Uncategorized {
                debug!("No classification rule for extension {:?}", extension);
            }
            (classification.category, classification.description)
        };

        let record = CatalogRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description: if description.trim().is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                description
            },
            category,
            image_url,
            download_url,
            warnings,
        };

        debug!("Inference finished for {}: {}", file_name, record.category);
        Ok(record)
    }

    async fn inspect_container(&self, path: &Path) -> Result<ContainerFindings> {
        let path = path.to_path_buf();
        let preview_dir = self.preview_dir.clone();
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || inspect_container_blocking(&path, &preview_dir, &config))
            .await
            .map_err(|e| CatalogError::ArchiveRead(format!("Archive task failed: {}", e)))?
    }
}

fn inspect_container_blocking(
    path: &Path,
    preview_dir: &Path,
    config: &InferenceConfig,
) -> Result<ContainerFindings> {
    let mut inspector = ArchiveInspector::open(path)?;
    let entries = inspector.list_entries()?;

    let mut findings = ContainerFindings {
        entry_names: entries.iter().map(|e| e.name.clone()).collect(),
        ..Default::default()
    };

    if let Some(entry) = archive::find_preview_image(&entries) {
        match inspector.extract_to_temp(entry, preview_dir) {
            Ok(extracted) => findings.preview = Some(extracted),
            Err(e) => {
                warn!("Failed to extract preview {}: {}", entry.name, e);
                findings.warnings.push(InferenceWarning::PreviewUnreadable);
            }
        }
    }

    if let Some(entry) = archive::find_description_text(&entries) {
        match inspector.read_text(entry, config.readme_max_bytes) {
            Ok(text) => {
                let text = truncate_description(text.trim(), config.description_limit);
                if !text.is_empty() {
                    debug!("Description read from {}", entry.name);
                    findings.description = Some(text);
                }
            }
            Err(e) => {
                warn!("Failed to read {}: {}", entry.name, e);
                findings.warnings.push(InferenceWarning::ReadmeUnreadable);
            }
        }
    }

    Ok(findings)
}

/// First `limit` characters of `text`, with `...` appended when cut
pub fn truncate_description(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[async_trait]
impl Inferencer for InferenceEngine {
    async fn infer(&self, path: &Path) -> Result<CatalogRecord> {
        self.infer_file(path).await
    }
}

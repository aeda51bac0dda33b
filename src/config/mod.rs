// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for autocatalog

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Concurrency used when the host cannot report its parallelism
pub const FALLBACK_CONCURRENCY: usize = 4;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Batch scheduler settings
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Where extracted preview images go
    #[serde(default)]
    pub previews: PreviewConfig,

    /// Per-file inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// File selection allow-list
    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulerConfig {
    /// Upper bound on concurrently running inferences. `None` uses the host's
    /// available parallelism.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PreviewConfig {
    /// Directory for extracted previews. `None` uses the system temp dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InferenceConfig {
    /// Maximum description length in characters, taken from a readme entry
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
    /// Maximum bytes read from a readme entry
    #[serde(default = "default_readme_max_bytes")]
    pub readme_max_bytes: u64,
    /// Base of the generated placeholder image reference
    #[serde(default = "default_placeholder_base_url")]
    pub placeholder_base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PickerConfig {
    /// Extensions (without the dot) offered by the catalog file filter
    #[serde(default = "default_picker_extensions")]
    pub extensions: Vec<String>,
}

// Default value functions
fn default_description_limit() -> usize { 500 }
fn default_readme_max_bytes() -> u64 { 64 * 1024 }
fn default_placeholder_base_url() -> String {
    "https://via.placeholder.com/300x200/440000/FFFFFF".to_string()
}
fn default_picker_extensions() -> Vec<String> {
    vec![
        "zip", "fbx", "gltf", "obj", "blend", "unitypackage", "vrm",
        "png", "jpg", "jpeg", "gif", "pdf", "world",
    ].into_iter().map(String::from).collect()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
            readme_max_bytes: default_readme_max_bytes(),
            placeholder_base_url: default_placeholder_base_url(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            extensions: default_picker_extensions(),
        }
    }
}

impl SchedulerConfig {
    /// Effective concurrency bound, never below one
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(FALLBACK_CONCURRENCY)
            })
            .max(1)
    }
}

impl PreviewConfig {
    /// Resolved preview directory
    pub fn resolve_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("autocatalog-previews"))
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::CatalogError::Config(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Per-file inference: archive inspection, classification and the engine
//! that combines them into a [`CatalogRecord`].

pub mod archive;
pub mod classifier;
pub mod engine;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::Result;

pub use engine::InferenceEngine;

/// Title used when nothing usable is left of the file name
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Description used when inference produced an empty one
pub const NO_DESCRIPTION: &str = "No description available.";

/// Catalog category of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Models")]
    Models,
    #[serde(rename = "Images")]
    Images,
    #[serde(rename = "Documents")]
    Documents,
    #[serde(rename = "Worlds")]
    Worlds,
    #[serde(rename = "Avatar Assets")]
    AvatarAssets,
    #[serde(rename = "World Assets")]
    WorldAssets,
    #[serde(rename = "Prop Assets")]
    PropAssets,
    #[serde(rename = "Outfit Assets")]
    OutfitAssets,
    #[serde(rename = "Model Assets")]
    ModelAssets,
    #[serde(rename = "Texture Assets")]
    TextureAssets,
    #[serde(rename = "Shader Assets")]
    ShaderAssets,
    #[serde(rename = "Animation Assets")]
    AnimationAssets,
    #[serde(rename = "UnityPackage")]
    UnityPackage,
    #[serde(rename = "Compressed")]
    Compressed,
    #[serde(rename = "Empty Archive")]
    EmptyArchive,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Models => "Models",
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Worlds => "Worlds",
            Category::AvatarAssets => "Avatar Assets",
            Category::WorldAssets => "World Assets",
            Category::PropAssets => "Prop Assets",
            Category::OutfitAssets => "Outfit Assets",
            Category::ModelAssets => "Model Assets",
            Category::TextureAssets => "Texture Assets",
            Category::ShaderAssets => "Shader Assets",
            Category::AnimationAssets => "Animation Assets",
            Category::UnityPackage => "UnityPackage",
            Category::Compressed => "Compressed",
            Category::EmptyArchive => "Empty Archive",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal conditions noticed while inferring a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InferenceWarning {
    /// The file has zero bytes
    EmptyFile,
    /// The container opened but holds no file entries
    EmptyArchive,
    /// The container could not be read; classification fell back to the extension
    ArchiveUnreadable,
    /// A preview entry was found but could not be extracted
    PreviewUnreadable,
    /// A readme entry was found but could not be read
    ReadmeUnreadable,
}

/// Normalized output of inference for one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Process-unique identifier
    pub id: String,
    /// Title derived from the file name, never empty
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Extracted preview, the source image, or a placeholder
    pub image_url: String,
    /// `file://` reference to the original file
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<InferenceWarning>,
}

/// Seam between the batch scheduler and whatever produces records
#[async_trait]
pub trait Inferencer: Send + Sync {
    /// Infer a catalog record for one file.
    ///
    /// Only [`crate::CatalogError::FileAccess`] is expected here; archive
    /// problems are absorbed into the record.
    async fn infer(&self, path: &Path) -> Result<CatalogRecord>;
}

/// Lowercased extension of `path` without the dot
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// `file://` reference for a local path
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

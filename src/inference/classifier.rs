// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Extension and archive-content classification

use std::path::Path;

use super::{Category, UNKNOWN_TITLE};

/// Description given to files with no more specific inference
pub const GENERIC_DESCRIPTION: &str = "A digital asset catalogued by autocatalog.";

/// Extensions inspected as zip-family containers
pub const CONTAINER_EXTENSIONS: &[&str] = &["zip", "unitypackage"];

/// Number of title characters embedded in a placeholder reference
const PLACEHOLDER_TITLE_CHARS: usize = 15;

/// Keyword table for the container vote. Declaration order breaks ties.
const CONTAINER_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::AvatarAssets, &["avatar", "vrm", "fbx"]),
    (Category::WorldAssets, &["world", "scene", "map"]),
    (Category::PropAssets, &["prop", "object", "item"]),
    (Category::OutfitAssets, &["outfit", "clothing", "costume"]),
    (Category::ModelAssets, &["model", "mesh", "3d", "fbx", "obj", "gltf"]),
    (Category::TextureAssets, &["texture", "material"]),
    (Category::ShaderAssets, &["shader"]),
    (Category::AnimationAssets, &["anim", "bvh", "mocap"]),
];

/// Where a record's image should come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSource {
    /// Generated placeholder reference
    Placeholder,
    /// The file is itself an image
    SourceFile,
}

/// Outcome of classifying one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub description: String,
    pub preview: PreviewSource,
}

/// True for extensions handled by the archive inspector
pub fn is_container(extension: &str) -> bool {
    CONTAINER_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(extension))
}

/// Title from a file name: extension stripped, underscores to spaces, trimmed
pub fn derive_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let title = stem.replace('_', " ").trim().to_string();
    if title.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        title
    }
}

/// Classify a file by extension, or by entry names when it is a container
/// that was read successfully.
pub fn classify(title: &str, extension: &str, entry_names: Option<&[String]>) -> Classification {
    let extension = extension.to_lowercase();

    if let Some(names) = entry_names {
        let category = if names.is_empty() {
            Category::EmptyArchive
        } else {
            vote_category(names).unwrap_or(Category::Uncategorized)
        };
        return Classification {
            category,
            description: extension_description(title, &extension),
            preview: PreviewSource::Placeholder,
        };
    }

    let (category, preview) = match extension.as_str() {
        "fbx" | "obj" | "gltf" | "blend" | "vrm" => (Category::Models, PreviewSource::Placeholder),
        "png" | "jpg" | "jpeg" | "gif" => (Category::Images, PreviewSource::SourceFile),
        "pdf" => (Category::Documents, PreviewSource::Placeholder),
        "world" => (Category::Worlds, PreviewSource::Placeholder),
        _ => (Category::Uncategorized, PreviewSource::Placeholder),
    };

    Classification {
        category,
        description: extension_description(title, &extension),
        preview,
    }
}

/// Classification for a container that could not be read
pub fn container_fallback(title: &str, extension: &str) -> Classification {
    let (category, description) = if extension.eq_ignore_ascii_case("unitypackage") {
        (
            Category::UnityPackage,
            format!("Unity package: {}. Contains assets for import into Unity.", title),
        )
    } else {
        (
            Category::Compressed,
            format!("ZIP archive: {}. May contain several assets.", title),
        )
    };

    Classification {
        category,
        description,
        preview: PreviewSource::Placeholder,
    }
}

/// Bag-of-words vote over entry names.
///
/// Each category scores the total number of (non-overlapping, case-insensitive)
/// keyword occurrences across all names. The strictly highest score wins;
/// `None` when no keyword occurs at all.
pub fn vote_category(entry_names: &[String]) -> Option<Category> {
    let lowered: Vec<String> = entry_names.iter().map(|n| n.to_lowercase()).collect();

    let mut best: Option<(Category, usize)> = None;
    for (category, words) in CONTAINER_KEYWORDS {
        let score: usize = lowered
            .iter()
            .map(|name| words.iter().map(|w| name.matches(w).count()).sum::<usize>())
            .sum();

        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((*category, score));
        }
    }

    best.map(|(category, _)| category)
}

/// Placeholder image reference embedding a URL-safe fragment of the title
pub fn placeholder_url(base_url: &str, title: &str) -> String {
    let fragment: String = title.chars().take(PLACEHOLDER_TITLE_CHARS).collect();
    format!("{}?text={}", base_url.trim_end_matches('?'), url_fragment(&fragment))
}

fn url_fragment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push('+');
        } else if ch.is_ascii_alphanumeric() || "-_.!~*'()".contains(ch) {
            out.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}

fn extension_description(title: &str, extension: &str) -> String {
    match extension {
        "fbx" | "obj" | "gltf" | "blend" => format!(
            "3D model: {}. A three-dimensional {} asset.",
            title,
            extension.to_uppercase()
        ),
        "vrm" => format!("VRM avatar: {}. An avatar model optimized for virtual reality.", title),
        "png" | "jpg" | "jpeg" | "gif" => format!("Image: {}. A {} image asset.", title, extension.to_uppercase()),
        "pdf" => format!("PDF document: {}.", title),
        "world" => format!("VR world file: {}. An interactive scene for virtual environments.", title),
        "unitypackage" => format!("Unity package: {}. Contains resources for import into the Unity Engine.", title),
        "zip" => format!("ZIP archive: {}. A compressed archive that may hold several kinds of assets.", title),
        _ => GENERIC_DESCRIPTION.to_string(),
    }
}

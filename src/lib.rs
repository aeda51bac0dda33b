// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! autocatalog: batch cataloguer for local assets
//!
//! Infers a title, category, description and preview image for each
//! selected file (3D models, archives, images) and reports progress while a
//! bounded pool of workers processes the batch.

pub mod batch;
pub mod config;
pub mod error;
pub mod inference;
pub mod logging;
pub mod opener;
pub mod picker;

pub use batch::{BatchScheduler, ItemResult, ProgressEvent};
pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use inference::{CatalogRecord, Category, InferenceEngine};

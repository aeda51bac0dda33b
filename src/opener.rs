// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Hand a file to the operating system's default application

use std::path::Path;
use tracing::{info, warn};

/// Opens a path externally, reporting only success or failure
pub trait ExternalOpener: Send + Sync {
    fn open(&self, path: &Path) -> bool;
}

/// Delegates to the desktop's default handler for the file type
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, path: &Path) -> bool {
        if !path.exists() {
            warn!("Cannot open {:?}: no such file", path);
            return false;
        }

        match open::that_detached(path) {
            Ok(_) => {
                info!("Opened {:?} externally", path);
                true
            }
            Err(e) => {
                warn!("Failed to open {:?}: {}", path, e);
                false
            }
        }
    }
}

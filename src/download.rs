// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget export of embedded documents.
//!
//! The website this shell mirrors serves a static file at a fixed path; here the document
//! is embedded in the binary and copied into the user's download directory
//! on activation. No response is awaited and no error is surfaced back to
//! the shell; failures are only logged.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/docs/"]
struct DocAsset;

/// Triggers the download side effect for an embedded document.
pub fn trigger(asset_path: &str) {
    match download_dir() {
        Some(dir) => {
            if let Err(error) = save_to(asset_path, &dir) {
                eprintln!("Failed to export {}: {}", asset_path, error);
            }
        }
        None => eprintln!("No download directory available for {}", asset_path),
    }
}

fn download_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}

/// Copies the embedded document into `dir`, returning the written path.
pub fn save_to(asset_path: &str, dir: &Path) -> Result<PathBuf> {
    let name = asset_path.rsplit('/').next().unwrap_or(asset_path);
    let content = DocAsset::get(name)
        .ok_or_else(|| Error::Io(format!("embedded document not found: {}", asset_path)))?;
    let target = dir.join(name);
    std::fs::write(&target, content.data.as_ref())?;
    Ok(target)
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::consts::{SCREENSHOT_DIR, SCREENSHOT_EXTENSIONS};

/// Returns the normalized extension of an uploaded screenshot, if it is an accepted image type.
pub fn screenshot_extension(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    SCREENSHOT_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Stores `data` under `<media_root>/project_screenshots/` and returns the path relative to the media root.
pub async fn store_screenshot(media_root: &str, extension: &str, data: &[u8]) -> Result<String> {
    let dir = Path::new(media_root).join(SCREENSHOT_DIR);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create media directory {}", dir.display()))?;

    let relative = format!("{}/{}.{}", SCREENSHOT_DIR, Uuid::new_v4(), extension);
    let target = Path::new(media_root).join(&relative);
    tokio::fs::write(&target, data)
        .await
        .with_context(|| format!("Failed to write media file {}", target.display()))?;

    Ok(relative)
}

pub async fn remove_media(media_root: &str, relative: &str) -> Result<()> {
    let path = media_path(media_root, relative)?;
    tokio::fs::remove_file(&path)
        .await
        .with_context(|| format!("Failed to remove media file {}", path.display()))
}

fn media_path(media_root: &str, relative: &str) -> Result<PathBuf> {
    let relative = Path::new(relative);
    if relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        anyhow::bail!("Refusing media path outside of media root: {}", relative.display());
    }

    Ok(Path::new(media_root).join(relative))
}

pub fn media_url(serve_url: &str, relative: &str) -> String {
    format!("{}/media/{}", serve_url.trim_end_matches('/'), relative)
}

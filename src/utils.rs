use std::path::{Path, PathBuf};

/// Extensions treated as image media
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif", "svg", "avif"];

/// Extensions treated as non-image media (kept in the grid, never opened in the lightbox)
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "ogv"];

fn extension_of(locator: &str) -> Option<String> {
    // Strip query/fragment so "photo.jpg?w=800" still reads as an image.
    let path = locator.split(['?', '#']).next().unwrap_or(locator);
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a media locator (path or URL) points to a supported image
pub fn is_image_locator(locator: &str) -> bool {
    extension_of(locator)
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|&supported| supported == ext))
        .unwrap_or(false)
}

/// Check if a file has one of the given extensions (case insensitive)
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            extensions.iter().any(|supported| supported.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

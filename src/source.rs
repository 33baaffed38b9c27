//! Where gallery items come from: a manifest file or a directory scan.

use crate::config::GalleryOptions;
use crate::error::SourceError;
use crate::gallery::{Gallery, ItemDescriptor, ItemKind};
use crate::utils::{has_extension, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Directory scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub directory: PathBuf,
    pub extensions: Vec<String>,
    /// Descend into subdirectories; the first level names the tag
    pub recursive: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .map(|p| p.join("gallery"))
                .unwrap_or_else(|| PathBuf::from("~/Pictures/gallery")),
            extensions: IMAGE_EXTENSIONS
                .iter()
                .chain(VIDEO_EXTENSIONS)
                .map(|e| e.to_string())
                .collect(),
            recursive: true,
        }
    }
}

/// One named gallery as described by a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySource {
    pub name: String,
    /// Replaces the configured options for this gallery when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GalleryOptions>,
    #[serde(default, rename = "item", alias = "items")]
    pub items: Vec<ItemDescriptor>,
}

impl GallerySource {
    /// Turn the description into a live gallery instance.
    pub fn build(self, fallback: &GalleryOptions) -> Gallery {
        let options = self.options.unwrap_or_else(|| fallback.clone());
        Gallery::new(self.name, self.items, options)
    }
}

/// Manifest file: an ordered list of galleries.
///
/// ```toml
/// [[gallery]]
/// name = "travel"
///
/// [[gallery.item]]
/// src = "img/forest.jpg"
/// tag = "nature"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "gallery", alias = "galleries")]
    pub galleries: Vec<GallerySource>,
}

impl Manifest {
    /// Load a `.toml` or `.json` manifest.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let data = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let manifest = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&data).map_err(|source| SourceError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => Self::from_json_str(&data).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(
            manifest = %path.display(),
            galleries = manifest.galleries.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Keep only the gallery called `name`.
    pub fn select(self, name: &str) -> Result<GallerySource, SourceError> {
        self.galleries
            .into_iter()
            .find(|g| g.name == name)
            .ok_or_else(|| SourceError::GalleryNotFound(name.to_string()))
    }
}

/// Build a gallery from the media files below `config.directory`.
///
/// Files are taken in sorted path order. With `recursive`, the first
/// directory component under the root becomes the item's tag; top-level
/// files are untagged.
pub fn scan_directory(config: &SourceConfig) -> Result<GallerySource, SourceError> {
    let root = config.directory.as_path();
    let depth = if config.recursive { usize::MAX } else { 1 };
    let mut items = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .max_depth(depth)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, &config.extensions) {
            continue;
        }
        let src = path.to_string_lossy().into_owned();
        items.push(ItemDescriptor {
            kind: Some(ItemKind::from_locator(&src)),
            tag: tag_for(root, path),
            src,
        });
    }

    debug!(root = %root.display(), items = items.len(), "directory scanned");

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    Ok(GallerySource {
        name,
        options: None,
        items,
    })
}

/// First directory component of `path` relative to `root`, if any.
fn tag_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    // A lone component is the file itself.
    components.next()?;
    match first {
        Component::Normal(dir) => Some(dir.to_string_lossy().into_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::TagFilter;
    use std::fs::File;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[[gallery]]
name = "travel"

[[gallery.item]]
src = "img/forest.jpg"
tag = "nature"

[[gallery.item]]
src = "img/street.jpg"
tag = "city"

[[gallery.item]]
src = "clips/tram.mp4"
tag = "city"

[[gallery]]
name = "portraits"
options = { navigation = false, columns = 2 }

[[gallery.item]]
src = "img/anna.png"
"#;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        File::create(path).expect("create file");
    }

    #[test]
    fn toml_manifest_lists_galleries_in_order() {
        let manifest = Manifest::from_toml_str(MANIFEST).expect("parse");
        let names: Vec<&str> = manifest.galleries.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["travel", "portraits"]);
        assert_eq!(manifest.galleries[0].items.len(), 3);
        assert_eq!(manifest.galleries[0].items[0].tag.as_deref(), Some("nature"));
    }

    #[test]
    fn manifest_kind_defaults_from_extension() {
        let manifest = Manifest::from_toml_str(MANIFEST).expect("parse");
        let gallery = manifest.galleries[0].clone().build(&GalleryOptions::default());
        assert!(gallery.items()[0].is_image());
        assert_eq!(gallery.items()[2].kind, ItemKind::Other);
    }

    #[test]
    fn per_gallery_options_replace_fallback() {
        let manifest = Manifest::from_toml_str(MANIFEST).expect("parse");
        let portraits = manifest.select("portraits").expect("gallery exists");
        let gallery = portraits.build(&GalleryOptions::default());
        assert!(!gallery.options().navigation);
        assert!(gallery.options().light_box);
    }

    #[test]
    fn json_manifest_is_supported() {
        let json = r#"{ "galleries": [ { "name": "j", "items": [
            { "src": "a.jpg", "tag": "t" },
            { "src": "b.jpg" }
        ] } ] }"#;
        let manifest = Manifest::from_json_str(json).expect("parse");
        assert_eq!(manifest.galleries[0].items.len(), 2);
        assert_eq!(manifest.galleries[0].items[1].tag, None);
    }

    #[test]
    fn json_null_columns_keep_the_gallery() {
        let json = r#"{ "gallery": [ {
            "name": "j",
            "options": { "columns": null },
            "item": [ { "src": "a.jpg" } ]
        } ] }"#;
        let manifest = Manifest::from_json_str(json).expect("parse");
        let gallery = manifest.galleries[0].clone().build(&GalleryOptions::default());
        assert_eq!(gallery.items().len(), 1);
        assert_eq!(gallery.options().columns.resolve(100), None);
        assert_eq!(gallery.options().columns.resolve_or_single(100), 1);
    }

    #[test]
    fn missing_gallery_is_an_error() {
        let manifest = Manifest::from_toml_str(MANIFEST).expect("parse");
        assert!(matches!(
            manifest.select("nope"),
            Err(SourceError::GalleryNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("gallery.yaml");
        fs::write(&path, "gallery: []").expect("write");
        assert!(matches!(Manifest::load(&path), Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, MANIFEST).expect("write");
        let manifest = Manifest::load(&path).expect("load");
        assert_eq!(manifest.galleries.len(), 2);
    }

    #[test]
    fn scan_tags_by_first_directory() {
        let tmp = TempDir::new().expect("tempdir");
        touch(tmp.path(), "city/b.jpg");
        touch(tmp.path(), "city/night/c.png");
        touch(tmp.path(), "nature/a.jpg");
        touch(tmp.path(), "nature/notes.txt");
        touch(tmp.path(), "loose.webp");
        touch(tmp.path(), "nature/river.mp4");

        let config = SourceConfig {
            directory: tmp.path().to_path_buf(),
            ..SourceConfig::default()
        };
        let source = scan_directory(&config).expect("scan");
        let tags: Vec<Option<&str>> = source.items.iter().map(|i| i.tag.as_deref()).collect();
        assert_eq!(
            tags,
            vec![Some("city"), Some("city"), None, Some("nature"), Some("nature")]
        );
        assert_eq!(source.items[4].kind, Some(ItemKind::Other));

        let gallery = source.build(&GalleryOptions::default());
        assert_eq!(gallery.tags().iter().collect::<Vec<_>>(), vec!["city", "nature"]);
        let nature = TagFilter::Tag("nature".into());
        assert_eq!(
            crate::gallery::filtered_sequence(gallery.items(), &nature).len(),
            2
        );
    }

    #[test]
    fn non_recursive_scan_stays_at_top_level() {
        let tmp = TempDir::new().expect("tempdir");
        touch(tmp.path(), "top.jpg");
        touch(tmp.path(), "sub/deep.jpg");

        let config = SourceConfig {
            directory: tmp.path().to_path_buf(),
            recursive: false,
            ..SourceConfig::default()
        };
        let source = scan_directory(&config).expect("scan");
        assert_eq!(source.items.len(), 1);
        assert_eq!(source.items[0].tag, None);
    }

    #[test]
    fn empty_directory_gives_empty_gallery() {
        let tmp = TempDir::new().expect("tempdir");
        let config = SourceConfig {
            directory: tmp.path().to_path_buf(),
            ..SourceConfig::default()
        };
        let source = scan_directory(&config).expect("scan");
        assert!(source.items.is_empty());
    }

    #[test]
    fn missing_directory_is_a_scan_error() {
        let config = SourceConfig {
            directory: PathBuf::from("/nonexistent/tessera-test-dir"),
            ..SourceConfig::default()
        };
        assert!(matches!(scan_directory(&config), Err(SourceError::Scan { .. })));
    }
}

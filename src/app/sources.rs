use super::Config;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tessera::gallery::Gallery;
use tessera::source::{scan_directory, Manifest, SourceConfig};
use tessera::utils::expand_tilde;
use tracing::info;

/// Where the user asked galleries to come from.
#[derive(Debug, Default, Clone)]
pub struct SourceRequest {
    pub dir: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub gallery: Option<String>,
}

/// Build every requested gallery. A manifest wins over a directory; a
/// gallery name narrows a manifest to that one entry.
pub fn load_galleries(config: &Config, request: &SourceRequest) -> Result<Vec<Gallery>> {
    if let Some(path) = &request.manifest {
        let path = expand_tilde(path);
        let manifest = Manifest::load(&path)
            .with_context(|| format!("loading manifest {}", path.display()))?;
        let sources = match &request.gallery {
            Some(name) => vec![manifest.select(name)?],
            None => manifest.galleries,
        };
        if sources.is_empty() {
            anyhow::bail!("manifest {} defines no galleries", path.display());
        }
        return Ok(sources
            .into_iter()
            .map(|source| source.build(&config.gallery))
            .collect());
    }

    let directory = request
        .dir
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| config.source_dir());
    let scan = SourceConfig {
        directory: directory.clone(),
        ..config.source.clone()
    };
    let source = scan_directory(&scan)
        .with_context(|| format!("scanning {}", directory.display()))?;
    info!(
        directory = %directory.display(),
        items = source.items.len(),
        "gallery scanned"
    );
    Ok(vec![source.build(&config.gallery)])
}

//! Widget Asset Resolution
//!
//! Widget HTML is produced by the frontend build and dropped into the assets
//! directory either as `<name>.html` or as hashed/versioned
//! `<name>-<suffix>.html` files. This module locates and memoizes it.

use super::error::AssetError;
use dashmap::DashMap;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;

/// Loads widget HTML by logical name and caches it for the process lifetime.
#[derive(Debug)]
pub struct AssetResolver {
    /// Path to the directory containing HTML assets.
    assets_dir: PathBuf,

    /// Resolved markup keyed by widget name. Filled once per name.
    cache: DashMap<String, Arc<str>>,
}

impl AssetResolver {
    /// Creates a resolver rooted at `assets_dir` with an empty cache.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            cache: DashMap::new(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Returns the HTML for `name`, reading it from disk on first use.
    ///
    /// `<name>.html` wins when present. Otherwise the lexicographically last
    /// `<name>-*.html` is used, so `name-2.html` beats `name-10.html`.
    pub async fn resolve(&self, name: &str) -> Result<Arc<str>, AssetError> {
        if let Some(hit) = self.cache.get(name) {
            return Ok(Arc::clone(hit.value()));
        }

        let path = self.locate(name).await?;
        let html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| AssetError::Io {
                path: path.clone(),
                source,
            })?;
        debug!("Loaded widget {} from {:?}", name, path);

        // A concurrent first access may have filled the slot already; keep that one.
        let entry = self
            .cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::from(html));
        Ok(Arc::clone(entry.value()))
    }

    /// Finds the file backing `name` without reading it.
    async fn locate(&self, name: &str) -> Result<PathBuf, AssetError> {
        let primary_html_path = self.assets_dir.join(format!("{name}.html"));
        if primary_html_path.is_file() {
            return Ok(primary_html_path);
        }

        self.find_fallback_html_file(name)
            .await
            .ok_or_else(|| AssetError::NotFound {
                name: name.to_string(),
                dir: self.assets_dir.clone(),
            })
    }

    /// Picks the lexicographically last `<name>-*.html` in the assets directory.
    async fn find_fallback_html_file(&self, name: &str) -> Option<PathBuf> {
        let mut entries = tokio::fs::read_dir(&self.assets_dir).await.ok()?;

        let prefix = format!("{name}-");
        let mut fallbacks = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };
            if is_suffixed_match(&file_name, &prefix) {
                fallbacks.push(file_name);
            }
        }

        fallbacks.sort();
        let picked = fallbacks.pop()?;
        debug!("Using fallback asset {} for widget {}", picked, name);
        Some(self.assets_dir.join(picked))
    }
}

/// Glob `<prefix>*.html`, where `*` may be empty.
fn is_suffixed_match(file_name: &str, prefix: &str) -> bool {
    file_name.len() >= prefix.len() + ".html".len()
        && file_name.starts_with(prefix)
        && file_name.ends_with(".html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, contents: &str) {
        std::fs::write(dir.path().join(file), contents).unwrap();
    }

    #[tokio::test]
    async fn exact_file_beats_suffixed_variants() {
        let dir = TempDir::new().unwrap();
        write(&dir, "albums.html", "exact");
        write(&dir, "albums-9.html", "suffixed");

        let resolver = AssetResolver::new(dir.path());
        assert_eq!(&*resolver.resolve("albums").await.unwrap(), "exact");
    }

    #[tokio::test]
    async fn fallback_uses_lexicographic_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "list-1.html", "one");
        write(&dir, "list-2.html", "two");
        write(&dir, "list-10.html", "ten");

        let resolver = AssetResolver::new(dir.path());
        assert_eq!(&*resolver.resolve("list").await.unwrap(), "two");
    }

    #[tokio::test]
    async fn fallback_ignores_other_widgets_and_extensions() {
        let dir = TempDir::new().unwrap();
        write(&dir, "list-1.html", "one");
        write(&dir, "list-9.js", "script");
        write(&dir, "listing-9.html", "other widget");

        let resolver = AssetResolver::new(dir.path());
        assert_eq!(&*resolver.resolve("list").await.unwrap(), "one");
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "albums.html", "exact");

        let resolver = AssetResolver::new(dir.path());
        let err = resolver.resolve("list").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound { ref name, .. } if name == "list"));
        assert!(err.to_string().contains("\"list\""));
    }

    #[tokio::test]
    async fn missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let resolver = AssetResolver::new(dir.path().join("nope"));

        let err = resolver.resolve("albums").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }

    #[tokio::test]
    async fn repeated_resolve_hits_cache() {
        let dir = TempDir::new().unwrap();
        write(&dir, "albums.html", "cached");

        let resolver = AssetResolver::new(dir.path());
        let first = resolver.resolve("albums").await.unwrap();

        // Gone from disk, so a second read would fail.
        std::fs::remove_file(dir.path().join("albums.html")).unwrap();
        let second = resolver.resolve("albums").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }
}

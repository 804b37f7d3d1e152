// SPDX-License-Identifier: MPL-2.0
//! Async loading and decoding of page images.
//!
//! Decoding runs on the blocking pool. Placeholder downloads are stored in
//! the cache directory under the blake3 hash of their URL, so a placeholder
//! fetched once keeps working offline.

use super::source::{self, LoadRequest, Source};
use crate::brochure::{ImageVariant, PageImage};
use crate::config::PLACEHOLDER_FETCH_TIMEOUT_SECS;
use crate::error::{Error, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PLACEHOLDER_DIR: &str = "placeholders";

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes encoded image bytes for the given view.
///
/// Thumbnail and grid images are downscaled to their view size; main and
/// modal images keep their full resolution.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8], variant: ImageVariant) -> Result<LoadedImage> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let decoded = match variant {
        ImageVariant::Thumbnail | ImageVariant::Grid => {
            let (width, height) = variant.placeholder_size();
            if decoded.width() > width || decoded.height() > height {
                decoded.thumbnail(width, height)
            } else {
                decoded
            }
        }
        ImageVariant::Main | ImageVariant::Modal => decoded,
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        handle: image::Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Content-addressed cache file for a placeholder URL.
#[must_use]
pub fn placeholder_cache_path(cache_dir: &Path, url: &str) -> PathBuf {
    let hash = blake3::hash(url.as_bytes());
    cache_dir
        .join(PLACEHOLDER_DIR)
        .join(format!("{}.jpg", hash.to_hex()))
}

/// Everything a load needs, cheap to clone into a task.
#[derive(Debug, Clone)]
pub struct LoaderContext {
    assets_dir: PathBuf,
    placeholder_base: String,
    cache_dir: Option<PathBuf>,
    client: reqwest::Client,
}

impl LoaderContext {
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be built.
    pub fn new(
        assets_dir: PathBuf,
        placeholder_base: String,
        cache_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(PLACEHOLDER_FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            assets_dir,
            placeholder_base,
            cache_dir,
            client,
        })
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Performs one load request.
    ///
    /// # Errors
    ///
    /// Returns the I/O, network or decode error of the attempted source.
    pub async fn load(self, request: LoadRequest) -> Result<LoadedImage> {
        match request.source {
            Source::Primary => self.load_primary(request.image).await,
            Source::Placeholder => self.load_placeholder(request.image).await,
        }
    }

    async fn load_primary(&self, image: PageImage) -> Result<LoadedImage> {
        let path = source::primary_path(&self.assets_dir, image.page);
        let bytes = tokio::fs::read(&path).await?;
        decode_blocking(bytes, image.variant).await
    }

    async fn load_placeholder(&self, image: PageImage) -> Result<LoadedImage> {
        let url = image.placeholder_url(&self.placeholder_base);
        let cached = self
            .cache_dir
            .as_deref()
            .map(|dir| placeholder_cache_path(dir, &url));

        if let Some(path) = &cached {
            if let Ok(bytes) = tokio::fs::read(path).await {
                match decode_blocking(bytes, image.variant).await {
                    Ok(loaded) => {
                        tracing::debug!(%url, "placeholder served from cache");
                        return Ok(loaded);
                    }
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            %err,
                            "dropping unreadable cached placeholder"
                        );
                        let _ = tokio::fs::remove_file(path).await;
                    }
                }
            }
        }

        tracing::info!(%url, "fetching placeholder");
        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();

        let loaded = decode_blocking(bytes.clone(), image.variant).await?;

        if let Some(path) = cached {
            if let Err(err) = store(&path, &bytes).await {
                tracing::warn!(path = %path.display(), %err, "could not cache placeholder");
            }
        }
        Ok(loaded)
    }
}

async fn decode_blocking(bytes: Vec<u8>, variant: ImageVariant) -> Result<LoadedImage> {
    tokio::task::spawn_blocking(move || decode(&bytes, variant))
        .await
        .map_err(|err| Error::Image(err.to_string()))?
}

/// Writes next to `path` first and renames, so an interrupted write never
/// leaves a truncated file under the final name.
async fn store(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = path.with_extension("part");
    tokio::fs::write(&partial, bytes).await?;
    if let Err(err) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brochure::PageCount;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = image_rs::DynamicImage::ImageRgba8(image_rs::RgbaImage::new(width, height));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn page_image(n: i64, variant: ImageVariant) -> PageImage {
        PageImage::new(PageCount::new(11).unwrap().page(n).unwrap(), variant)
    }

    #[test]
    fn thumbnails_are_downscaled() {
        let loaded = decode(&png(400, 560), ImageVariant::Thumbnail).unwrap();
        assert!(loaded.width <= 100 && loaded.height <= 140);
    }

    #[test]
    fn main_images_keep_resolution() {
        let loaded = decode(&png(400, 560), ImageVariant::Main).unwrap();
        assert_eq!((loaded.width, loaded.height), (400, 560));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let err = decode(b"not an image", ImageVariant::Main).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn cache_path_is_stable_per_url() {
        let dir = Path::new("/cache");
        let a = placeholder_cache_path(dir, "https://example.org/seed/page1/100/140.jpg");
        let b = placeholder_cache_path(dir, "https://example.org/seed/page1/100/140.jpg");
        let c = placeholder_cache_path(dir, "https://example.org/seed/page2/100/140.jpg");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("/cache/placeholders"));
    }

    #[tokio::test]
    async fn primary_load_reads_asset_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("page2.jpg"), png(50, 70)).unwrap();
        let ctx = LoaderContext::new(dir.path().to_path_buf(), "http://localhost".into(), None)
            .unwrap();

        let loaded = ctx
            .load(LoadRequest::primary(page_image(2, ImageVariant::Main)))
            .await
            .unwrap();
        assert_eq!((loaded.width, loaded.height), (50, 70));
    }

    #[tokio::test]
    async fn missing_asset_is_io_error() {
        let dir = tempdir().unwrap();
        let ctx = LoaderContext::new(dir.path().to_path_buf(), "http://localhost".into(), None)
            .unwrap();

        let err = ctx
            .load(LoadRequest::primary(page_image(1, ImageVariant::Main)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn cached_placeholder_needs_no_network() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let image = page_image(3, ImageVariant::Grid);
        let base = "http://127.0.0.1:9/seed";
        let path = placeholder_cache_path(cache.path(), &image.placeholder_url(base));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, png(250, 350)).unwrap();

        let ctx = LoaderContext::new(
            assets.path().to_path_buf(),
            base.into(),
            Some(cache.path().to_path_buf()),
        )
        .unwrap();
        let request = LoadRequest {
            image,
            source: Source::Placeholder,
        };
        let loaded = ctx.load(request).await.unwrap();
        assert_eq!((loaded.width, loaded.height), (250, 350));
    }

    #[tokio::test]
    async fn corrupted_cache_entry_is_dropped() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let image = page_image(5, ImageVariant::Thumbnail);
        // Nothing listens on the discard port, so the refetch fails fast.
        let base = "http://127.0.0.1:9/seed";
        let path = placeholder_cache_path(cache.path(), &image.placeholder_url(base));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, &png(100, 140)[..20]).unwrap();

        let ctx = LoaderContext::new(
            assets.path().to_path_buf(),
            base.into(),
            Some(cache.path().to_path_buf()),
        )
        .unwrap();
        let request = LoadRequest {
            image,
            source: Source::Placeholder,
        };
        assert!(ctx.load(request).await.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn stored_placeholder_leaves_no_partial_file() {
        let cache = tempdir().unwrap();
        let url = "https://example.org/seed/page1/100/140.jpg";
        let path = placeholder_cache_path(cache.path(), url);
        store(&path, &png(10, 14)).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), png(10, 14));
        assert!(!path.with_extension("part").exists());
    }
}

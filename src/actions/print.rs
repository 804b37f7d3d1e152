// SPDX-License-Identifier: MPL-2.0
//! Printing the current page.
//!
//! A one-image HTML document is written to the cache directory and handed
//! to the platform opener. The document calls `window.print()` once loaded,
//! so the browser opens straight into its print dialog.

use crate::brochure::{ImageVariant, PageImage, PageIndex};
use crate::error::{Error, Result};
use crate::media::source;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::path::{Path, PathBuf};

const PRINT_DIR: &str = "print";

const PRINT_CSS: &str = "\
body { margin: 0; text-align: center; }
img { max-width: 100%; height: auto; }
@media print {
    body { margin: 0; }
    img { max-width: 100%; height: auto; page-break-inside: avoid; }
}";

const AUTO_PRINT: &str = "window.addEventListener('load', function () { window.print(); });";

/// Renders the print document for one page image.
#[must_use]
pub fn document(title: &str, alt: &str, image_src: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (PreEscaped(PRINT_CSS)) }
            }
            body {
                img src=(image_src) alt=(alt);
                script { (PreEscaped(AUTO_PRINT)) }
            }
        }
    }
}

/// Source of the printed image: the asset file when present, otherwise the
/// same placeholder the main view falls back to.
#[must_use]
pub fn image_source(assets_dir: &Path, placeholder_base: &str, page: PageIndex) -> String {
    let path = source::primary_path(assets_dir, page);
    match std::fs::canonicalize(&path) {
        Ok(absolute) if absolute.is_file() => file_url(&absolute),
        _ => PageImage::new(page, ImageVariant::Main).placeholder_url(placeholder_base),
    }
}

fn file_url(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    if text.starts_with('/') {
        format!("file://{text}")
    } else {
        format!("file:///{text}")
    }
}

/// Writes the print document into `<cache_dir>/print/` and returns its path.
///
/// # Errors
///
/// Returns [`Error::Print`] if the document cannot be written.
pub async fn write_document(cache_dir: PathBuf, page: PageIndex, markup: String) -> Result<PathBuf> {
    let dir = cache_dir.join(PRINT_DIR);
    let path = dir.join(format!("page-{page}.html"));
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|err| Error::Print(err.to_string()))?;
    tokio::fs::write(&path, markup)
        .await
        .map_err(|err| Error::Print(err.to_string()))?;
    Ok(path)
}

/// Opens the print document with the platform's default handler.
///
/// # Errors
///
/// Returns [`Error::Print`] if no handler could be launched.
pub fn open_document(path: &Path) -> Result<()> {
    open::that(path).map_err(|err| Error::Print(format!("{}: {}", path.display(), err)))?;
    tracing::info!(path = %path.display(), "print document opened");
    Ok(())
}

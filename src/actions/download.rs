// SPDX-License-Identifier: MPL-2.0
//! Saves a copy of the brochure PDF where the user chooses.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Returns whether the PDF asset exists.
#[must_use]
pub fn is_available(pdf: &Path) -> bool {
    pdf.is_file()
}

/// Asks for a destination. `None` when the dialog is cancelled.
pub async fn choose_destination(default_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(&default_name)
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Copies the PDF to `destination`, returning the destination on success.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the copy fails.
pub async fn save_copy(source: PathBuf, destination: PathBuf) -> Result<PathBuf> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let bytes = tokio::fs::copy(&source, &destination).await?;
    tracing::info!(
        from = %source.display(),
        to = %destination.display(),
        bytes,
        "brochure saved"
    );
    Ok(destination)
}

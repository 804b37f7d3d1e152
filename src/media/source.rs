// SPDX-License-Identifier: MPL-2.0
//! Where page image bytes come from.

use crate::brochure::{PageImage, PageIndex};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// `<assets_dir>/page<N>.jpg`
    Primary,
    /// Remote placeholder seeded by the page index.
    Placeholder,
}

impl Source {
    /// The source to try after this one fails, if any.
    #[must_use]
    pub fn fallback(self) -> Option<Source> {
        match self {
            Source::Primary => Some(Source::Placeholder),
            Source::Placeholder => None,
        }
    }
}

/// One load to perform for one image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub image: PageImage,
    pub source: Source,
}

impl LoadRequest {
    #[must_use]
    pub fn primary(image: PageImage) -> Self {
        Self {
            image,
            source: Source::Primary,
        }
    }
}

/// Path of the asset file for `page`.
#[must_use]
pub fn primary_path(assets_dir: &Path, page: PageIndex) -> PathBuf {
    assets_dir.join(page.file_name())
}

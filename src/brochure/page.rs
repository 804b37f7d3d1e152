// SPDX-License-Identifier: MPL-2.0
//! Page identifiers and per-view image references.
//!
//! A [`PageIndex`] can only be obtained from a [`PageCount`], which makes an
//! out-of-range page unrepresentable once it exists.

use crate::config::{GRID_ITEM_SIZE, MAIN_IMAGE_SIZE, MODAL_IMAGE_SIZE, THUMBNAIL_SIZE};
use std::fmt;
use std::num::NonZeroU32;

/// Total number of pages in the brochure. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCount(NonZeroU32);

impl PageCount {
    /// Creates a page count, returning `None` for an empty brochure.
    #[must_use]
    pub fn new(total: u32) -> Option<Self> {
        NonZeroU32::new(total).map(Self)
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the first page.
    #[must_use]
    pub fn first(self) -> PageIndex {
        PageIndex::FIRST
    }

    /// Returns the last page.
    #[must_use]
    pub fn last(self) -> PageIndex {
        PageIndex(self.0)
    }

    /// Returns whether `n` names a page of this brochure.
    #[must_use]
    pub fn contains(self, n: i64) -> bool {
        n >= 1 && n <= i64::from(self.get())
    }

    /// Validates a 1-based page number against this count.
    #[must_use]
    pub fn page(self, n: i64) -> Option<PageIndex> {
        if !self.contains(n) {
            return None;
        }
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(PageIndex)
    }

    /// Iterates over every page in order.
    pub fn pages(self) -> impl Iterator<Item = PageIndex> {
        (1..=self.get()).filter_map(NonZeroU32::new).map(PageIndex)
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

/// 1-based identifier of a brochure page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(NonZeroU32);

impl PageIndex {
    /// The first page of every brochure.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Returns the 1-based page number.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the 0-based position, used to index thumbnails and grid cells.
    #[must_use]
    pub fn position(self) -> usize {
        (self.get() - 1) as usize
    }

    /// Returns the asset file name for this page (`page<N>.jpg`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("page{}.jpg", self.get())
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The place a page image is shown. Each variant has its own placeholder size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    Thumbnail,
    Grid,
    Main,
    Modal,
}

impl ImageVariant {
    /// Size (width, height) requested from the placeholder service.
    #[must_use]
    pub fn placeholder_size(self) -> (u32, u32) {
        match self {
            ImageVariant::Thumbnail => THUMBNAIL_SIZE,
            ImageVariant::Grid => GRID_ITEM_SIZE,
            ImageVariant::Main => MAIN_IMAGE_SIZE,
            ImageVariant::Modal => MODAL_IMAGE_SIZE,
        }
    }
}

/// Reference to the image of one page as shown in one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageImage {
    pub page: PageIndex,
    pub variant: ImageVariant,
}

impl PageImage {
    #[must_use]
    pub fn new(page: PageIndex, variant: ImageVariant) -> Self {
        Self { page, variant }
    }

    /// Deterministic placeholder URL seeded by the page index.
    ///
    /// The same page and variant always map to the same URL, so a missing
    /// asset is replaced by the same picture on every load.
    #[must_use]
    pub fn placeholder_url(&self, base: &str) -> String {
        let (width, height) = self.variant.placeholder_size();
        format!(
            "{}/page{}/{}/{}.jpg",
            base.trim_end_matches('/'),
            self.page,
            width,
            height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u32) -> PageCount {
        PageCount::new(n).unwrap()
    }

    #[test]
    fn empty_brochure_is_rejected() {
        assert!(PageCount::new(0).is_none());
    }

    #[test]
    fn page_validates_bounds() {
        let total = count(11);
        assert!(total.page(0).is_none());
        assert!(total.page(-3).is_none());
        assert!(total.page(12).is_none());
        assert_eq!(total.page(1), Some(PageIndex::FIRST));
        assert_eq!(total.page(11), Some(total.last()));
    }

    #[test]
    fn pages_iterates_in_order() {
        let numbers: Vec<u32> = count(4).pages().map(PageIndex::get).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn position_is_zero_based() {
        assert_eq!(PageIndex::FIRST.position(), 0);
        assert_eq!(count(5).last().position(), 4);
    }

    #[test]
    fn file_name_follows_asset_convention() {
        assert_eq!(count(7).last().file_name(), "page7.jpg");
    }

    #[test]
    fn placeholder_url_is_seeded_by_page_and_sized_by_variant() {
        let page = count(3).last();
        let thumb = PageImage::new(page, ImageVariant::Thumbnail);
        let main = PageImage::new(page, ImageVariant::Main);

        assert_eq!(
            thumb.placeholder_url("https://picsum.photos/seed/"),
            "https://picsum.photos/seed/page3/100/140.jpg"
        );
        assert_eq!(
            main.placeholder_url("https://picsum.photos/seed"),
            "https://picsum.photos/seed/page3/800/1000.jpg"
        );
        assert_eq!(
            main.placeholder_url("https://picsum.photos/seed"),
            main.placeholder_url("https://picsum.photos/seed")
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Per-slot load state and an LRU cache of decoded handles.
//!
//! A slot moves `Idle → Loading(Primary) → Ready | Loading(Placeholder)`,
//! and from `Loading(Placeholder)` to `Ready` or `Failed`. `Failed` is
//! terminal: no request is ever issued for that slot again.
//!
//! Images marked visible are held outside the LRU and are never evicted.
//! Everything else lives in the LRU; evicted entries go back to `Idle` and
//! are reloaded on demand.

use super::loader::LoadedImage;
use super::source::{LoadRequest, Source};
use crate::brochure::PageImage;
use crate::config::DEFAULT_IMAGE_CACHE_ENTRIES;
use crate::error::Error;
use iced::widget::image;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Observable state of one image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Loading(Source),
    Ready(Source),
    Failed,
}

#[derive(Debug, Clone)]
pub struct CachedImage {
    pub handle: image::Handle,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Loading(Source),
    Failed,
}

#[derive(Debug)]
pub struct ImageStore {
    ready: LruCache<PageImage, CachedImage>,
    pinned: HashMap<PageImage, CachedImage>,
    visible: HashSet<PageImage>,
    pending: HashMap<PageImage, Pending>,
}

impl ImageStore {
    /// Creates a store keeping at most `capacity` off-screen decoded images.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_IMAGE_CACHE_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            ready: LruCache::new(capacity),
            pinned: HashMap::new(),
            visible: HashSet::new(),
            pending: HashMap::new(),
        }
    }

    /// Replaces the set of images currently on screen.
    ///
    /// Visible images are pinned; images that left the screen go back to
    /// the LRU as most recently used.
    pub fn set_visible(&mut self, images: impl IntoIterator<Item = PageImage>) {
        self.visible = images.into_iter().collect();

        let hidden: Vec<_> = self
            .pinned
            .keys()
            .filter(|image| !self.visible.contains(image))
            .copied()
            .collect();
        for image in hidden {
            if let Some(cached) = self.pinned.remove(&image) {
                self.ready.put(image, cached);
            }
        }

        for image in &self.visible {
            if let Some(cached) = self.ready.pop(image) {
                self.pinned.insert(*image, cached);
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self, image: PageImage) -> bool {
        self.visible.contains(&image)
    }

    #[must_use]
    pub fn state(&self, image: PageImage) -> SlotState {
        if let Some(cached) = self.peek(image) {
            return SlotState::Ready(cached.source);
        }
        match self.pending.get(&image) {
            Some(Pending::Loading(source)) => SlotState::Loading(*source),
            Some(Pending::Failed) => SlotState::Failed,
            None => SlotState::Idle,
        }
    }

    /// Returns the decoded image without touching the LRU order.
    #[must_use]
    pub fn peek(&self, image: PageImage) -> Option<&CachedImage> {
        self.pinned.get(&image).or_else(|| self.ready.peek(&image))
    }

    /// Asks for `image` to be displayed.
    ///
    /// Returns the primary load to start for an idle slot. Ready slots are
    /// marked as recently used; loading and failed slots issue nothing.
    pub fn request(&mut self, image: PageImage) -> Option<LoadRequest> {
        if self.pinned.contains_key(&image)
            || self.ready.get(&image).is_some()
            || self.pending.contains_key(&image)
        {
            return None;
        }
        self.pending.insert(image, Pending::Loading(Source::Primary));
        Some(LoadRequest::primary(image))
    }

    /// Records the outcome of a load.
    ///
    /// Returns the substitution to start when a primary load failed. Results
    /// that do not match the slot's current load are ignored.
    pub fn complete(
        &mut self,
        request: LoadRequest,
        result: Result<LoadedImage, Error>,
    ) -> Option<LoadRequest> {
        if self.pending.get(&request.image) != Some(&Pending::Loading(request.source)) {
            tracing::debug!(?request, "ignoring stale image load");
            return None;
        }

        match result {
            Ok(loaded) => {
                self.pending.remove(&request.image);
                let cached = CachedImage {
                    handle: loaded.handle,
                    source: request.source,
                };
                if self.visible.contains(&request.image) {
                    self.pinned.insert(request.image, cached);
                } else {
                    self.ready.put(request.image, cached);
                }
                None
            }
            Err(err) => match request.source.fallback() {
                Some(next) => {
                    tracing::warn!(
                        page = request.image.page.get(),
                        variant = ?request.image.variant,
                        %err,
                        "page image unavailable, using placeholder"
                    );
                    self.pending.insert(request.image, Pending::Loading(next));
                    Some(LoadRequest {
                        image: request.image,
                        source: next,
                    })
                }
                None => {
                    tracing::warn!(
                        page = request.image.page.get(),
                        variant = ?request.image.variant,
                        %err,
                        "placeholder unavailable"
                    );
                    self.pending.insert(request.image, Pending::Failed);
                    None
                }
            },
        }
    }

    /// Number of decoded images currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned.len() + self.ready.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.ready.is_empty()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

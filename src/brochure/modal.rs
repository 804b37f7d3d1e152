// SPDX-License-Identifier: MPL-2.0
//! Fullscreen modal and the page-scroll lock it holds while open.
//!
//! Opening the modal acquires a [`ScrollLock`] from the page's
//! [`ScrollGate`]. The lock lives inside the open modal, so every way the
//! modal goes away (close control, outside click, Escape, navigating away,
//! replacing it with another modal, or dropping the whole state) releases it.

use super::page::{ImageVariant, PageImage, PageIndex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared switch telling the page whether background scrolling is allowed.
#[derive(Debug, Clone, Default)]
pub struct ScrollGate {
    holders: Arc<AtomicUsize>,
}

impl ScrollGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses background scrolling until the returned guard is dropped.
    #[must_use = "scrolling is restored as soon as the lock is dropped"]
    pub fn lock(&self) -> ScrollLock {
        self.holders.fetch_add(1, Ordering::Relaxed);
        ScrollLock {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns whether at least one lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Relaxed) > 0
    }
}

/// Guard returned by [`ScrollGate::lock`].
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Why the modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Control,
    OutsideClick,
    Escape,
    NavigatedAway,
}

/// Content of an open modal.
#[derive(Debug)]
pub struct OpenModal {
    page: PageIndex,
    _lock: ScrollLock,
}

impl OpenModal {
    #[must_use]
    pub fn page(&self) -> PageIndex {
        self.page
    }

    /// Image shown enlarged in the modal.
    #[must_use]
    pub fn image(&self) -> PageImage {
        PageImage::new(self.page, ImageVariant::Modal)
    }
}

/// Modal viewer state.
#[derive(Debug, Default)]
pub struct Modal {
    open: Option<OpenModal>,
}

impl Modal {
    /// Shows `page` enlarged and locks background scrolling.
    ///
    /// An already open modal is replaced; its lock is released first.
    pub fn open(&mut self, gate: &ScrollGate, page: PageIndex) {
        self.open = None;
        tracing::debug!(page = page.get(), "modal opened");
        self.open = Some(OpenModal {
            page,
            _lock: gate.lock(),
        });
    }

    /// Closes the modal. Returns `false` if it was not open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.open.take() {
            Some(modal) => {
                tracing::debug!(page = modal.page.get(), ?reason, "modal closed");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&OpenModal> {
        self.open.as_ref()
    }
}

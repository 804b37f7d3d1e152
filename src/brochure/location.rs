// SPDX-License-Identifier: MPL-2.0
//! Location of the viewer: a base URL, the current fragment and its history.
//!
//! The fragment is written by the view synchronisation step after every
//! navigation. History traversal moves the fragment first and lets the host
//! feed it back into the navigator; the following sync writes the same
//! fragment again, which is a no-op, so traversal never adds entries.

use super::fragment;
use super::page::PageIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    base: String,
    fragment: Option<String>,
    back: Vec<String>,
    forward: Vec<String>,
}

impl Location {
    /// Creates a location with no fragment and empty history.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = fragment::split(&base).0.to_string();
        Self {
            base,
            fragment: None,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Creates a location whose initial fragment comes from a launch link.
    #[must_use]
    pub fn with_fragment(base: impl Into<String>, fragment: Option<String>) -> Self {
        Self {
            fragment: fragment.filter(|f| !f.is_empty()),
            ..Self::new(base)
        }
    }

    /// Base URL without fragment.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Current fragment without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Full textual location, e.g. `https://example.org/brochure/#page-3`.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{}", self.base, fragment),
            None => self.base.clone(),
        }
    }

    /// Shareable link for `page`.
    #[must_use]
    pub fn deep_link(&self, page: PageIndex) -> String {
        fragment::deep_link(&self.base, page)
    }

    /// Sets the fragment, recording a history entry when it changes.
    ///
    /// Returns `true` if the fragment changed. The very first fragment (the
    /// location had none) replaces the empty entry instead of stacking on it.
    pub fn assign(&mut self, fragment: String) -> bool {
        if self.fragment.as_deref() == Some(fragment.as_str()) {
            return false;
        }
        if let Some(previous) = self.fragment.replace(fragment) {
            self.back.push(previous);
        }
        self.forward.clear();
        true
    }

    /// Overwrites the current entry without touching history.
    ///
    /// Used to correct a fragment that does not name a page, so such entries
    /// never end up on the back stack.
    pub fn replace(&mut self, fragment: String) -> bool {
        if self.fragment.as_deref() == Some(fragment.as_str()) {
            return false;
        }
        self.fragment = Some(fragment);
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Moves one entry back in history. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.back.pop() else {
            return false;
        };
        if let Some(current) = self.fragment.replace(previous) {
            self.forward.push(current);
        }
        true
    }

    /// Moves one entry forward in history. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward.pop() else {
            return false;
        };
        if let Some(current) = self.fragment.replace(next) {
            self.back.push(current);
        }
        true
    }

    /// Number of entries behind the current one.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.back.len()
    }
}

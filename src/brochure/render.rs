// SPDX-License-Identifier: MPL-2.0
//! View synchronisation: projects the navigation state onto every view.
//!
//! [`Brochure::render`] derives everything the views need from the current
//! page alone and then rewrites the location fragment as its final stage.
//! Running it twice in a row changes nothing the second time.

use super::fragment;
use super::location::Location;
use super::navigator::{Navigator, Transition};
use super::page::{ImageVariant, PageCount, PageImage, PageIndex};

/// What the views show for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Image shown in the main display.
    pub main: PageImage,
    /// Counter: current page.
    pub current: PageIndex,
    /// Counter: total pages.
    pub total: PageCount,
    /// The single thumbnail carrying the active marker.
    pub active_thumbnail: PageIndex,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// Fragment the location was synchronised to.
    pub fragment: String,
}

impl Projection {
    fn of(navigator: &Navigator) -> Self {
        let current = navigator.current();
        Self {
            main: PageImage::new(current, ImageVariant::Main),
            current,
            total: navigator.count(),
            active_thumbnail: current,
            previous_enabled: !navigator.is_first(),
            next_enabled: !navigator.is_last(),
            fragment: fragment::encode(current),
        }
    }

    /// Whether the thumbnail of `page` carries the active marker.
    #[must_use]
    pub fn is_active(&self, page: PageIndex) -> bool {
        self.active_thumbnail == page
    }
}

/// Navigation state, its location replica and the last projection.
#[derive(Debug, Clone)]
pub struct Brochure {
    navigator: Navigator,
    location: Location,
    projection: Projection,
}

impl Brochure {
    /// Builds the brochure at load time.
    ///
    /// The location's launch fragment is applied once, then the views are
    /// synchronised (which writes `page-<n>` back to the location).
    #[must_use]
    pub fn load(count: PageCount, location: Location) -> (Self, Transition) {
        let navigator = Navigator::new(count);
        let projection = Projection::of(&navigator);
        let mut brochure = Self {
            navigator,
            location,
            projection,
        };
        let transition = brochure
            .navigator
            .init_from_fragment(brochure.location.fragment());
        brochure.render();
        (brochure, transition)
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    #[must_use]
    pub fn current(&self) -> PageIndex {
        self.navigator.current()
    }

    #[must_use]
    pub fn count(&self) -> PageCount {
        self.navigator.count()
    }

    pub fn next(&mut self) -> Transition {
        let transition = self.navigator.next();
        self.sync_if_moved(transition)
    }

    pub fn previous(&mut self) -> Transition {
        let transition = self.navigator.previous();
        self.sync_if_moved(transition)
    }

    pub fn go_to(&mut self, n: i64) -> Transition {
        let transition = self.navigator.go_to(n);
        self.sync_if_moved(transition)
    }

    /// Applies an externally edited location (the equivalent of a hash
    /// change). The input may be a full link, `#page-<n>` or `page-<n>`.
    ///
    /// Views are always re-synchronised afterwards, so an invalid edit is
    /// corrected back to the current page's fragment.
    pub fn apply_location(&mut self, input: &str) -> Transition {
        let fragment = fragment::from_input(input);
        let transition = self.navigator.init_from_fragment(Some(&fragment));
        self.render();
        transition
    }

    /// Steps back in location history and re-enters the navigator.
    pub fn history_back(&mut self) -> Transition {
        if !self.location.back() {
            return Transition::Unchanged;
        }
        self.reenter_from_location()
    }

    /// Steps forward in location history and re-enters the navigator.
    pub fn history_forward(&mut self) -> Transition {
        if !self.location.forward() {
            return Transition::Unchanged;
        }
        self.reenter_from_location()
    }

    /// Synchronises every view with the current page.
    ///
    /// Returns `true` if the location fragment changed.
    pub fn render(&mut self) -> bool {
        self.projection = Projection::of(&self.navigator);
        self.sync_location()
    }

    fn sync_location(&mut self) -> bool {
        let target = self.projection.fragment.clone();
        let names_a_page = self
            .location
            .fragment()
            .and_then(fragment::decode)
            .is_some_and(|n| self.navigator.count().contains(n));

        if names_a_page {
            self.location.assign(target)
        } else {
            self.location.replace(target)
        }
    }

    fn reenter_from_location(&mut self) -> Transition {
        let fragment = self.location.fragment().map(str::to_owned);
        let transition = self.navigator.init_from_fragment(fragment.as_deref());
        self.render();
        transition
    }

    fn sync_if_moved(&mut self, transition: Transition) -> Transition {
        if transition.is_moved() {
            self.render();
        }
        transition
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Collapsible navigation menu.

use super::Section;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a link: the menu closes and the section to scroll to is returned.
    pub fn choose(&mut self, section: Section) -> Section {
        self.open = false;
        section
    }

    /// A click landed somewhere other than the menu or its toggle.
    pub fn click_outside(&mut self) {
        self.close();
    }
}

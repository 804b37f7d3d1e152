// SPDX-License-Identifier: MPL-2.0
//! Page chrome around the viewer: navigation menu, scroll-spy and the
//! fade-in of sections as they scroll into view.
//!
//! All sections are laid out in one vertical scrollable with known heights,
//! so positions are computed here instead of being queried from widgets.

pub mod menu;
pub mod reveal;
pub mod scroll_spy;

pub use menu::Menu;
pub use reveal::Reveal;

/// Top-level sections of the page, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Pages,
    Gallery,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Pages,
        Section::Gallery,
        Section::About,
        Section::Contact,
    ];

    /// Anchor name, as used in `#home`, `#pages`, ...
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Pages => "pages",
            Section::Gallery => "gallery",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Translation key of the navigation link.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Pages => "nav-pages",
            Section::Gallery => "nav-gallery",
            Section::About => "nav-about",
            Section::Contact => "nav-contact",
        }
    }

    fn position(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Pages => 1,
            Section::Gallery => 2,
            Section::About => 3,
            Section::Contact => 4,
        }
    }
}

/// Vertical extent of each section inside the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    heights: [f32; 5],
}

impl SectionLayout {
    /// Builds a layout from section heights given in [`Section::ALL`] order.
    #[must_use]
    pub fn new(heights: [f32; 5]) -> Self {
        Self {
            heights: heights.map(|h| h.max(0.0)),
        }
    }

    #[must_use]
    pub fn height(&self, section: Section) -> f32 {
        self.heights[section.position()]
    }

    /// Offset of the section's top edge from the top of the page.
    #[must_use]
    pub fn top(&self, section: Section) -> f32 {
        self.heights[..section.position()].iter().sum()
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.heights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tops_accumulate_heights() {
        let layout = SectionLayout::new([100.0, 200.0, 300.0, 50.0, 80.0]);
        assert_eq!(layout.top(Section::Home), 0.0);
        assert_eq!(layout.top(Section::Pages), 100.0);
        assert_eq!(layout.top(Section::Contact), 650.0);
        assert_eq!(layout.total_height(), 730.0);
    }

    #[test]
    fn negative_heights_are_clamped() {
        let layout = SectionLayout::new([-5.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(layout.height(Section::Home), 0.0);
        assert_eq!(layout.top(Section::Pages), 0.0);
    }
}

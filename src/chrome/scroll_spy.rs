// SPDX-License-Identifier: MPL-2.0
//! Highlights the navigation link of the section being read.

use super::{Section, SectionLayout};
use crate::config::SCROLL_SPY_OFFSET;

/// Returns the last section whose top is at most `offset + 200` pixels.
///
/// `None` only when no section has started yet, which cannot happen with a
/// home section at the top of the page.
#[must_use]
pub fn active_section(layout: &SectionLayout, offset: f32) -> Option<Section> {
    Section::ALL
        .into_iter()
        .rev()
        .find(|section| offset >= layout.top(*section) - SCROLL_SPY_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        SectionLayout::new([600.0, 900.0, 800.0, 500.0, 700.0])
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_section(&layout(), 0.0), Some(Section::Home));
    }

    #[test]
    fn section_activates_two_hundred_pixels_early() {
        let layout = layout();
        assert_eq!(active_section(&layout, 399.0), Some(Section::Home));
        assert_eq!(active_section(&layout, 400.0), Some(Section::Pages));
    }

    #[test]
    fn bottom_of_page_is_contact() {
        let layout = layout();
        assert_eq!(
            active_section(&layout, layout.total_height()),
            Some(Section::Contact)
        );
    }

    #[test]
    fn nothing_active_before_first_section() {
        let layout = SectionLayout::new([0.0, 0.0, 0.0, 0.0, 0.0]);
        let shifted = SectionLayout::new([300.0, 10.0, 10.0, 10.0, 10.0]);
        assert_eq!(active_section(&layout, -500.0), None);
        assert_eq!(active_section(&shifted, 0.0), Some(Section::Home));
    }
}

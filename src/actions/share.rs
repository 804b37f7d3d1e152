// SPDX-License-Identifier: MPL-2.0
//! Sharing the current page.
//!
//! Desktop platforms offer no share sheet, so sharing always copies the
//! page's deep link to the clipboard.

use crate::brochure::{Location, PageIndex};

/// Link copied to the clipboard when `page` is shared.
#[must_use]
pub fn share_link(location: &Location, page: PageIndex) -> String {
    let link = location.deep_link(page);
    tracing::info!(%link, "sharing page");
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brochure::PageCount;

    #[test]
    fn link_has_single_fragment() {
        let mut location = Location::new("https://example.org/brochure/");
        location.assign("page-2".into());
        let page = PageCount::new(11).unwrap().page(5).unwrap();
        assert_eq!(
            share_link(&location, page),
            "https://example.org/brochure/#page-5"
        );
    }
}

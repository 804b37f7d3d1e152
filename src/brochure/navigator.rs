// SPDX-License-Identifier: MPL-2.0
//! Page navigation state machine.
//!
//! This is a flat bounded counter over `1..=total`. There are four entry
//! points (`next`, `previous`, `go_to`, `init_from_fragment`) and no other
//! transitions. Requests that would leave the range are discarded without
//! signalling an error; the returned [`Transition`] tells the caller whether
//! anything moved.

use super::fragment;
use super::page::{PageCount, PageIndex};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current page changed.
    Moved { from: PageIndex, to: PageIndex },
    /// The request was a no-op (boundary, out of range or unparseable).
    Unchanged,
}

impl Transition {
    #[must_use]
    pub fn is_moved(self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Owns the current page of the brochure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: PageIndex,
    count: PageCount,
}

impl Navigator {
    /// Creates a navigator positioned on the first page.
    #[must_use]
    pub fn new(count: PageCount) -> Self {
        Self {
            current: count.first(),
            count,
        }
    }

    #[must_use]
    pub fn current(&self) -> PageIndex {
        self.current
    }

    #[must_use]
    pub fn count(&self) -> PageCount {
        self.count
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == self.count.first()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current == self.count.last()
    }

    /// Advances one page unless already on the last page.
    pub fn next(&mut self) -> Transition {
        self.go_to(i64::from(self.current.get()) + 1)
    }

    /// Goes back one page unless already on the first page.
    pub fn previous(&mut self) -> Transition {
        self.go_to(i64::from(self.current.get()) - 1)
    }

    /// Jumps to page `n` if it exists; otherwise does nothing.
    pub fn go_to(&mut self, n: i64) -> Transition {
        match self.count.page(n) {
            Some(to) => self.set(to),
            None => Transition::Unchanged,
        }
    }

    /// Applies a `page-<n>` fragment, as done on load and on location edits.
    ///
    /// An absent, malformed or out-of-range fragment leaves the state alone.
    pub fn init_from_fragment(&mut self, fragment: Option<&str>) -> Transition {
        match fragment.and_then(fragment::decode) {
            Some(n) => self.go_to(n),
            None => Transition::Unchanged,
        }
    }

    fn set(&mut self, to: PageIndex) -> Transition {
        if to == self.current {
            return Transition::Unchanged;
        }
        let from = std::mem::replace(&mut self.current, to);
        tracing::debug!(from = from.get(), to = to.get(), "page changed");
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(total: u32) -> Navigator {
        Navigator::new(PageCount::new(total).unwrap())
    }

    #[test]
    fn starts_on_first_page() {
        let nav = navigator(11);
        assert_eq!(nav.current().get(), 1);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn next_and_previous_move_by_one() {
        let mut nav = navigator(3);
        assert!(nav.next().is_moved());
        assert_eq!(nav.current().get(), 2);
        assert!(nav.previous().is_moved());
        assert_eq!(nav.current().get(), 1);
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut nav = navigator(3);
        nav.go_to(3);
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.current().get(), 3);
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut nav = navigator(3);
        assert_eq!(nav.previous(), Transition::Unchanged);
        assert_eq!(nav.current().get(), 1);
    }

    #[test]
    fn go_to_out_of_range_leaves_state_unchanged() {
        let mut nav = navigator(11);
        nav.go_to(5);
        for n in [0, -1, 12, 1000, i64::MIN, i64::MAX] {
            assert_eq!(nav.go_to(n), Transition::Unchanged, "n = {n}");
            assert_eq!(nav.current().get(), 5);
        }
    }

    #[test]
    fn go_to_reports_both_ends_of_move() {
        let mut nav = navigator(11);
        let transition = nav.go_to(7);
        let count = nav.count();
        assert_eq!(
            transition,
            Transition::Moved {
                from: count.first(),
                to: count.page(7).unwrap(),
            }
        );
    }

    #[test]
    fn go_to_current_page_is_unchanged() {
        let mut nav = navigator(4);
        assert_eq!(nav.go_to(1), Transition::Unchanged);
    }

    #[test]
    fn init_from_fragment_valid_page() {
        let mut nav = navigator(11);
        assert!(nav.init_from_fragment(Some("page-4")).is_moved());
        assert_eq!(nav.current().get(), 4);
    }

    #[test]
    fn init_from_fragment_out_of_range_keeps_default() {
        let mut nav = navigator(11);
        assert_eq!(nav.init_from_fragment(Some("#page-999")), Transition::Unchanged);
        assert_eq!(nav.current().get(), 1);
    }

    #[test]
    fn init_from_fragment_absent_or_malformed_keeps_state() {
        let mut nav = navigator(11);
        nav.go_to(2);
        assert_eq!(nav.init_from_fragment(None), Transition::Unchanged);
        assert_eq!(nav.init_from_fragment(Some("#contact")), Transition::Unchanged);
        assert_eq!(nav.current().get(), 2);
    }

    #[test]
    fn single_page_brochure_is_both_first_and_last() {
        let mut nav = navigator(1);
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.previous(), Transition::Unchanged);
    }
}

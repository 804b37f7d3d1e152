// SPDX-License-Identifier: MPL-2.0
//! One-shot fade-in of sections entering the viewport.
//!
//! A section is revealed the first time at least 10% of its height
//! intersects the viewport, with the viewport's bottom edge pulled up by
//! 50 pixels. Revealed sections stay revealed.

use super::{Section, SectionLayout};
use crate::config::{FADE_IN_MS, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};
use std::time::{Duration, Instant};

const FADE_IN: Duration = Duration::from_millis(FADE_IN_MS);

/// Visible window of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
}

/// Fraction of the section's height inside the shrunken viewport.
#[must_use]
pub fn intersection_ratio(layout: &SectionLayout, section: Section, viewport: Viewport) -> f32 {
    let height = layout.height(section);
    if height <= 0.0 {
        return 0.0;
    }
    let top = layout.top(section);
    let bottom = top + height;
    let view_top = viewport.offset;
    let view_bottom = viewport.offset + (viewport.height - REVEAL_BOTTOM_MARGIN).max(0.0);

    let overlap = bottom.min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct Reveal {
    revealed_at: [Option<Instant>; 5],
}

impl Reveal {
    /// Checks every unrevealed section against the viewport.
    ///
    /// Returns the sections revealed by this call.
    pub fn observe(
        &mut self,
        layout: &SectionLayout,
        viewport: Viewport,
        now: Instant,
    ) -> Vec<Section> {
        let mut newly = Vec::new();
        for section in Section::ALL {
            let slot = &mut self.revealed_at[section.position()];
            if slot.is_none() && intersection_ratio(layout, section, viewport) >= REVEAL_THRESHOLD
            {
                *slot = Some(now);
                tracing::debug!(section = section.id(), "section revealed");
                newly.push(section);
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_at[section.position()].is_some()
    }

    /// Opacity of the section at `now`: 0 until revealed, then a linear ramp
    /// to 1 over the fade-in duration.
    #[must_use]
    pub fn opacity(&self, section: Section, now: Instant) -> f32 {
        match self.revealed_at[section.position()] {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / FADE_IN.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Whether any revealed section is still fading in.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed_at
            .iter()
            .flatten()
            .any(|at| now.saturating_duration_since(*at) < FADE_IN)
    }
}

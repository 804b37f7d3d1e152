// SPDX-License-Identifier: MPL-2.0
//! Zoom multiplier for the main page image.
//!
//! The level is kept as a whole number of quarter steps so repeated
//! zooming never drifts off the 0.25 grid.

pub use crate::config::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

const QUARTERS_PER_UNIT: f32 = 1.0 / ZOOM_STEP;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn to_quarters(value: f32) -> u8 {
    (value * QUARTERS_PER_UNIT) as u8
}

const MIN_QUARTERS: u8 = to_quarters(MIN_ZOOM);
const MAX_QUARTERS: u8 = to_quarters(MAX_ZOOM);
const DEFAULT_QUARTERS: u8 = to_quarters(DEFAULT_ZOOM);

/// Zoom level, guaranteed to be within 0.5–3.0 and on the 0.25 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Returns the zoom as a multiplier (e.g., 1.25).
    #[must_use]
    pub fn factor(self) -> f32 {
        f32::from(self.0) / QUARTERS_PER_UNIT
    }

    /// Returns the zoom as a whole percentage (e.g., 125).
    #[must_use]
    pub fn percent(self) -> u16 {
        u16::from(self.0) * 25
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_QUARTERS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_QUARTERS
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        self.0 == DEFAULT_QUARTERS
    }

    /// Increases zoom by one step, capped at the maximum.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(MAX_QUARTERS))
    }

    /// Decreases zoom by one step, floored at the minimum.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_QUARTERS))
    }

    /// Returns the default zoom level.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_QUARTERS)
    }
}

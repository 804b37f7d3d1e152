// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Brochure**: Page count, asset locations, deep-link base
//! - **Zoom**: Zoom multiplier bounds and step
//! - **Placeholder**: Fallback image service and per-view sizes
//! - **Timing**: Notification lifetime and layout settle delays
//! - **Input**: Gesture thresholds
//! - **Chrome**: Scroll-spy and reveal thresholds

// ==========================================================================
// Brochure Defaults
// ==========================================================================

/// Number of pages in the brochure when the config does not say otherwise.
pub const DEFAULT_TOTAL_PAGES: u32 = 11;

/// Upper bound accepted for `total_pages` (keeps thumbnails and grid sane).
pub const MAX_TOTAL_PAGES: u32 = 999;

/// Directory holding `page<N>.jpg`, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets/pages";

/// Path of the downloadable PDF rendition of the brochure.
pub const DEFAULT_PDF_PATH: &str = "assets/brochure.pdf";

/// File name suggested in the download dialog.
pub const DEFAULT_DOWNLOAD_NAME: &str = "brochure.pdf";

/// Base of shareable deep links; the page fragment is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://example.org/brochure/";

/// Window and print-sheet title.
pub const DEFAULT_TITLE: &str = "Brochure Showcase";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom multiplier on startup and after a reset.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Smallest zoom multiplier.
pub const MIN_ZOOM: f32 = 0.5;

/// Largest zoom multiplier.
pub const MAX_ZOOM: f32 = 3.0;

/// Increment applied by one zoom in/out step.
pub const ZOOM_STEP: f32 = 0.25;

// ==========================================================================
// Placeholder Defaults
// ==========================================================================

/// Seeded image service used when a page asset is missing.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

/// Placeholder size for thumbnails (width, height).
pub const THUMBNAIL_SIZE: (u32, u32) = (100, 140);

/// Placeholder size for grid items.
pub const GRID_ITEM_SIZE: (u32, u32) = (250, 350);

/// Placeholder size for the main page display.
pub const MAIN_IMAGE_SIZE: (u32, u32) = (800, 1000);

/// Placeholder size for the fullscreen modal.
pub const MODAL_IMAGE_SIZE: (u32, u32) = (1200, 1600);

/// Number of off-screen decoded image handles kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Timeout for fetching a placeholder image.
pub const PLACEHOLDER_FETCH_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a notification stays visible (in seconds).
pub const DEFAULT_NOTIFICATION_SECS: u32 = 3;

/// Minimum notification lifetime (in seconds).
pub const MIN_NOTIFICATION_SECS: u32 = 1;

/// Maximum notification lifetime (in seconds).
pub const MAX_NOTIFICATION_SECS: u32 = 30;

/// Delay before deferred scroll actions run, letting layout settle.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Duration of the section fade-in.
pub const FADE_IN_MS: u64 = 300;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Minimum horizontal travel (in logical pixels) for a swipe to count.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// A section becomes active once the scroll offset is this close to its top.
pub const SCROLL_SPY_OFFSET: f32 = 200.0;

/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin removed from the viewport when testing for reveal.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

// SPDX-License-Identifier: MPL-2.0
//! `brochure_lens` is an image-brochure viewer built with the Iced GUI
//! framework.
//!
//! One scrolling window shows a page carousel with thumbnails, a grid of
//! every page, a fullscreen viewer and a contact form. The current page is
//! mirrored into a `#page-<n>` location fragment, so every page has a
//! bookmarkable link and the location history works as page history.
//!
//! The navigation core lives in [`brochure`] and has no UI dependency; the
//! Iced application in [`app`] projects it onto the views in [`ui`].

pub mod actions;
pub mod app;
pub mod brochure;
pub mod chrome;
pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod media;
pub mod ui;

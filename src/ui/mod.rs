// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every view follows the Elm-style "state down, messages up" pattern: it is
//! rendered from a `ViewContext` borrowing application state and emits its
//! own `Message` type, which the application maps into its top-level message.
//!
//! # Sections of the scrolling page
//!
//! - [`hero`] - Home section with the call to action
//! - [`viewer`] - Pages section: main display, controls, thumbnail strip
//! - [`gallery`] - Grid of every page
//! - [`about`] - About text
//! - [`contact`] - Contact form
//!
//! # Overlays and chrome
//!
//! - [`navbar`] - Title bar and the collapsible section menu
//! - [`modal`] - Fullscreen page viewer
//! - [`notifications`] - Toast notification for user feedback
//!
//! # Shared infrastructure
//!
//! - [`image_slot`] - A page image or its fallback label
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod hero;
pub mod image_slot;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod viewer;

use crate::brochure::PageCount;
use crate::chrome::SectionLayout;
use design_tokens::layout;
use iced::widget::text;
use iced::{Color, Theme};

/// Offsets of the page sections as laid out by the views.
#[must_use]
pub fn section_layout(count: PageCount) -> SectionLayout {
    SectionLayout::new([
        layout::HOME_HEIGHT,
        layout::PAGES_HEIGHT,
        layout::gallery_height(count.get() as usize),
        layout::ABOUT_HEIGHT,
        layout::CONTACT_HEIGHT,
    ])
}

/// Text style fading the theme's text color to `opacity`.
pub fn text_fade(opacity: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(Color {
            a: opacity,
            ..theme.palette().text
        }),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Brochure core: page navigation, view synchronisation, zoom, location and
//! the modal viewer.
//!
//! Nothing in this module depends on the UI toolkit; the host drives it
//! through plain method calls and reads the resulting [`Projection`].

pub mod fragment;
pub mod location;
pub mod modal;
pub mod navigator;
pub mod page;
pub mod render;
pub mod zoom;

pub use location::Location;
pub use modal::{CloseReason, Modal, OpenModal, ScrollGate, ScrollLock};
pub use navigator::{Navigator, Transition};
pub use page::{ImageVariant, PageCount, PageImage, PageIndex};
pub use render::{Brochure, Projection};
pub use zoom::ZoomLevel;

// SPDX-License-Identifier: MPL-2.0
//! Page image loading.
//!
//! Every image slot first tries the page's asset file. A failed primary load
//! is substituted exactly once by a deterministic placeholder; if that fails
//! too the slot settles in a failed state and shows its text label.

pub mod cache;
pub mod loader;
pub mod source;

pub use cache::{CachedImage, ImageStore, SlotState};
pub use loader::{LoadedImage, LoaderContext};
pub use source::{LoadRequest, Source};

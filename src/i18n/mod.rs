// SPDX-License-Identifier: MPL-2.0
//! Localized strings through Fluent.
//!
//! Translation files are embedded at build time from `assets/i18n/`. The
//! locale is picked from the `--lang` argument, then the config file, then
//! the OS locale, falling back to `en-US`.

pub mod fluent;

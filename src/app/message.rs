// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::CliOverrides;
use crate::error::Error;
use crate::input::Action;
use crate::media::{LoadRequest, LoadedImage};
use crate::ui::{contact, gallery, hero, modal, navbar, notifications, viewer};
use iced::widget::scrollable::Viewport;
use iced::{touch, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Viewer(viewer::Message),
    Gallery(gallery::Message),
    Modal(modal::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// A key or mouse button bound in the input table.
    Input(Action),
    /// Raw touch event, fed to the swipe detector.
    Touch(touch::Event),
    /// The scrolling page moved.
    PageScrolled(Viewport),
    WindowResized(Size),
    /// A click landed outside the open menu.
    ClickOutsideMenu,
    /// Result of one image load.
    ImageLoaded {
        request: LoadRequest,
        result: Result<LoadedImage, Error>,
    },
    /// Deferred scroll to the pages section once layout has settled.
    ScrollToPages,
    /// Result from the PDF save dialog.
    DownloadDestination(Option<PathBuf>),
    /// Result from copying the PDF.
    DownloadFinished(Result<PathBuf, Error>),
    /// Result from writing the print document.
    PrintDocumentWritten(Result<PathBuf, Error>),
    /// Periodic tick for notification expiry and section fades.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Launch link: `#page-4`, `page-4` or a full URL with a fragment.
    pub link: Option<String>,
    /// Settings that win over the config file.
    pub overrides: CliOverrides,
}

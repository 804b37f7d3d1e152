// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation always goes through the brochure core; the handlers here only
//! turn its transitions into follow-up work (image loads, scrolling, the
//! location field) and run the leaf actions.

use super::{App, Message};
use crate::actions::{download, print, share};
use crate::brochure::{fragment, CloseReason, ImageVariant, PageImage, PageIndex, Transition};
use crate::chrome::reveal::Viewport as PageViewport;
use crate::chrome::{scroll_spy, Section};
use crate::config::{DEFAULT_DOWNLOAD_NAME, SETTLE_DELAY_MS};
use crate::error::Error;
use crate::input::{Action, Gesture};
use crate::media::LoadRequest;
use crate::ui::design_tokens::layout;
use crate::ui::notifications::Notification;
use crate::ui::{contact, gallery, hero, modal, navbar, viewer};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Identifier of the scrollable holding every page section.
pub const PAGE_SCROLL_ID: &str = "brochure-page";

/// Delivers `message` once layout has had time to settle.
pub(super) fn after_settle(message: Message) -> Task<Message> {
    Task::perform(
        async { tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await },
        move |()| message,
    )
}

/// Relative vertical offset that brings `top` to the top of the viewport.
fn relative_offset(top: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        0.0
    } else {
        (top / scrollable).clamp(0.0, 1.0)
    }
}

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.menu) {
                navbar::Event::None => Task::none(),
                navbar::Event::ScrollTo(section) => self.scroll_page_to(section),
            },
            Message::Hero(hero::Message::ViewBrochure) => self.scroll_page_to(Section::Pages),
            Message::Viewer(message) => self.handle_viewer(message),
            Message::Gallery(gallery::Message::Open(page)) => self.open_modal(page),
            Message::Modal(message) => {
                let reason = match message {
                    modal::Message::Close => CloseReason::Control,
                    modal::Message::ClickOutside => CloseReason::OutsideClick,
                };
                self.modal.close(reason);
                Task::none()
            }
            Message::Contact(message) => {
                self.handle_contact(message);
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Input(action) => self.handle_action(action),
            Message::Touch(event) => match self.swipe.handle(&event) {
                _ if self.modal.is_open() => Task::none(),
                Some(Gesture::Swipe(action)) => self.handle_action(action),
                Some(Gesture::Tap) => self.open_modal(self.brochure.current()),
                None => Task::none(),
            },
            Message::PageScrolled(viewport) => self.handle_page_scrolled(viewport),
            Message::WindowResized(size) => {
                self.window_size = size;
                self.page_viewport.height = size.height - layout::NAVBAR_HEIGHT;
                self.observe_page()
            }
            Message::ClickOutsideMenu => {
                self.menu.click_outside();
                Task::none()
            }
            Message::ImageLoaded { request, result } => {
                match self.images.complete(request, result) {
                    Some(substitute) => self.load(substitute),
                    None => Task::none(),
                }
            }
            Message::ScrollToPages => {
                Task::batch([self.scroll_page_to(Section::Pages), self.snap_thumbnails()])
            }
            Message::DownloadDestination(Some(destination)) => {
                self.notifications
                    .push(Notification::success("notification-download-started"));
                Task::perform(
                    download::save_copy(self.config.pdf_path(), destination),
                    Message::DownloadFinished,
                )
            }
            Message::DownloadDestination(None) => Task::none(),
            Message::DownloadFinished(Ok(path)) => {
                tracing::info!(path = %path.display(), "brochure PDF saved");
                Task::none()
            }
            Message::DownloadFinished(Err(err)) => {
                tracing::warn!(%err, "brochure PDF could not be saved");
                self.notifications.push(
                    Notification::error("notification-download-failed").with_detail(err.to_string()),
                );
                Task::none()
            }
            Message::PrintDocumentWritten(result) => {
                if let Err(err) = result.and_then(|path| print::open_document(&path)) {
                    tracing::warn!(%err, "print failed");
                    self.notifications
                        .push(Notification::error(err.i18n_key()).with_detail(err.to_string()));
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn handle_viewer(&mut self, message: viewer::Message) -> Task<Message> {
        match message {
            viewer::Message::Previous => self.handle_action(Action::PreviousPage),
            viewer::Message::Next => self.handle_action(Action::NextPage),
            viewer::Message::Select(page) => {
                let transition = self.brochure.go_to(i64::from(page.get()));
                self.after_navigation(transition)
            }
            viewer::Message::ImagePressed => {
                self.swipe.press_on_image();
                Task::none()
            }
            viewer::Message::ImageReleased => {
                if self.swipe.release_on_image() {
                    self.open_modal(self.brochure.current())
                } else {
                    Task::none()
                }
            }
            viewer::Message::ZoomIn => self.handle_action(Action::ZoomIn),
            viewer::Message::ZoomOut => self.handle_action(Action::ZoomOut),
            viewer::Message::ZoomReset => self.handle_action(Action::ZoomReset),
            viewer::Message::HistoryBack => self.handle_action(Action::HistoryBack),
            viewer::Message::HistoryForward => self.handle_action(Action::HistoryForward),
            viewer::Message::LocationEdited(value) => {
                self.location_input = value;
                Task::none()
            }
            viewer::Message::LocationSubmitted => self.submit_location(),
            viewer::Message::Print => self.print_current_page(),
            viewer::Message::Share => self.share_current_page(),
            viewer::Message::Download => self.start_download(),
            viewer::Message::ThumbnailsScrolled(viewport) => {
                self.thumbnail_viewport_width = viewport.bounds().width;
                Task::none()
            }
        }
    }

    /// Runs one bound action.
    pub(super) fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::NextPage => {
                let transition = self.brochure.next();
                self.after_navigation(transition)
            }
            Action::PreviousPage => {
                let transition = self.brochure.previous();
                self.after_navigation(transition)
            }
            Action::CloseOverlays => {
                self.modal.close(CloseReason::Escape);
                self.menu.close();
                Task::none()
            }
            Action::HistoryBack => {
                self.modal.close(CloseReason::NavigatedAway);
                let transition = self.brochure.history_back();
                self.after_history(transition)
            }
            Action::HistoryForward => {
                self.modal.close(CloseReason::NavigatedAway);
                let transition = self.brochure.history_forward();
                self.after_history(transition)
            }
            Action::ZoomIn => {
                self.zoom = self.zoom.zoom_in();
                Task::none()
            }
            Action::ZoomOut => {
                self.zoom = self.zoom.zoom_out();
                Task::none()
            }
            Action::ZoomReset => {
                self.zoom = self.zoom.reset();
                Task::none()
            }
        }
    }

    /// Applies the edited location field, the equivalent of a hash change.
    fn submit_location(&mut self) -> Task<Message> {
        let input = std::mem::take(&mut self.location_input);
        let lands_on_page = fragment::decode(&fragment::from_input(&input))
            .is_some_and(|n| self.brochure.count().contains(n));

        self.modal.close(CloseReason::NavigatedAway);
        let transition = self.brochure.apply_location(&input);
        let task = self.after_location_change(transition);
        if lands_on_page {
            Task::batch([task, after_settle(Message::ScrollToPages)])
        } else {
            task
        }
    }

    /// History entries always name a page, so a traversal that moved also
    /// brings the pages section into view.
    fn after_history(&mut self, transition: Transition) -> Task<Message> {
        let task = self.after_location_change(transition);
        if transition.is_moved() {
            Task::batch([task, after_settle(Message::ScrollToPages)])
        } else {
            task
        }
    }

    /// Follow-up of a navigation: reload the page images, refresh the
    /// location field and bring the active thumbnail into view.
    fn after_navigation(&mut self, transition: Transition) -> Task<Message> {
        self.location_input = self.brochure.location().href();
        match transition {
            Transition::Moved { .. } => {
                self.sync_visible_images();
                Task::batch([self.request_current_page(), self.snap_thumbnails()])
            }
            Transition::Unchanged => Task::none(),
        }
    }

    fn after_location_change(&mut self, transition: Transition) -> Task<Message> {
        tracing::debug!(
            location = %self.brochure.location().href(),
            moved = transition.is_moved(),
            "location applied"
        );
        self.after_navigation(transition)
    }

    fn open_modal(&mut self, page: PageIndex) -> Task<Message> {
        self.menu.close();
        self.modal.open(&self.scroll_gate, page);
        self.sync_visible_images();
        self.request_image(PageImage::new(page, ImageVariant::Modal))
    }

    fn handle_contact(&mut self, message: contact::Message) {
        match message {
            contact::Message::Edited(field, value) => self.contact.set(field, value),
            contact::Message::Submit => match self.contact.submit() {
                Ok(_) => self
                    .notifications
                    .push(Notification::success("notification-contact-thanks")),
                Err(rejection) => self
                    .notifications
                    .push(Notification::warning(rejection.i18n_key())),
            },
        }
    }

    fn handle_page_scrolled(&mut self, viewport: Viewport) -> Task<Message> {
        self.page_viewport = PageViewport {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        };
        self.now = Instant::now();
        self.active_section = scroll_spy::active_section(&self.layout, self.page_viewport.offset);
        self.observe_page()
    }

    /// Reveals the sections now in view and starts the gallery loads the
    /// first time the gallery shows up.
    pub(super) fn observe_page(&mut self) -> Task<Message> {
        let revealed = self
            .reveal
            .observe(&self.layout, self.page_viewport, self.now);
        if revealed.contains(&Section::Gallery) {
            tracing::debug!("gallery revealed, loading grid images");
            self.sync_visible_images();
            let requests: Vec<_> = gallery::images(self.brochure.count()).collect();
            Task::batch(requests.into_iter().map(|image| self.request_image(image)))
        } else {
            Task::none()
        }
    }

    fn scroll_page_to(&mut self, section: Section) -> Task<Message> {
        if self.scroll_gate.is_locked() {
            return Task::none();
        }
        let y = relative_offset(
            self.layout.top(section),
            self.layout.total_height(),
            self.page_viewport.height,
        );
        operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y })
    }

    fn snap_thumbnails(&self) -> Task<Message> {
        let x = viewer::thumbnail_snap(
            self.brochure.current().position(),
            self.brochure.count().get() as usize,
            self.thumbnail_viewport_width,
        );
        operation::snap_to(
            Id::new(viewer::THUMBNAIL_SCROLL_ID),
            RelativeOffset { x, y: 0.0 },
        )
    }

    fn print_current_page(&mut self) -> Task<Message> {
        let Some(cache_dir) = self.cache_dir.clone() else {
            self.notifications
                .push(Notification::error("notification-print-failed"));
            return Task::none();
        };
        let page = self.brochure.current();
        let title = format!("Print Page {page}");
        let alt = format!("Page {page}");
        let source = print::image_source(
            &self.config.assets_dir(),
            self.config.placeholder_base(),
            page,
        );
        let markup = print::document(&title, &alt, &source).into_string();
        tracing::info!(page = page.get(), "printing page");
        Task::perform(
            print::write_document(cache_dir, page, markup),
            Message::PrintDocumentWritten,
        )
    }

    fn share_current_page(&mut self) -> Task<Message> {
        let link = share::share_link(self.brochure.location(), self.brochure.current());
        self.notifications
            .push(Notification::success("notification-link-copied"));
        iced::clipboard::write(link)
    }

    fn start_download(&mut self) -> Task<Message> {
        if !download::is_available(&self.config.pdf_path()) {
            self.notifications
                .push(Notification::info("notification-pdf-unavailable"));
            return Task::none();
        }
        Task::perform(
            download::choose_destination(DEFAULT_DOWNLOAD_NAME.to_owned()),
            Message::DownloadDestination,
        )
    }

    /// Pins every image currently on screen so the cache never evicts it.
    pub(super) fn sync_visible_images(&mut self) {
        let count = self.brochure.count();
        let thumbnails = count
            .pages()
            .map(|page| PageImage::new(page, ImageVariant::Thumbnail));
        let grid = self
            .reveal
            .is_revealed(Section::Gallery)
            .then(|| gallery::images(count))
            .into_iter()
            .flatten();
        let modal = self.modal.current().map(|open| open.image());
        let main = self.brochure.projection().main;

        self.images.set_visible(
            thumbnails
                .chain(grid)
                .chain(modal)
                .chain(std::iter::once(main)),
        );
    }

    /// Requests the main image of the current page.
    pub(super) fn request_current_page(&mut self) -> Task<Message> {
        let image = self.brochure.projection().main;
        self.request_image(image)
    }

    pub(super) fn request_thumbnails(&mut self) -> Task<Message> {
        let requests: Vec<_> = self
            .brochure
            .count()
            .pages()
            .map(|page| PageImage::new(page, ImageVariant::Thumbnail))
            .collect();
        Task::batch(requests.into_iter().map(|image| self.request_image(image)))
    }

    fn request_image(&mut self, image: PageImage) -> Task<Message> {
        match self.images.request(image) {
            Some(request) => self.load(request),
            None => Task::none(),
        }
    }

    fn load(&self, request: LoadRequest) -> Task<Message> {
        match &self.loader {
            Some(loader) => Task::perform(loader.clone().load(request), move |result| {
                Message::ImageLoaded { request, result }
            }),
            None => Task::done(Message::ImageLoaded {
                request,
                result: Err(Error::Network("HTTP client unavailable".into())),
            }),
        }
    }
}

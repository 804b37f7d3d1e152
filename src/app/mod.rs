// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the brochure core and
//! the views.
//!
//! The `App` struct wires together the navigation state, the image store,
//! the page chrome and the leaf actions, and translates messages into side
//! effects like image loading, scrolling or clipboard writes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::actions::contact::ContactForm;
use crate::brochure::{fragment, Brochure, Location, Modal, ScrollGate, ZoomLevel};
use crate::chrome::reveal::Viewport as PageViewport;
use crate::chrome::{Menu, Reveal, Section, SectionLayout};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::input::Swipe;
use crate::media::{ImageStore, LoaderContext};
use crate::ui::design_tokens::layout;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{self as views};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    brochure: Brochure,
    zoom: ZoomLevel,
    images: ImageStore,
    /// `None` when the HTTP client could not be built; placeholder loads
    /// then fail immediately.
    loader: Option<LoaderContext>,
    cache_dir: Option<PathBuf>,
    modal: Modal,
    scroll_gate: ScrollGate,
    menu: Menu,
    layout: SectionLayout,
    active_section: Option<Section>,
    reveal: Reveal,
    page_viewport: PageViewport,
    thumbnail_viewport_width: f32,
    swipe: Swipe,
    /// Text of the location field; reset to the location after every sync.
    location_input: String,
    contact: ContactForm,
    notifications: notifications::Manager,
    window_size: Size,
    /// Time used for fades, advanced by ticks and scroll events.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.brochure.current().get())
            .field("location", &self.brochure.location().href())
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config from disk and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let cache_dir = paths::get_app_cache_dir();
        Self::from_config(config, warning, cache_dir, flags)
    }

    /// Builds the initial state from an already loaded config.
    ///
    /// The launch link is applied once; a link naming a valid page also
    /// scrolls to the pages section once layout has settled.
    pub fn from_config(
        mut config: Config,
        config_warning: Option<String>,
        cache_dir: Option<PathBuf>,
        flags: Flags,
    ) -> (Self, Task<Message>) {
        flags.overrides.apply(&mut config);
        let i18n = I18n::new(flags.overrides.language.clone(), &config);

        let count = config.page_count();
        let launch_fragment = flags.link.as_deref().and_then(fragment::from_link);
        let lands_on_page = launch_fragment
            .as_deref()
            .and_then(fragment::decode)
            .is_some_and(|n| count.contains(n));
        let location = Location::with_fragment(config.base_url(), launch_fragment);
        let (brochure, _) = Brochure::load(count, location);

        let mut notifications = notifications::Manager::new(config.notification_duration());
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let loader = match LoaderContext::new(
            config.assets_dir(),
            config.placeholder_base().to_owned(),
            cache_dir.clone(),
        ) {
            Ok(loader) => Some(loader),
            Err(err) => {
                tracing::warn!(%err, "placeholder downloads disabled");
                None
            }
        };

        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let now = Instant::now();
        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            zoom: ZoomLevel::default(),
            images: ImageStore::new(config.image_cache_entries()),
            loader,
            cache_dir,
            modal: Modal::default(),
            scroll_gate: ScrollGate::new(),
            menu: Menu::default(),
            layout: views::section_layout(count),
            active_section: Some(Section::Home),
            reveal: Reveal::default(),
            page_viewport: PageViewport {
                offset: 0.0,
                height: window_size.height - layout::NAVBAR_HEIGHT,
            },
            thumbnail_viewport_width: window_size.width,
            swipe: Swipe::default(),
            location_input: brochure.location().href(),
            contact: ContactForm::default(),
            notifications,
            window_size,
            now,
            brochure,
            config,
        };

        tracing::info!(
            page = app.brochure.current().get(),
            total = count.get(),
            location = %app.brochure.location().href(),
            "brochure loaded"
        );

        app.sync_visible_images();
        let mut tasks = vec![
            app.observe_page(),
            app.request_current_page(),
            app.request_thumbnails(),
        ];
        if lands_on_page {
            tasks.push(update::after_settle(Message::ScrollToPages));
        }
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let label = views::viewer::page_label(&self.i18n, self.brochure.current());
        format!("{} - {}", label, self.config.title())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.notifications.has_notification(),
                self.reveal.is_animating(self.now),
            ),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests;

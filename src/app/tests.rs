// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::brochure::{ImageVariant, PageImage};
use crate::chrome::Section;
use crate::config::CliOverrides;
use crate::input::Action;
use crate::media::{LoadRequest, LoadedImage, SlotState, Source};
use crate::ui::{contact, gallery, modal, navbar, viewer};
use crate::actions::contact::Field;
use tempfile::tempdir;

fn app_with_link(link: Option<&str>) -> App {
    let mut config = Config::default();
    config.general.language = Some("en-US".into());
    let (app, _task) = App::from_config(
        config,
        None,
        None,
        Flags {
            link: link.map(str::to_owned),
            overrides: CliOverrides::default(),
        },
    );
    app
}

fn app_with_pages(total: u32) -> App {
    let mut config = Config::default();
    config.general.language = Some("en-US".into());
    config.brochure.total_pages = Some(total);
    let (app, _task) = App::from_config(config, None, None, Flags::default());
    app
}

fn finish_load(app: &mut App, image: PageImage) {
    let _ = app.update(Message::ImageLoaded {
        request: LoadRequest::primary(image),
        result: Ok(LoadedImage {
            handle: iced::widget::image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        }),
    });
}

fn click_main_image(app: &mut App) {
    let _ = app.update(Message::Viewer(viewer::Message::ImagePressed));
    let _ = app.update(Message::Viewer(viewer::Message::ImageReleased));
}

fn app() -> App {
    app_with_link(None)
}

fn page(app: &App) -> u32 {
    app.brochure.current().get()
}

#[test]
fn starts_on_first_page_with_fragment_written_back() {
    let app = app();
    assert_eq!(page(&app), 1);
    assert_eq!(app.brochure.location().fragment(), Some("page-1"));
    assert!(app.location_input.ends_with("#page-1"));
}

#[test]
fn deep_link_opens_named_page() {
    let app = app_with_link(Some("https://example.org/brochure/#page-4"));
    assert_eq!(page(&app), 4);
    assert_eq!(app.brochure.location().fragment(), Some("page-4"));
}

#[test]
fn out_of_range_link_falls_back_to_first_page() {
    let app = app_with_link(Some("#page-40"));
    assert_eq!(page(&app), 1);
    assert_eq!(app.brochure.location().fragment(), Some("page-1"));
}

#[test]
fn config_warning_becomes_notification() {
    let (app, _) = App::from_config(
        Config::default(),
        Some("notification-config-load-error".into()),
        None,
        Flags::default(),
    );
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-config-load-error")
    );
}

#[test]
fn next_and_previous_follow_the_location() {
    let mut app = app();
    let _ = app.update(Message::Viewer(viewer::Message::Next));
    assert_eq!(page(&app), 2);
    assert!(app.location_input.ends_with("#page-2"));

    let _ = app.update(Message::Input(Action::PreviousPage));
    assert_eq!(page(&app), 1);
    let _ = app.update(Message::Input(Action::PreviousPage));
    assert_eq!(page(&app), 1);
}

#[test]
fn selecting_a_thumbnail_jumps_to_it() {
    let mut app = app();
    let target = app.brochure.count().page(7).unwrap();
    let _ = app.update(Message::Viewer(viewer::Message::Select(target)));
    assert_eq!(page(&app), 7);
    assert!(app.brochure.projection().is_active(target));
}

#[test]
fn page_change_requests_main_image() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    let main = PageImage::new(app.brochure.current(), ImageVariant::Main);
    assert_ne!(app.images.state(main), crate::media::SlotState::Idle);
}

#[test]
fn modal_locks_scrolling_until_closed() {
    let mut app = app();
    click_main_image(&mut app);
    assert!(app.modal.is_open());
    assert!(app.scroll_gate.is_locked());

    let _ = app.update(Message::Modal(modal::Message::ClickOutside));
    assert!(!app.modal.is_open());
    assert!(!app.scroll_gate.is_locked());
}

#[test]
fn escape_closes_modal_and_menu() {
    let mut app = app();
    let third = app.brochure.count().page(3).unwrap();
    let _ = app.update(Message::Gallery(gallery::Message::Open(third)));
    assert_eq!(app.modal.current().map(|m| m.page().get()), Some(3));

    let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
    // Opening the menu does not touch the modal.
    assert!(app.modal.is_open());

    let _ = app.update(Message::Input(Action::CloseOverlays));
    assert!(!app.modal.is_open());
    assert!(!app.menu.is_open());
    assert!(!app.scroll_gate.is_locked());
}

fn touch_drag(app: &mut App, on_image: bool, from_x: f32, to_x: f32) {
    use iced::{touch, Point};

    let finger = touch::Finger(0);
    if on_image {
        let _ = app.update(Message::Viewer(viewer::Message::ImagePressed));
    }
    let _ = app.update(Message::Touch(touch::Event::FingerPressed {
        id: finger,
        position: Point::new(from_x, 10.0),
    }));
    if on_image {
        let _ = app.update(Message::Viewer(viewer::Message::ImageReleased));
    }
    let _ = app.update(Message::Touch(touch::Event::FingerLifted {
        id: finger,
        position: Point::new(to_x, 10.0),
    }));
}

#[test]
fn swipes_are_ignored_while_modal_is_open() {
    let mut app = app();
    touch_drag(&mut app, true, 300.0, 100.0);
    assert_eq!(page(&app), 2);
    assert!(!app.modal.is_open());

    click_main_image(&mut app);
    touch_drag(&mut app, true, 300.0, 100.0);
    assert_eq!(page(&app), 2);
}

#[test]
fn swipes_outside_the_main_image_do_not_turn_pages() {
    let mut app = app();
    touch_drag(&mut app, false, 300.0, 100.0);
    touch_drag(&mut app, false, 100.0, 300.0);
    assert_eq!(page(&app), 1);

    touch_drag(&mut app, true, 100.0, 300.0);
    assert_eq!(page(&app), 1);
    touch_drag(&mut app, true, 300.0, 100.0);
    assert_eq!(page(&app), 2);
}

#[test]
fn tapping_the_main_image_opens_the_modal() {
    let mut app = app();
    touch_drag(&mut app, true, 300.0, 290.0);
    assert_eq!(page(&app), 1);
    assert!(app.modal.is_open());
    assert!(app.scroll_gate.is_locked());
}

#[test]
fn history_back_returns_to_previous_page() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    let _ = app.update(Message::Input(Action::NextPage));
    assert_eq!(page(&app), 3);

    let _ = app.update(Message::Input(Action::HistoryBack));
    assert_eq!(page(&app), 2);
    let _ = app.update(Message::Input(Action::HistoryForward));
    assert_eq!(page(&app), 3);
}

#[test]
fn history_traversal_scrolls_to_pages() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    let _ = app.update(Message::Input(Action::NextPage));

    let back = app.update(Message::Input(Action::HistoryBack));
    assert_eq!(page(&app), 2);
    // Page 3's main image is already requested, so only the thumbnail
    // snap is left for a plain jump.
    let third = app.brochure.count().page(3).unwrap();
    let jump = app.update(Message::Viewer(viewer::Message::Select(third)));
    assert_eq!(back.units(), jump.units() + 1);

    let mut unvisited = app_with_link(None);
    let nothing = unvisited.update(Message::Input(Action::HistoryBack));
    assert_eq!(nothing.units(), 0);
}

#[test]
fn history_closes_modal() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    click_main_image(&mut app);
    let _ = app.update(Message::Viewer(viewer::Message::HistoryBack));
    assert!(!app.modal.is_open());
    assert_eq!(page(&app), 1);
}

#[test]
fn edited_location_navigates() {
    let mut app = app();
    let _ = app.update(Message::Viewer(viewer::Message::LocationEdited(
        "#page-9".into(),
    )));
    let _ = app.update(Message::Viewer(viewer::Message::LocationSubmitted));
    assert_eq!(page(&app), 9);
    assert!(app.location_input.ends_with("#page-9"));
}

#[test]
fn invalid_location_is_corrected() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    let _ = app.update(Message::Viewer(viewer::Message::LocationEdited(
        "#page-abc".into(),
    )));
    let _ = app.update(Message::Viewer(viewer::Message::LocationSubmitted));
    assert_eq!(page(&app), 2);
    assert_eq!(app.brochure.location().fragment(), Some("page-2"));
}

#[test]
fn zoom_does_not_reset_on_page_change() {
    let mut app = app();
    let _ = app.update(Message::Viewer(viewer::Message::ZoomIn));
    let zoomed = app.zoom;
    assert!(!zoomed.is_default());
    let _ = app.update(Message::Input(Action::NextPage));
    assert_eq!(app.zoom, zoomed);
    let _ = app.update(Message::Viewer(viewer::Message::ZoomReset));
    assert!(app.zoom.is_default());
}

#[test]
fn share_copies_and_confirms() {
    let mut app = app();
    let _ = app.update(Message::Viewer(viewer::Message::Share));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-link-copied")
    );
}

#[test]
fn download_without_pdf_warns() {
    let dir = tempdir().unwrap();
    let mut app = app();
    app.config.brochure.pdf_path = Some(dir.path().join("missing.pdf"));
    let _ = app.update(Message::Viewer(viewer::Message::Download));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-pdf-unavailable")
    );
}

#[test]
fn failed_copy_is_reported() {
    let mut app = app();
    let _ = app.update(Message::DownloadFinished(Err(crate::error::Error::Io(
        "denied".into(),
    ))));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-download-failed")
    );
}

#[test]
fn print_without_cache_dir_fails_visibly() {
    let mut app = app();
    let _ = app.update(Message::Viewer(viewer::Message::Print));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-print-failed")
    );
}

#[test]
fn contact_form_validates_and_resets() {
    let mut app = app();
    let _ = app.update(Message::Contact(contact::Message::Submit));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-contact-missing-fields")
    );

    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.org"),
        (Field::Message, "Hello"),
    ] {
        let _ = app.update(Message::Contact(contact::Message::Edited(
            field,
            value.into(),
        )));
    }
    let _ = app.update(Message::Contact(contact::Message::Submit));
    assert_eq!(
        app.notifications.current().map(|n| n.message_key()),
        Some("notification-contact-thanks")
    );
    assert_eq!(app.contact.get(Field::Name), "");
}

#[test]
fn menu_closes_on_link_and_outside_click() {
    let mut app = app();
    let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
    assert!(app.menu.is_open());
    let _ = app.update(Message::ClickOutsideMenu);
    assert!(!app.menu.is_open());

    let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
    let _ = app.update(Message::Navbar(navbar::Message::Choose(Section::Gallery)));
    assert!(!app.menu.is_open());
}

#[test]
fn window_title_names_current_page() {
    let mut app = app();
    let _ = app.update(Message::Input(Action::NextPage));
    assert_eq!(app.title(), "Page 2 - Brochure Showcase");
}

#[test]
fn tall_window_reveals_first_sections() {
    let mut app = app();
    assert!(app.reveal.is_revealed(Section::Home));
    let _ = app.update(Message::WindowResized(Size::new(1100.0, 4000.0)));
    assert!(app.reveal.is_revealed(Section::Gallery));
}

#[test]
fn on_screen_images_stay_loaded_past_cache_capacity() {
    let mut app = app_with_pages(40);
    assert!(app.config.image_cache_entries() < 2 * 40);
    let count = app.brochure.count();
    let thumbnail = |n: i64| PageImage::new(count.page(n).unwrap(), ImageVariant::Thumbnail);
    let main = |n: i64| PageImage::new(count.page(n).unwrap(), ImageVariant::Main);

    finish_load(&mut app, main(1));
    for page in count.pages() {
        finish_load(&mut app, PageImage::new(page, ImageVariant::Thumbnail));
    }
    let _ = app.update(Message::WindowResized(Size::new(1100.0, 20_000.0)));
    assert!(app.reveal.is_revealed(Section::Gallery));
    for image in gallery::images(count) {
        assert_eq!(app.images.state(image), SlotState::Loading(Source::Primary));
        finish_load(&mut app, image);
    }

    let ready = SlotState::Ready(Source::Primary);
    assert_eq!(app.images.state(main(1)), ready);
    assert_eq!(app.images.state(thumbnail(1)), ready);
    assert_eq!(app.images.state(thumbnail(40)), ready);

    let _ = app.update(Message::Input(Action::NextPage));
    finish_load(&mut app, main(2));
    let _ = app.update(Message::Input(Action::PreviousPage));
    assert_eq!(app.images.state(thumbnail(1)), ready);
    assert_eq!(app.images.state(main(2)), ready);
    assert_ne!(app.images.state(main(1)), SlotState::Idle);
}

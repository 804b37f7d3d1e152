// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is the navbar above one scrolling page holding every section.
//! The modal and the toast are stacked over it.

use super::update::PAGE_SCROLL_ID;
use super::{App, Message};
use crate::chrome::Section;
use crate::ui::notifications::Toast;
use crate::ui::{about, contact, gallery, hero, modal, navbar, viewer};
use iced::widget::{mouse_area, Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        title: app.config.title(),
        menu: app.menu,
        active: app.active_section,
    })
    .map(Message::Navbar);

    let mut page_area = mouse_area(page(app));
    if app.menu.is_open() {
        page_area = page_area.on_press(Message::ClickOutsideMenu);
    }

    let base = Column::new()
        .push(navbar)
        .push(page_area)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .push(base)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(open) = app.modal.current() {
        layers = layers.push(
            modal::view(modal::ViewContext {
                i18n: &app.i18n,
                modal: open,
                images: &app.images,
                window: app.window_size,
            })
            .map(Message::Modal),
        );
    }

    if let Some(toast) = Toast::view_overlay(&app.notifications, &app.i18n) {
        layers = layers.push(toast.map(Message::Notification));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The scrolling page: every section stacked in layout order.
fn page(app: &App) -> Element<'_, Message> {
    let opacity = |section| app.reveal.opacity(section, app.now);

    let sections = Column::new()
        .push(
            hero::view(hero::ViewContext {
                i18n: &app.i18n,
                opacity: opacity(Section::Home),
            })
            .map(Message::Hero),
        )
        .push(
            viewer::view(viewer::ViewContext {
                i18n: &app.i18n,
                brochure: &app.brochure,
                zoom: app.zoom,
                images: &app.images,
                location_input: &app.location_input,
                opacity: opacity(Section::Pages),
            })
            .map(Message::Viewer),
        )
        .push(
            gallery::view(gallery::ViewContext {
                i18n: &app.i18n,
                count: app.brochure.count(),
                images: &app.images,
                opacity: opacity(Section::Gallery),
            })
            .map(Message::Gallery),
        )
        .push(about::view(about::ViewContext {
            i18n: &app.i18n,
            opacity: opacity(Section::About),
        }))
        .push(
            contact::view(contact::ViewContext {
                i18n: &app.i18n,
                form: &app.contact,
                opacity: opacity(Section::Contact),
            })
            .map(Message::Contact),
        )
        .width(Length::Fill);

    Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLL_ID))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

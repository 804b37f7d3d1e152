// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the section links and the collapsible menu.
//!
//! The bar always shows the brochure title and the menu toggle. The links
//! are listed in a dropdown below the bar while the menu is open; the link
//! of the section currently in view is highlighted.

use crate::chrome::{Menu, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub menu: Menu,
    pub active: Option<Section>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Choose(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu: &mut Menu) -> Event {
    match message {
        Message::ToggleMenu => {
            menu.toggle();
            Event::None
        }
        Message::Choose(section) => Event::ScrollTo(menu.choose(section)),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));
    if ctx.menu.is_open() {
        content = content.push(build_dropdown(&ctx));
    }
    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle_glyph = if ctx.menu.is_open() { "✕" } else { "☰" };
    let menu_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(toggle_glyph).size(sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("nav-menu-toggle"))),
    )
    .on_press(Message::ToggleMenu)
    .padding(spacing::XS)
    .style(styles::button::secondary);

    let title = Text::new(ctx.title.to_owned()).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(layout::NAVBAR_HEIGHT))
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Section::ALL.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, &section| {
            let active = ctx.active == Some(section);
            column.push(
                button(Text::new(ctx.i18n.tr(section.label_key())))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::Choose(section))
                    .style(styles::button::nav_link(active)),
            )
        },
    );

    Container::new(
        Container::new(links)
            .width(Length::Fixed(sizing::MENU_WIDTH))
            .padding(spacing::XS)
            .style(styles::container::menu),
    )
    .width(Length::Fill)
    .padding([0.0, spacing::SM])
    .align_x(Horizontal::Right)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Fullscreen modal showing one page enlarged.
//!
//! The backdrop covers the whole window and swallows every mouse event, so
//! the page underneath cannot be scrolled while the modal is open.

use crate::brochure::OpenModal;
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::image_slot::{self, Frame};
use crate::ui::styles;
use crate::ui::viewer::page_label;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub modal: &'a OpenModal,
    pub images: &'a ImageStore,
    /// Window size the image is fitted into.
    pub window: Size,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The close control was pressed.
    Close,
    /// The backdrop outside the content was clicked.
    ClickOutside,
}

/// Largest frame with the modal image's aspect ratio that fits `window`
/// once a margin is left around it for the caption and close control.
#[must_use]
pub fn fit(window: Size) -> Frame {
    let (width, height) = crate::config::MODAL_IMAGE_SIZE;
    let (width, height) = (width as f32, height as f32);
    let margin = spacing::XXL * 2.0 + sizing::BUTTON_HEIGHT;
    let available_width = (window.width - margin).max(sizing::THUMBNAIL_WIDTH);
    let available_height = (window.height - margin).max(sizing::THUMBNAIL_HEIGHT);
    let scale = (available_width / width).min(available_height / height).min(1.0);
    Frame::new(width * scale, height * scale)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = page_label(ctx.i18n, ctx.modal.page());
    let frame = fit(ctx.window);

    let image = image_slot::view(
        ctx.images,
        ctx.modal.image(),
        label.clone(),
        &ctx.i18n.tr("image-loading"),
        frame,
    );

    let close = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new("×").size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr("modal-close"))),
    )
    .padding([spacing::XXS, spacing::SM])
    .on_press(Message::Close)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let caption = Container::new(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::page_label(radius::SM));

    let header = Row::new()
        .width(Length::Fixed(frame.width))
        .align_y(alignment::Vertical::Center)
        .push(caption)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(image);

    let backdrop = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::modal_backdrop);

    opaque(mouse_area(backdrop).on_press(Message::ClickOutside))
}

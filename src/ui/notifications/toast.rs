// SPDX-License-Identifier: MPL-2.0
//! Rendering of the visible notification.
//!
//! A card with a severity-colored border, anchored to the bottom-right
//! corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let glyph = Text::new(notification.severity().glyph())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(i18n.tr(notification.message_key())).size(typography::BODY));
        if let Some(detail) = notification.detail() {
            body = body.push(Text::new(detail).size(typography::CAPTION));
        }

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(button::text);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(body)
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// The toast layer, or `None` when nothing is shown.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Option<Element<'a, Message>> {
        manager.current().map(|notification| {
            Container::new(Self::view(notification, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        })
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

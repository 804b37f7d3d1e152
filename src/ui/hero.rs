// SPDX-License-Identifier: MPL-2.0
//! Home section: headline and the call to action leading to the pages.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, spacing, typography};
use crate::ui::styles;
use crate::ui::text_fade;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    ViewBrochure,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .style(text_fade(ctx.opacity));
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .style(text_fade(ctx.opacity));
    let cta = button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::ViewBrochure)
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(cta);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HOME_HEIGHT))
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::section(true))
        .into()
}

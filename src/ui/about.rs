// SPDX-License-Identifier: MPL-2.0
//! About section.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::text_fade;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub opacity: f32,
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTACT_FORM_WIDTH * 1.5)
        .push(
            Text::new(ctx.i18n.tr("about-heading"))
                .size(typography::TITLE_LG)
                .style(text_fade(ctx.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-body"))
                .size(typography::BODY_LG)
                .style(text_fade(ctx.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-shortcuts"))
                .size(typography::BODY_SM)
                .style(text_fade(ctx.opacity)),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::ABOUT_HEIGHT))
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::section(false))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Contact section: the contact form.

use crate::actions::contact::{ContactForm, Field};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::text_fade;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ContactForm,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edited(Field, String),
    Submit,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let field = |key: &str, which: Field| {
        text_input(&i18n.tr(key), ctx.form.get(which))
            .on_input(move |value| Message::Edited(which, value))
            .on_submit(Message::Submit)
            .padding(spacing::XS)
    };

    let submit = button(Text::new(i18n.tr("contact-submit")))
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::Submit)
        .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("contact-name")).size(typography::BODY_SM))
        .push(field("contact-name", Field::Name))
        .push(Text::new(i18n.tr("contact-email")).size(typography::BODY_SM))
        .push(field("contact-email", Field::Email))
        .push(Text::new(i18n.tr("contact-message")).size(typography::BODY_SM))
        .push(field("contact-message", Field::Message))
        .push(submit);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("contact-heading"))
                .size(typography::TITLE_LG)
                .style(text_fade(ctx.opacity)),
        )
        .push(
            Container::new(form)
                .width(Length::Fixed(sizing::CONTACT_FORM_WIDTH))
                .padding(spacing::LG)
                .style(styles::container::panel),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::CONTACT_HEIGHT))
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section(true))
        .into()
}

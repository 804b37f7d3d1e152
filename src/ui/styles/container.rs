// SPDX-License-Identifier: MPL-2.0
//! Surfaces: navbar, menu, page sections, image slots and the modal backdrop.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent surface behind the viewer toolbar and the contact form.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..theme.extended_palette().background.base.color
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dropdown holding the section links when the menu is open.
pub fn menu(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Alternating section backgrounds along the scrolling page.
pub fn section(tinted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let color = if tinted {
            palette.background.weak.color
        } else {
            palette.background.base.color
        };
        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}

/// Box shown in place of an image that is loading or could not be loaded.
pub fn image_slot(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the fullscreen modal.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dark chip carrying the "Page n" label over an image.
pub fn page_label(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_label_is_light_on_dark() {
        let style = page_label(radius::SM)(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::WHITE));
        assert!(matches!(style.background, Some(Background::Color(c)) if c.r == 0.0));
    }

    #[test]
    fn tinted_sections_differ_from_plain_ones() {
        let theme = Theme::Dark;
        assert_ne!(section(true)(&theme).background, section(false)(&theme).background);
    }
}

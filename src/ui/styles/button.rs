// SPDX-License-Identifier: MPL-2.0
//! Button styles: solid actions, overlay controls and image tiles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Rounded outline shared by the solid buttons.
fn outline(color: Color) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    }
}

/// Call to action and form submit.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (fill, shadow) = match status {
        button::Status::Disabled => return disabled(theme, status),
        button::Status::Hovered => (palette::PRIMARY_400, shadow::MD),
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: WHITE,
        border: outline(palette::PRIMARY_600),
        shadow,
        snap: true,
    }
}

/// Toolbar, pager and zoom buttons. Colors come from the theme's extended
/// palette so both modes stay legible.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let pair = theme.extended_palette().background;
    let (fill, edge) = match status {
        button::Status::Disabled => return disabled(theme, status),
        button::Status::Hovered => (pair.strong, palette::PRIMARY_500),
        button::Status::Active | button::Status::Pressed => (pair.weak, palette::GRAY_400),
    };
    button::Style {
        background: Some(Background::Color(fill.color)),
        text_color: fill.text,
        border: outline(edge),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Greyed out prev/next at either end of the brochure, and history buttons
/// with nothing to go back or forward to.
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let pair = theme.extended_palette().background;
    button::Style {
        background: Some(Background::Color(pair.weak.color)),
        text_color: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..pair.weak.text
        },
        border: outline(palette::GRAY_400),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Semi-transparent button drawn over an image (modal close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Navigation link; the active section is underlined in the brand color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette::PRIMARY_500
        } else {
            base.text
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    palette::PRIMARY_500
                } else {
                    Color::TRANSPARENT
                },
                width: if active { border::WIDTH_SM } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Frameless button wrapping a page image; the active thumbnail gets a
/// thick brand-colored border.
pub fn image_tile(active: bool, frame: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border_color = if active {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            palette::PRIMARY_200
        } else {
            theme.extended_palette().background.strong.color
        };

        button::Style {
            background: None,
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: border_color,
                width: if active { frame } else { border::WIDTH_SM },
                radius: radius::SM.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tile_has_brand_border() {
        let style = image_tile(true, 3.0)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, 3.0);
    }

    #[test]
    fn inactive_tile_has_thin_border() {
        let style = image_tile(false, 3.0)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn secondary_falls_back_to_disabled() {
        let disabled_style = secondary(&Theme::Light, button::Status::Disabled);
        assert_eq!(
            disabled_style.background,
            disabled(&Theme::Light, button::Status::Active).background
        );
        let hovered = secondary(&Theme::Light, button::Status::Hovered);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let style = nav_link(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, palette::PRIMARY_500);
    }
}

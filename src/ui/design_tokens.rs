// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Fixed section heights of the scrolling page
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use brochure_lens::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Section heights in [`layout`] are what scroll-spy and reveal measure
against; changing them moves the section boundaries.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Outlines of pager and toolbar buttons.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand blue: hover, base and pressed edge.
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Pressed overlay buttons and the modal backdrop.
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Toolbar and contact form panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Text glyphs standing in for icons (menu toggle, toast severity).
    pub const ICON_SM: f32 = 16.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Page images, matching the placeholder sizes
    pub const THUMBNAIL_WIDTH: f32 = 100.0;
    pub const THUMBNAIL_HEIGHT: f32 = 140.0;
    pub const GRID_ITEM_WIDTH: f32 = 250.0;
    pub const GRID_ITEM_HEIGHT: f32 = 350.0;
    pub const MAIN_IMAGE_WIDTH: f32 = 560.0;
    pub const MAIN_IMAGE_HEIGHT: f32 = 700.0;

    /// Border drawn around the active thumbnail.
    pub const ACTIVE_THUMBNAIL_BORDER: f32 = 3.0;

    // Component widths
    pub const MENU_WIDTH: f32 = 220.0;
    pub const LOCATION_INPUT_WIDTH: f32 = 360.0;
    pub const CONTACT_FORM_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Page Layout
// ============================================================================

pub mod layout {
    //! Every section of the scrolling page has a fixed height so that its
    //! offset is known without measuring rendered widgets.

    use super::{sizing, spacing};

    pub const NAVBAR_HEIGHT: f32 = 56.0;

    pub const HOME_HEIGHT: f32 = 420.0;
    pub const PAGES_HEIGHT: f32 = 1080.0;
    pub const ABOUT_HEIGHT: f32 = 480.0;
    pub const CONTACT_HEIGHT: f32 = 620.0;

    /// Columns of the gallery grid.
    pub const GRID_COLUMNS: usize = 4;

    /// Gallery heading plus its padding.
    pub const GALLERY_HEADER_HEIGHT: f32 = 96.0;

    /// Height of one gallery row including its caption.
    pub const GRID_ROW_HEIGHT: f32 = sizing::GRID_ITEM_HEIGHT + spacing::XL + spacing::MD;

    /// Height of the gallery for `pages` items.
    #[must_use]
    pub fn gallery_height(pages: usize) -> f32 {
        let rows = pages.div_ceil(GRID_COLUMNS);
        GALLERY_HEADER_HEIGHT + rows as f32 * GRID_ROW_HEIGHT + spacing::XL
    }
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading.
    pub const DISPLAY: f32 = 40.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Brochure title in the navbar.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Grid captions and error details.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill shape.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_PRESSED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::GRID_ITEM_WIDTH > sizing::THUMBNAIL_WIDTH);
    assert!(sizing::MAIN_IMAGE_WIDTH > sizing::GRID_ITEM_WIDTH);

    // Layout validation
    assert!(layout::GRID_COLUMNS > 0);
    assert!(layout::PAGES_HEIGHT > sizing::MAIN_IMAGE_HEIGHT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_images_keep_placeholder_ratio() {
        let ratio = |w: f32, h: f32| w / h;
        let thumb = ratio(sizing::THUMBNAIL_WIDTH, sizing::THUMBNAIL_HEIGHT);
        assert!((thumb - ratio(sizing::GRID_ITEM_WIDTH, sizing::GRID_ITEM_HEIGHT)).abs() < 0.01);
        assert!((thumb - ratio(sizing::MAIN_IMAGE_WIDTH, sizing::MAIN_IMAGE_HEIGHT)).abs() < 0.1);
    }

    #[test]
    fn gallery_grows_by_whole_rows() {
        let one_row = layout::gallery_height(layout::GRID_COLUMNS);
        assert_eq!(layout::gallery_height(1), one_row);
        assert_eq!(
            layout::gallery_height(layout::GRID_COLUMNS + 1),
            one_row + layout::GRID_ROW_HEIGHT
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Pages section: main page display, controls and the thumbnail strip.
//!
//! Everything here is read from the brochure's projection, so the view
//! never disagrees with the navigation state.

use crate::brochure::{Brochure, ImageVariant, PageImage, PageIndex, ZoomLevel};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::design_tokens::{layout, radius, sizing, spacing, typography};
use crate::ui::image_slot::{self, Frame};
use crate::ui::styles;
use crate::ui::text_fade;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, text_input, Column, Container, Id, Row, Scrollable, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Identifier of the horizontal thumbnail strip.
pub const THUMBNAIL_SCROLL_ID: &str = "brochure-thumbnails";

/// Identifier of the scrollable holding the zoomed main image.
pub const MAIN_IMAGE_SCROLL_ID: &str = "brochure-main-image";

/// Horizontal room taken by one thumbnail in the strip.
pub const THUMBNAIL_STRIDE: f32 = sizing::THUMBNAIL_WIDTH + spacing::XS;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brochure: &'a Brochure,
    pub zoom: ZoomLevel,
    pub images: &'a ImageStore,
    pub location_input: &'a str,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Select(PageIndex),
    /// Mouse button or finger pressed on the main image.
    ImagePressed,
    /// Mouse button or finger released over the main image.
    ImageReleased,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    HistoryBack,
    HistoryForward,
    LocationEdited(String),
    LocationSubmitted,
    Print,
    Share,
    Download,
    ThumbnailsScrolled(Viewport),
}

/// Relative horizontal offset that centres the thumbnail at `position`
/// (zero-based) in a strip of `count` thumbnails seen through
/// `viewport_width` pixels.
#[must_use]
pub fn thumbnail_snap(position: usize, count: usize, viewport_width: f32) -> f32 {
    let content_width = count as f32 * THUMBNAIL_STRIDE;
    let scrollable = content_width - viewport_width;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let centre = position as f32 * THUMBNAIL_STRIDE + THUMBNAIL_STRIDE / 2.0;
    ((centre - viewport_width / 2.0) / scrollable).clamp(0.0, 1.0)
}

/// Label shown for a page, e.g. "Page 3".
pub fn page_label(i18n: &I18n, page: PageIndex) -> String {
    i18n.tr_with_args("page-label", &[("page", &page.to_string())])
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("pages-heading"))
        .size(typography::TITLE_LG)
        .style(text_fade(ctx.opacity));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(toolbar(&ctx))
        .push(main_display(&ctx))
        .push(counter_and_zoom(&ctx))
        .push(thumbnail_strip(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::PAGES_HEIGHT))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section(false))
        .into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let location = ctx.brochure.location();

    let back = nav_button(
        i18n.tr("button-history-back"),
        location.can_go_back().then_some(Message::HistoryBack),
    );
    let forward = nav_button(
        i18n.tr("button-history-forward"),
        location.can_go_forward().then_some(Message::HistoryForward),
    );

    let input = text_input(&i18n.tr("location-placeholder"), ctx.location_input)
        .on_input(Message::LocationEdited)
        .on_submit(Message::LocationSubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::LOCATION_INPUT_WIDTH));

    let action = |key: &str, message: Message| {
        button(Text::new(i18n.tr(key)))
            .padding([spacing::XS, spacing::SM])
            .on_press(message)
            .style(styles::button::secondary)
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(forward)
        .push(Text::new(i18n.tr("location-label")).size(typography::BODY_SM))
        .push(input)
        .push(action("button-print", Message::Print))
        .push(action("button-share", Message::Share))
        .push(action("button-download", Message::Download));

    Container::new(row)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::INPUT_HEIGHT + 2.0 * spacing::XS))
        .style(styles::container::panel)
        .into()
}

fn main_display<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let projection = ctx.brochure.projection();
    let label = page_label(ctx.i18n, projection.current);

    let frame = Frame::new(sizing::MAIN_IMAGE_WIDTH, sizing::MAIN_IMAGE_HEIGHT)
        .scaled(ctx.zoom.factor())
        .with_opacity(ctx.opacity);
    let image = image_slot::view(
        ctx.images,
        projection.main,
        label.clone(),
        &ctx.i18n.tr("image-loading"),
        frame,
    );

    let zoomed = Scrollable::new(
        Container::new(image)
            .width(Length::Shrink)
            .height(Length::Shrink),
    )
    .id(Id::new(MAIN_IMAGE_SCROLL_ID))
    .direction(Direction::Both {
        vertical: Scrollbar::new(),
        horizontal: Scrollbar::new(),
    })
    .width(Length::Fixed(sizing::MAIN_IMAGE_WIDTH))
    .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT));

    let overlay_label = Container::new(
        Container::new(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::page_label(radius::SM)),
    )
    .width(Length::Fixed(sizing::MAIN_IMAGE_WIDTH))
    .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Bottom);

    let display = mouse_area(Stack::new().push(zoomed).push(overlay_label))
        .on_press(Message::ImagePressed)
        .on_release(Message::ImageReleased)
        .interaction(iced::mouse::Interaction::ZoomIn);

    let previous = nav_button(
        ctx.i18n.tr("button-previous"),
        projection.previous_enabled.then_some(Message::Previous),
    );
    let next = nav_button(
        ctx.i18n.tr("button-next"),
        projection.next_enabled.then_some(Message::Next),
    );

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(display)
        .push(next)
        .into()
}

fn counter_and_zoom<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let projection = ctx.brochure.projection();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "page-counter",
        &[
            ("current", &projection.current.to_string()),
            ("total", &projection.total.get().to_string()),
        ],
    ))
    .size(typography::BODY_LG);

    let zoom = ctx.zoom;
    let zoom_out = nav_button("−".to_owned(), (!zoom.is_min()).then_some(Message::ZoomOut));
    let zoom_reset = nav_button(
        ctx.i18n.tr_with_args("button-zoom-reset", &[("percent", &zoom.percent().to_string())]),
        (!zoom.is_default()).then_some(Message::ZoomReset),
    );
    let zoom_in = nav_button("+".to_owned(), (!zoom.is_max()).then_some(Message::ZoomIn));

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(counter)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(zoom_out)
                .push(zoom_reset)
                .push(zoom_in),
        )
        .into()
}

fn thumbnail_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let projection = ctx.brochure.projection();
    let loading = ctx.i18n.tr("image-loading");
    let frame = Frame::new(sizing::THUMBNAIL_WIDTH, sizing::THUMBNAIL_HEIGHT);

    let thumbnails = ctx.brochure.count().pages().fold(
        Row::new().spacing(spacing::XS),
        |row, page| {
            let image = image_slot::view(
                ctx.images,
                PageImage::new(page, ImageVariant::Thumbnail),
                page.to_string(),
                &loading,
                frame,
            );
            row.push(
                button(image)
                    .padding(0)
                    .on_press(Message::Select(page))
                    .style(styles::button::image_tile(
                        projection.is_active(page),
                        sizing::ACTIVE_THUMBNAIL_BORDER,
                    )),
            )
        },
    );

    Scrollable::new(Container::new(thumbnails).padding([spacing::XS, 0.0]))
        .id(Id::new(THUMBNAIL_SCROLL_ID))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .on_scroll(Message::ThumbnailsScrolled)
        .width(Length::Fill)
        .into()
}

/// A secondary button that is greyed out when `message` is `None`.
fn nav_button<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    let enabled = message.is_some();
    button(Text::new(label))
        .padding([spacing::XS, spacing::SM])
        .on_press_maybe(message)
        .style(if enabled {
            styles::button::secondary
        } else {
            styles::button::disabled
        })
        .into()
}

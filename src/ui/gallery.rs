// SPDX-License-Identifier: MPL-2.0
//! Gallery section: every page in a fixed-width grid.
//!
//! Grid images are only requested once the section has been revealed; until
//! then each tile shows its page label.

use crate::brochure::{ImageVariant, PageCount, PageImage, PageIndex};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::design_tokens::{layout, radius, sizing, spacing, typography};
use crate::ui::image_slot::{self, Frame};
use crate::ui::styles;
use crate::ui::text_fade;
use crate::ui::viewer::page_label;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub count: PageCount,
    pub images: &'a ImageStore,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(PageIndex),
}

/// The grid images to request once the gallery is revealed.
pub fn images(count: PageCount) -> impl Iterator<Item = PageImage> {
    count
        .pages()
        .map(|page| PageImage::new(page, ImageVariant::Grid))
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Container::new(
        Text::new(ctx.i18n.tr("gallery-heading"))
            .size(typography::TITLE_LG)
            .style(text_fade(ctx.opacity)),
    )
    .height(Length::Fixed(layout::GALLERY_HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center);

    let pages: Vec<PageIndex> = ctx.count.pages().collect();
    let grid = pages.chunks(layout::GRID_COLUMNS).fold(
        Column::new().spacing(spacing::MD),
        |grid, row_pages| {
            let row = row_pages.iter().fold(
                Row::new().spacing(spacing::MD),
                |row, &page| row.push(tile(&ctx, page)),
            );
            grid.push(row)
        },
    );

    let total = ctx.count.get() as usize;
    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(grid),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::gallery_height(total)))
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::section(true))
    .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, page: PageIndex) -> Element<'a, Message> {
    let label = page_label(ctx.i18n, page);
    let frame = Frame::new(sizing::GRID_ITEM_WIDTH, sizing::GRID_ITEM_HEIGHT)
        .with_opacity(ctx.opacity);
    let image = image_slot::view(
        ctx.images,
        PageImage::new(page, ImageVariant::Grid),
        label.clone(),
        &ctx.i18n.tr("image-loading"),
        frame,
    );

    let caption = Container::new(
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::page_label(radius::SM)),
    )
    .width(Length::Fixed(sizing::GRID_ITEM_WIDTH))
    .height(Length::Fixed(sizing::GRID_ITEM_HEIGHT))
    .padding(spacing::XS)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom);

    button(Stack::new().push(image).push(caption))
        .padding(0)
        .on_press(Message::Open(page))
        .style(styles::button::image_tile(false, 0.0))
        .into()
}

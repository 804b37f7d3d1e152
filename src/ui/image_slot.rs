// SPDX-License-Identifier: MPL-2.0
//! A page image, or its text label while the image is missing.

use crate::brochure::PageImage;
use crate::media::{ImageStore, SlotState};
use crate::ui::styles;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Sizing and fade of one image slot.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

impl Frame {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            ..self
        }
    }

    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

/// Renders `image` from the store. `label` names the page ("Page n") and is
/// shown when no decoded image is available; `loading` is appended while a
/// load is in flight.
pub fn view<'a, M: 'a>(
    store: &ImageStore,
    image: PageImage,
    label: String,
    loading: &str,
    frame: Frame,
) -> Element<'a, M> {
    if let Some(cached) = store.peek(image) {
        return Image::new(cached.handle.clone())
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .content_fit(ContentFit::Contain)
            .opacity(frame.opacity)
            .into();
    }

    let text = match store.state(image) {
        SlotState::Loading(_) => format!("{label}\n{loading}"),
        SlotState::Idle | SlotState::Ready(_) | SlotState::Failed => label,
    };

    Container::new(Text::new(text).center())
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_slot)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_keeps_opacity() {
        let frame = Frame::new(100.0, 140.0).with_opacity(0.5).scaled(2.0);
        assert_eq!((frame.width, frame.height), (200.0, 280.0));
        assert_eq!(frame.opacity, 0.5);
    }
}

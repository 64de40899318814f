// SPDX-License-Identifier: MPL-2.0
//! Image preview overlay.
//!
//! Drawn on top of the page while the [`ModalViewer`] is not closed. The
//! backdrop starts transparent and darkens once the viewer reaches the open
//! frame; clicking the backdrop closes it, clicking the image does not.

use crate::domain::modal::ModalViewer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, opaque, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    /// Click on the image itself; swallowed so it never reaches the backdrop.
    ContentPressed,
}

/// Backdrop alpha for the current phase.
#[must_use]
pub fn backdrop_alpha(viewer: &ModalViewer) -> f32 {
    if viewer.is_shown() {
        opacity::BACKDROP
    } else {
        opacity::TRANSPARENT
    }
}

/// Returns `None` while the viewer is closed.
pub fn view<'a>(viewer: &'a ModalViewer, i18n: &I18n) -> Option<Element<'a, Message>> {
    let image = viewer.image()?;

    let placeholder = Container::new(
        Text::new(i18n.tr("project-image-missing")).size(typography::BODY),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::container::image_placeholder);

    let picture = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(placeholder)
        .push(
            Image::new(Handle::from_path(image))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        );

    let close = button(Text::new(i18n.tr("modal-close")).size(typography::BODY))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::ghost);

    let frame = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Right)
            .push(close)
            .push(picture),
    )
    .max_width(sizing::MODAL_MAX_WIDTH)
    .padding(spacing::MD)
    .style(styles::container::modal_frame);

    let content = mouse_area(frame).on_press(Message::ContentPressed);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::backdrop(backdrop_alpha(viewer)));

    Some(opaque(mouse_area(backdrop).on_press(Message::Close)))
}

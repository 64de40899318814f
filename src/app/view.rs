// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: the navbar above the scrollable page, then the
//! image preview overlay, then the toasts.

use super::Message;
use crate::application::query::Gallery;
use crate::domain::modal::ModalViewer;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::modal;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{self, about, contact, hero, projects, PageMetrics};
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub modal: &'a ModalViewer,
    pub notifications: &'a notifications::Manager,
    pub dark_mode: bool,
    pub menu_open: bool,
    pub window_width: f32,
    pub footer_year: i32,
}

/// Whether the navbar collapses its links into the menu button.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::COMPACT_BREAKPOINT
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::new(ctx.dark_mode);

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        dark_mode: ctx.dark_mode,
        compact: is_compact(ctx.window_width),
    })
    .map(Message::Navbar);

    let page = Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx.i18n, &colors).map(Message::Hero))
        .push(about::view(ctx.i18n, &colors))
        .push(projects::view(ctx.gallery, ctx.i18n, &colors).map(Message::Projects))
        .push(contact::view(ctx.i18n, &colors, ctx.footer_year).map(Message::Contact));

    let scrollable = Scrollable::new(page)
        .id(Id::new(sections::PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::PageScrolled(PageMetrics::from_viewport(&viewport))
        });

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(scrollable);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(base).width(Length::Fill).height(Length::Fill));

    if let Some(overlay) = modal::view(ctx.modal, ctx.i18n) {
        layers = layers.push(overlay.map(Message::Modal));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    layers.into()
}

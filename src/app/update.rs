// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of
//! application state it may touch, and returns the follow-up task.

use super::message::Shortcut;
use super::Message;
use crate::application::preference::ThemePreference;
use crate::application::query::Gallery;
use crate::domain::modal::{ModalViewer, ScheduledTransition, Ticket};
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, contact, hero, projects, PageMetrics, Section};
use iced::task;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub modal: &'a mut ModalViewer,
    pub modal_timer: &'a mut Option<task::Handle>,
    pub theme: &'a mut ThemePreference,
    pub menu_open: &'a mut bool,
    pub page_metrics: &'a mut Option<PageMetrics>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::ScrollTo(section) => scroll_to(section, *ctx.page_metrics),
        navbar::Event::ToggleTheme => {
            toggle_theme(ctx);
            Task::none()
        }
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match message {
        hero::Message::ViewWork => scroll_to(Section::Projects, *ctx.page_metrics),
    }
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    match projects::update(ctx.gallery, message) {
        Some(projects::Message::OpenImage(image)) => open_modal(ctx, image),
        Some(projects::Message::OpenLink(url)) => open_link(url),
        _ => Task::none(),
    }
}

pub fn handle_contact_message(message: contact::Message) -> Task<Message> {
    match message {
        contact::Message::OpenLink(url) => open_link(url.to_string()),
    }
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match message {
        modal::Message::Close => close_modal(ctx),
        modal::Message::ContentPressed => Task::none(),
    }
}

pub fn handle_modal_timer(ctx: &mut UpdateContext<'_>, ticket: Ticket) -> Task<Message> {
    if ctx.modal.on_timer(ticket) {
        *ctx.modal_timer = None;
        tracing::trace!(phase = ?ctx.modal.phase(), "modal transition");
    } else {
        tracing::trace!(?ticket, "stale modal timer ignored");
    }
    Task::none()
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::CloseModal => close_modal(ctx),
        // Paging keys only act on the gallery while the overlay is hidden.
        Shortcut::PreviousPage if !ctx.modal.is_open() => {
            handle_projects_message(ctx, projects::Message::PreviousPage)
        }
        Shortcut::NextPage if !ctx.modal.is_open() => {
            handle_projects_message(ctx, projects::Message::NextPage)
        }
        Shortcut::PreviousPage | Shortcut::NextPage => Task::none(),
    }
}

pub fn handle_link_opened(ctx: &mut UpdateContext<'_>, result: Result<(), String>) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!(%err, "failed to open link");
        ctx.notifications
            .push(Notification::warning("notification-link-open-error"));
    }
    Task::none()
}

/// Flips the display mode. A failed save is reported but the new mode
/// stays in effect for the session.
pub fn toggle_theme(ctx: &mut UpdateContext<'_>) {
    if ctx.theme.toggle().is_err() {
        ctx.notifications
            .push(Notification::warning("notification-theme-save-error"));
    }
}

fn open_modal(ctx: &mut UpdateContext<'_>, image: String) -> Task<Message> {
    let transition = ctx.modal.open(image);
    schedule(ctx, transition)
}

fn close_modal(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let transition = ctx.modal.close();
    schedule(ctx, transition)
}

/// Starts the timer of a freshly scheduled transition, aborting the one it
/// supersedes.
fn schedule(ctx: &mut UpdateContext<'_>, transition: Option<ScheduledTransition>) -> Task<Message> {
    let Some(transition) = transition else {
        return Task::none();
    };

    if let Some(previous) = ctx.modal_timer.take() {
        previous.abort();
    }

    let ScheduledTransition { ticket, delay, kind } = transition;
    tracing::trace!(?kind, ?delay, "modal timer scheduled");
    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::ModalTimer(ticket),
    )
    .abortable();
    *ctx.modal_timer = Some(handle);
    task
}

fn scroll_to(section: Section, metrics: Option<PageMetrics>) -> Task<Message> {
    let y = sections::relative_offset(section, metrics);
    operation::snap_to(
        Id::new(sections::PAGE_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y },
    )
}

/// Hands `url` to the platform opener off the UI thread.
fn open_link(url: String) -> Task<Message> {
    tracing::debug!(%url, "opening link");
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || open::that(&url).map_err(|err| err.to_string()))
                .await
                .map_err(|err| err.to_string())
                .and_then(|result| result)
        },
        Message::LinkOpened,
    )
}

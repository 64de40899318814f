// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::modal::Ticket;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{contact, hero, projects, PageMetrics};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Projects(projects::Message),
    Contact(contact::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled(PageMetrics),
    /// A scheduled modal transition elapsed.
    ModalTimer(Ticket),
    /// Result of handing a URL to the platform opener.
    LinkOpened(Result<(), String>),
    Shortcut(Shortcut),
    WindowResized(f32),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Keyboard shortcuts recognised outside of focused widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Escape`: close the image preview.
    CloseModal,
    /// `←`: previous gallery page.
    PreviousPage,
    /// `→`: next gallery page.
    NextPage,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional project catalog replacing the embedded one.
    pub catalog: Option<String>,
}

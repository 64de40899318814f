// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, the image preview, the
//! display preference and localization, and translates messages into side
//! effects like preference persistence, scrolling or opening links.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::application::preference::ThemePreference;
use crate::application::query::Gallery;
use crate::config;
use crate::domain::modal::ModalViewer;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{catalog, storage::FileStorage};
use crate::ui::notifications;
use crate::ui::sections::{contact, PageMetrics};
use crate::ui::theming;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    modal: ModalViewer,
    /// Abort handle of the pending modal transition timer.
    modal_timer: Option<task::Handle>,
    theme: ThemePreference,
    /// Whether the compact navbar dropdown is open.
    menu_open: bool,
    window_width: f32,
    /// Page geometry from the last scroll event, used for section anchors.
    page_metrics: Option<PageMetrics>,
    notifications: notifications::Manager,
    footer_year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("projects", &self.gallery.catalog().len())
            .field("modal", self.modal.phase())
            .field("dark_mode", &self.theme.is_dark())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the
    // first call and later calls start from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, preferences and the catalog. Every failure along the
    /// way degrades to defaults and queues a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);
        let catalog_path = flags.catalog.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang, &config);

        let (storage, storage_warning) = FileStorage::open_in(data_dir);
        let mut theme = ThemePreference::load(Box::new(storage));

        let (records, catalog_warning) = catalog::load(catalog_path.as_deref());
        let mut gallery = Gallery::new(records, config.gallery.page_size());
        gallery.set_view_mode(config.gallery.view_mode());

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, storage_warning, catalog_warning]
            .into_iter()
            .flatten()
        {
            notifications.push(notifications::Notification::warning(&key));
        }

        // Write the effective preference back so a defaulted value sticks.
        if theme.persist().is_err() {
            notifications.push(notifications::Notification::warning(
                "notification-theme-save-error",
            ));
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            projects = gallery.catalog().len(),
            dark_mode = theme.is_dark(),
            "application started"
        );

        let app = App {
            i18n,
            gallery,
            modal: ModalViewer::new(config.modal.timings()),
            modal_timer: None,
            theme,
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            page_metrics: None,
            notifications,
            footer_year: contact::current_year(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::theme_for(self.theme.is_dark())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            modal: &mut self.modal,
            modal_timer: &mut self.modal_timer,
            theme: &mut self.theme,
            menu_open: &mut self.menu_open,
            page_metrics: &mut self.page_metrics,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
            Message::Contact(contact_message) => update::handle_contact_message(contact_message),
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::ModalTimer(ticket) => update::handle_modal_timer(&mut ctx, ticket),
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::LinkOpened(result) => update::handle_link_opened(&mut ctx, result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageScrolled(metrics) => {
                self.page_metrics = Some(metrics);
                Task::none()
            }
            Message::WindowResized(width) => {
                self.window_width = width;
                if !view::is_compact(width) {
                    self.menu_open = false;
                }
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            modal: &self.modal,
            notifications: &self.notifications,
            dark_mode: self.theme.is_dark(),
            menu_open: self.menu_open,
            window_width: self.window_width,
            footer_year: self.footer_year,
        })
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! Shows the brand label, the section links and the theme toggle. In a
//! compact window the links move into a dropdown opened by the menu button;
//! choosing a link closes it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub dark_mode: bool,
    /// Narrow window: links are hidden behind the menu button.
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Section),
    ToggleTheme,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
    ToggleTheme,
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand"))
        .size(typography::TITLE_MD)
        .color(palette::SAGE_500);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        for section in Section::ALL {
            row = row.push(link(ctx.i18n, section));
        }
    } else {
        let (glyph, label_key) = if ctx.menu_open {
            ("✕", "nav-menu-close")
        } else {
            ("☰", "nav-menu-open")
        };
        row = row.push(icon_button(glyph, ctx.i18n.tr(label_key), Message::ToggleMenu));
    }

    // The sun switches to light mode, the moon to dark mode.
    let (glyph, label_key) = if ctx.dark_mode {
        ("☀", "nav-theme-light")
    } else {
        ("☾", "nav-theme-dark")
    };
    row = row.push(icon_button(glyph, ctx.i18n.tr(label_key), Message::ToggleTheme));

    row.into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Column::with_children(
        Section::ALL
            .into_iter()
            .map(|section| link(ctx.i18n, section)),
    )
    .spacing(spacing::MD);

    Container::new(links)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .into()
}

fn link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.i18n_key())).size(typography::BODY))
        .on_press(Message::Navigate(section))
        .padding(0)
        .style(styles::button::nav_link)
        .into()
}

fn icon_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(typography::BODY_LG))
        .push(Text::new(label).size(typography::CAPTION));

    button(content)
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::nav_icon)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(menu_open: bool, dark_mode: bool, compact: bool) {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            menu_open,
            dark_mode,
            compact,
        });
    }

    #[test]
    fn navbar_renders_in_every_layout() {
        for menu_open in [false, true] {
            for dark_mode in [false, true] {
                for compact in [false, true] {
                    render(menu_open, dark_mode, compact);
                }
            }
        }
    }

    #[test]
    fn toggle_menu_flips_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn choosing_a_link_closes_menu_and_scrolls() {
        for section in Section::ALL {
            let mut menu_open = true;
            let event = update(Message::Navigate(section), &mut menu_open);
            assert!(!menu_open);
            assert_eq!(event, Event::ScrollTo(section));
        }
    }

    #[test]
    fn theme_toggle_keeps_menu_state() {
        let mut menu_open = true;
        assert_eq!(update(Message::ToggleTheme, &mut menu_open), Event::ToggleTheme);
        assert!(menu_open);
    }
}

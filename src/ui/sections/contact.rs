// SPDX-License-Identifier: MPL-2.0
//! Contact links and the copyright footer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub const GITHUB_URL: &str = "https://github.com/mjklench";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mjklonogan21/";
pub const EMAIL_URL: &str = "mailto:lonogan.melglennjk@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenLink(&'static str),
}

/// Year shown in the footer.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn view<'a>(i18n: &I18n, colors: &ColorScheme, year: i32) -> Element<'a, Message> {
    let links = Row::new()
        .spacing(spacing::LG)
        .push(contact_link(i18n, "contact-github", GITHUB_URL))
        .push(contact_link(i18n, "contact-linkedin", LINKEDIN_URL))
        .push(contact_link(i18n, "contact-email", EMAIL_URL))
        .wrap();

    let year = year.to_string();
    let footer = Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
        .size(typography::CAPTION)
        .color(colors.text_muted);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("contact-title"))
                .size(typography::TITLE_LG)
                .color(colors.heading),
        )
        .push(links)
        .push(footer);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::section(true))
        .into()
}

fn contact_link<'a>(i18n: &I18n, key: &str, url: &'static str) -> Element<'a, Message> {
    button(Text::new(i18n.tr(key)).size(typography::BODY_LG))
        .on_press(Message::OpenLink(url))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::link(true))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn email_link_uses_mailto() {
        assert!(EMAIL_URL.starts_with("mailto:"));
        assert!(GITHUB_URL.starts_with("https://"));
        assert!(LINKEDIN_URL.starts_with("https://"));
    }

    #[test]
    fn contact_renders() {
        let i18n = I18n::default();
        let _ = view(&i18n, &ColorScheme::light(), 2026);
    }
}

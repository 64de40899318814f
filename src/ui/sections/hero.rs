// SPDX-License-Identifier: MPL-2.0
//! Landing section with the greeting and the call to action.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// "View My Work" jumps to the projects section.
    ViewWork,
}

pub fn view<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let heading = Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("hero-greeting"))
                .size(typography::DISPLAY)
                .color(colors.text_primary),
        )
        .push(
            Text::new(i18n.tr("hero-name"))
                .size(typography::DISPLAY)
                .color(palette::BRAND_500),
        )
        .wrap();

    let tagline = Container::new(
        Text::new(i18n.tr("hero-tagline"))
            .size(typography::BODY_LG)
            .color(colors.text_muted)
            .align_x(alignment::Horizontal::Center),
    )
    .max_width(sizing::TEXT_MAX_WIDTH);

    let cta = button(Text::new(i18n.tr("hero-cta")).size(typography::BODY_LG))
        .on_press(Message::ViewWork)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(tagline)
        .push(cta);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::HERO_HEIGHT))
        .style(styles::container::section(false))
        .into()
}

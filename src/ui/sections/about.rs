// SPDX-License-Identifier: MPL-2.0
//! Short introduction.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::TEXT_MAX_WIDTH)
        .push(
            Text::new(i18n.tr("about-title"))
                .size(typography::TITLE_LG)
                .color(colors.heading),
        )
        .push(
            Text::new(i18n.tr("about-body"))
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(alignment::Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ABOUT_HEIGHT))
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::ABOUT_HEIGHT))
        .style(styles::container::section(true))
        .into()
}

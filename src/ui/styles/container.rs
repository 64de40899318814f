// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-width page section. `alternate` sections (About, Contact) use the
/// second surface color.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if alternate {
            colors.section_alt_background
        } else {
            colors.page_background
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Project card surface.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.card_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Tag chip on a card (not clickable).
pub fn tag(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.tag_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown behind a project image that has not loaded.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.chip_background)),
        text_color: Some(colors.text_muted),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent bar at the top of the window.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.navbar_background)),
        text_color: Some(palette::GRAY_300),
        border: Border {
            color: Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Full-window modal backdrop; `alpha` follows the fade-in state.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Frame around the enlarged image.
pub fn modal_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.card_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

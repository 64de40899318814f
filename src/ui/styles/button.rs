// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn pill(background: Option<Color>, text_color: Color) -> button::Style {
    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Call-to-action button ("View My Work").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_700,
        _ => palette::BRAND_500,
    };
    button::Style {
        shadow: shadow::MD,
        ..pill(Some(background), palette::WHITE)
    }
}

/// Filter chip (tag or category). Selected chips use the brand color.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        if selected {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => colors.accent_hover,
                _ => colors.accent,
            };
            return pill(Some(background), palette::WHITE);
        }
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => colors.chip_hover,
            _ => colors.chip_background,
        };
        pill(Some(background), colors.chip_text)
    }
}

/// Borderless button that only shows a background on hover (Reset, view toggle).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    match status {
        button::Status::Hovered | button::Status::Pressed => {
            pill(Some(colors.chip_hover), colors.text_secondary)
        }
        button::Status::Disabled => pill(
            None,
            Color {
                a: opacity::MEDIUM,
                ..colors.text_secondary
            },
        ),
        button::Status::Active => pill(None, colors.text_secondary),
    }
}

/// Navbar link. The navbar is dark in both modes, so colors are fixed.
pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_500,
        _ => palette::GRAY_300,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Square icon button in the navbar (menu, theme toggle).
pub fn nav_icon(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::MEDIUM,
            ..palette::GRAY_700
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GRAY_200,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Inline text link (GitHub, Live Demo, contact links).
pub fn link(emphasized: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let text_color = match (emphasized, hovered) {
            (true, false) => colors.accent,
            (true, true) => colors.accent_hover,
            (false, false) => colors.text_secondary,
            (false, true) => colors.accent,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent wrapper around a project image so it can be clicked.
pub fn image_frame(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::BRAND_500)));
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn selected_chip_is_highlighted() {
        let on = chip(true)(&Theme::Light, button::Status::Active);
        let off = chip(false)(&Theme::Light, button::Status::Active);
        assert_ne!(on.background, off.background);
        assert_eq!(on.text_color, palette::WHITE);
    }

    #[test]
    fn unselected_chip_follows_theme() {
        let light = chip(false)(&Theme::Light, button::Status::Active);
        let dark = chip(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn ghost_button_is_transparent_until_hovered() {
        assert!(ghost(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(ghost(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}

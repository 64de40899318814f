// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.
//!
//! The application only ever runs with `Theme::Light` or `Theme::Dark`, chosen
//! from the persisted display preference. Style functions receive the iced
//! `Theme` and look up the matching [`ColorScheme`].

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Resolved colors for one display mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub page_background: Color,
    pub section_alt_background: Color,
    pub card_background: Color,
    pub navbar_background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub heading: Color,

    // Controls
    pub chip_background: Color,
    pub chip_hover: Color,
    pub chip_text: Color,
    pub tag_background: Color,
    pub accent: Color,
    pub accent_hover: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::WHITE,
            section_alt_background: palette::GRAY_100,
            card_background: palette::GRAY_100,
            navbar_background: Color {
                a: opacity::NAVBAR,
                ..palette::SLATE_900
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_600,
            heading: palette::BRAND_500,

            chip_background: palette::GRAY_200,
            chip_hover: palette::GRAY_300,
            chip_text: palette::GRAY_700,
            tag_background: Color {
                a: opacity::MEDIUM,
                ..palette::SAGE_500
            },
            accent: palette::BRAND_500,
            accent_hover: palette::BRAND_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::SLATE_900,
            section_alt_background: palette::NAVY_900,
            card_background: palette::GRAY_800,
            navbar_background: Color {
                a: opacity::NAVBAR,
                ..palette::SLATE_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,
            heading: palette::SAGE_500,

            chip_background: palette::GRAY_800,
            chip_hover: palette::GRAY_700,
            chip_text: palette::GRAY_300,
            tag_background: Color {
                a: opacity::MEDIUM,
                ..palette::SAGE_500
            },
            accent: palette::BRAND_500,
            accent_hover: palette::BRAND_700,
        }
    }

    #[must_use]
    pub fn new(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Scheme matching an iced theme; anything but `Theme::Light` is dark.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        Self::new(!matches!(theme, Theme::Light))
    }
}

/// iced theme for the display preference.
#[must_use]
pub fn theme_for(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_page() {
        assert!(ColorScheme::light().page_background.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_page() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page_background.r < 0.2);
        assert!(scheme.text_primary.r > 0.9);
    }

    #[test]
    fn theme_round_trips_through_scheme_lookup() {
        assert_eq!(ColorScheme::for_theme(&theme_for(true)), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(&theme_for(false)), ColorScheme::light());
    }

    #[test]
    fn navbar_stays_dark_in_both_modes() {
        assert_eq!(
            ColorScheme::light().navbar_background,
            ColorScheme::dark().navbar_background
        );
    }
}

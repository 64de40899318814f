// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container};
    use iced_folio::ui::theming::{theme_for, ColorScheme};

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::chip(true)(&theme, status);
                let _ = button::chip(false)(&theme, status);
                let _ = button::ghost(&theme, status);
                let _ = button::nav_link(&theme, status);
                let _ = button::nav_icon(&theme, status);
                let _ = button::link(true)(&theme, status);
                let _ = button::image_frame(&theme, status);
            }
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = container::section(true)(&theme);
        let _ = container::card(&theme);
        let _ = container::tag(&theme);
        let _ = container::image_placeholder(&theme);
        let _ = container::navbar(&theme);
        let _ = container::modal_frame(&theme);
    }

    #[test]
    fn backdrop_follows_requested_alpha() {
        let hidden = container::backdrop(opacity::TRANSPARENT)(&Theme::Dark);
        let shown = container::backdrop(opacity::BACKDROP)(&Theme::Dark);
        match (hidden.background, shown.background) {
            (Some(iced::Background::Color(h)), Some(iced::Background::Color(s))) => {
                assert_eq!(h.a, opacity::TRANSPARENT);
                assert_eq!(s.a, opacity::BACKDROP);
            }
            other => panic!("unexpected backdrop backgrounds: {other:?}"),
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::BRAND_500;
        let _ = palette::SAGE_500;
        let _ = spacing::MD;
        let _ = sizing::NAVBAR_HEIGHT;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&theme_for(false));
        let dark = ColorScheme::for_theme(&theme_for(true));

        // Surfaces and text invert between the two modes.
        assert!(light.page_background.r > dark.page_background.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}

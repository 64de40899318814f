// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the UI.

## Organization

- **Palette**: Base colors (slate surfaces, brand blue, sage accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Page surfaces in dark mode
    pub const SLATE_900: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
    pub const NAVY_900: Color = Color::from_rgb8(0x0f, 0x1c, 0x2e);

    // Neutral scale
    pub const GRAY_100: Color = Color::from_rgb8(0xf3, 0xf4, 0xf6);
    pub const GRAY_200: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
    pub const GRAY_300: Color = Color::from_rgb8(0xd1, 0xd5, 0xdb);
    pub const GRAY_400: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
    pub const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4b, 0x55, 0x63);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Brand
    pub const BRAND_500: Color = Color::from_rgb8(0x06, 0x5f, 0x89);
    pub const BRAND_700: Color = Color::from_rgb8(0x05, 0x48, 0x6b);
    pub const SAGE_500: Color = Color::from_rgb8(0xa4, 0xaa, 0x7c);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    pub const MEDIUM: f32 = 0.5;
    /// Modal backdrop once fully faded in.
    pub const BACKDROP: f32 = 0.75;
    /// Navbar glass surface (`#0f172acc`).
    pub const NAVBAR: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    // Fixed section heights; scroll anchors are derived from them.
    pub const HERO_HEIGHT: f32 = 560.0;
    pub const ABOUT_HEIGHT: f32 = 360.0;

    /// Content column width; wider windows get side margins.
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
    pub const TEXT_MAX_WIDTH: f32 = 720.0;

    /// Below this window width the navbar collapses into the menu toggle.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    // Project cards
    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
    pub const LIST_THUMBNAIL: f32 = 80.0;

    pub const MODAL_MAX_WIDTH: f32 = 960.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const DISPLAY: f32 = 56.0;

    /// Section headings (About Me, My Projects, Get in Touch)
    pub const TITLE_LG: f32 = 34.0;

    /// Brand label, card titles
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Tag chips, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.4,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::CARD_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::COMPACT_BREAKPOINT < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::SECTION, spacing::XXL * 2.0);
    }

    #[test]
    fn brand_color_is_blue_dominant() {
        assert!(palette::BRAND_500.b > palette::BRAND_500.r);
        assert!(palette::BRAND_700.b > palette::BRAND_700.r);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The four page sections and the scroll anchors used to reach them.
//!
//! The page is a single vertical scrollable. Hero and About have fixed
//! heights, so the offsets of Projects and Contact are known without
//! measuring the laid-out widgets.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;

use crate::ui::design_tokens::sizing;
use iced::widget::scrollable::Viewport;

/// Id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "folio-page";

/// Named page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Navbar label key.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-hero",
            Section::About => "nav-about",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }

    /// Distance from the top of the page to the section, when known.
    ///
    /// Contact is the last section; it is reached by scrolling to the end.
    #[must_use]
    fn absolute_offset(self) -> Option<f32> {
        match self {
            Section::Hero => Some(0.0),
            Section::About => Some(sizing::HERO_HEIGHT),
            Section::Projects => Some(sizing::HERO_HEIGHT + sizing::ABOUT_HEIGHT),
            Section::Contact => None,
        }
    }
}

/// Page geometry captured from the last scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
}

impl PageMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            content_height: viewport.content_bounds().height,
            viewport_height: viewport.bounds().height,
        }
    }

    fn scroll_range(self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Relative vertical offset (0.0 top, 1.0 bottom) that brings `section` to
/// the top of the viewport.
///
/// Without metrics (the page has not been scrolled yet) the anchors are
/// spread evenly, which is close enough to land inside the right section.
#[must_use]
pub fn relative_offset(section: Section, metrics: Option<PageMetrics>) -> f32 {
    let Some(offset) = section.absolute_offset() else {
        return 1.0;
    };
    match metrics.map(PageMetrics::scroll_range) {
        Some(range) if range > 0.0 => (offset / range).clamp(0.0, 1.0),
        Some(_) => 0.0,
        None => {
            let index = Section::ALL
                .iter()
                .position(|s| *s == section)
                .unwrap_or_default();
            index as f32 / (Section::ALL.len() - 1) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_and_contact_are_the_extremes() {
        let metrics = Some(PageMetrics {
            content_height: 3000.0,
            viewport_height: 800.0,
        });
        assert_eq!(relative_offset(Section::Hero, metrics), 0.0);
        assert_eq!(relative_offset(Section::Contact, metrics), 1.0);
        assert_eq!(relative_offset(Section::Contact, None), 1.0);
    }

    #[test]
    fn projects_offset_uses_fixed_section_heights() {
        let metrics = PageMetrics {
            content_height: 2000.0,
            viewport_height: 400.0,
        };
        let expected = (sizing::HERO_HEIGHT + sizing::ABOUT_HEIGHT) / 1600.0;
        let actual = relative_offset(Section::Projects, Some(metrics));
        assert!((actual - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn offsets_are_ordered() {
        for metrics in [
            None,
            Some(PageMetrics {
                content_height: 2600.0,
                viewport_height: 700.0,
            }),
        ] {
            let offsets: Vec<f32> = Section::ALL
                .iter()
                .map(|section| relative_offset(*section, metrics))
                .collect();
            assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn page_shorter_than_viewport_stays_at_top() {
        let metrics = PageMetrics {
            content_height: 300.0,
            viewport_height: 800.0,
        };
        assert_eq!(relative_offset(Section::About, Some(metrics)), 0.0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Project gallery section.
//!
//! Category bar, tag chips, layout toggle, the current page of cards and
//! the pagination controls. All state lives in
//! [`Gallery`](crate::application::query::Gallery); this module only renders
//! a [`GalleryPage`] and reports what the user clicked.

use crate::application::query::{Gallery, GalleryPage};
use crate::domain::gallery::{CategoryFilter, ViewMode};
use crate::domain::project::{ProjectRecord, Tag};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectCategory(CategoryFilter),
    ToggleTag(Tag),
    ResetFilters,
    SetViewMode(ViewMode),
    PreviousPage,
    NextPage,
    /// Enlarge a card image in the modal viewer.
    OpenImage(String),
    OpenLink(String),
}

/// Applies a gallery message. Returns the message back when the
/// application has to act on it (opening the modal or a link).
pub fn update(gallery: &mut Gallery, message: Message) -> Option<Message> {
    match message {
        Message::SelectCategory(category) => {
            let page = gallery.set_category(category);
            tracing::debug!(?category, shown = page.filtered_count, "category selected");
        }
        Message::ToggleTag(tag) => {
            let page = gallery.toggle_tag(tag);
            tracing::debug!(shown = page.filtered_count, "tag toggled");
        }
        Message::ResetFilters => {
            let page = gallery.reset();
            tracing::debug!(shown = page.filtered_count, "filters reset");
        }
        Message::SetViewMode(mode) => {
            gallery.set_view_mode(mode);
            tracing::debug!(?mode, "view mode changed");
        }
        Message::PreviousPage => {
            let page = gallery.previous_page();
            tracing::debug!(
                page = page.current_page,
                shown = page.filtered_count,
                "previous page"
            );
        }
        Message::NextPage => {
            let page = gallery.next_page();
            tracing::debug!(
                page = page.current_page,
                shown = page.filtered_count,
                "next page"
            );
        }
        Message::OpenImage(_) | Message::OpenLink(_) => return Some(message),
    }
    None
}

pub fn view<'a>(gallery: &'a Gallery, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let page = gallery.page();

    let title = Text::new(i18n.tr("projects-title"))
        .size(typography::TITLE_LG)
        .color(colors.heading);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(category_bar(gallery, i18n))
        .push(tag_bar(gallery, i18n, colors))
        .push(toolbar(gallery, &page, i18n, colors));

    if page.is_empty() {
        content = content.push(
            Container::new(
                Text::new(i18n.tr("gallery-empty"))
                    .size(typography::BODY_LG)
                    .color(colors.text_muted),
            )
            .padding(spacing::XXL),
        );
    } else {
        content = content.push(cards(&page, gallery.view_mode(), i18n, colors));
    }

    if page.shows_pagination() {
        content = content.push(pagination(&page, i18n, colors));
    }

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::section(false))
        .into()
}

fn category_bar<'a>(gallery: &Gallery, i18n: &I18n) -> Element<'a, Message> {
    let selected = gallery.filter().category();
    let filters = std::iter::once(CategoryFilter::All).chain(
        gallery
            .categories()
            .into_iter()
            .map(CategoryFilter::Only),
    );

    Row::with_children(filters.map(|filter| {
        let label = match filter {
            CategoryFilter::All => i18n.tr("gallery-category-all"),
            CategoryFilter::Only(category) => i18n.tr(category.i18n_key()),
        };
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::SelectCategory(filter))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::chip(filter == selected))
            .into()
    }))
    .spacing(spacing::XS)
    .wrap()
    .into()
}

fn tag_bar<'a>(gallery: &'a Gallery, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let filter = gallery.filter();

    let chips = Row::with_children(gallery.tag_palette().into_iter().map(|tag| {
        button(Text::new(tag.as_str()).size(typography::CAPTION))
            .on_press(Message::ToggleTag(tag.clone()))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::chip(filter.is_tag_selected(tag)))
            .into()
    }))
    .spacing(spacing::XS)
    .wrap();

    let mut reset = button(Text::new(i18n.tr("gallery-filter-reset")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::ghost);
    if filter.is_active() {
        reset = reset.on_press(Message::ResetFilters);
    }

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("gallery-filter-tags"))
                .size(typography::CAPTION)
                .color(colors.text_muted),
        )
        .push(chips)
        .push(reset)
        .into()
}

fn toolbar<'a>(
    gallery: &Gallery,
    page: &GalleryPage<'_>,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let count = page.filtered_count.to_string();
    let total = page.total_count.to_string();
    let results = Text::new(i18n.tr_with_args(
        "gallery-results",
        &[("count", count.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .color(colors.text_muted);

    let mode = gallery.view_mode();
    let toggle = |target: ViewMode, key: &str| {
        button(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .on_press(Message::SetViewMode(target))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::chip(mode == target))
    };

    Row::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(results)
        .push(Space::new().width(Length::Fill))
        .push(toggle(ViewMode::Grid, "gallery-view-grid"))
        .push(toggle(ViewMode::List, "gallery-view-list"))
        .into()
}

fn cards<'a>(
    page: &GalleryPage<'a>,
    mode: ViewMode,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    match mode {
        ViewMode::Grid => Row::with_children(
            page.items
                .iter()
                .copied()
                .map(|record| grid_card(record, i18n, colors)),
        )
        .spacing(spacing::LG)
        .wrap()
        .vertical_spacing(spacing::LG)
        .into(),
        ViewMode::List => Column::with_children(
            page.items
                .iter()
                .copied()
                .map(|record| list_card(record, i18n, colors)),
        )
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into(),
    }
}

fn grid_card<'a>(
    record: &'a ProjectRecord,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_MD)
                .color(colors.heading),
        )
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(tags(record))
        .push(links(record, i18n));

    let card = Column::new()
        .push(thumbnail(
            record,
            i18n,
            Length::Fill,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
        ))
        .push(body);

    Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn list_card<'a>(
    record: &'a ProjectRecord,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_MD)
                .color(colors.heading),
        )
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(tags(record));

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail(
            record,
            i18n,
            Length::Fixed(sizing::LIST_THUMBNAIL),
            Length::Fixed(sizing::LIST_THUMBNAIL),
        ))
        .push(body)
        .push(links(record, i18n));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Clickable preview. The placeholder stays underneath so a missing file
/// still leaves a labelled frame.
fn thumbnail<'a>(
    record: &'a ProjectRecord,
    i18n: &I18n,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let placeholder = Container::new(
        Text::new(i18n.tr("project-image-missing")).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::container::image_placeholder);

    let image = Image::new(Handle::from_path(&record.image))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let frame = Stack::new()
        .width(width)
        .height(height)
        .push(placeholder)
        .push(image);

    button(frame)
        .on_press(Message::OpenImage(record.image.clone()))
        .padding(0)
        .style(styles::button::image_frame)
        .into()
}

fn tags<'a>(record: &'a ProjectRecord) -> Element<'a, Message> {
    Row::with_children(record.tags.iter().map(|tag| {
        Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::tag)
            .into()
    }))
    .spacing(spacing::XXS)
    .wrap()
    .into()
}

fn links<'a>(record: &'a ProjectRecord, i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD);
    if let Some(url) = &record.github {
        row = row.push(
            button(Text::new(i18n.tr("project-link-github")).size(typography::BODY))
                .on_press(Message::OpenLink(url.clone()))
                .padding(0)
                .style(styles::button::link(false)),
        );
    }
    if let Some(url) = &record.demo {
        row = row.push(
            button(Text::new(i18n.tr("project-link-demo")).size(typography::BODY))
                .on_press(Message::OpenLink(url.clone()))
                .padding(0)
                .style(styles::button::link(true)),
        );
    }
    row.into()
}

fn pagination<'a>(
    page: &GalleryPage<'_>,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let current = page.current_page.to_string();
    let total = page.total_pages.to_string();

    let mut previous = button(Text::new(i18n.tr("gallery-previous")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);
    if page.has_previous() {
        previous = previous.on_press(Message::PreviousPage);
    }

    let mut next = button(Text::new(i18n.tr("gallery-next")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);
    if page.has_next() {
        next = next.on_press(Message::NextPage);
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(
            Text::new(i18n.tr_with_args(
                "gallery-page-indicator",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::BODY)
            .color(colors.text_secondary),
        )
        .push(next)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::PageSize;
    use crate::domain::project::{Category, ProjectId};

    fn record(id: u32, category: Category, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(id),
            category,
            title: format!("Project {id}"),
            description: String::new(),
            image: format!("assets/projects/{id}.png"),
            tags: tags.iter().map(|t| Tag::from(*t)).collect(),
            github: Some(format!("https://github.com/username/{id}")),
            demo: None,
        }
    }

    fn gallery() -> Gallery {
        Gallery::new(
            vec![
                record(1, Category::Professional, &["PHP", "MySQL"]),
                record(2, Category::Personal, &["React"]),
                record(3, Category::Academic, &["PHP"]),
                record(4, Category::Courses, &["CSS"]),
                record(5, Category::Professional, &["React", "Tailwind"]),
            ],
            PageSize::new(2),
        )
    }

    #[test]
    fn filter_messages_reset_to_first_page() {
        let mut gallery = gallery();
        assert_eq!(update(&mut gallery, Message::NextPage), None);
        assert_eq!(gallery.current_page(), 2);

        update(&mut gallery, Message::ToggleTag(Tag::from("PHP")));
        assert_eq!(gallery.current_page(), 1);
        assert_eq!(gallery.filtered_count(), 2);

        update(
            &mut gallery,
            Message::SelectCategory(CategoryFilter::Only(Category::Academic)),
        );
        assert_eq!(gallery.filtered_count(), 1);

        update(&mut gallery, Message::ResetFilters);
        assert_eq!(gallery.filtered_count(), 5);
    }

    #[test]
    fn paging_stays_in_range() {
        let mut gallery = gallery();
        update(&mut gallery, Message::PreviousPage);
        assert_eq!(gallery.current_page(), 1);
        for _ in 0..5 {
            update(&mut gallery, Message::NextPage);
        }
        assert_eq!(gallery.current_page(), 3);
    }

    #[test]
    fn view_mode_keeps_filters() {
        let mut gallery = gallery();
        update(&mut gallery, Message::ToggleTag(Tag::from("React")));
        update(&mut gallery, Message::SetViewMode(ViewMode::List));
        assert_eq!(gallery.view_mode(), ViewMode::List);
        assert_eq!(gallery.filtered_count(), 2);
    }

    #[test]
    fn gallery_messages_are_handled_locally() {
        let mut gallery = gallery();
        let local = [
            Message::ToggleTag(Tag::from("PHP")),
            Message::SelectCategory(CategoryFilter::Only(Category::Academic)),
            Message::ResetFilters,
            Message::SetViewMode(ViewMode::List),
            Message::NextPage,
            Message::PreviousPage,
            Message::NextPage,
        ];
        for message in local {
            assert_eq!(update(&mut gallery, message), None);
        }
        assert!(!gallery.filter().is_active());
        assert_eq!(gallery.view_mode(), ViewMode::List);
        assert_eq!(gallery.current_page(), 2);
    }

    #[test]
    fn image_and_link_requests_are_forwarded() {
        let mut gallery = gallery();
        let open = Message::OpenImage("assets/projects/1.png".into());
        assert_eq!(update(&mut gallery, open.clone()), Some(open));
        let link = Message::OpenLink("https://example.com".into());
        assert_eq!(update(&mut gallery, link.clone()), Some(link));
    }

    #[test]
    fn view_renders_every_state() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let mut gallery = gallery();
        let _ = view(&gallery, &i18n, &colors);

        gallery.set_view_mode(ViewMode::List);
        let _ = view(&gallery, &i18n, &colors);

        gallery.set_category(CategoryFilter::Only(Category::Courses));
        gallery.toggle_tag(Tag::from("React"));
        assert!(gallery.page().is_empty());
        let _ = view(&gallery, &i18n, &colors);
    }
}

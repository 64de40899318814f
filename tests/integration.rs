// SPDX-License-Identifier: MPL-2.0
use iced_folio::application::preference::{ThemePreference, DARK_MODE_KEY};
use iced_folio::application::port::PreferenceStorage;
use iced_folio::application::query::Gallery;
use iced_folio::config::{self, Config, GalleryLayout};
use iced_folio::domain::gallery::{CategoryFilter, PageSize, ViewMode};
use iced_folio::domain::modal::{ModalPhase, ModalViewer};
use iced_folio::domain::project::{Category, ProjectId, ProjectRecord, Tag};
use iced_folio::i18n::fluent::I18n;
use iced_folio::infrastructure::{catalog, storage::STORAGE_FILE, FileStorage};
use std::fs;
use tempfile::tempdir;

fn record(id: u32, category: Category, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::new(id),
        category,
        title: format!("Project {id}"),
        description: format!("Description {id}"),
        image: format!("assets/projects/{id}.png"),
        tags: tags.iter().map(|t| Tag::from(*t)).collect(),
        github: None,
        demo: None,
    }
}

/// Ten records: five in courses, the rest spread over the other categories.
fn ten_records() -> Vec<ProjectRecord> {
    vec![
        record(1, Category::Courses, &["CSS"]),
        record(2, Category::Professional, &["PHP", "MySQL"]),
        record(3, Category::Courses, &["JavaScript"]),
        record(4, Category::Personal, &["React"]),
        record(5, Category::Courses, &["CSS", "JavaScript"]),
        record(6, Category::Academic, &["Laravel", "PHP"]),
        record(7, Category::Courses, &["React"]),
        record(8, Category::Professional, &["Tailwind"]),
        record(9, Category::Courses, &["PHP"]),
        record(10, Category::Personal, &[]),
    ]
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-projects"), "Projets");

    // The CLI wins over the config file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn gallery_settings_round_trip_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.gallery.page_size = Some(4);
    settings.gallery.view_mode = Some(GalleryLayout::List);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, settings);

    let gallery = {
        let mut gallery = Gallery::new(ten_records(), loaded.gallery.page_size());
        gallery.set_view_mode(loaded.gallery.view_mode());
        gallery
    };
    assert_eq!(gallery.view_mode(), ViewMode::List);
    assert_eq!(gallery.total_pages(), 3);
}

#[test]
fn ten_records_paginate_six_then_four() {
    let mut gallery = Gallery::new(ten_records(), PageSize::new(6));

    let first = gallery.page();
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 6);
    assert!(first.shows_pagination());
    assert!(!first.has_previous());

    let second = gallery.next_page();
    assert_eq!(second.current_page, 2);
    assert_eq!(second.items.len(), 4);
    assert!(!second.has_next());

    // Past the end stays on the last page.
    assert_eq!(gallery.next_page().current_page, 2);
}

#[test]
fn courses_filter_keeps_catalog_order_on_one_page() {
    let mut gallery = Gallery::new(ten_records(), PageSize::new(6));
    let page = gallery.set_category(CategoryFilter::Only(Category::Courses));

    assert_eq!(page.total_pages, 1);
    assert!(!page.shows_pagination());
    let ids: Vec<u32> = page.items.iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec![1, 3, 5, 7, 9]);
}

#[test]
fn filter_changes_return_to_first_page() {
    let mut gallery = Gallery::new(ten_records(), PageSize::new(3));
    gallery.go_to_page(3);
    assert_eq!(gallery.current_page(), 3);

    let page = gallery.toggle_tag(Tag::from("PHP"));
    assert_eq!(page.current_page, 1);
    let ids: Vec<u32> = page.items.iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec![2, 6, 9]);

    gallery.go_to_page(2);
    let page = gallery.set_category(CategoryFilter::Only(Category::Academic));
    assert_eq!(page.current_page, 1);
    assert_eq!(page.filtered_count, 1);

    let page = gallery.reset();
    assert_eq!(page.filtered_count, 10);
}

#[test]
fn unmatched_filters_yield_an_empty_single_page() {
    let mut gallery = Gallery::new(ten_records(), PageSize::new(6));
    gallery.set_category(CategoryFilter::Only(Category::Academic));
    let page = gallery.toggle_tag(Tag::from("React"));

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.shows_pagination());
}

#[test]
fn theme_defaults_to_dark_when_storage_is_empty_or_corrupt() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (storage, warning) = FileStorage::open_in(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(ThemePreference::load(Box::new(storage)).is_dark());

    fs::write(dir.path().join(STORAGE_FILE), "{ not json").expect("write corrupt file");
    let (storage, warning) = FileStorage::open_in(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert!(ThemePreference::load(Box::new(storage)).is_dark());
}

#[test]
fn theme_toggle_persists_across_sessions() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (storage, _) = FileStorage::open_in(Some(dir.path().to_path_buf()));
    let mut theme = ThemePreference::load(Box::new(storage));
    theme.persist().expect("initial persist");
    theme.toggle().expect("toggle persists");
    assert!(!theme.is_dark());

    let (storage, _) = FileStorage::open_in(Some(dir.path().to_path_buf()));
    assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("false"));
    assert!(!ThemePreference::load(Box::new(storage)).is_dark());
}

#[test]
fn catalog_override_replaces_embedded_projects() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("projects.toml");
    fs::write(
        &path,
        r#"
        [[project]]
        id = 42
        category = "personal"
        title = "Only One"
        image = "one.png"
        "#,
    )
    .expect("write catalog");

    let (records, warning) = catalog::load(Some(&path));
    assert!(warning.is_none());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.value(), 42);

    let missing = dir.path().join("missing.toml");
    let (records, warning) = catalog::load(Some(&missing));
    assert!(warning.is_some());
    assert!(!records.is_empty());
}

#[tokio::test(start_paused = true)]
async fn modal_round_trip_follows_timers() {
    let mut viewer = ModalViewer::default();

    let opening = viewer.open("x.png").expect("open schedules a transition");
    assert_eq!(viewer.phase(), &ModalPhase::Opening("x.png".to_string()));
    tokio::time::sleep(opening.delay).await;
    assert!(viewer.on_timer(opening.ticket));
    assert_eq!(viewer.phase(), &ModalPhase::Open("x.png".to_string()));

    let closing = viewer.close().expect("close schedules a transition");
    assert_eq!(viewer.image(), Some("x.png"));
    tokio::time::sleep(closing.delay).await;
    assert!(viewer.on_timer(closing.ticket));
    assert_eq!(viewer.phase(), &ModalPhase::Closed);
    assert_eq!(viewer.image(), None);
}

#[tokio::test(start_paused = true)]
async fn reopening_before_the_close_tick_wins() {
    let mut viewer = ModalViewer::default();
    let opening = viewer.open("a.png").expect("scheduled");
    assert!(viewer.on_timer(opening.ticket));

    let closing = viewer.close().expect("scheduled");
    let reopening = viewer.open("a.png").expect("scheduled");
    tokio::time::sleep(closing.delay).await;

    assert!(!viewer.on_timer(closing.ticket));
    assert!(viewer.on_timer(reopening.ticket));
    assert!(viewer.is_shown());
}

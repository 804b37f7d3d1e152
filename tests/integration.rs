// SPDX-License-Identifier: MPL-2.0
use brochure_lens::brochure::{
    fragment, Brochure, CloseReason, ImageVariant, Location, Modal, PageCount, PageImage,
    ScrollGate, Transition, ZoomLevel,
};
use brochure_lens::config::{self, Config};
use brochure_lens::i18n::fluent::I18n;
use brochure_lens::media::{ImageStore, LoaderContext, SlotState, Source};
use tempfile::tempdir;

const BASE: &str = "https://example.org/brochure/";

fn brochure(link: Option<&str>) -> Brochure {
    let location = Location::with_fragment(BASE, link.and_then(fragment::from_link));
    Brochure::load(PageCount::new(11).unwrap(), location).0
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.toml"), "[brochure\ntotal_pages = ").unwrap();

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.page_count().get(), 11);
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn reading_session_keeps_location_in_sync() {
    let mut b = brochure(Some("#page-4"));
    assert_eq!(b.current().get(), 4);
    assert_eq!(b.location().href(), format!("{BASE}#page-4"));

    b.next();
    b.next();
    assert_eq!(b.location().fragment(), Some("page-6"));

    // Back twice walks the pages visited, then stops at the launch entry.
    b.history_back();
    b.history_back();
    assert_eq!(b.current().get(), 4);
    assert_eq!(b.history_back(), Transition::Unchanged);

    // A manual edit behaves like following a link.
    let moved = b.apply_location(&format!("{BASE}#page-11"));
    assert!(moved.is_moved());
    assert!(!b.projection().next_enabled);
    assert_eq!(b.next(), Transition::Unchanged);
}

#[test]
fn deep_links_never_stack_fragments() {
    let mut b = brochure(None);
    b.go_to(3);
    let link = b.location().deep_link(b.current());
    assert_eq!(link, format!("{BASE}#page-3"));

    let reopened = brochure(Some(&link));
    assert_eq!(reopened.current().get(), 3);
}

#[test]
fn modal_and_scroll_lock_travel_together() {
    let gate = ScrollGate::new();
    let mut modal = Modal::default();
    let page = PageCount::new(11).unwrap().page(5).unwrap();

    modal.open(&gate, page);
    assert!(gate.is_locked());
    assert_eq!(
        modal.current().map(|m| m.image()),
        Some(PageImage::new(page, ImageVariant::Modal))
    );

    assert!(modal.close(CloseReason::Escape));
    assert!(!gate.is_locked());
    assert!(!modal.close(CloseReason::Escape));
}

#[test]
fn zoom_walks_the_whole_range() {
    let mut zoom = ZoomLevel::default();
    for _ in 0..8 {
        zoom = zoom.zoom_in();
    }
    assert!(zoom.is_max());
    assert_eq!(zoom.percent(), 300);
    assert_eq!(zoom.reset(), ZoomLevel::default());
}

#[tokio::test]
async fn missing_asset_falls_back_to_cached_placeholder() {
    let assets = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let base = "http://127.0.0.1:9/seed";
    let page = PageCount::new(11).unwrap().page(2).unwrap();
    let image = PageImage::new(page, ImageVariant::Thumbnail);

    // Pre-seed the placeholder cache so no network access is needed.
    let cached = brochure_lens::media::loader::placeholder_cache_path(
        cache.path(),
        &image.placeholder_url(base),
    );
    std::fs::create_dir_all(cached.parent().unwrap()).unwrap();
    std::fs::write(&cached, png(100, 140)).unwrap();

    let loader = LoaderContext::new(
        assets.path().to_path_buf(),
        base.to_string(),
        Some(cache.path().to_path_buf()),
    )
    .unwrap();
    let mut store = ImageStore::default();

    let primary = store.request(image).unwrap();
    let result = loader.clone().load(primary).await;
    assert!(result.is_err());
    let substitute = store.complete(primary, result).unwrap();
    assert_eq!(substitute.source, Source::Placeholder);

    let result = loader.load(substitute).await;
    assert!(store.complete(substitute, result).is_none());
    assert_eq!(store.state(image), SlotState::Ready(Source::Placeholder));
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::DynamicImage::ImageRgba8(image_rs::RgbaImage::new(width, height));
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .unwrap();
    bytes
}

// SPDX-License-Identifier: MPL-2.0
mod common;

use common::{write_file, write_png};
use folio::config::{self, Config, GeneralConfig, ViewerConfig, WheelPolarity};
use folio::i18n::fluent::I18n;
use folio::media::{dimensions, DimensionCache};
use folio::site::{self, PageLocation, ResolvedSidebar};
use folio::ui::modal::{ModalFixture, OpenOutcome, ViewerState};
use folio::ui::state::WheelDirection;
use std::path::Path;
use tempfile::tempdir;

const SIDEBAR: &str = r#"
title = "Portfolio"

[[links]]
label = "Alpha"
file = "alpha.toml"

[[links]]
label = "Beta"
href = "/old/layout/beta.toml"
"#;

const ALPHA: &str = r#"
title = "Alpha"

[[sections]]
heading = "Gallery"
images = [{ src = "img/wide.png", caption = "Wide shot" }]
modal = { backdrop = {}, content = {}, image = {}, caption = {}, close = {} }
"#;

fn write_site(root: &Path) {
    write_file(root, "index.toml", "title = \"Home\"\nsummary = \"Welcome.\"\n");
    write_file(root, "pages/partials/sidebar.toml", SIDEBAR);
    write_file(root, "pages/projects/alpha.toml", ALPHA);
    write_png(root, "pages/projects/img/wide.png", 1600, 400);
}

#[test]
fn config_language_selects_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let initial = Config {
        general: GeneralConfig {
            language: Some("ko".to_string()),
            theme: None,
        },
        viewer: ViewerConfig {
            wheel_polarity: WheelPolarity::Inverted,
            ..ViewerConfig::default()
        },
    };
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, initial);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ko");

    let overridden = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(overridden.current_locale().to_string(), "en-US");
}

#[tokio::test]
async fn project_page_loads_with_rewritten_sidebar() {
    let dir = tempdir().expect("temp dir");
    write_site(dir.path());
    let root = dir.path().to_path_buf();
    let location = PageLocation::project("alpha.toml");

    let page = site::load_page(root.clone(), location.clone())
        .await
        .expect("load page");
    let partial = site::load_sidebar(root, location.clone())
        .await
        .expect("load sidebar");
    let sidebar = ResolvedSidebar::rewrite(&partial, &location);

    assert_eq!(page.page.title, "Alpha");
    assert_eq!(sidebar.home.href, "../../index.toml");
    let hrefs: Vec<_> = sidebar.projects.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(
        hrefs,
        ["../../pages/projects/alpha.toml", "../../pages/projects/beta.toml"]
    );
    let active: Vec<_> = sidebar
        .projects
        .iter()
        .filter(|l| ResolvedSidebar::is_active(l, &location))
        .map(|l| l.label.as_str())
        .collect();
    assert_eq!(active, ["Alpha"]);
}

#[tokio::test]
async fn home_page_reaches_sidebar_without_climbing() {
    let dir = tempdir().expect("temp dir");
    write_site(dir.path());

    let partial = site::load_sidebar(dir.path().to_path_buf(), PageLocation::home())
        .await
        .expect("load sidebar");
    let sidebar = ResolvedSidebar::rewrite(&partial, &PageLocation::home());

    assert_eq!(sidebar.home.href, "index.toml");
    assert_eq!(sidebar.projects[1].href, "pages/projects/beta.toml");
}

#[tokio::test]
async fn lightbox_bounds_width_after_probe() {
    let dir = tempdir().expect("temp dir");
    write_site(dir.path());
    let loaded = site::load_page(dir.path().to_path_buf(), PageLocation::project("alpha.toml"))
        .await
        .expect("load page");
    let section = &loaded.page.sections[0];
    let fixture = ModalFixture::wire(section.modal.as_ref(), "Gallery");
    assert!(fixture.is_some());

    let thumbnail = &section.images[0];
    let source = loaded.image_path(thumbnail);
    let mut cache = DimensionCache::default();
    let mut viewer = ViewerState::new(Config::default().viewer_settings(), 1000.0);

    let OpenOutcome::NeedsProbe(ticket) =
        viewer.open(source.clone(), thumbnail.caption.clone(), cache.get(&source))
    else {
        panic!("first open has no cached size");
    };
    let size = dimensions::probe_async(source.clone()).await.expect("probe");
    cache.insert(source.clone(), size);
    assert!(viewer.dimensions_loaded(ticket, size));
    assert_eq!(viewer.content_max_width(), Some(900.0));

    viewer.on_wheel(WheelDirection::Away);
    assert_eq!(viewer.transform().to_string(), "translate(0px, 0px) scale(1.15)");

    viewer.close();
    let reopened = viewer.open(source.clone(), None, cache.get(&source));
    assert_eq!(reopened, OpenOutcome::Ready);
    assert_eq!(viewer.zoom(), 1.0);
}

#[tokio::test]
async fn missing_sidebar_is_an_error_not_a_panic() {
    let dir = tempdir().expect("temp dir");
    write_file(dir.path(), "index.toml", "title = \"Home\"\n");

    let result = site::load_sidebar(dir.path().to_path_buf(), PageLocation::home()).await;
    assert!(result.is_err());
}

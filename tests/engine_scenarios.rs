//! End-to-end scenarios through the public API: load a catalog, drive the
//! selection state, and check the render tree.

use std::path::Path;

use portico::{
    Catalog, CatalogStore, EngineOptions, LinkKind, RenderTree, Selection, render,
};

fn fixture_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/catalog.json"
    ))
}

fn ready_store() -> CatalogStore {
    let store = CatalogStore::load_from_path(fixture_path());
    assert!(store.catalog().is_some(), "fixture catalog must load");
    store
}

#[test]
fn scenario_search_highlights_and_classifies() {
    // Catalog with one matching item; query "lundi" must return the Aide
    // section, highlight "Lundi" in the text, and classify the link.
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    sel.set_query("lundi");

    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    assert_eq!(view.portal, "SEN");
    assert_eq!(view.sections.len(), 1);

    let section = &view.sections[0];
    assert_eq!(section.title, "Aide");
    assert_eq!(section.color, Some("#2a9d8f"));

    let item = &section.items[0];
    assert_eq!(item.label, "Horaires");
    let matched: Vec<&str> = item
        .text_spans
        .iter()
        .filter(|s| s.is_match)
        .map(|s| s.text)
        .collect();
    assert_eq!(matched, vec!["Lundi"]);

    assert_eq!(item.links.len(), 1);
    assert_eq!(item.links[0].kind, LinkKind::Navigable);
    assert_eq!(item.links[0].text(), "https://x.test");
}

#[test]
fn scenario_no_results_for_unmatched_query() {
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    sel.set_query("zzz");

    assert_eq!(
        render(&store, &sel, &EngineOptions::default()),
        RenderTree::NoResults {
            portal: "SEN",
            query: "zzz"
        }
    );
}

#[test]
fn scenario_no_portal_selected_wins_over_everything() {
    let store = ready_store();
    let mut sel = Selection::new();
    sel.set_query("lundi");

    assert_eq!(
        render(&store, &sel, &EngineOptions::default()),
        RenderTree::NoPortalSelected
    );
}

#[test]
fn scenario_load_failure_is_surfaced_not_swallowed() {
    let store = CatalogStore::load_from_path(Path::new("/definitely/not/here.json"));
    let mut sel = Selection::new();
    sel.select_portal("SEN");

    let tree = render(&store, &sel, &EngineOptions::default());
    let RenderTree::LoadFailed { message } = tree else {
        panic!("expected load failure, got {tree:?}");
    };
    assert!(message.contains("catalog fetch failed"));
}

#[test]
fn scenario_pending_load_renders_placeholder() {
    let store = CatalogStore::new();
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    sel.set_query("lundi");

    assert_eq!(
        render(&store, &sel, &EngineOptions::default()),
        RenderTree::Loading
    );
}

#[test]
fn scenario_name_alias_and_empty_link_dropped() {
    // The Contacts section uses the "name" field variant and carries one
    // empty link entry.
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SEN");

    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    let contacts = view
        .sections
        .iter()
        .find(|s| s.title == "Contacts")
        .expect("Contacts section present");
    assert_eq!(contacts.items[0].links.len(), 1);
    assert_eq!(contacts.items[0].links[0].kind, LinkKind::Navigable);
}

#[test]
fn scenario_uppercase_scheme_is_navigable() {
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SFP");

    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    let link = &view.sections[0].items[0].links[0];
    assert_eq!(link.kind, LinkKind::Navigable);
    assert_eq!(link.text(), "HTTPS://formations.test/catalogue");
}

#[test]
fn scenario_open_close_escape_roundtrip() {
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    assert!(sel.open_section("Aide"));

    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    assert_eq!(view.open.as_ref().map(|s| s.title), Some("Aide"));

    // Escape / close button / backdrop all funnel into close_section.
    sel.close_section();
    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    assert!(view.open.is_none());
    assert!(view.sections.iter().all(|s| !s.is_open));
}

#[test]
fn scenario_reset_returns_to_initial_state() {
    let store = ready_store();
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    sel.open_section("Aide");
    sel.set_query("lundi");

    sel.reset();
    assert_eq!(sel.query(), "");
    assert_eq!(
        render(&store, &sel, &EngineOptions::default()),
        RenderTree::NoPortalSelected
    );
}

#[test]
fn scenario_inline_catalog_matches_fixture_behavior() {
    // The exact catalog literal from the contract, loaded from a string
    // instead of a file.
    let catalog = Catalog::from_json_str(
        r#"{"SEN":[{"title":"Aide","items":[{"label":"Horaires","text":"Lundi-Vendredi","links":["https://x.test"]}]}]}"#,
    )
    .unwrap();
    let store = CatalogStore::with_catalog(catalog);
    let mut sel = Selection::new();
    sel.select_portal("SEN");
    sel.set_query("lundi");

    let RenderTree::Portal(view) = render(&store, &sel, &EngineOptions::default()) else {
        panic!("expected portal view");
    };
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].items.len(), 1);
}

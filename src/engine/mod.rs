//! Filter-and-render engine.
//!
//! `render` is a pure function of (store, selection, options): it computes
//! the visible subset of the active portal and annotates every displayed
//! string with highlight spans. No internal state, no side effects beyond
//! trace logging, so identical inputs always produce identical trees.

mod filter;
mod view;

pub use view::{ItemView, LinkView, PortalView, RenderTree, SectionView};

use filter::{item_matches, section_matches};

use crate::catalog::{CatalogStore, Item, LoadState, Section};
use crate::highlight::highlight;
use crate::link::{classify, is_displayable};
use crate::query::Query;
use crate::selection::Selection;

/// Display-variant switches.
///
/// The source material ships several near-duplicate renditions of the same
/// logic (tile-only, tile+accordion, tile+side-panel); these two switches
/// cover the behavioral differences so one engine serves all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// When set, a matching section shows all of its items; when unset,
    /// items are sub-filtered inside matching sections (a section whose own
    /// title matches still keeps all items).
    pub section_granular_filter: bool,
    /// When set, the open detail panel additionally filters its items by
    /// the per-item predicate, independently of section-level inclusion.
    pub item_sub_filter_in_panel: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            section_granular_filter: true,
            item_sub_filter_in_panel: true,
        }
    }
}

/// Compute the render tree for the current store and selection.
#[must_use]
pub fn render<'a>(
    store: &'a CatalogStore,
    selection: &'a Selection,
    options: &EngineOptions,
) -> RenderTree<'a> {
    let catalog = match store.state() {
        LoadState::Loading => return RenderTree::Loading,
        LoadState::Failed(error) => {
            return RenderTree::LoadFailed {
                message: error.to_string(),
            };
        }
        LoadState::Ready(catalog) => catalog,
    };

    let Some(portal) = selection.portal() else {
        return RenderTree::NoPortalSelected;
    };

    let query = Query::new(selection.query());
    let all = catalog.sections(portal);

    let mut sections = Vec::new();
    for section in all {
        if !section_matches(section, &query) {
            continue;
        }
        let keep_all_items = options.section_granular_filter
            || query.is_empty()
            || query.matches(&section.title);
        let is_open = selection.section() == Some(section.title.as_str());
        sections.push(section_view(section, &query, keep_all_items, is_open));
    }

    tracing::debug!(
        portal = %portal,
        query = %query.raw(),
        visible = sections.len(),
        total = all.len(),
        "filtered sections"
    );

    if sections.is_empty() {
        return RenderTree::NoResults {
            portal,
            query: selection.query(),
        };
    }

    let open = selection
        .section()
        .and_then(|title| catalog.section(portal, title))
        .map(|section| open_view(section, &query, options));

    RenderTree::Portal(PortalView {
        portal,
        sections,
        open,
    })
}

fn section_view<'a>(
    section: &'a Section,
    query: &Query,
    keep_all_items: bool,
    is_open: bool,
) -> SectionView<'a> {
    let items = section
        .items
        .iter()
        .filter(|item| keep_all_items || item_matches(item, query))
        .map(|item| item_view(item, query))
        .collect();

    SectionView {
        title: &section.title,
        title_spans: highlight(&section.title, query),
        color: section.color.as_deref(),
        is_open,
        items,
    }
}

fn open_view<'a>(section: &'a Section, query: &Query, options: &EngineOptions) -> SectionView<'a> {
    let sub_filter = options.item_sub_filter_in_panel && !query.is_empty();
    let items = section
        .items
        .iter()
        .filter(|item| !sub_filter || item_matches(item, query))
        .map(|item| item_view(item, query))
        .collect();

    SectionView {
        title: &section.title,
        title_spans: highlight(&section.title, query),
        color: section.color.as_deref(),
        is_open: true,
        items,
    }
}

fn item_view<'a>(item: &'a Item, query: &Query) -> ItemView<'a> {
    ItemView {
        label: &item.label,
        label_spans: highlight(&item.label, query),
        text_spans: highlight(&item.text, query),
        links: item
            .links
            .iter()
            .filter(|link| is_displayable(link))
            .map(|link| LinkView {
                spans: highlight(link, query),
                kind: classify(link),
            })
            .collect(),
    }
}

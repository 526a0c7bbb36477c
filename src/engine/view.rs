//! Render-ready output of the engine.
//!
//! These types are data, not markup: the presentation layer owns escaping,
//! layout, and the visual treatment of emphasized spans. Everything borrows
//! from the catalog and the selection, so a render allocates only the
//! tree itself.

use crate::highlight::Span;
use crate::link::LinkKind;

/// The complete result of one render computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderTree<'a> {
    /// The catalog load has not resolved; show a loading placeholder.
    Loading,
    /// The catalog load failed; show a persistent message. Distinct from
    /// `NoResults`: a failed load is never rendered as an empty catalog.
    LoadFailed { message: String },
    /// No portal selected; nothing to show regardless of query or catalog.
    NoPortalSelected,
    /// The active portal with its visible sections.
    Portal(PortalView<'a>),
    /// The current filter yields nothing for the active portal. An
    /// informational state, not an error.
    NoResults { portal: &'a str, query: &'a str },
}

/// Visible content of the active portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalView<'a> {
    pub portal: &'a str,
    /// Sections that pass the filter, in catalog order.
    pub sections: Vec<SectionView<'a>>,
    /// The open detail panel, if a section is open. Computed independently
    /// of section-level filtering so a query cannot close the panel.
    pub open: Option<SectionView<'a>>,
}

/// One section, ready to render as a tile or panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub title: &'a str,
    pub title_spans: Vec<Span<'a>>,
    /// Display hint passed through untouched.
    pub color: Option<&'a str>,
    /// Whether this section is the open one (accordion/panel variants).
    pub is_open: bool,
    pub items: Vec<ItemView<'a>>,
}

/// One item within a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub label: &'a str,
    pub label_spans: Vec<Span<'a>>,
    pub text_spans: Vec<Span<'a>>,
    /// Displayable links only; empty entries are already dropped.
    pub links: Vec<LinkView<'a>>,
}

/// One link entry with its presentation classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView<'a> {
    pub spans: Vec<Span<'a>>,
    pub kind: LinkKind,
}

impl<'a> LinkView<'a> {
    /// The raw link text, reassembled from its spans.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text).collect()
    }

    /// Whether this link should get a navigation affordance.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.kind == LinkKind::Navigable
    }
}

//! Catalog data model: portals, sections, and items.
//!
//! A catalog is a static JSON document mapping portal keys (e.g. `"SEN"`,
//! `"SFP"`) to ordered lists of sections, each holding items with a label,
//! free text, and links. The catalog is decoded once and never mutated;
//! everything downstream only reads it.

mod store;

pub use store::{CatalogStore, LoadState};

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::io;

use serde::Deserialize;

use crate::error::Result;

/// A single label/text/links entry within a section.
///
/// `text` and `links` are optional in the document; absence decodes as empty
/// rather than as a failure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A named group of items within a portal.
///
/// The canonical field name is `title`; `name` is accepted as an alias
/// because both shapes exist in the wild. `color` is a display hint passed
/// through untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Section {
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The full loaded dataset: portal key to ordered sections.
///
/// Immutable after decoding. Lookup by an absent portal key yields an empty
/// slice, never an error.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    portals: BTreeMap<String, Vec<Section>>,
}

impl Catalog {
    /// Decode a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.warn_duplicate_titles();
        Ok(catalog)
    }

    /// Decode a catalog from a reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.warn_duplicate_titles();
        Ok(catalog)
    }

    /// Sections of a portal, in document order.
    ///
    /// An absent portal key is a normal "nothing to show" case and yields an
    /// empty slice.
    #[must_use]
    pub fn sections(&self, portal: &str) -> &[Section] {
        self.portals.get(portal).map_or(&[], Vec::as_slice)
    }

    /// Look up a section of a portal by title.
    ///
    /// When two sections in the same portal share a title, the first one in
    /// document order wins; duplicates are reported at decode time.
    #[must_use]
    pub fn section(&self, portal: &str, title: &str) -> Option<&Section> {
        self.sections(portal).iter().find(|s| s.title == title)
    }

    /// Portal keys in deterministic (sorted) order.
    pub fn portal_keys(&self) -> impl Iterator<Item = &str> {
        self.portals.keys().map(String::as_str)
    }

    /// Whether a portal key exists in the catalog.
    #[must_use]
    pub fn contains_portal(&self, portal: &str) -> bool {
        self.portals.contains_key(portal)
    }

    /// Number of portals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.portals.len()
    }

    /// Check if the catalog holds no portals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }

    fn warn_duplicate_titles(&self) {
        for (portal, sections) in &self.portals {
            let mut seen = HashSet::with_capacity(sections.len());
            for section in sections {
                if !seen.insert(section.title.as_str()) {
                    tracing::warn!(
                        portal = %portal,
                        title = %section.title,
                        "duplicate section title; selection by title resolves to the first"
                    );
                }
            }
        }
    }
}

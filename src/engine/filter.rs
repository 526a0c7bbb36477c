//! Matching predicates for sections and items.

use crate::catalog::{Item, Section};
use crate::query::Query;

/// An item matches when its label, its text, or any of its links contains
/// the query. Empty queries match everything.
pub(crate) fn item_matches(item: &Item, query: &Query) -> bool {
    query.matches(&item.label)
        || query.matches(&item.text)
        || item.links.iter().any(|link| query.matches(link))
}

/// A section matches when its title contains the query or any of its items
/// match. Matching is section-granular: inclusion is decided here, item
/// visibility inside the section is the engine's concern.
pub(crate) fn section_matches(section: &Section, query: &Query) -> bool {
    query.matches(&section.title) || section.items.iter().any(|item| item_matches(item, query))
}

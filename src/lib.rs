//! Portico - portal catalog browser engine.
//!
//! Loads a static JSON catalog of portals, sections, and items, then
//! computes what to display for a given portal, free-text query, and
//! selection state: filtered sections, match-highlight spans for every
//! displayed string, and a navigable/informational classification per link.
//! The output is a render-ready tree of plain data; presentation layers own
//! markup, styling, and event wiring.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow LinkKind, LinkView etc
#![allow(clippy::missing_errors_doc)] // Error conditions are on the Error type
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod catalog;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod link;
pub mod query;
pub mod selection;

// Re-export core types at crate root
pub use catalog::{Catalog, CatalogStore, Item, LoadState, Section};
pub use error::{Error, Result};
pub use highlight::{Span, highlight};
pub use link::{LinkKind, classify, is_displayable};
pub use query::Query;
pub use selection::{Focus, Selection};

// Re-export the engine surface
pub use engine::{
    EngineOptions, ItemView, LinkView, PortalView, RenderTree, SectionView, render,
};

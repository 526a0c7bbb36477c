//! UI selection state: active portal, open section, query.
//!
//! The presentation layer turns raw input events (clicks, keystrokes,
//! Escape) into these transitions; the engine is a pure function of the
//! resulting state, so nothing here renders anything.

/// Which part of the catalog the user is looking at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// No portal selected yet; nothing is shown.
    #[default]
    None,
    /// A portal is active and its sections are shown.
    Portal(String),
    /// A portal is active and one of its sections is open in the
    /// detail panel. At most one section is ever open.
    Section { portal: String, section: String },
}

/// The full UI-selection state driving a render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    focus: Focus,
    query: String,
}

impl Selection {
    /// Fresh state: no portal, no open section, empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current focus.
    #[must_use]
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// The active portal key, if any.
    #[must_use]
    pub fn portal(&self) -> Option<&str> {
        match &self.focus {
            Focus::None => None,
            Focus::Portal(portal) | Focus::Section { portal, .. } => Some(portal),
        }
    }

    /// The open section title, if a section is open.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        match &self.focus {
            Focus::Section { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Current raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a portal. Any open section is closed; the query is kept.
    pub fn select_portal(&mut self, portal: impl Into<String>) {
        self.focus = Focus::Portal(portal.into());
    }

    /// Open a section of the active portal, replacing any other open
    /// section.
    ///
    /// Returns `false` (and does nothing) when no portal is active.
    pub fn open_section(&mut self, section: impl Into<String>) -> bool {
        let Some(portal) = self.portal() else {
            return false;
        };
        self.focus = Focus::Section {
            portal: portal.to_string(),
            section: section.into(),
        };
        true
    }

    /// Close the open section (close button, Escape, backdrop click),
    /// returning to the portal view. No-op when nothing is open.
    pub fn close_section(&mut self) {
        if let Focus::Section { portal, .. } = &self.focus {
            self.focus = Focus::Portal(portal.clone());
        }
    }

    /// Full reset: back to no portal and an empty query.
    pub fn reset(&mut self) {
        self.focus = Focus::None;
        self.query.clear();
    }

    /// Replace the query text. Never changes the focus.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

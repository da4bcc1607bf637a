//! Structured navigation links.

use crate::window::Regime;
use serde::Serialize;

/// What a link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    First,
    Prev,
    /// A numbered entry of the visible window.
    Page,
    Next,
    Last,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Page => "page",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub kind: LinkKind,
    /// Destination page.
    pub page: u64,
    pub label: String,
    pub href: String,
    /// Set on the window entry for the current page.
    pub active: bool,
}

/// Navigation links in display order: first, prev, window, next, last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    regime: Option<Regime>,
    links: Vec<Link>,
}

impl LinkSet {
    pub(crate) fn new(regime: Option<Regime>, links: Vec<Link>) -> Self {
        Self { regime, links }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    /// The single link of `kind`; for [`LinkKind::Page`] the first one.
    pub fn get(&self, kind: LinkKind) -> Option<&Link> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// Window entries in ascending page order.
    pub fn window(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| l.kind == LinkKind::Page)
    }

    pub fn window_pages(&self) -> Vec<u64> {
        self.window().map(|l| l.page).collect()
    }

    /// The window entry marked active, if the current page is visible.
    pub fn active(&self) -> Option<&Link> {
        self.links.iter().find(|l| l.active)
    }

    /// Which window placement produced the numbered entries.
    pub fn regime(&self) -> Option<Regime> {
        self.regime
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

//! Selection of the page numbers shown around the current page.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Placement strategy for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Anchored at page 1.
    Beginning,
    /// Anchored at the last page.
    End,
    /// Floating around the current page.
    Middle,
}

/// A non-empty, contiguous run of page numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    regime: Regime,
    first: u64,
    last: u64,
}

impl Window {
    /// Choose the window for `current_page` out of `1..=last_page`.
    ///
    /// Returns `None` when no page-number list should be shown at all:
    /// a zero width, a single page, or fewer pages than the width.
    ///
    /// With `before = ceil(width / 2)` and `after = floor(width / 2)` the
    /// regimes are tried in order:
    ///
    /// * beginning, when `current_page <= before`: `1..=width`
    /// * end, when `last_page - current_page <= after`: the last `width` pages
    /// * middle, otherwise: `width` pages starting at `current_page - before`
    pub fn select(current_page: u64, last_page: u64, width: u64) -> Option<Self> {
        if width == 0 || last_page == 1 || last_page < width {
            return None;
        }

        let before = width.div_ceil(2);
        let after = width / 2;

        let (regime, first) = if current_page <= before {
            (Regime::Beginning, 1)
        } else if last_page <= current_page.saturating_add(after) {
            // Also catches pages past the end.
            (Regime::End, last_page - width + 1)
        } else {
            (Regime::Middle, current_page - before)
        };

        let window = Self {
            regime,
            first,
            last: first + width - 1,
        };
        tracing::trace!(
            current_page,
            last_page,
            width,
            regime = ?window.regime,
            first = window.first,
            last = window.last,
            "selected page window"
        );
        Some(window)
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Lowest page in the window.
    pub fn first(&self) -> u64 {
        self.first
    }

    /// Highest page in the window.
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Page numbers in ascending order.
    pub fn pages(&self) -> RangeInclusive<u64> {
        self.first..=self.last
    }

    pub fn len(&self) -> u64 {
        self.last - self.first + 1
    }

    pub fn contains(&self, page: u64) -> bool {
        self.pages().contains(&page)
    }
}

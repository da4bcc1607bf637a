//! Pagination state and navigation links for Folio.
//!
//! A [`PaginationConfig`] and the request's [`RequestParams`] go in; a
//! [`PaginationState`] comes out, carrying the page arithmetic, the visible
//! page-number [`Window`] and a [`LinkSet`] of first/prev/window/next/last
//! links whose query strings preserve every unrelated request parameter.
//! Malformed request values never fail, they fall back to defaults.
//!
//! ```
//! use folio_pagination::{PaginationConfig, PaginationState, RequestParams};
//!
//! let config = PaginationConfig::builder(200)
//!     .visible_page_numbers(5)
//!     .build()
//!     .unwrap();
//! let params = RequestParams::parse("q=shoes&page=3&perpage=20");
//! let state = PaginationState::new(&config, &params);
//!
//! assert_eq!(state.last_page(), 10);
//! assert_eq!(state.offset(), 40);
//! assert_eq!(state.links().window_pages(), vec![1, 2, 3, 4, 5]);
//! ```

pub mod arithmetic;
pub mod config;
pub mod form;
pub mod links;
pub mod params;
pub mod query;
pub mod render;
pub mod state;
pub mod window;

pub use arithmetic::{effective_rows_per_page, offset};
pub use config::{PaginationConfig, PaginationConfigBuilder};
pub use form::{HiddenField, PerPageForm, SizeOption};
pub use links::{Link, LinkKind, LinkSet};
pub use params::RequestParams;
pub use query::{BaseUrl, QueryBuilder, RelativeUrl, UrlBuilder};
pub use render::{HtmlRenderer, JsonRenderer, Renderer};
pub use state::PaginationState;
pub use window::{Regime, Window};

/// Shorthand for [`PaginationState::new`] from a raw query string.
pub fn paginate(config: &PaginationConfig, query: &str) -> PaginationState {
    PaginationState::new(config, &RequestParams::parse(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_matches_state() {
        let config = PaginationConfig::new(95);
        let params = RequestParams::parse("page=4");
        assert_eq!(paginate(&config, "page=4"), PaginationState::new(&config, &params));
    }

    #[test]
    fn test_standalone_offset() {
        let config = PaginationConfig::new(1000);
        let params = RequestParams::parse("page=3&perpage=25");
        assert_eq!(effective_rows_per_page(&config, &params), 25);
        assert_eq!(offset(&config, &params), 50);
    }

    #[test]
    fn test_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaginationState>();
        assert_send_sync::<PaginationConfig>();
        assert_send_sync::<LinkSet>();
    }
}

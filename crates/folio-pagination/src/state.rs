//! Per-request pagination state.

use crate::arithmetic;
use crate::config::PaginationConfig;
use crate::form::PerPageForm;
use crate::links::{Link, LinkKind, LinkSet};
use crate::params::RequestParams;
use crate::query::{QueryBuilder, RelativeUrl, UrlBuilder};
use crate::window::Window;
use folio_common_config::PerPageFormSettings;
use folio_common_log::spans::pagination_span;
use serde::Serialize;

/// Everything derived from one configuration and one set of request
/// parameters. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    total_records: u64,
    rows_per_page: u64,
    current_page: u64,
    prev_page: u64,
    next_page: u64,
    last_page: u64,
    offset: u64,
    #[serde(skip)]
    window: Option<Window>,
    #[serde(skip)]
    page_param: String,
    #[serde(skip)]
    size_param: String,
    /// The request the links were built from; the page-size form reuses it.
    #[serde(skip)]
    params: RequestParams,
    links: LinkSet,
}

impl PaginationState {
    /// Derive the state with relative (`?query`) link targets.
    pub fn new(config: &PaginationConfig, params: &RequestParams) -> Self {
        Self::with_url_builder(config, params, &RelativeUrl)
    }

    /// Derive the state, turning query strings into hrefs with `urls`.
    pub fn with_url_builder(
        config: &PaginationConfig,
        params: &RequestParams,
        urls: &dyn UrlBuilder,
    ) -> Self {
        let total_records = config.total_records();
        let rows_per_page = arithmetic::effective_rows_per_page(config, params);
        let last_page = arithmetic::last_page(total_records, rows_per_page);
        let current_page =
            arithmetic::clamp_page(config, arithmetic::requested_page(config, params), last_page);

        let _span = pagination_span(total_records, current_page).entered();

        let window = Window::select(current_page, last_page, config.visible_page_numbers());

        let mut state = Self {
            total_records,
            rows_per_page,
            current_page,
            prev_page: current_page - 1,
            next_page: current_page.saturating_add(1),
            last_page,
            offset: (current_page - 1).saturating_mul(rows_per_page),
            window,
            page_param: config.page_param().to_string(),
            size_param: config.size_param().to_string(),
            params: params.clone(),
            links: LinkSet::default(),
        };

        state.links = state.build_links(config, urls);
        tracing::debug!(
            rows_per_page,
            last_page,
            offset = state.offset,
            links = state.links.len(),
            "derived pagination state"
        );
        state
    }

    fn build_links(&self, config: &PaginationConfig, urls: &dyn UrlBuilder) -> LinkSet {
        if !self.is_paginated() {
            return LinkSet::default();
        }

        let query = QueryBuilder::new(
            &self.params,
            config.page_param(),
            config.size_param(),
            self.rows_per_page,
        );
        let link = |kind: LinkKind, page: u64, label: &str| Link {
            kind,
            page,
            label: label.to_string(),
            href: urls.build_url(&query.for_page(page)),
            active: false,
        };

        let labels = config.labels();
        let mut links = Vec::new();

        if self.has_prev() {
            links.push(link(LinkKind::First, 1, &labels.first));
            links.push(link(LinkKind::Prev, self.prev_page, &labels.prev));
        }

        if let Some(window) = &self.window {
            links.extend(window.pages().map(|page| Link {
                active: page == self.current_page,
                ..link(LinkKind::Page, page, &page.to_string())
            }));
        }

        if self.has_next() {
            links.push(link(LinkKind::Next, self.next_page, &labels.next));
            links.push(link(LinkKind::Last, self.last_page, &labels.last));
        }

        LinkSet::new(self.window.as_ref().map(Window::regime), links)
    }

    /// Whether there is more than one page worth of records.
    pub fn is_paginated(&self) -> bool {
        self.last_page != 0 && self.total_records > self.rows_per_page
    }

    /// First and previous links are shown.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Next and last links are shown.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn rows_per_page(&self) -> u64 {
        self.rows_per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// `current_page - 1`; 0 on the first page.
    pub fn prev_page(&self) -> u64 {
        self.prev_page
    }

    pub fn next_page(&self) -> u64 {
        self.next_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Rows to skip for the current page, for a LIMIT/OFFSET query.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The numbered window, when one is shown.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    /// The page-size selector for this request, if it should be shown.
    ///
    /// Hidden fields come from the same parameters as the link query strings.
    pub fn per_page_form(&self, settings: &PerPageFormSettings) -> Option<PerPageForm> {
        PerPageForm::build(
            settings,
            &self.params,
            &self.page_param,
            &self.size_param,
            self.total_records,
            self.rows_per_page,
        )
    }
}

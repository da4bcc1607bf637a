//! Page arithmetic: page size, current page, last page and row offset.
//!
//! Every function here is total. A parameter that is missing, empty, not a
//! plain run of ASCII digits, zero, or too large for `u64` is treated as
//! absent and the configured default applies.

use crate::config::PaginationConfig;
use crate::params::RequestParams;

/// Parse a strictly positive decimal integer.
pub fn parse_positive(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|&n| n > 0)
}

/// Rows per page for this request.
///
/// The size parameter wins when it is numeric and at most
/// `max_rows_per_page`; otherwise `default_rows_per_page`. Never zero.
pub fn effective_rows_per_page(config: &PaginationConfig, params: &RequestParams) -> u64 {
    let name = config.size_param();
    let Some(raw) = params.get(name) else {
        return config.default_rows_per_page();
    };

    match parse_positive(raw) {
        Some(rows) if rows <= config.max_rows_per_page() => rows,
        Some(rows) => {
            tracing::debug!(
                param = name,
                rows,
                max = config.max_rows_per_page(),
                "requested page size exceeds maximum, using default"
            );
            config.default_rows_per_page()
        }
        None => {
            tracing::debug!(param = name, value = raw, "ignoring non-numeric page size");
            config.default_rows_per_page()
        }
    }
}

/// Current page as requested, before any clamping. Never zero.
pub fn requested_page(config: &PaginationConfig, params: &RequestParams) -> u64 {
    let name = config.page_param();
    let Some(raw) = params.get(name) else {
        return 1;
    };

    parse_positive(raw).unwrap_or_else(|| {
        tracing::debug!(param = name, value = raw, "ignoring non-numeric page number");
        1
    })
}

/// `ceil(total_records / rows_per_page)`; 0 when there are no records.
pub fn last_page(total_records: u64, rows_per_page: u64) -> u64 {
    debug_assert!(rows_per_page > 0);
    total_records.div_ceil(rows_per_page.max(1))
}

/// Apply the clamping setting to a requested page once `last_page` is known.
pub fn clamp_page(config: &PaginationConfig, page: u64, last_page: u64) -> u64 {
    if !config.clamp_current_page() {
        return page;
    }

    let last = last_page.max(1);
    if page > last {
        tracing::debug!(page, last, "clamping page number to last page");
    }
    page.min(last)
}

/// Current page for this request, clamped when the config asks for it.
pub fn current_page(config: &PaginationConfig, params: &RequestParams) -> u64 {
    let page = requested_page(config, params);
    if !config.clamp_current_page() {
        return page;
    }

    let rows = effective_rows_per_page(config, params);
    clamp_page(config, page, last_page(config.total_records(), rows))
}

/// Rows to skip before the current page: `(current_page - 1) * rows_per_page`.
///
/// Saturates at `u64::MAX` for absurd page numbers.
pub fn offset(config: &PaginationConfig, params: &RequestParams) -> u64 {
    let rows = effective_rows_per_page(config, params);
    let page = clamp_page(
        config,
        requested_page(config, params),
        last_page(config.total_records(), rows),
    );
    (page - 1).saturating_mul(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::strategies;
    use proptest::prelude::*;
    use test_case::test_case;

    fn params(query: &str) -> RequestParams {
        RequestParams::parse(query)
    }

    #[test_case("7" => Some(7))]
    #[test_case("007" => Some(7))]
    #[test_case("0" => None ; "zero")]
    #[test_case("" => None ; "empty")]
    #[test_case("-2" => None ; "negative")]
    #[test_case("+2" => None ; "plus sign")]
    #[test_case("2.5" => None ; "decimal")]
    #[test_case(" 3" => None ; "leading space")]
    #[test_case("1e3" => None ; "exponent")]
    #[test_case("99999999999999999999999" => None ; "overflow")]
    fn test_parse_positive(raw: &str) -> Option<u64> {
        parse_positive(raw)
    }

    #[test]
    fn test_rows_per_page_from_request() {
        let config = PaginationConfig::new(100);
        assert_eq!(effective_rows_per_page(&config, &params("perpage=20")), 20);
        assert_eq!(effective_rows_per_page(&config, &params("perpage=99")), 99);
    }

    #[test]
    fn test_rows_per_page_falls_back() {
        let config = PaginationConfig::new(100);
        assert_eq!(effective_rows_per_page(&config, &params("")), 10);
        assert_eq!(effective_rows_per_page(&config, &params("perpage=100")), 10);
        assert_eq!(effective_rows_per_page(&config, &params("perpage=abc")), 10);
        assert_eq!(effective_rows_per_page(&config, &params("perpage=0")), 10);
    }

    #[test]
    fn test_custom_param_names() {
        let config = PaginationConfig::builder(100)
            .page_param("p")
            .size_param("n")
            .build()
            .unwrap();
        let request = params("page=4&perpage=30&p=2&n=25");
        assert_eq!(effective_rows_per_page(&config, &request), 25);
        assert_eq!(current_page(&config, &request), 2);
        assert_eq!(offset(&config, &request), 25);
    }

    #[test]
    fn test_current_page_not_clamped_by_default() {
        let config = PaginationConfig::new(50);
        assert_eq!(current_page(&config, &params("page=40")), 40);
        assert_eq!(offset(&config, &params("page=40")), 390);
    }

    #[test]
    fn test_current_page_clamped_when_enabled() {
        let config = PaginationConfig::builder(50)
            .clamp_current_page(true)
            .build()
            .unwrap();
        assert_eq!(current_page(&config, &params("page=40")), 5);
        assert_eq!(current_page(&config, &params("page=3")), 3);
        assert_eq!(offset(&config, &params("page=40")), 40);

        let empty = PaginationConfig::builder(0)
            .clamp_current_page(true)
            .build()
            .unwrap();
        assert_eq!(current_page(&empty, &params("page=9")), 1);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 10), 0);
        assert_eq!(last_page(1, 10), 1);
        assert_eq!(last_page(10, 10), 1);
        assert_eq!(last_page(11, 10), 2);
        assert_eq!(last_page(200, 10), 20);
    }

    #[test]
    fn test_offset_saturates() {
        let config = PaginationConfig::new(10);
        let request = params(&format!("page={}&perpage=50", u64::MAX));
        assert_eq!(offset(&config, &request), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_last_page_is_ceiling(total in 0u64..1_000_000, rows in 1u64..500) {
            let last = last_page(total, rows);
            prop_assert!(last * rows >= total);
            if last > 0 {
                prop_assert!((last - 1) * rows < total);
            }
        }

        #[test]
        fn prop_malformed_values_fall_back(raw in strategies::non_numeric()) {
            let config = PaginationConfig::new(1000);
            let mut request = RequestParams::new();
            request.insert("page", raw.clone());
            request.insert("perpage", raw);
            prop_assert_eq!(current_page(&config, &request), 1);
            prop_assert_eq!(effective_rows_per_page(&config, &request), 10);
            prop_assert_eq!(offset(&config, &request), 0);
        }

        #[test]
        fn prop_offset_matches_formula(page in 1u64..10_000, rows in 1u64..=99) {
            let config = PaginationConfig::new(1_000_000);
            let request = params(&format!("page={page}&perpage={rows}"));
            prop_assert_eq!(offset(&config, &request), (page - 1) * rows);
        }
    }
}

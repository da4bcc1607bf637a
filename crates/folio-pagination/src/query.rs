//! Query-string reconstruction for link targets.

use crate::params::RequestParams;
use url::form_urlencoded::{byte_serialize, Serializer};

/// Builds the query string for any destination page of one request.
///
/// Output has the shape `k1=v1&...&{size}={rows}&{page}={n}`: every request
/// parameter except the page and page-size ones, in their original order,
/// followed by the effective page size and the destination page. Names and
/// values are form-urlencoded from their exact bytes, so values that are not
/// UTF-8 come out as they came in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    preserved: String,
    page_param: String,
    size_param: String,
    rows_per_page: u64,
}

impl QueryBuilder {
    pub fn new(
        params: &RequestParams,
        page_param: &str,
        size_param: &str,
        rows_per_page: u64,
    ) -> Self {
        let preserved = params
            .preserved(page_param, size_param)
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Self {
            preserved,
            page_param: page_param.to_string(),
            size_param: size_param.to_string(),
            rows_per_page,
        }
    }

    /// Query string pointing at `page`.
    pub fn for_page(&self, page: u64) -> String {
        Serializer::new(self.preserved.clone())
            .append_pair(&self.size_param, &self.rows_per_page.to_string())
            .append_pair(&self.page_param, &page.to_string())
            .finish()
    }
}

fn encode(bytes: &[u8]) -> String {
    byte_serialize(bytes).collect()
}

/// Turns a query string into a link target.
///
/// This is the seam to the host application's URL conventions.
pub trait UrlBuilder {
    fn build_url(&self, query: &str) -> String;
}

/// `?{query}`, relative to the current document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeUrl;

impl UrlBuilder for RelativeUrl {
    fn build_url(&self, query: &str) -> String {
        format!("?{query}")
    }
}

/// `{base}?{query}` for a fixed path or absolute URL without a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    base: String,
}

impl BaseUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('?') {
            base.pop();
        }
        Self { base }
    }
}

impl UrlBuilder for BaseUrl {
    fn build_url(&self, query: &str) -> String {
        format!("{}?{}", self.base, query)
    }
}

impl<F> UrlBuilder for F
where
    F: Fn(&str) -> String,
{
    fn build_url(&self, query: &str) -> String {
        self(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::strategies;
    use proptest::prelude::*;

    #[test]
    fn test_overrides_page_and_size_only() {
        let params = RequestParams::parse("foo=bar&page=3&perpage=20");
        let query = QueryBuilder::new(&params, "page", "perpage", 20);
        assert_eq!(query.for_page(4), "foo=bar&perpage=20&page=4");
    }

    #[test]
    fn test_order_preserved_around_removed_params() {
        let params = RequestParams::parse("page=2&b=1&perpage=5&a=2");
        let query = QueryBuilder::new(&params, "page", "perpage", 10);
        assert_eq!(query.for_page(1), "b=1&a=2&perpage=10&page=1");
    }

    #[test]
    fn test_no_other_params() {
        let query = QueryBuilder::new(&RequestParams::new(), "page", "perpage", 10);
        assert_eq!(query.for_page(2), "perpage=10&page=2");
    }

    #[test]
    fn test_values_are_encoded() {
        let params: RequestParams = [("q", "red shoes"), ("brand", "A&B=C"), ("path", "a/b?")]
            .into_iter()
            .collect();
        let query = QueryBuilder::new(&params, "page", "perpage", 10);
        assert_eq!(
            query.for_page(2),
            "q=red+shoes&brand=A%26B%3DC&path=a%2Fb%3F&perpage=10&page=2"
        );
    }

    #[test]
    fn test_non_utf8_value_round_trips() {
        let params = RequestParams::parse("q=caf%E9&page=2");
        let query = QueryBuilder::new(&params, "page", "perpage", 10);
        assert_eq!(query.for_page(3), "q=caf%E9&perpage=10&page=3");
    }

    #[test]
    fn test_url_builders() {
        assert_eq!(RelativeUrl.build_url("page=2"), "?page=2");
        assert_eq!(BaseUrl::new("/items").build_url("page=2"), "/items?page=2");
        assert_eq!(BaseUrl::new("/items?").build_url("page=2"), "/items?page=2");

        let custom = |q: &str| format!("/search/{q}");
        assert_eq!(custom.build_url("page=2"), "/search/page=2");
    }

    proptest! {
        #[test]
        fn prop_round_trips_through_parse(
            extra in strategies::extra_params(),
            rows in 1u64..100,
            page in 1u64..1000,
        ) {
            let params: RequestParams = extra.clone().into_iter().collect();
            let query = QueryBuilder::new(&params, "page", "perpage", rows).for_page(page);

            let parsed: Vec<(String, String)> = RequestParams::parse(&query)
                .iter()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();

            let mut expected = extra;
            expected.push(("perpage".to_string(), rows.to_string()));
            expected.push(("page".to_string(), page.to_string()));
            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn prop_is_pure(extra in strategies::extra_params(), page in 1u64..50) {
            let params: RequestParams = extra.into_iter().collect();
            let a = QueryBuilder::new(&params, "page", "perpage", 10).for_page(page);
            let b = QueryBuilder::new(&params, "page", "perpage", 10).for_page(page);
            prop_assert_eq!(a, b);
        }
    }
}

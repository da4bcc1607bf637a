//! Request parameters as seen by the paginator.

use indexmap::IndexMap;
use percent_encoding::percent_decode;
use std::borrow::Cow;

/// Ordered, duplicate-free mapping of request parameter names to values.
///
/// Inserting a name that is already present replaces the value but keeps the
/// original position, so iteration order is the order in which names first
/// appeared.
///
/// Names and values are kept as the exact decoded bytes. A value that is not
/// UTF-8 (a Latin-1 `caf%E9`, say) survives into link query strings unchanged.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    entries: IndexMap<Vec<u8>, Vec<u8>>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. `+` decodes to a space and percent escapes
    /// to raw bytes; nothing is replaced when the result is not UTF-8.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(name), decode(value))
            })
            .collect()
    }

    /// Set `name` to `value`.
    pub fn insert(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Read a parameter by name. Values that are not UTF-8 read as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name.as_bytes())
            .and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.as_bytes())
    }

    /// All parameters in order, with invalid UTF-8 replaced for display.
    pub fn iter(&self) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (String::from_utf8_lossy(k), String::from_utf8_lossy(v)))
    }

    /// Parameters other than the page and page-size ones, in order, as raw bytes.
    ///
    /// Both link URLs and the page-size form carry exactly these.
    pub fn preserved<'a>(
        &'a self,
        page_param: &'a str,
        size_param: &'a str,
    ) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| {
                k.as_slice() != page_param.as_bytes() && k.as_slice() != size_param.as_bytes()
            })
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode(raw: &str) -> Vec<u8> {
    let plus_as_space: Vec<u8> = raw
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&plus_as_space).collect()
}

// Order matters; `IndexMap`'s own equality ignores it.
impl PartialEq for RequestParams {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for RequestParams {}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for RequestParams
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

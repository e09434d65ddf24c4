//! Lenient parsing of raw query-string values.
//!
//! None of these fail: they produce a best-effort value and leave
//! validation (required values, cardinality) to the handlers.

/// Parse a decimal integer, `None` when malformed
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Split on commas into integers, dropping fragments that do not parse.
///
/// `""` and `","` both yield an empty list.
pub fn parse_int_list(raw: &str) -> Vec<i32> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .filter_map(|item| item.parse::<i32>().ok())
        .collect()
}

/// Split on commas, keeping empty fragments of a non-empty input
pub fn parse_string_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(String::from).collect()
}

/// Raw query-string pairs in request order.
///
/// A repeated key resolves to its first occurrence, so duplicates never
/// reject a request.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

pub fn optional_int_list(raw: Option<&str>) -> Vec<i32> {
    raw.map(parse_int_list).unwrap_or_default()
}

pub fn optional_string_list(raw: Option<&str>) -> Vec<String> {
    raw.map(parse_string_list).unwrap_or_default()
}

//! Limit/offset pagination parameters for list endpoints.
//!
//! [`PageParams`] deserialises from query strings via serde. Both fields are
//! optional on the wire: an absent or blank value falls back to the default,
//! while a value that is present but not a 32-bit integer is a
//! deserialisation error the caller must surface as an input error.

use serde::{Deserialize, Deserializer, Serialize};

/// Page size applied when the caller does not supply a `limit`.
pub const DEFAULT_LIMIT: i32 = 10;

/// Offset applied when the caller does not supply an `offset`.
pub const DEFAULT_OFFSET: i32 = 0;

/// Limit/offset parameters accepted by paginated list endpoints.
///
/// # Examples
/// ```
/// use pagination::PageParams;
///
/// let page = PageParams::default();
/// assert_eq!(page.limit(), 10);
/// assert_eq!(page.offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_i32")]
    limit: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    offset: Option<i32>,
}

impl PageParams {
    /// Build parameters from explicit values.
    #[must_use]
    pub const fn new(limit: i32, offset: i32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Requested page size, defaulting to [`DEFAULT_LIMIT`].
    #[must_use]
    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Requested row offset, defaulting to [`DEFAULT_OFFSET`].
    #[must_use]
    pub fn offset(&self) -> i32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }
}

/// Accept `None` and `""` as "not supplied"; reject anything that is not a
/// 32-bit integer.
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("parsing int: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn from_query(value: serde_json::Value) -> Result<PageParams, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_supplied() {
        let page = from_query(json!({})).expect("empty query");
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), DEFAULT_OFFSET);
    }

    #[rstest]
    #[case(json!({ "limit": "2", "offset": "1" }), 2, 1)]
    #[case(json!({ "limit": "25" }), 25, 0)]
    #[case(json!({ "offset": "7" }), 10, 7)]
    fn supplied_values_override_defaults(
        #[case] query: serde_json::Value,
        #[case] limit: i32,
        #[case] offset: i32,
    ) {
        let page = from_query(query).expect("valid query");
        assert_eq!(page.limit(), limit);
        assert_eq!(page.offset(), offset);
    }

    #[rstest]
    fn blank_values_fall_back_to_defaults() {
        let page = from_query(json!({ "limit": "", "offset": "" })).expect("blank query");
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), DEFAULT_OFFSET);
    }

    #[rstest]
    #[case(json!({ "limit": "ten" }))]
    #[case(json!({ "offset": "9999999999999" }))]
    fn non_integer_values_are_rejected(#[case] query: serde_json::Value) {
        assert!(from_query(query).is_err());
    }

    #[rstest]
    fn explicit_constructor_round_trips() {
        let page = PageParams::new(5, 20);
        assert_eq!(page.limit(), 5);
        assert_eq!(page.offset(), 20);
    }
}

//! Canonical list-view query state.
//!
//! `QueryState` is the address-encodable representation of the invoice list's
//! filter text and page number. Any component may construct a new state and
//! request navigation to it; nothing is kept server-side between requests.

use url::form_urlencoded;

/// Default page when the address carries no usable `page` parameter.
pub const DEFAULT_PAGE: u32 = 1;

/// Filter text plus page number, recoverable from the address bar.
///
/// ## Invariants
/// - `page` is always at least 1.
/// - An empty `query` never appears in the encoded form as a literal
///   empty-string parameter; the key is omitted instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    query: String,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: DEFAULT_PAGE,
        }
    }
}

impl QueryState {
    /// Build a state from raw address parameters.
    ///
    /// An absent `query` means empty; an absent, non-numeric, or zero `page`
    /// means page 1.
    pub fn from_params(query: Option<&str>, page: Option<&str>) -> Self {
        let query = query.unwrap_or_default().to_owned();
        let page = page
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(DEFAULT_PAGE);
        Self { query, page }
    }

    /// Recover a state from an encoded query string such as `query=a&page=2`.
    pub fn parse(encoded: &str) -> Self {
        let mut query = None;
        let mut page = None;
        for (key, value) in form_urlencoded::parse(encoded.as_bytes()) {
            match key.as_ref() {
                "query" => query = Some(value.into_owned()),
                "page" => page = Some(value.into_owned()),
                _ => {}
            }
        }
        Self::from_params(query.as_deref(), page.as_deref())
    }

    /// Current filter text (empty when unfiltered).
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Current page number, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Replace the filter text, resetting pagination to the first page.
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
        }
    }

    /// Select a page without touching the filter text.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            query: self.query.clone(),
            page: page.max(DEFAULT_PAGE),
        }
    }

    /// Encode as a canonical query string.
    ///
    /// Empty filter text omits the `query` key entirely.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            serializer.append_pair("query", &self.query);
        }
        serializer.append_pair("page", &self.page.to_string());
        serializer.finish()
    }

    /// Encode as a navigation target under the given path.
    pub fn to_target(&self, path: &str) -> String {
        format!("{path}?{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, "", 1)]
    #[case(Some("acme"), Some("3"), "acme", 3)]
    #[case(Some("acme"), Some("not-a-number"), "acme", 1)]
    #[case(Some("acme"), Some("0"), "acme", 1)]
    #[case(None, Some("7"), "", 7)]
    fn from_params_applies_defaults(
        #[case] query: Option<&str>,
        #[case] page: Option<&str>,
        #[case] expected_query: &str,
        #[case] expected_page: u32,
    ) {
        let state = QueryState::from_params(query, page);
        assert_eq!(state.query(), expected_query);
        assert_eq!(state.page(), expected_page);
    }

    #[test]
    fn changing_query_resets_page() {
        let state = QueryState::from_params(Some("old"), Some("4"));
        let next = state.with_query("new");
        assert_eq!(next.query(), "new");
        assert_eq!(next.page(), 1);
    }

    #[test]
    fn changing_page_preserves_query() {
        let state = QueryState::from_params(Some("acme"), Some("2"));
        let next = state.with_page(5);
        assert_eq!(next.query(), "acme");
        assert_eq!(next.page(), 5);
    }

    #[test]
    fn empty_query_is_omitted_from_encoding() {
        let state = QueryState::from_params(None, Some("2"));
        assert_eq!(state.to_query_string(), "page=2");
    }

    #[test]
    fn encoding_round_trips_losslessly() {
        let state = QueryState::from_params(Some("a b&c"), Some("3"));
        let parsed = QueryState::parse(&state.to_query_string());
        assert_eq!(parsed, state);
    }

    #[test]
    fn target_joins_path_and_query_string() {
        let state = QueryState::from_params(Some("acme"), None);
        assert_eq!(
            state.to_target("/dashboard/invoices"),
            "/dashboard/invoices?query=acme&page=1"
        );
    }
}

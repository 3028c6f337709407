use std::collections::HashMap;

use larder_core::domain::recipe_filter::value_objects::Pagination;

/// Filter condition for a single field, from `filter[field]=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub value: String,
}

/// Parsed filter parameters
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Trimmed value of the first non-blank condition on `field`
    pub fn get(&self, field: &str) -> Option<String> {
        self.conditions
            .iter()
            .filter(|c| c.field == field)
            .map(|c| c.value.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Combined query parameters (filter, search, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub search: Option<String>,
    pub pagination: Pagination,
    /// `limit` as given, for endpoints with their own default
    pub raw_limit: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value
    /// - q=text
    /// - offset=0, limit=50 (malformed values fall back to the defaults)
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::new();

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[")
                && let Some(field) = filter_key.strip_suffix(']')
                && !field.is_empty()
                && !field.contains('[')
            {
                filter.conditions.push(FilterCondition {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
        filter.conditions.sort_by(|a, b| a.field.cmp(&b.field));

        let raw_limit = query_map.get("limit").cloned();

        Self {
            filter,
            search: query_map
                .get("q")
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            pagination: Pagination::from_raw(
                raw_limit.as_deref(),
                query_map.get("offset").map(String::as_str),
            ),
            raw_limit,
        }
    }

    /// `limit` parsed as `T`, `None` when absent or malformed
    pub fn limit_as<T: std::str::FromStr>(&self) -> Option<T> {
        self.raw_limit.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_parse_simple() {
        let params = QueryParams::from_query_map(&map(&[
            ("filter[name]", " Curry "),
            ("filter[diet]", "Vegan"),
        ]));
        assert_eq!(params.filter.conditions.len(), 2);
        assert_eq!(params.filter.get("name"), Some("Curry".to_string()));
        assert_eq!(params.filter.get("diet"), Some("Vegan".to_string()));
        assert_eq!(params.filter.get("missing"), None);
    }

    #[test]
    fn test_filter_ignores_nested_and_blank_values() {
        let params = QueryParams::from_query_map(&map(&[
            ("filter[name][ilike]", "curry"),
            ("filter[diet]", "  "),
        ]));
        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.get("diet"), None);
    }

    #[test]
    fn test_pagination_parse() {
        let params = QueryParams::from_query_map(&map(&[("offset", "10"), ("limit", "25")]));
        assert_eq!(params.pagination, Pagination::new(25, 10));
    }

    #[test]
    fn test_malformed_pagination_falls_back_to_defaults() {
        let params = QueryParams::from_query_map(&map(&[("offset", "-3"), ("limit", "ten")]));
        assert_eq!(params.pagination, Pagination::default());
        assert_eq!(params.limit_as::<u32>(), None);
    }

    #[test]
    fn test_search_query() {
        let params = QueryParams::from_query_map(&map(&[("q", " milk "), ("limit", "5")]));
        assert_eq!(params.search.as_deref(), Some("milk"));
        assert_eq!(params.limit_as::<u32>(), Some(5));

        let blank = QueryParams::from_query_map(&map(&[("q", "   ")]));
        assert_eq!(blank.search, None);
    }
}

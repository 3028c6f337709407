use axum::{extract::FromRequestParts, http::request::Parts};
use std::{collections::HashMap, convert::Infallible};

use super::query_params::QueryParams;

/// Query parameters of the request: `filter[...]`, `q`, `limit` and `offset`.
/// Never rejects; unparsable input yields defaults.
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl QueryParamsExtractor {
    pub fn from_query_string(query_string: &str) -> Self {
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        QueryParamsExtractor(QueryParams::from_query_map(&query_map))
    }
}

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query_string(parts.uri.query().unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::domain::recipe_filter::value_objects::Pagination;

    #[test]
    fn test_percent_encoded_filters_are_decoded() {
        let QueryParamsExtractor(params) =
            QueryParamsExtractor::from_query_string("filter%5Bname%5D=mac%20and%20cheese&limit=5");

        assert_eq!(params.filter.get("name"), Some("mac and cheese".to_string()));
        assert_eq!(params.pagination, Pagination::new(5, 0));
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let QueryParamsExtractor(params) = QueryParamsExtractor::from_query_string("");
        assert!(params.filter.is_empty());
        assert_eq!(params.pagination, Pagination::default());
    }
}

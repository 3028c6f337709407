use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const DEFAULT_PAGE_OFFSET: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Pagination {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Builds pagination from raw query values. Anything that is not a
    /// non-negative integer falls back to the default instead of failing.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: parse_or(limit, DEFAULT_PAGE_LIMIT),
            offset: parse_or(offset, DEFAULT_PAGE_OFFSET),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET)
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Recipe that survived filtering, flagged when it matches a soft diet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub boosted: bool,
}

impl RankedRecipe {
    pub fn plain(recipe: Recipe) -> Self {
        Self {
            recipe,
            boosted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipePage {
    pub results: Vec<RankedRecipe>,
    /// Size of the filtered set before slicing.
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl RecipePage {
    pub fn empty(pagination: Pagination) -> Self {
        Self {
            results: Vec::new(),
            total_count: 0,
            offset: pagination.offset,
            limit: pagination.limit,
            has_more: false,
        }
    }

    pub fn recipe_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .map(|r| r.recipe.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Normalized ingredient names the user explicitly searched for. Allergen
    /// filtering leaves these alone.
    pub explicit_query: BTreeSet<String>,
    pub pagination: Pagination,
}

impl FilterOptions {
    pub fn paginated(pagination: Pagination) -> Self {
        Self {
            explicit_query: BTreeSet::new(),
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_defaults() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::new(50, 0));
    }

    #[test]
    fn test_from_raw_parses_valid_values() {
        assert_eq!(
            Pagination::from_raw(Some("10"), Some(" 20 ")),
            Pagination::new(10, 20)
        );
        assert_eq!(Pagination::from_raw(Some("0"), None), Pagination::new(0, 0));
    }

    #[test]
    fn test_from_raw_falls_back_on_malformed_values() {
        assert_eq!(
            Pagination::from_raw(Some("ten"), Some("-5")),
            Pagination::new(50, 0)
        );
        assert_eq!(
            Pagination::from_raw(Some("1.5"), Some("")),
            Pagination::new(50, 0)
        );
    }

    #[test]
    fn test_page_serializes_expected_fields() {
        let page = RecipePage::empty(Pagination::default());
        let value = serde_json::to_value(&page).unwrap();
        for field in ["results", "total_count", "offset", "limit", "has_more"] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
    }
}

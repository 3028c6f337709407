use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRecipesValidator {
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    pub ingredients: Vec<String>,

    /// Diet applied instead of the profile diet for this search.
    #[serde(default)]
    pub diet: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestRecipesValidator {
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    pub ingredients: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "top_n must be between 1 and 50"))]
    pub top_n: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_requires_ingredients() {
        let payload: SearchRecipesValidator =
            serde_json::from_str(r#"{"ingredients": []}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: SearchRecipesValidator =
            serde_json::from_str(r#"{"ingredients": ["eggs"], "diet": "Vegan"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_ingredients_must_be_a_list() {
        assert!(serde_json::from_str::<SearchRecipesValidator>(r#"{"ingredients": "eggs"}"#).is_err());
    }

    #[test]
    fn test_suggest_top_n_range() {
        let payload: SuggestRecipesValidator =
            serde_json::from_str(r#"{"ingredients": ["eggs"], "top_n": 0}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: SuggestRecipesValidator =
            serde_json::from_str(r#"{"ingredients": ["eggs"]}"#).unwrap();
        assert!(payload.validate().is_ok());
    }
}

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet::{entities::DietKind, helpers::is_diet_compatible},
    ingredient::{
        entities::Ingredient,
        ports::{IngredientCatalog, IngredientService},
        value_objects::{
            DEFAULT_INGREDIENT_SEARCH_LIMIT, IngredientMatch, MAX_INGREDIENT_SEARCH_LIMIT,
            SearchIngredientsInput,
        },
    },
    pantry::{
        entities::UserDietaryProfile,
        ports::{ProfileRepository, StockRepository},
    },
    recipe::ports::{RecipeRepository, RecipeSuggester},
    rules::entities::DietaryRules,
};

impl<RR, IC, SR, PR, RS> IngredientService for Service<RR, IC, SR, PR, RS>
where
    RR: RecipeRepository,
    IC: IngredientCatalog,
    SR: StockRepository,
    PR: ProfileRepository,
    RS: RecipeSuggester,
{
    async fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> Result<Vec<IngredientMatch>, CoreError> {
        let query = input.query.trim().to_string();
        if query.is_empty() {
            return Err(CoreError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let limit = input
            .limit
            .unwrap_or(DEFAULT_INGREDIENT_SEARCH_LIMIT)
            .clamp(1, MAX_INGREDIENT_SEARCH_LIMIT);

        let (profile, hits) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.ingredient_catalog.search_ingredients(query, limit)
        )?;

        Ok(annotate_ingredients(hits, &profile, &self.rules))
    }
}

/// Flags each catalog hit against the profile. Nothing is removed.
pub fn annotate_ingredients(
    ingredients: Vec<Ingredient>,
    profile: &UserDietaryProfile,
    rules: &DietaryRules,
) -> Vec<IngredientMatch> {
    let unsafe_terms = rules.unsafe_terms(&profile.allergies);
    let allergies = profile.allergy_names();
    let hard_diet = profile
        .diet
        .as_deref()
        .filter(|diet| rules.classify_diet(diet) == DietKind::Hard);

    ingredients
        .into_iter()
        .map(|ingredient| {
            let is_safe = rules.is_safe(&ingredient.name, &unsafe_terms)
                && ingredient.allergens.is_disjoint(&allergies);
            let diet_compatible =
                hard_diet.is_none_or(|diet| is_diet_compatible(&ingredient.diets, diet));

            IngredientMatch {
                ingredient,
                is_safe,
                diet_compatible,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemoryStore, StaticRecipeSuggester, memory_service};
    use uuid::Uuid;

    fn store() -> MemoryStore {
        MemoryStore::new().with_ingredients([
            Ingredient::new(Uuid::new_v4(), "Milk"),
            Ingredient::new(Uuid::new_v4(), "Milk Chocolate"),
            Ingredient::new(Uuid::new_v4(), "Oat Milk").with_diets(["Vegan"]),
            Ingredient::new(Uuid::new_v4(), "Buttermilk").with_diets(["Vegetarian"]),
            Ingredient::new(Uuid::new_v4(), "Almond Milk").with_allergens(["tree nuts"]),
            Ingredient::new(Uuid::new_v4(), "Rice"),
        ])
    }

    fn input(user_id: Uuid, query: &str, limit: Option<u32>) -> SearchIngredientsInput {
        SearchIngredientsInput {
            user_id,
            query: query.to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_search_orders_exact_then_shorter_names() {
        let service = memory_service(store(), StaticRecipeSuggester::unavailable());

        let hits = service
            .search_ingredients(input(Uuid::new_v4(), " MILK ", None))
            .await
            .unwrap();

        let names: Vec<&str> = hits.iter().map(|h| h.ingredient.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["milk", "oat milk", "buttermilk", "almond milk", "milk chocolate"]
        );
        assert!(hits.iter().all(|h| h.is_safe && h.diet_compatible));
    }

    #[tokio::test]
    async fn test_search_annotates_against_profile() {
        let user_id = Uuid::new_v4();
        let store = store().with_profile(
            user_id,
            UserDietaryProfile {
                diet: Some("Vegan".to_string()),
                allergies: vec!["milk".to_string(), "Tree Nuts".to_string()],
            },
        );
        let service = memory_service(store, StaticRecipeSuggester::unavailable());

        let hits = service
            .search_ingredients(input(user_id, "milk", Some(10)))
            .await
            .unwrap();

        let flags: Vec<(&str, bool, bool)> = hits
            .iter()
            .map(|h| (h.ingredient.name.as_str(), h.is_safe, h.diet_compatible))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("milk", false, true),
                ("oat milk", false, true),
                ("buttermilk", false, false),
                ("almond milk", false, true),
                ("milk chocolate", true, true),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_limit_is_clamped() {
        let service = memory_service(store(), StaticRecipeSuggester::unavailable());

        let hits = service
            .search_ingredients(input(Uuid::new_v4(), "milk", Some(0)))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let service = memory_service(store(), StaticRecipeSuggester::unavailable());

        let result = service
            .search_ingredients(input(Uuid::new_v4(), "   ", None))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}

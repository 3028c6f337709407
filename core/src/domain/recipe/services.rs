use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_name, services::Service},
    ingredient::ports::IngredientCatalog,
    pantry::{
        entities::UserDietaryProfile,
        ports::{ProfileRepository, StockRepository},
    },
    recipe::{
        entities::Recipe,
        helpers::{
            match_recipes_for_query, match_recipes_from_stock, match_titles,
            normalize_ingredient_request, rank_by_overlap, sort_and_dedup,
        },
        ports::{RecipeRepository, RecipeService, RecipeSuggester},
        value_objects::{
            ListRecipesInput, MAX_SUGGESTIONS, MatchingRecipesInput, RecipeListFilter,
            SearchRecipesInput, SuggestRecipesInput,
        },
    },
    recipe_filter::{
        helpers::filter_recipes,
        value_objects::{FilterOptions, RecipePage},
    },
};

impl<RR, IC, SR, PR, RS> Service<RR, IC, SR, PR, RS>
where
    RR: RecipeRepository,
    IC: IngredientCatalog,
    SR: StockRepository,
    PR: ProfileRepository,
    RS: RecipeSuggester,
{
    /// Applies a caller-chosen diet over the stored one. `None` when the diet is
    /// not in the catalog, in which case nothing may be shown.
    fn override_diet(
        &self,
        profile: UserDietaryProfile,
        diet: Option<String>,
    ) -> Option<UserDietaryProfile> {
        let Some(diet) = diet.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()) else {
            return Some(profile);
        };

        if !self.rules.diets.is_known(&diet) {
            debug!(diet = %diet, "unknown diet override, returning no recipes");
            return None;
        }

        Some(profile.with_diet(Some(diet)))
    }

    /// Catalog names for the requested ingredients. Fails when none of them exist.
    async fn resolve_query(&self, requested: Vec<String>) -> Result<BTreeSet<String>, CoreError> {
        let resolved = self
            .ingredient_catalog
            .resolve_ingredients(requested)
            .await?;

        let query: BTreeSet<String> = resolved
            .iter()
            .map(|ingredient| normalize_name(&ingredient.name))
            .filter(|name| !name.is_empty())
            .collect();

        if query.is_empty() {
            return Err(CoreError::NoMatchingIngredients);
        }

        Ok(query)
    }

    async fn suggested_titles(
        &self,
        ingredients: &[String],
        top_n: usize,
        catalog: &[Recipe],
    ) -> Vec<String> {
        match self
            .recipe_suggester
            .suggest_recipe_titles(ingredients.to_vec(), top_n)
            .await
        {
            Ok(titles) => titles,
            Err(e) => {
                warn!(error = %e, "recommender unavailable, ranking by ingredient overlap");
                let wanted: BTreeSet<String> = ingredients.iter().cloned().collect();
                rank_by_overlap(&wanted, catalog, top_n)
            }
        }
    }
}

impl<RR, IC, SR, PR, RS> RecipeService for Service<RR, IC, SR, PR, RS>
where
    RR: RecipeRepository,
    IC: IngredientCatalog,
    SR: StockRepository,
    PR: ProfileRepository,
    RS: RecipeSuggester,
{
    async fn list_recipes(&self, input: ListRecipesInput) -> Result<RecipePage, CoreError> {
        let name_contains = input
            .name_contains
            .map(|name| normalize_name(&name))
            .filter(|name| !name.is_empty());

        let filter = RecipeListFilter {
            name_contains: name_contains.clone(),
            any_ingredient: None,
        };

        let (profile, recipes) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.recipe_repository.list_recipes(filter)
        )?;

        let Some(profile) = self.override_diet(profile, input.diet) else {
            return Ok(RecipePage::empty(input.pagination));
        };

        let candidates = recipes
            .into_iter()
            .filter(|recipe| match &name_contains {
                Some(name) => recipe.name.to_lowercase().contains(name),
                None => true,
            })
            .collect();

        Ok(filter_recipes(
            sort_and_dedup(candidates),
            &profile,
            &FilterOptions::paginated(input.pagination),
            &self.rules,
        ))
    }

    async fn matching_recipes(&self, input: MatchingRecipesInput) -> Result<RecipePage, CoreError> {
        let (profile, stock) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.stock_repository.get_user_stock(input.user_id)
        )?;

        let available = stock.available_names();
        if available.is_empty() {
            debug!(user_id = %input.user_id, "empty stock, no recipe can be made");
            return Ok(RecipePage::empty(input.pagination));
        }

        let recipes = self
            .recipe_repository
            .list_recipes(RecipeListFilter {
                name_contains: None,
                any_ingredient: Some(available.iter().cloned().collect()),
            })
            .await?;

        let candidates = match_recipes_from_stock(&available, recipes);
        debug!(
            user_id = %input.user_id,
            stock = available.len(),
            candidates = candidates.len(),
            "matched recipes from stock"
        );

        Ok(filter_recipes(
            candidates,
            &profile,
            &FilterOptions::paginated(input.pagination),
            &self.rules,
        ))
    }

    async fn search_recipes(&self, input: SearchRecipesInput) -> Result<RecipePage, CoreError> {
        let requested = normalize_ingredient_request(&input.ingredients)?;

        let (profile, query) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.resolve_query(requested)
        )?;

        let Some(profile) = self.override_diet(profile, input.diet) else {
            return Ok(RecipePage::empty(input.pagination));
        };

        let recipes = self
            .recipe_repository
            .list_recipes(RecipeListFilter {
                name_contains: None,
                any_ingredient: Some(query.iter().cloned().collect()),
            })
            .await?;

        let candidates = match_recipes_for_query(&query, recipes);

        Ok(filter_recipes(
            candidates,
            &profile,
            &FilterOptions {
                explicit_query: query,
                pagination: input.pagination,
            },
            &self.rules,
        ))
    }

    async fn suggest_recipes(&self, input: SuggestRecipesInput) -> Result<RecipePage, CoreError> {
        let ingredients = normalize_ingredient_request(&input.ingredients)?;
        let top_n = input
            .top_n
            .unwrap_or(self.suggestion_top_n)
            .clamp(1, MAX_SUGGESTIONS);

        let (profile, catalog) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.recipe_repository.list_recipes(RecipeListFilter::default())
        )?;

        let titles = self.suggested_titles(&ingredients, top_n, &catalog).await;
        let candidates = match_titles(&titles, catalog);
        debug!(
            titles = titles.len(),
            matched = candidates.len(),
            "resolved suggested titles against the catalog"
        );

        Ok(filter_recipes(
            candidates,
            &profile,
            &FilterOptions {
                explicit_query: ingredients.into_iter().collect(),
                pagination: input.pagination,
            },
            &self.rules,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            ingredient::entities::Ingredient,
            pantry::entities::StockEntry,
            recipe_filter::value_objects::Pagination,
        },
        infrastructure::memory::{MemoryService, MemoryStore, StaticRecipeSuggester, memory_service},
    };
    use uuid::Uuid;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(Uuid::new_v4(), name, ingredients.iter())
    }

    fn catalog_store() -> MemoryStore {
        MemoryStore::new()
            .with_ingredients(
                ["eggs", "flour", "milk", "sugar", "peanuts", "walnuts", "chicken", "rice"]
                    .iter()
                    .map(|name| Ingredient::new(Uuid::new_v4(), name)),
            )
            .with_recipe(recipe("Recipe A", &["eggs", "flour", "milk"]))
            .with_recipe(recipe("Recipe B", &["eggs", "flour", "sugar"]))
            .with_recipe(recipe("Satay", &["chicken", "peanuts"]).with_allergens(["peanuts"]))
            .with_recipe(recipe("Brownies", &["peanuts", "walnuts", "flour", "eggs"]))
            .with_recipe(recipe("Vegan Rice", &["rice"]).with_diets(["Vegan"]))
            .with_recipe(recipe("Chicken Rice", &["chicken", "rice"]).with_diets(["High-Protein"]))
    }

    fn service(store: MemoryStore) -> MemoryService {
        memory_service(store, StaticRecipeSuggester::unavailable())
    }

    fn allergic(allergies: &[&str]) -> UserDietaryProfile {
        UserDietaryProfile {
            diet: None,
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_matching_recipes_uses_available_stock() {
        let user_id = Uuid::new_v4();
        let store = catalog_store()
            .with_stock(
                user_id,
                vec![
                    StockEntry::available("Eggs"),
                    StockEntry::available("flour"),
                    StockEntry::available("milk"),
                    StockEntry::available("sugar"),
                ],
            )
            .with_profile(user_id, allergic(&["milk"]));

        let page = service(store)
            .matching_recipes(MatchingRecipesInput {
                user_id,
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Recipe B"]);
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_matching_recipes_ignores_unavailable_entries() {
        let user_id = Uuid::new_v4();
        let mut sugar = StockEntry::available("sugar");
        sugar.is_available = false;
        let store = catalog_store().with_stock(
            user_id,
            vec![
                StockEntry::available("eggs"),
                StockEntry::available("flour"),
                sugar,
            ],
        );

        let page = service(store)
            .matching_recipes(MatchingRecipesInput {
                user_id,
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert!(page.results.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_matching_recipes_with_empty_stock_is_empty() {
        let page = service(catalog_store())
            .matching_recipes(MatchingRecipesInput {
                user_id: Uuid::new_v4(),
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page, RecipePage::empty(Pagination::default()));
    }

    #[tokio::test]
    async fn test_search_recipes_carves_out_searched_allergen() {
        let user_id = Uuid::new_v4();
        let store = catalog_store().with_profile(user_id, allergic(&["peanuts", "tree nuts"]));

        let page = service(store)
            .search_recipes(SearchRecipesInput {
                user_id,
                ingredients: vec!["Peanuts".to_string(), "truffle".to_string()],
                diet: None,
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Satay"]);
    }

    #[tokio::test]
    async fn test_search_recipes_rejects_unresolvable_list() {
        let result = service(catalog_store())
            .search_recipes(SearchRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec!["unobtainium".to_string()],
                diet: None,
                pagination: Pagination::default(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NoMatchingIngredients));
    }

    #[tokio::test]
    async fn test_search_recipes_rejects_empty_list() {
        let result = service(catalog_store())
            .search_recipes(SearchRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec![" ".to_string()],
                diet: None,
                pagination: Pagination::default(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_search_recipes_with_unknown_diet_fails_closed() {
        let page = service(catalog_store())
            .search_recipes(SearchRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec!["rice".to_string()],
                diet: Some("Carnivore".to_string()),
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert!(page.results.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_search_recipes_applies_hard_diet_override() {
        let page = service(catalog_store())
            .search_recipes(SearchRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec!["rice".to_string()],
                diet: Some("vegan".to_string()),
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Vegan Rice"]);
    }

    #[tokio::test]
    async fn test_list_recipes_filters_by_name_and_paginates() {
        let page = service(catalog_store())
            .list_recipes(ListRecipesInput {
                user_id: Uuid::new_v4(),
                name_contains: Some("RECIPE".to_string()),
                diet: None,
                pagination: Pagination::new(1, 0),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Recipe A"]);
        assert_eq!(page.total_count, 2);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_list_recipes_boosts_soft_diet_from_profile() {
        let user_id = Uuid::new_v4();
        let store = catalog_store().with_profile(
            user_id,
            UserDietaryProfile::unrestricted().with_diet(Some("High-Protein".to_string())),
        );

        let page = service(store)
            .list_recipes(ListRecipesInput {
                user_id,
                name_contains: None,
                diet: None,
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.total_count, 6);
        assert_eq!(page.results[0].recipe.name, "Chicken Rice");
        assert!(page.results[0].boosted);
    }

    #[tokio::test]
    async fn test_suggest_recipes_follows_recommender_order() {
        let service = memory_service(
            catalog_store(),
            StaticRecipeSuggester::new(vec![
                "Vegan Rice (quick)".to_string(),
                "Fried Unicorn".to_string(),
                "chicken rice".to_string(),
            ]),
        );

        let page = service
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec!["rice".to_string()],
                top_n: None,
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Vegan Rice", "Chicken Rice"]);
    }

    #[tokio::test]
    async fn test_suggest_recipes_falls_back_to_overlap_ranking() {
        let page = service(catalog_store())
            .suggest_recipes(SuggestRecipesInput {
                user_id: Uuid::new_v4(),
                ingredients: vec!["eggs".to_string(), "flour".to_string(), "milk".to_string()],
                top_n: Some(2),
                pagination: Pagination::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.recipe_names(), vec!["Recipe A", "Brownies"]);
    }
}

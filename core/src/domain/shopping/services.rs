use std::collections::{BTreeMap, BTreeSet, HashSet};

use futures::future::try_join_all;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientCatalog,
    pantry::ports::{ProfileRepository, StockRepository},
    recipe::ports::{RecipeRepository, RecipeSuggester},
    shopping::{
        ports::ShoppingService,
        value_objects::{AugmentShoppingListInput, ShoppingItem, ShoppingListAugmentation},
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
    async fn required_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<(Uuid, BTreeSet<String>), CoreError> {
        match self.recipe_repository.get_recipe_ingredients(recipe_id).await? {
            Some(ingredients) => Ok((recipe_id, ingredients)),
            None => {
                debug!(%recipe_id, "recipe not found for shopping list");
                Err(CoreError::NotFound)
            }
        }
    }
}

impl<RR, IC, SR, PR, RS> ShoppingService for Service<RR, IC, SR, PR, RS>
where
    RR: RecipeRepository,
    IC: IngredientCatalog,
    SR: StockRepository,
    PR: ProfileRepository,
    RS: RecipeSuggester,
{
    async fn augment_shopping_list(
        &self,
        input: AugmentShoppingListInput,
    ) -> Result<ShoppingListAugmentation, CoreError> {
        let mut seen = HashSet::new();
        let recipe_ids: Vec<Uuid> = input
            .recipe_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if recipe_ids.is_empty() {
            return Err(CoreError::InvalidInput(
                "recipe_ids must contain at least one recipe".to_string(),
            ));
        }

        let (profile, stock, requirements) = futures::try_join!(
            self.dietary_profile(input.user_id),
            self.stock_repository.get_user_stock(input.user_id),
            try_join_all(recipe_ids.into_iter().map(|id| self.required_ingredients(id)))
        )?;

        let available = stock.available_names();
        let mut missing: BTreeMap<String, Vec<Uuid>> = BTreeMap::new();
        for (recipe_id, ingredients) in requirements {
            for name in ingredients.into_iter().filter(|n| !available.contains(n)) {
                missing.entry(name).or_default().push(recipe_id);
            }
        }

        let unsafe_terms = self.rules.unsafe_terms(&profile.allergies);
        let items = missing
            .into_iter()
            .map(|(ingredient_name, needed_by)| ShoppingItem {
                is_safe: self.rules.is_safe(&ingredient_name, &unsafe_terms),
                ingredient_name,
                needed_by,
            })
            .collect();

        Ok(ShoppingListAugmentation { items })
    }
}

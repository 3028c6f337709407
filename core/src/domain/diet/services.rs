use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet::{ports::DietService, value_objects::DietSelection},
    ingredient::ports::IngredientCatalog,
    pantry::ports::{ProfileRepository, StockRepository},
    recipe::ports::{RecipeRepository, RecipeSuggester},
};

impl<RR, IC, SR, PR, RS> DietService for Service<RR, IC, SR, PR, RS>
where
    RR: RecipeRepository,
    IC: IngredientCatalog,
    SR: StockRepository,
    PR: ProfileRepository,
    RS: RecipeSuggester,
{
    async fn diet_options(&self) -> Result<DietSelection, CoreError> {
        let diets = &self.rules.diets;
        Ok(diets.split_for_selection(diets.known_names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemoryStore, StaticRecipeSuggester, memory_service};

    #[tokio::test]
    async fn diet_options_split_catalog_and_skip_other_diets() {
        let service = memory_service(MemoryStore::new(), StaticRecipeSuggester::unavailable());

        let options = service.diet_options().await.unwrap();

        assert_eq!(options.hard.len(), 7);
        assert!(options.hard.contains(&"Gluten-Free".to_string()));
        assert_eq!(options.soft.len(), 5);
        assert!(options.soft.contains(&"Mediterranean".to_string()));
        assert!(!options.hard.iter().chain(&options.soft).any(|d| d == "Paleo"));
    }
}

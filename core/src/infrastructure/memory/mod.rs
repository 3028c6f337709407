//! In-process adapters for every port, used by tests and local runs without a
//! database or recommender.

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_name, services::Service},
    ingredient::{entities::Ingredient, ports::IngredientCatalog},
    pantry::{
        entities::{StockEntry, UserDietaryProfile, UserIngredientStock},
        ports::{ProfileRepository, StockRepository},
    },
    recipe::{
        entities::Recipe,
        ports::{RecipeRepository, RecipeSuggester},
        value_objects::RecipeListFilter,
    },
    rules::entities::DietaryRules,
};

pub type MemoryService =
    Service<MemoryStore, MemoryStore, MemoryStore, MemoryStore, StaticRecipeSuggester>;

/// Service over a single store and the built-in dietary rules.
pub fn memory_service(store: MemoryStore, suggester: StaticRecipeSuggester) -> MemoryService {
    Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        suggester,
        Arc::new(DietaryRules::standard()),
    )
}

#[derive(Debug, Clone, Default)]
struct MemoryData {
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    stocks: HashMap<Uuid, Vec<StockEntry>>,
    profiles: HashMap<Uuid, UserDietaryProfile>,
}

/// Immutable snapshot of catalog and user data. Cloning shares the snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<MemoryData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        Arc::make_mut(&mut self.data).recipes.push(recipe);
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        Arc::make_mut(&mut self.data).ingredients.extend(ingredients);
        self
    }

    pub fn with_stock(mut self, user_id: Uuid, entries: Vec<StockEntry>) -> Self {
        Arc::make_mut(&mut self.data).stocks.insert(user_id, entries);
        self
    }

    pub fn with_profile(mut self, user_id: Uuid, profile: UserDietaryProfile) -> Self {
        Arc::make_mut(&mut self.data)
            .profiles
            .insert(user_id, profile);
        self
    }
}

impl RecipeRepository for MemoryStore {
    async fn list_recipes(&self, filter: RecipeListFilter) -> Result<Vec<Recipe>, CoreError> {
        let name = filter
            .name_contains
            .as_deref()
            .map(normalize_name)
            .filter(|n| !n.is_empty());
        let any_ingredient: Option<Vec<String>> = filter
            .any_ingredient
            .map(|names| names.iter().map(|n| normalize_name(n)).collect());

        let mut recipes: Vec<Recipe> = self
            .data
            .recipes
            .iter()
            .filter(|r| name.as_ref().is_none_or(|n| r.name.to_lowercase().contains(n)))
            .filter(|r| {
                any_ingredient
                    .as_ref()
                    .is_none_or(|names| names.iter().any(|n| r.ingredients.contains(n)))
            })
            .cloned()
            .collect();

        recipes.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(recipes)
    }

    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<BTreeSet<String>>, CoreError> {
        Ok(self
            .data
            .recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| r.ingredients.clone()))
    }
}

impl IngredientCatalog for MemoryStore {
    async fn resolve_ingredients(&self, names: Vec<String>) -> Result<Vec<Ingredient>, CoreError> {
        let names: Vec<String> = names.iter().map(|n| normalize_name(n)).collect();

        Ok(self
            .data
            .ingredients
            .iter()
            .filter(|i| names.contains(&normalize_name(&i.name)))
            .cloned()
            .collect())
    }

    async fn search_ingredients(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let query = normalize_name(&query);

        let mut hits: Vec<&Ingredient> = self
            .data
            .ingredients
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .collect();

        hits.sort_by(|a, b| {
            let a_name = normalize_name(&a.name);
            let b_name = normalize_name(&b.name);
            (b_name == query)
                .cmp(&(a_name == query))
                .then_with(|| a_name.len().cmp(&b_name.len()))
                .then_with(|| a_name.cmp(&b_name))
        });

        Ok(hits
            .into_iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

impl StockRepository for MemoryStore {
    async fn get_user_stock(&self, user_id: Uuid) -> Result<UserIngredientStock, CoreError> {
        let entries = self
            .data
            .stocks
            .get(&user_id)
            .cloned()
            .unwrap_or_default();

        Ok(UserIngredientStock::new(user_id, entries))
    }
}

impl ProfileRepository for MemoryStore {
    async fn get_user_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserDietaryProfile>, CoreError> {
        Ok(self.data.profiles.get(&user_id).cloned())
    }
}

/// Recommender stand-in returning a fixed title list, or failing like an
/// unreachable service.
#[derive(Debug, Clone, Default)]
pub struct StaticRecipeSuggester {
    titles: Option<Vec<String>>,
}

impl StaticRecipeSuggester {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles: Some(titles),
        }
    }

    pub fn unavailable() -> Self {
        Self { titles: None }
    }
}

impl RecipeSuggester for StaticRecipeSuggester {
    async fn suggest_recipe_titles(
        &self,
        _ingredient_names: Vec<String>,
        top_n: usize,
    ) -> Result<Vec<String>, CoreError> {
        match &self.titles {
            Some(titles) => Ok(titles.iter().take(top_n).cloned().collect()),
            None => Err(CoreError::ExternalServiceError(
                "recommender unavailable".to_string(),
            )),
        }
    }
}

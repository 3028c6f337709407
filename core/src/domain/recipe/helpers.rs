use std::{
    collections::{BTreeSet, HashSet},
    sync::LazyLock,
};

use regex::Regex;

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_name},
    recipe::entities::Recipe,
};

static PARENTHETICAL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(.*?\)").ok());

/// Number of the recipe's required ingredients present in `available`.
pub fn coverage(recipe: &Recipe, available: &BTreeSet<String>) -> usize {
    recipe
        .ingredients
        .iter()
        .filter(|name| available.contains(*name))
        .count()
}

/// Stock to recipe: every recipe whose required ingredients are all in `stock`.
///
/// Partial overlap never qualifies, recipes without ingredients never match and
/// an empty stock matches nothing. Sorted by ascending name, then id.
pub fn match_recipes_from_stock<I>(stock: &BTreeSet<String>, recipes: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    if stock.is_empty() {
        return Vec::new();
    }

    let matched = recipes
        .into_iter()
        .filter(|recipe| {
            !recipe.ingredients.is_empty() && coverage(recipe, stock) == recipe.ingredients.len()
        })
        .collect();

    sort_and_dedup(matched)
}

/// Query to recipe: every recipe whose ingredients include all of `query`.
/// The recipe may need more than was asked for. An empty query matches nothing.
pub fn match_recipes_for_query<I>(query: &BTreeSet<String>, recipes: I) -> Vec<Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let matched = recipes
        .into_iter()
        .filter(|recipe| recipe.ingredients.is_superset(query))
        .collect();

    sort_and_dedup(matched)
}

/// Ascending name (case-insensitive), then id; one entry per recipe id.
pub fn sort_and_dedup(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    dedup_recipes(recipes)
}

/// Keeps the first occurrence of each recipe id, preserving order.
pub fn dedup_recipes(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id))
        .collect()
}

/// Canonical title used to match recommender output against catalog names:
/// parenthetical content removed, trimmed, lowercased, typographic quotes folded.
pub fn normalize_title(title: &str) -> String {
    let stripped = match PARENTHETICAL.as_ref() {
        Some(re) => re.replace_all(title, "").into_owned(),
        None => title.to_string(),
    };

    stripped
        .trim()
        .to_lowercase()
        .replace(['\u{2018}', '\u{2019}', '`'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Catalog recipes whose normalized name equals a normalized title, in title order.
pub fn match_titles(titles: &[String], catalog: Vec<Recipe>) -> Vec<Recipe> {
    let mut by_title: Vec<(String, Recipe)> = catalog
        .into_iter()
        .map(|recipe| (normalize_title(&recipe.name), recipe))
        .collect();
    by_title.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    let mut matched = Vec::new();
    for title in titles {
        let title = normalize_title(title);
        if title.is_empty() {
            continue;
        }
        matched.extend(
            by_title
                .iter()
                .filter(|(normalized, _)| *normalized == title)
                .map(|(_, recipe)| recipe.clone()),
        );
    }

    dedup_recipes(matched)
}

/// In-process stand-in for the recommender: titles ranked by how many of
/// `ingredients` each recipe uses. Zero-overlap recipes are left out.
pub fn rank_by_overlap(
    ingredients: &BTreeSet<String>,
    catalog: &[Recipe],
    top_n: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, &Recipe)> = catalog
        .iter()
        .map(|recipe| (coverage(recipe, ingredients), recipe))
        .filter(|(overlap, _)| *overlap > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.name.to_lowercase().cmp(&b.1.name.to_lowercase()))
    });

    scored
        .into_iter()
        .take(top_n)
        .map(|(_, recipe)| recipe.name.clone())
        .collect()
}

/// Normalizes a caller-supplied ingredient list, keeping first-seen order.
pub fn normalize_ingredient_request(ingredients: &[String]) -> Result<Vec<String>, CoreError> {
    let mut seen = HashSet::new();
    let names: Vec<String> = ingredients
        .iter()
        .map(|name| normalize_name(name))
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect();

    if names.is_empty() {
        return Err(CoreError::InvalidInput(
            "ingredients must be a non-empty list of names".to_string(),
        ));
    }

    Ok(names)
}

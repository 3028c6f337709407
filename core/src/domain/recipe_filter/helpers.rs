use std::collections::{BTreeSet, HashSet};

use crate::domain::{
    allergen::value_objects::UnsafeTerms,
    diet::{
        entities::DietKind,
        helpers::{has_diet_tag, is_diet_compatible},
    },
    pantry::entities::UserDietaryProfile,
    recipe::entities::Recipe,
    recipe_filter::value_objects::{FilterOptions, Pagination, RankedRecipe, RecipePage},
    rules::entities::DietaryRules,
};

/// Runs candidates through diet filtering, allergen filtering, deduplication
/// and pagination, in that order.
pub fn filter_recipes(
    candidates: Vec<Recipe>,
    profile: &UserDietaryProfile,
    options: &FilterOptions,
    rules: &DietaryRules,
) -> RecipePage {
    let ranked = apply_diet(candidates, profile.diet.as_deref(), rules);
    let safe = apply_allergens(ranked, profile, &options.explicit_query, rules);
    paginate(dedup_ranked(safe), options.pagination)
}

/// Hard diets drop recipes tagged for other diets only; soft diets flag
/// matching recipes and move them to the front, keeping relative order.
pub fn apply_diet(
    candidates: Vec<Recipe>,
    diet: Option<&str>,
    rules: &DietaryRules,
) -> Vec<RankedRecipe> {
    let Some(diet) = diet.filter(|d| !d.trim().is_empty()) else {
        return candidates.into_iter().map(RankedRecipe::plain).collect();
    };

    match rules.classify_diet(diet) {
        DietKind::Hard => candidates
            .into_iter()
            .filter(|recipe| is_diet_compatible(&recipe.diets, diet))
            .map(RankedRecipe::plain)
            .collect(),
        DietKind::Soft => {
            let mut ranked: Vec<RankedRecipe> = candidates
                .into_iter()
                .map(|recipe| RankedRecipe {
                    boosted: has_diet_tag(&recipe.diets, diet),
                    recipe,
                })
                .collect();
            ranked.sort_by_key(|r| !r.boosted);
            ranked
        }
        DietKind::Unknown => candidates.into_iter().map(RankedRecipe::plain).collect(),
    }
}

/// Drops every recipe with an unsafe ingredient name or an allergen tag the
/// user is allergic to. Terms the user explicitly searched for are carved out.
pub fn apply_allergens(
    recipes: Vec<RankedRecipe>,
    profile: &UserDietaryProfile,
    explicit_query: &BTreeSet<String>,
    rules: &DietaryRules,
) -> Vec<RankedRecipe> {
    if !profile.has_allergies() {
        return recipes;
    }

    let unsafe_terms = rules
        .unsafe_terms(&profile.allergies)
        .without(explicit_query);

    // Only an allergy the user searched for by name is ignored at tag level.
    let tagged_allergies: BTreeSet<String> = profile
        .allergy_names()
        .into_iter()
        .filter(|allergy| !explicit_query.contains(allergy))
        .collect();

    recipes
        .into_iter()
        .filter(|ranked| {
            is_recipe_safe(
                &ranked.recipe,
                &unsafe_terms,
                &tagged_allergies,
                explicit_query,
                rules,
            )
        })
        .collect()
}

/// Every non-searched ingredient must pass the safety predicate and no declared
/// allergen tag may be in `tagged_allergies`.
pub fn is_recipe_safe(
    recipe: &Recipe,
    unsafe_terms: &UnsafeTerms,
    tagged_allergies: &BTreeSet<String>,
    explicit_query: &BTreeSet<String>,
    rules: &DietaryRules,
) -> bool {
    let names_safe = recipe
        .ingredients
        .iter()
        .filter(|name| !explicit_query.contains(*name))
        .all(|name| rules.is_safe(name, unsafe_terms));

    names_safe && recipe.allergens.is_disjoint(tagged_allergies)
}

pub fn dedup_ranked(recipes: Vec<RankedRecipe>) -> Vec<RankedRecipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|ranked| seen.insert(ranked.recipe.id))
        .collect()
}

pub fn paginate(recipes: Vec<RankedRecipe>, pagination: Pagination) -> RecipePage {
    let total_count = recipes.len();
    let results = recipes
        .into_iter()
        .skip(pagination.offset)
        .take(pagination.limit)
        .collect();

    RecipePage {
        results,
        total_count,
        offset: pagination.offset,
        limit: pagination.limit,
        has_more: pagination.offset.saturating_add(pagination.limit) < total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::helpers::{match_recipes_for_query, match_recipes_from_stock};
    use uuid::Uuid;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(Uuid::new_v4(), name, ingredients.iter())
    }

    fn profile(diet: Option<&str>, allergies: &[&str]) -> UserDietaryProfile {
        UserDietaryProfile {
            diet: diet.map(String::from),
            allergies: allergies.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn query(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn run(candidates: Vec<Recipe>, profile: &UserDietaryProfile) -> RecipePage {
        filter_recipes(
            candidates,
            profile,
            &FilterOptions::default(),
            &DietaryRules::standard(),
        )
    }

    #[test]
    fn test_hard_diet_keeps_tagged_and_untagged() {
        let vegan = recipe("Vegan Bowl", &["rice"]).with_diets(["Vegan"]);
        let keto = recipe("Keto Steak", &["beef"]).with_diets(["Keto"]);
        let untagged = recipe("Plain Rice", &["rice"]);

        let page = run(vec![vegan, keto, untagged], &profile(Some("Vegan"), &[]));

        assert_eq!(page.recipe_names(), vec!["Vegan Bowl", "Plain Rice"]);
        assert!(page.results.iter().all(|r| !r.boosted));
    }

    #[test]
    fn test_soft_diet_reorders_without_excluding() {
        let vegan = recipe("Vegan Bowl", &["rice"]).with_diets(["Vegan"]);
        let keto = recipe("Keto Steak", &["beef"]).with_diets(["Keto"]);
        let greek = recipe("Greek Salad", &["feta"]).with_diets(["Mediterranean"]);
        let untagged = recipe("Plain Rice", &["rice"]);

        let page = run(
            vec![vegan, keto, greek, untagged],
            &profile(Some("Mediterranean"), &[]),
        );

        assert_eq!(
            page.recipe_names(),
            vec!["Greek Salad", "Vegan Bowl", "Keto Steak", "Plain Rice"]
        );
        assert!(page.results[0].boosted);
        assert!(page.results[1..].iter().all(|r| !r.boosted));
    }

    #[test]
    fn test_soft_diet_sort_is_stable() {
        let a = recipe("A", &["x"]).with_diets(["Low-Fat"]);
        let b = recipe("B", &["x"]);
        let c = recipe("C", &["x"]).with_diets(["low-fat"]);
        let d = recipe("D", &["x"]);

        let page = run(vec![b, a, d, c], &profile(Some("Low-Fat"), &[]));
        assert_eq!(page.recipe_names(), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_unknown_diet_has_no_effect() {
        let keto = recipe("Keto Steak", &["beef"]).with_diets(["Keto"]);
        let page = run(vec![keto], &profile(Some("Paleo"), &[]));
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn test_allergen_substring_layer_excludes_recipe() {
        let shake = recipe("Shake", &["milk powder", "banana"]);
        let fruit = recipe("Fruit", &["banana"]);

        let page = run(vec![shake, fruit], &profile(None, &["milk"]));
        assert_eq!(page.recipe_names(), vec!["Fruit"]);
    }

    #[test]
    fn test_allergen_expansion_catches_related_terms() {
        let pizza = recipe("Pizza", &["cheese", "tomato sauce"]);
        let page = run(vec![pizza], &profile(None, &["Milk"]));
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_allergen_tag_layer_excludes_recipe() {
        let stew = recipe("Stew", &["beef", "stock"]).with_allergens(["celery"]);
        let page = run(vec![stew], &profile(None, &["Celery"]));
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_safety_overrides_apply_in_pipeline() {
        let moussaka = recipe("Moussaka", &["eggplant", "lamb"]);
        let page = run(vec![moussaka], &profile(None, &["eggs"]));
        assert_eq!(page.recipe_names(), vec!["Moussaka"]);
    }

    #[test]
    fn test_explicit_search_carves_out_allergen() {
        let satay = recipe("Satay", &["chicken", "peanuts"]).with_allergens(["peanuts"]);
        let brownies = recipe("Brownies", &["peanuts", "walnuts", "flour"]);
        let candidates = match_recipes_for_query(&query(&["peanuts"]), vec![satay, brownies]);

        let options = FilterOptions {
            explicit_query: query(&["peanuts"]),
            pagination: Pagination::default(),
        };
        let page = filter_recipes(
            candidates,
            &profile(None, &["peanuts", "tree nuts"]),
            &options,
            &DietaryRules::standard(),
        );

        assert_eq!(page.recipe_names(), vec!["Satay"]);
    }

    #[test]
    fn test_searching_member_term_keeps_allergen_tag_check() {
        let toast = recipe("Ghee Toast", &["butter", "ghee"]).with_allergens(["milk"]);
        let options = FilterOptions {
            explicit_query: query(&["butter"]),
            pagination: Pagination::default(),
        };

        let page = filter_recipes(
            vec![toast],
            &profile(None, &["milk"]),
            &options,
            &DietaryRules::standard(),
        );

        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_carve_out_only_applies_to_searched_terms() {
        let satay = recipe("Satay", &["chicken", "peanuts"]);
        let page = run(vec![satay], &profile(None, &["peanuts"]));
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let toast = recipe("Toast", &["bread"]);
        let page = run(vec![toast.clone(), toast], &profile(None, &[]));
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn test_pagination_invariants() {
        for n in [0usize, 5, 10, 11, 25] {
            let candidates: Vec<Recipe> = (0..n)
                .map(|i| recipe(&format!("Recipe {i:02}"), &["water"]))
                .collect();

            let page = filter_recipes(
                candidates.clone(),
                &UserDietaryProfile::unrestricted(),
                &FilterOptions::paginated(Pagination::new(10, 0)),
                &DietaryRules::standard(),
            );
            assert_eq!(page.results.len(), n.min(10));
            assert_eq!(page.total_count, n);
            assert_eq!(page.has_more, 10 < n);

            let beyond = filter_recipes(
                candidates,
                &UserDietaryProfile::unrestricted(),
                &FilterOptions::paginated(Pagination::new(10, n)),
                &DietaryRules::standard(),
            );
            assert!(beyond.results.is_empty());
            assert_eq!(beyond.total_count, n);
            assert!(!beyond.has_more);
        }
    }

    #[test]
    fn test_end_to_end_stock_match_then_allergen_filter() {
        let a = recipe("Recipe A", &["eggs", "flour", "milk"]);
        let b = recipe("Recipe B", &["eggs", "flour", "sugar"]);
        let stock = query(&["eggs", "flour", "milk", "sugar"]);

        let matched = match_recipes_from_stock(&stock, vec![a, b]);
        assert_eq!(matched.len(), 2);

        let page = run(matched, &profile(None, &["milk"]));
        assert_eq!(page.recipe_names(), vec!["Recipe B"]);
    }
}

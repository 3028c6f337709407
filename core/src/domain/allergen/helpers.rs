use crate::domain::{
    allergen::value_objects::{SafetyOverrides, UnsafeTerms},
    common::normalize_name,
};

/// Whether an ingredient name is free of every unsafe term.
///
/// Matching is by substring on the lowercased name, so "milk" rejects
/// "milk powder". Names listed in `overrides` are accepted before any term
/// is looked at.
pub fn is_ingredient_safe(
    ingredient_name: &str,
    unsafe_terms: &UnsafeTerms,
    overrides: &SafetyOverrides,
) -> bool {
    let name = normalize_name(ingredient_name);
    if overrides.is_overridden(&name) {
        return true;
    }

    !unsafe_terms.iter().any(|term| name.contains(term))
}

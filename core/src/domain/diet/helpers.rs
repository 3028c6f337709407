use std::collections::BTreeSet;

use crate::domain::common::normalize_name;

/// Hard-diet compliance of a tagged item.
///
/// Untagged items pass: catalog tagging is incomplete, so a missing tag is not
/// read as non-compliance.
pub fn is_diet_compatible(diet_tags: &BTreeSet<String>, diet_name: &str) -> bool {
    diet_tags.is_empty() || has_diet_tag(diet_tags, diet_name)
}

pub fn has_diet_tag(diet_tags: &BTreeSet<String>, diet_name: &str) -> bool {
    let diet = normalize_name(diet_name);
    diet_tags.iter().any(|tag| normalize_name(tag) == diet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_untagged_is_compatible() {
        assert!(is_diet_compatible(&BTreeSet::new(), "Vegan"));
    }

    #[test]
    fn test_tag_comparison_ignores_case() {
        assert!(is_diet_compatible(&tags(&["vegan"]), "Vegan"));
        assert!(!is_diet_compatible(&tags(&["Keto"]), "Vegan"));
        assert!(!has_diet_tag(&BTreeSet::new(), "Vegan"));
    }
}

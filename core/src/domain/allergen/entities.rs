use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{allergen::value_objects::UnsafeTerms, common::normalize_name};

/// Terms that all denote exposure to one canonical allergen.
const STANDARD_GROUPS: &[(&str, &[&str])] = &[
    (
        "milk",
        &[
            "milk",
            "dairy",
            "lactose",
            "casein",
            "whey",
            "butter",
            "cream",
            "cheese",
            "yogurt",
            "sour cream",
            "cream cheese",
            "ice cream",
        ],
    ),
    ("eggs", &["eggs", "egg", "egg white", "egg yolk", "albumin"]),
    ("peanuts", &["peanuts", "peanut", "peanut butter", "groundnut"]),
    (
        "tree nuts",
        &[
            "almonds",
            "walnuts",
            "cashews",
            "pistachios",
            "hazelnuts",
            "brazil nuts",
            "pecans",
            "macadamia nuts",
            "pine nuts",
            "chestnuts",
            "tree nuts",
        ],
    ),
    (
        "soy",
        &[
            "soy",
            "soya",
            "soybean",
            "tofu",
            "tempeh",
            "miso",
            "soy sauce",
            "edamame",
        ],
    ),
    (
        "fish",
        &[
            "fish",
            "salmon",
            "tuna",
            "cod",
            "halibut",
            "sardines",
            "anchovies",
            "mackerel",
            "trout",
        ],
    ),
    (
        "shellfish",
        &[
            "shellfish",
            "shrimp",
            "crab",
            "lobster",
            "oysters",
            "mussels",
            "clams",
            "scallops",
            "prawns",
        ],
    ),
    (
        "wheat",
        &[
            "wheat", "flour", "bread", "pasta", "cereals", "crackers", "cookies",
        ],
    ),
    (
        "sesame",
        &["sesame", "sesame seeds", "tahini", "sesame oil"],
    ),
    (
        "gluten",
        &[
            "gluten",
            "wheat",
            "barley",
            "rye",
            "oats",
            "spelt",
            "kamut",
            "triticale",
            "bulgur",
            "semolina",
            "durum",
        ],
    ),
    (
        "sulphites",
        &["sulphites", "sulfites", "sulfur dioxide", "sodium sulfite"],
    ),
    (
        "corn",
        &["corn", "maize", "corn starch", "corn syrup", "cornmeal"],
    ),
    (
        "mustard",
        &["mustard", "mustard seeds", "dijon mustard"],
    ),
    ("celery", &["celery", "celery seeds", "celeriac"]),
    ("lupin", &["lupin", "lupine"]),
    (
        "coconut",
        &["coconut", "coconut oil", "coconut milk", "coconut cream"],
    ),
    ("yeast", &["yeast", "nutritional yeast", "bakers yeast"]),
    (
        "chocolate",
        &[
            "chocolate",
            "cocoa",
            "cacao",
            "dark chocolate",
            "milk chocolate",
        ],
    ),
    (
        "tomatoes",
        &["tomatoes", "tomato", "tomato sauce", "ketchup", "marinara"],
    ),
    (
        "citrus",
        &["citrus", "lemon", "lime", "orange", "grapefruit", "tangerine"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenGroup {
    pub key: String,
    pub terms: BTreeSet<String>,
}

impl AllergenGroup {
    /// Builds a group with normalized terms. The key is always a member of its own set.
    pub fn new<I, S>(key: &str, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize_name(key);
        let mut terms: BTreeSet<String> = terms
            .into_iter()
            .map(|t| normalize_name(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        terms.insert(key.clone());

        Self { key, terms }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }
}

/// Static mapping from canonical allergen keys to their related terms.
///
/// Group order matters: a term listed under several groups resolves to the
/// first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenTable {
    groups: Vec<AllergenGroup>,
}

impl AllergenTable {
    pub fn new(groups: Vec<AllergenGroup>) -> Self {
        let groups = groups
            .into_iter()
            .map(|g| AllergenGroup::new(&g.key, g.terms))
            .filter(|g| !g.key.is_empty())
            .collect();

        Self { groups }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_GROUPS
                .iter()
                .map(|(key, terms)| AllergenGroup::new(key, terms.iter()))
                .collect(),
        )
    }

    pub fn groups(&self) -> &[AllergenGroup] {
        &self.groups
    }

    /// First group whose term set contains `allergen_name` (case-insensitive).
    pub fn group_of(&self, allergen_name: &str) -> Option<&AllergenGroup> {
        let name = normalize_name(allergen_name);
        self.groups.iter().find(|g| g.contains(&name))
    }

    /// All terms denoting exposure to the allergen. Unknown names pass through
    /// as a singleton of the lowercased input.
    pub fn expand(&self, allergen_name: &str) -> BTreeSet<String> {
        match self.group_of(allergen_name) {
            Some(group) => group.terms.clone(),
            None => BTreeSet::from([normalize_name(allergen_name)]),
        }
    }

    pub fn expand_all<I, S>(&self, allergen_names: I) -> UnsafeTerms
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        allergen_names
            .into_iter()
            .flat_map(|name| self.expand(name.as_ref()))
            .collect()
    }
}

impl Default for AllergenTable {
    fn default() -> Self {
        Self::standard()
    }
}

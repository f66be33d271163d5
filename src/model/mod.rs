use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct IngredientsPayload {
    pub ingredients: Vec<String>,
}

/// A ranked candidate as handed over by a ranking provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    /// Display name and link, conventionally joined as `"name,link"`.
    #[serde(rename = "nameAndLink")]
    pub name_and_link: String,
    pub ingredients: BTreeSet<String>,
}

impl Recipe {
    pub fn new<I, S>(name_and_link: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name_and_link: name_and_link.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeComparison {
    pub name: String,
    pub link: String,
    pub matching: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub additional: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub created_at: String,
    pub recipes: Vec<RecipeComparison>,
}

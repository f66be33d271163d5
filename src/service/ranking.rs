use std::{cmp::Ordering, collections::BTreeSet, fs, path::Path, sync::Arc};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::{
    config::{RankerConfig, RankerKind},
    model::Recipe,
    util::{
        normalize::normalize_ingredients,
        sets::{jaccard_similarity, squared_distance},
    },
};

/// Source of candidate recipes for a normalized ingredient set, best first.
pub trait RankingProvider: Send + Sync {
    fn top_recipes(&self, ingredients: &BTreeSet<String>) -> Result<Vec<Recipe>>;
}

pub fn from_config(config: &RankerConfig) -> Result<Arc<dyn RankingProvider>> {
    let provider: Arc<dyn RankingProvider> = match config.kind {
        RankerKind::Dummy => Arc::new(DummyRanker::new(config.top_n)),
        RankerKind::Corpus => {
            let path = config
                .corpus_path
                .as_deref()
                .ok_or_else(|| anyhow!("corpus ranker configured without corpus_path"))?;
            Arc::new(CorpusRanker::load(Path::new(path), config.top_n)?)
        }
    };

    info!(kind = config.kind.as_str(), top_n = config.top_n, "ranking provider ready");
    Ok(provider)
}

/// Fixed sample recipes, returned regardless of the input.
pub struct DummyRanker {
    recipes: Vec<Recipe>,
}

impl DummyRanker {
    pub fn new(top_n: usize) -> Self {
        let mut recipes = vec![
            Recipe::new(
                "Bacon Cheeseburger,cheeseburger.com",
                [
                    "bread", "cheese", "beef", "bacon", "mustard", "ketchup", "tomato", "onion",
                ],
            ),
            Recipe::new(
                "Bacon Sandwich,sandwichland.com/bacon",
                ["bread", "bacon", "tomato", "sweet", "chilli", "mayonnaise"],
            ),
            Recipe::new(
                "Candied Bacon,candiesgalore.net/savoury",
                ["sugar", "bacon", "oil", "mint"],
            ),
        ];
        recipes.truncate(top_n);
        Self { recipes }
    }
}

impl RankingProvider for DummyRanker {
    fn top_recipes(&self, _ingredients: &BTreeSet<String>) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }
}

/// Ranks a recipe corpus by ingredient overlap with the request.
pub struct CorpusRanker {
    recipes: Vec<Recipe>,
    vocabulary: BTreeSet<String>,
    top_n: usize,
}

impl CorpusRanker {
    pub fn load(path: &Path, top_n: usize) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe corpus {:?}", path))?;
        let recipes: Vec<Recipe> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse recipe corpus {:?}", path))?;
        let ranker = Self::new(recipes, top_n)?;

        info!(
            path = %path.display(),
            recipes = ranker.recipes.len(),
            vocabulary = ranker.vocabulary.len(),
            "recipe corpus loaded"
        );
        Ok(ranker)
    }

    pub fn new(recipes: Vec<Recipe>, top_n: usize) -> Result<Self> {
        if recipes.is_empty() {
            return Err(anyhow!("recipe corpus is empty"));
        }

        let recipes: Vec<Recipe> = recipes
            .into_iter()
            .map(|recipe| {
                let raw: Vec<String> = recipe.ingredients.into_iter().collect();
                Recipe {
                    name_and_link: recipe.name_and_link,
                    ingredients: normalize_ingredients(&raw),
                }
            })
            .collect();

        let vocabulary = recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().cloned())
            .collect();

        Ok(Self {
            recipes,
            vocabulary,
            top_n,
        })
    }
}

impl RankingProvider for CorpusRanker {
    fn top_recipes(&self, ingredients: &BTreeSet<String>) -> Result<Vec<Recipe>> {
        let known: BTreeSet<String> = ingredients.intersection(&self.vocabulary).cloned().collect();
        if known.len() < ingredients.len() {
            debug!(
                dropped = ?ingredients.difference(&self.vocabulary).collect::<Vec<_>>(),
                "ignoring ingredients unknown to the corpus"
            );
        }

        let mut scored: Vec<(f32, usize, &Recipe)> = self
            .recipes
            .iter()
            .map(|recipe| {
                (
                    jaccard_similarity(&recipe.ingredients, &known),
                    squared_distance(&recipe.ingredients, &known),
                    recipe,
                )
            })
            .collect();

        // stable sort keeps corpus order on full ties
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        Ok(scored
            .into_iter()
            .take(self.top_n)
            .map(|(_, _, recipe)| recipe.clone())
            .collect())
    }
}

use crate::{
    error::AppResult,
    model::Report,
    service::{ranking::RankingProvider, report::build_report},
    util::normalize::normalize_ingredients,
};

/// Normalize the submitted ingredients, fetch candidates and compare each one.
pub fn recommend(ranker: &dyn RankingProvider, raw: &[String]) -> AppResult<Report> {
    let ingredients = normalize_ingredients(raw);
    tracing::debug!(
        received = raw.len(),
        normalized = ?ingredients,
        "ingredients normalized"
    );

    let ranked = ranker.top_recipes(&ingredients)?;
    tracing::debug!(
        candidates = ?ranked.iter().map(|r| r.name_and_link.as_str()).collect::<Vec<_>>(),
        "candidates ranked"
    );

    let report = build_report(&ranked, &ingredients);
    tracing::info!(
        ingredients = ingredients.len(),
        recipes = report.recipes.len(),
        "report built"
    );
    Ok(report)
}

use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::{
    model::{Recipe, RecipeComparison, Report},
    util::sets::{difference, intersect},
};

const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Outcome of splitting a `"name,link"` identifier.
#[derive(Debug, PartialEq, Eq)]
enum RecipeIdentifier<'a> {
    Parsed { name: &'a str, link: &'a str },
    Unparsed { raw: &'a str },
}

impl<'a> RecipeIdentifier<'a> {
    /// Splits at the first comma only. Any later commas stay in the link, so
    /// `"a,b,c"` gives name `a` and link `b,c` rather than dropping `,c`.
    fn parse(raw: &'a str) -> Self {
        match raw.split_once(',') {
            Some((name, link)) => RecipeIdentifier::Parsed { name, link },
            None => RecipeIdentifier::Unparsed { raw },
        }
    }

    /// Without a separator the whole identifier serves as both name and link.
    fn into_name_and_link(self) -> (String, String) {
        match self {
            RecipeIdentifier::Parsed { name, link } => (name.to_string(), link.to_string()),
            RecipeIdentifier::Unparsed { raw } => {
                tracing::debug!(identifier = raw, "recipe identifier without link");
                (raw.to_string(), raw.to_string())
            }
        }
    }
}

pub fn build_report(ranked: &[Recipe], user_ingredients: &BTreeSet<String>) -> Report {
    build_report_at(ranked, user_ingredients, Local::now().naive_local())
}

fn build_report_at(
    ranked: &[Recipe],
    user_ingredients: &BTreeSet<String>,
    now: NaiveDateTime,
) -> Report {
    let mut report = Report {
        created_at: format_created_at(now),
        recipes: Vec::with_capacity(ranked.len()),
    };

    for recipe in ranked {
        report
            .recipes
            .push(compare_recipe(recipe, user_ingredients));
    }

    report
}

fn compare_recipe(recipe: &Recipe, user_ingredients: &BTreeSet<String>) -> RecipeComparison {
    let (name, link) = RecipeIdentifier::parse(&recipe.name_and_link).into_name_and_link();

    RecipeComparison {
        name,
        link,
        matching: intersect(&recipe.ingredients, user_ingredients),
        missing: difference(&recipe.ingredients, user_ingredients),
        additional: difference(user_ingredients, &recipe.ingredients),
    }
}

fn format_created_at(now: NaiveDateTime) -> String {
    now.with_nanosecond(0)
        .unwrap_or(now)
        .format(CREATED_AT_FORMAT)
        .to_string()
}

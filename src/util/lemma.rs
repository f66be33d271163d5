//! Noun lemmatization for ingredient words.
//!
//! Irregular plurals are looked up first; everything else goes through
//! suffix detachment rules in the style of WordNet's morphy.

const IRREGULAR: &[(&str, &str)] = &[
    ("anchovies", "anchovy"),
    ("avocados", "avocado"),
    ("brioches", "brioche"),
    ("berries", "berry"),
    ("calves", "calf"),
    ("cherries", "cherry"),
    ("children", "child"),
    ("cloves", "clove"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("mangoes", "mango"),
    ("mice", "mouse"),
    ("olives", "olive"),
    ("pies", "pie"),
    ("potatoes", "potato"),
    ("quiches", "quiche"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("tomatoes", "tomato"),
    ("wolves", "wolf"),
];

/// Words that end like plurals but are already base forms.
const INVARIANT: &[&str] = &[
    "asparagus",
    "couscous",
    "hummus",
    "molasses",
    "octopus",
    "swiss",
    "watercress",
];

const DETACHMENTS: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
];

/// Reduce `word` to its base noun form. Input is expected lowercase.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*base).to_string();
    }

    if word.len() <= 3 || INVARIANT.contains(&word) {
        return word.to_string();
    }

    for (suffix, replacement) in DETACHMENTS {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{replacement}");
            }
        }
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_regular_plurals() {
        assert_eq!(lemmatize("onions"), "onion");
        assert_eq!(lemmatize("eggs"), "egg");
        assert_eq!(lemmatize("carrots"), "carrot");
    }

    #[test]
    fn applies_detachment_rules() {
        assert_eq!(lemmatize("peaches"), "peach");
        assert_eq!(lemmatize("radishes"), "radish");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("chillies"), "chilly");
        assert_eq!(lemmatize("glasses"), "glass");
    }

    #[test]
    fn resolves_irregular_forms() {
        assert_eq!(lemmatize("tomatoes"), "tomato");
        assert_eq!(lemmatize("leaves"), "leaf");
        assert_eq!(lemmatize("potatoes"), "potato");
    }

    #[test]
    fn keeps_base_forms() {
        for word in ["tomato", "onion", "bacon", "hummus", "couscous", "swiss", "egg", "gas", "hibiscus"] {
            assert_eq!(lemmatize(word), word);
        }
    }

    #[test]
    fn is_idempotent() {
        for word in ["tomatoes", "peaches", "onions", "berries", "leaves", "glasses", "molasses"] {
            let once = lemmatize(word);
            assert_eq!(lemmatize(&once), once, "{word}");
        }
    }
}

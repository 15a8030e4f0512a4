//! Template-based fallback question generation
//!
//! When the language model is unavailable or produces something unusable,
//! a question is rendered straight from the data record: pick one
//! informative field at random and phrase a question about it with a
//! hand-written template for that category and field.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::TriviaQuestion;
use crate::domain::value_objects::{Category, DataRecord};

/// Field names worth asking about, across all categories
pub const INTERESTING_FIELDS: &[&str] = &[
    "name",
    "climate",
    "terrain",
    "population",
    "diameter",
    "rotation_period",
    "orbital_period",
    "gravity",
    "height",
    "mass",
    "hair_color",
    "skin_color",
    "eye_color",
    "birth_year",
    "gender",
    "model",
    "manufacturer",
    "cost_in_credits",
    "length",
    "max_atmosphering_speed",
    "crew",
    "passengers",
    "cargo_capacity",
    "consumables",
    "hyperdrive_rating",
    "starship_class",
];

/// Values SWAPI uses for "no data"
const MISSING_MARKERS: &[&str] = &["unknown", "n/a"];

/// A phrasing for one field of one category
///
/// `{name}` is replaced with the record's subject and `{field}` with the
/// field name, underscores rendered as spaces.
struct QuestionTemplate {
    category: Category,
    field: &'static str,
    text: &'static str,
}

const fn template(category: Category, field: &'static str, text: &'static str) -> QuestionTemplate {
    QuestionTemplate {
        category,
        field,
        text,
    }
}

static TEMPLATES: &[QuestionTemplate] = &[
    // People
    template(Category::People, "name", "What is the name of this Star Wars character?"),
    template(Category::People, "height", "How tall is {name} in centimeters?"),
    template(Category::People, "mass", "What is the mass of {name} in kilograms?"),
    template(Category::People, "hair_color", "What is the {field} of {name}?"),
    template(Category::People, "skin_color", "What is the {field} of {name}?"),
    template(Category::People, "eye_color", "What is the {field} of {name}?"),
    template(Category::People, "birth_year", "In what year was {name} born?"),
    template(Category::People, "gender", "What is the gender of {name}?"),
    // Planets
    template(Category::Planets, "name", "What is the name of this Star Wars planet?"),
    template(Category::Planets, "climate", "What is the {field} of the planet {name}?"),
    template(Category::Planets, "terrain", "What is the {field} of the planet {name}?"),
    template(Category::Planets, "population", "What is the population of the planet {name}?"),
    template(
        Category::Planets,
        "diameter",
        "What is the diameter of the planet {name} in kilometers?",
    ),
    template(
        Category::Planets,
        "rotation_period",
        "How long is a day on the planet {name} in standard hours?",
    ),
    template(
        Category::Planets,
        "orbital_period",
        "How long is a year on the planet {name} in standard days?",
    ),
    template(
        Category::Planets,
        "gravity",
        "What is the gravity on the planet {name} compared to standard gravity?",
    ),
    // Starships
    template(Category::Starships, "name", "What is the name of this Star Wars starship?"),
    template(Category::Starships, "model", "What is the {field} of the starship {name}?"),
    template(Category::Starships, "manufacturer", "What is the {field} of the starship {name}?"),
    template(
        Category::Starships,
        "cost_in_credits",
        "How much does the starship {name} cost in credits?",
    ),
    template(
        Category::Starships,
        "length",
        "What is the length of the starship {name} in meters?",
    ),
    template(
        Category::Starships,
        "max_atmosphering_speed",
        "What is the maximum atmosphering speed of the starship {name}?",
    ),
    template(
        Category::Starships,
        "crew",
        "How many crew members are required to operate the starship {name}?",
    ),
    template(
        Category::Starships,
        "passengers",
        "How many passengers can the starship {name} carry?",
    ),
    template(
        Category::Starships,
        "cargo_capacity",
        "What is the cargo capacity of the starship {name} in kilograms?",
    ),
    template(
        Category::Starships,
        "consumables",
        "How long can the starship {name} operate without resupplying?",
    ),
    template(
        Category::Starships,
        "hyperdrive_rating",
        "What is the hyperdrive rating of the starship {name}?",
    ),
    template(
        Category::Starships,
        "starship_class",
        "What is the class of the starship {name}?",
    ),
];

fn default_template(category: Category) -> &'static str {
    match category {
        Category::People => "What is the {field} of {name}?",
        Category::Planets => "What is the {field} of the planet {name}?",
        Category::Starships => "What is the {field} of the starship {name}?",
    }
}

fn template_text(category: Category, field: &str) -> &'static str {
    TEMPLATES
        .iter()
        .find(|t| t.category == category && t.field == field)
        .map(|t| t.text)
        .unwrap_or_else(|| default_template(category))
}

/// Allow-listed fields of `record` holding a real textual value
///
/// Returned in allow-list order.
pub fn qualifying_fields(record: &DataRecord) -> Vec<&'static str> {
    INTERESTING_FIELDS
        .iter()
        .copied()
        .filter(|field| {
            record
                .get_text(field)
                .is_some_and(|value| !value.is_empty() && !MISSING_MARKERS.contains(&value))
        })
        .collect()
}

/// Render the question for a specific field, answered by that field's value
///
/// Returns `None` if the field has no textual value in the record.
pub fn question_for_field(
    record: &DataRecord,
    category: Category,
    field: &str,
) -> Option<TriviaQuestion> {
    let answer = record.get_text(field)?;
    let subject = record.name().unwrap_or(TriviaQuestion::UNKNOWN);

    let question = template_text(category, field)
        .replace("{field}", &field.replace('_', " "))
        .replace("{name}", subject);

    Some(TriviaQuestion::new(question, answer))
}

/// Generate a question from the record alone
///
/// Always succeeds: a record with nothing worth asking about yields the
/// generic "what is the name of this ..." question.
pub fn generate_fallback_question<R: Rng + ?Sized>(
    record: &DataRecord,
    category: Category,
    rng: &mut R,
) -> TriviaQuestion {
    let candidates = qualifying_fields(record);

    let chosen = candidates
        .choose(rng)
        .and_then(|field| question_for_field(record, category, field));

    match chosen {
        Some(question) => question,
        None => TriviaQuestion::new(
            format!("What is the name of this {}?", category.singular_noun()),
            record.name().unwrap_or(TriviaQuestion::UNKNOWN),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn luke() -> DataRecord {
        DataRecord::new()
            .with_field("name", "Luke Skywalker")
            .with_field("height", "172")
            .with_field("mass", "77")
            .with_field("hair_color", "blond")
    }

    #[test]
    fn test_height_question_for_luke() {
        let question = question_for_field(&luke(), Category::People, "height").unwrap();

        assert_eq!(question.question(), "How tall is Luke Skywalker in centimeters?");
        assert_eq!(question.answer(), "172");
    }

    #[test]
    fn test_template_table() {
        let cases = [
            (Category::People, "hair_color", "What is the hair color of Rex?"),
            (Category::People, "birth_year", "In what year was Rex born?"),
            (Category::People, "homeworld", "What is the homeworld of Rex?"),
            (Category::Planets, "terrain", "What is the terrain of the planet Rex?"),
            (
                Category::Planets,
                "rotation_period",
                "How long is a day on the planet Rex in standard hours?",
            ),
            (
                Category::Planets,
                "surface_water",
                "What is the surface water of the planet Rex?",
            ),
            (Category::Starships, "model", "What is the model of the starship Rex?"),
            (Category::Starships, "starship_class", "What is the class of the starship Rex?"),
            (
                Category::Starships,
                "max_atmosphering_speed",
                "What is the maximum atmosphering speed of the starship Rex?",
            ),
            (Category::Starships, "name", "What is the name of this Star Wars starship?"),
        ];

        for (category, field, expected) in cases {
            let record = DataRecord::new()
                .with_field("name", "Rex")
                .with_field(field, "value");
            let question = question_for_field(&record, category, field).unwrap();
            assert_eq!(question.question(), expected, "{} / {}", category, field);
        }
    }

    #[test]
    fn test_qualifying_fields_skip_missing_markers() {
        let record = DataRecord::new()
            .with_field("name", "Yavin IV")
            .with_field("climate", "temperate, tropical")
            .with_field("population", "unknown")
            .with_field("gravity", "n/a")
            .with_field("terrain", "")
            .with_field("diameter", 10200)
            .with_field("films", "not allow-listed");

        assert_eq!(qualifying_fields(&record), vec!["name", "climate"]);
    }

    #[test]
    fn test_answer_matches_chosen_field() {
        let record = luke();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let question = generate_fallback_question(&record, Category::People, &mut rng);
            let field = qualifying_fields(&record)
                .into_iter()
                .find(|f| {
                    question_for_field(&record, Category::People, f).as_ref() == Some(&question)
                })
                .expect("question should come from a qualifying field");
            assert_eq!(Some(question.answer()), record.get_text(field));
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let record = luke();
        let first = generate_fallback_question(&record, Category::People, &mut StdRng::seed_from_u64(42));
        let second = generate_fallback_question(&record, Category::People, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_candidate_gets_picked() {
        let record = luke();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let question = generate_fallback_question(&record, Category::People, &mut rng);
            seen.insert(question.answer().to_string());
        }

        for expected in ["Luke Skywalker", "172", "77", "blond"] {
            assert!(seen.contains(expected), "{} never chosen", expected);
        }
    }

    #[test]
    fn test_no_qualifying_fields_asks_for_name() {
        let record = DataRecord::new()
            .with_field("name", "unknown")
            .with_field("crew", "n/a");
        let question = generate_fallback_question(&record, Category::Starships, &mut rand::thread_rng());

        assert_eq!(question.question(), "What is the name of this starship?");
        assert_eq!(question.answer(), "unknown");
    }

    #[test]
    fn test_empty_record_answers_unknown() {
        let question =
            generate_fallback_question(&DataRecord::new(), Category::People, &mut rand::thread_rng());

        assert_eq!(question.question(), "What is the name of this character?");
        assert_eq!(question.answer(), TriviaQuestion::UNKNOWN);
    }

    #[test]
    fn test_missing_name_uses_unknown_subject() {
        let record = DataRecord::new().with_field("gravity", "1 standard");
        let question = generate_fallback_question(&record, Category::Planets, &mut rand::thread_rng());

        assert_eq!(
            question.question(),
            "What is the gravity on the planet Unknown compared to standard gravity?"
        );
        assert_eq!(question.answer(), "1 standard");
    }
}

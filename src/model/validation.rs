use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::draft::Draft;
use super::field::Field;

/// Field-to-message mapping describing current validation failures.
///
/// Only failing fields are present; an empty map means the draft is
/// acceptable. The map is recomputed wholesale on every submit attempt,
/// never partially merged.
pub type ErrorMap = BTreeMap<Field, String>;

/// Loose syntactic email check: something, `@`, something, `.`, something,
/// none of it whitespace or a second `@`. Deliberately not an RFC parser.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Validates a draft, collecting every failing field.
///
/// Rules are evaluated independently and never short-circuit. `age` is
/// checked only while advanced fields are shown; when they are hidden it can
/// never block submission regardless of its content. `country`, `interests`,
/// and `message` are always optional.
pub fn validate(draft: &Draft, advanced_shown: bool) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    } else if name.chars().count() < 2 {
        errors.insert(Field::Name, "Name must be at least 2 characters".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, "Please enter a valid email".to_string());
    }

    if advanced_shown {
        if draft.age.is_empty() {
            errors.insert(Field::Age, "Age is required".to_string());
        } else if !age_in_range(&draft.age) {
            errors.insert(Field::Age, "Please enter a valid age (1-120)".to_string());
        }
    }

    errors
}

/// `true` when the raw age text parses to an integer in `[1, 120]`.
///
/// Text that does not parse as a whole number, fractional input included,
/// counts as out of range rather than silently passing.
fn age_in_range(age: &str) -> bool {
    age.trim()
        .parse::<u32>()
        .is_ok_and(|n| (1..=120).contains(&n))
}

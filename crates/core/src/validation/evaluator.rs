//! Rule evaluator — pure logic, no store access.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{Rule, RuleSet};
use crate::error::ValidationError;

/// Accepted name shape: letters and whitespace only.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid regex"));

/// Evaluate a rule set against the two name fields.
///
/// Rules run in order, and within each rule `nombre` is checked before
/// `apellido`. The first violation aborts evaluation; callers surface it
/// to the user and leave all state untouched.
pub fn evaluate(
    rule_set: &RuleSet,
    nombre: &str,
    apellido: &str,
) -> Result<(), ValidationError> {
    for rule in rule_set.rules() {
        for (field, value) in [("nombre", nombre), ("apellido", apellido)] {
            check(*rule, field, value)?;
        }
    }
    Ok(())
}

fn check(rule: Rule, field: &'static str, value: &str) -> Result<(), ValidationError> {
    match rule {
        Rule::Required if value.is_empty() => Err(ValidationError::MissingField { field }),
        Rule::LettersAndSpaces if !value.is_empty() && !NAME_RE.is_match(value) => {
            Err(ValidationError::InvalidCharacters { field })
        }
        Rule::MinLength(min) if value.chars().count() < min => {
            Err(ValidationError::TooShort { field, min })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::rules::MIN_NAME_LEN;
    use super::*;

    fn create(nombre: &str, apellido: &str) -> Result<(), ValidationError> {
        evaluate(&RuleSet::create(), nombre, apellido)
    }

    fn update(nombre: &str, apellido: &str) -> Result<(), ValidationError> {
        evaluate(&RuleSet::update(), nombre, apellido)
    }

    #[test]
    fn accepts_plain_names() {
        assert_eq!(create("Maria", "Lopez"), Ok(()));
    }

    #[test]
    fn accepts_names_with_inner_spaces() {
        assert_eq!(create("Maria Jose", "De La Cruz"), Ok(()));
    }

    #[test]
    fn rejects_blank_nombre() {
        assert_eq!(
            create("", "Lopez"),
            Err(ValidationError::MissingField { field: "nombre" })
        );
    }

    #[test]
    fn rejects_blank_apellido() {
        assert_eq!(
            create("Maria", ""),
            Err(ValidationError::MissingField { field: "apellido" })
        );
    }

    #[test]
    fn blank_check_runs_before_character_check() {
        // nombre blank and apellido malformed: the required rule wins.
        assert_eq!(
            create("", "L0pez!"),
            Err(ValidationError::MissingField { field: "nombre" })
        );
    }

    #[test]
    fn rejects_digits() {
        assert_eq!(
            create("Mar1a", "Lopez"),
            Err(ValidationError::InvalidCharacters { field: "nombre" })
        );
    }

    #[test]
    fn rejects_punctuation() {
        assert_eq!(
            create("Maria", "Lopez-Ruiz"),
            Err(ValidationError::InvalidCharacters { field: "apellido" })
        );
    }

    #[test]
    fn rejects_accented_letters() {
        // The accepted class is ASCII letters only.
        assert_eq!(
            create("Jose", "Muñoz"),
            Err(ValidationError::InvalidCharacters { field: "apellido" })
        );
    }

    #[test]
    fn rejects_short_names_in_create_mode() {
        assert_eq!(
            create("Ana", "Lopez"),
            Err(ValidationError::TooShort {
                field: "nombre",
                min: MIN_NAME_LEN
            })
        );
        assert_eq!(
            create("Maria", "Paz"),
            Err(ValidationError::TooShort {
                field: "apellido",
                min: MIN_NAME_LEN
            })
        );
    }

    #[test]
    fn accepts_exactly_minimum_length() {
        assert_eq!(create("Anna", "Diaz"), Ok(()));
    }

    #[test]
    fn update_mode_skips_the_length_check() {
        // Short names pass in edit mode; the update rule set has no
        // MinLength entry.
        assert_eq!(update("Ana", "Paz"), Ok(()));
    }

    #[test]
    fn update_mode_still_rejects_blank_and_malformed() {
        assert_eq!(
            update("", "Paz"),
            Err(ValidationError::MissingField { field: "nombre" })
        );
        assert_eq!(
            update("Ana", "P4z"),
            Err(ValidationError::InvalidCharacters { field: "apellido" })
        );
    }

    #[test]
    fn whitespace_only_names_pass() {
        // Input is never trimmed before validation, so four spaces
        // satisfy every rule.
        assert_eq!(create("    ", "    "), Ok(()));
    }
}

//! Declarative validation rules.
//!
//! Each submit mode evaluates a fixed, ordered list of [`Rule`]s. Keeping
//! the lists as data makes the divergence between the two modes an
//! explicit, auditable choice: the update set omits the minimum-length
//! rule, so the length requirement applies only at registration.

/// Minimum accepted length for a name field, in characters.
pub const MIN_NAME_LEN: usize = 4;

/// A single field-level check, applied to both name fields in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must not be blank.
    Required,
    /// The field must match `^[A-Za-z\s]+$`.
    LettersAndSpaces,
    /// The field must have at least this many characters.
    MinLength(usize),
}

/// An ordered rule list for one submit mode.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Rules applied when registering a new user.
    pub fn create() -> Self {
        Self {
            rules: vec![
                Rule::Required,
                Rule::LettersAndSpaces,
                Rule::MinLength(MIN_NAME_LEN),
            ],
        }
    }

    /// Rules applied when updating an existing user.
    ///
    /// Intentionally shorter than [`RuleSet::create`]: the length check
    /// is not re-applied in edit mode (see module docs).
    pub fn update() -> Self {
        Self {
            rules: vec![Rule::Required, Rule::LettersAndSpaces],
        }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

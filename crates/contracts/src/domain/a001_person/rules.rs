//! Validation rules of the person form
//!
//! Messages are recomputed on every query from the current field values;
//! nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::aggregate::{Person, PersonField};

/// Constants used by the person rule set.
/// Deserialized from the `[person]` table of the rules config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRules {
    pub min_first_name_len: usize,
    pub reserved_first_name: Cow<'static, str>,
    pub forbidden_last_name: Cow<'static, str>,
    pub min_age: i32,
}

impl PersonRules {
    pub const DEFAULT: Self = Self {
        min_first_name_len: 2,
        reserved_first_name: Cow::Borrowed("Q"),
        forbidden_last_name: Cow::Borrowed("Doe"),
        min_age: 18,
    };

    /// First finding for one field, rules checked in declaration order
    fn check(&self, person: &Person, field: PersonField) -> Option<String> {
        match field {
            PersonField::FirstName => {
                let value = person.first_name.as_str();
                if value.is_empty() {
                    Some(format!("{field} is mandatory"))
                } else if value == self.reserved_first_name {
                    Some(format!("{field} '{value}' is reserved for extra-dimensional beings!"))
                } else if value.chars().count() < self.min_first_name_len {
                    Some(format!("{field} '{value}' is too short."))
                } else {
                    None
                }
            }
            PersonField::LastName => {
                let value = person.last_name.as_str();
                if value.is_empty() {
                    Some(format!("{field} is mandatory"))
                } else if value == self.forbidden_last_name {
                    Some(format!("{field} cannot be '{value}'"))
                } else {
                    None
                }
            }
            PersonField::Age => (person.age < self.min_age)
                .then(|| format!("{field} should be at least {}", self.min_age)),
        }
    }
}

impl Default for PersonRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub(crate) static DEFAULT_RULES: PersonRules = PersonRules::DEFAULT;

/// Lazy sequence of findings for a person.
///
/// Finite and restartable: clone it (or ask the person again) to start over.
#[derive(Debug, Clone)]
pub struct PersonErrors<'a> {
    person: &'a Person,
    rules: &'a PersonRules,
    selector: Option<PersonField>,
    cursor: usize,
}

impl<'a> PersonErrors<'a> {
    pub(crate) fn new(person: &'a Person, rules: &'a PersonRules, selector: Option<PersonField>) -> Self {
        Self {
            person,
            rules,
            selector,
            cursor: 0,
        }
    }
}

impl Iterator for PersonErrors<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(&field) = PersonField::ALL.get(self.cursor) {
            self.cursor += 1;
            if self.selector.is_some_and(|selected| selected != field) {
                continue;
            }
            if let Some(message) = self.rules.check(self.person, field) {
                return Some(message);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(PersonField::ALL.len().saturating_sub(self.cursor)))
    }
}

impl std::iter::FusedIterator for PersonErrors<'_> {}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::rules::{PersonErrors, PersonRules, DEFAULT_RULES};
use crate::domain::common::{DataErrorInfo, ErrorsChanged, NotifyDataErrorInfo};

// ============================================================================
// Field selector
// ============================================================================

/// Поле формы персоны (в порядке объявления)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    FirstName,
    LastName,
    Age,
}

impl PersonField {
    /// Все поля в порядке объявления; в этом же порядке выдаются ошибки
    pub const ALL: [PersonField; 3] = [Self::FirstName, Self::LastName, Self::Age];

    /// Имя поля для биндинга (совпадает с ключом JSON)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_owned()))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Имя поля, которого нет у персоны
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownFieldError(pub String);

/// Персона не прошла валидацию; содержит все найденные сообщения
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Персона, заполняемая через форму
///
/// Поля не ограничены структурно: любые строки и любой возраст допустимы,
/// ошибки только сообщаются через [`Person::errors`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub age: i32,

    #[serde(skip)]
    errors_changed: ErrorsChanged<PersonField>,
}

impl Person {
    /// Пустая персона: пустые строки, возраст 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            errors_changed: ErrorsChanged::default(),
        }
    }

    /// Полное имя: "<имя> <фамилия>", без проверок на пустоту
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Ошибки по одному полю или по всем (`None`) с правилами по умолчанию
    pub fn errors(&self, selector: Option<PersonField>) -> PersonErrors<'_> {
        self.errors_with(&DEFAULT_RULES, selector)
    }

    /// Ошибки с заданным набором правил
    pub fn errors_with<'a>(
        &'a self,
        rules: &'a PersonRules,
        selector: Option<PersonField>,
    ) -> PersonErrors<'a> {
        PersonErrors::new(self, rules, selector)
    }

    /// Вариант [`Person::errors`] для вызывающих, знающих только имя поля
    pub fn errors_by_name(&self, name: Option<&str>) -> Result<PersonErrors<'_>, UnknownFieldError> {
        let selector = name.map(str::parse::<PersonField>).transpose()?;
        Ok(self.errors(selector))
    }

    /// Первое сообщение об ошибке для поля
    pub fn error_for(&self, field: PersonField) -> Option<String> {
        self.errors(Some(field)).next()
    }

    /// Ошибка уровня сущности; у персоны таких правил нет
    pub fn error(&self) -> Option<String> {
        None
    }

    pub fn has_errors(&self) -> bool {
        self.errors(None).next().is_some()
    }

    /// Валидация данных перед сохранением
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&DEFAULT_RULES)
    }

    pub fn validate_with(&self, rules: &PersonRules) -> Result<(), ValidationError> {
        let messages: Vec<String> = self.errors_with(rules, None).collect();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { messages })
        }
    }

    /// Точка подписки на изменение ошибок; сама персона событие не вызывает
    pub fn errors_changed(&self) -> &ErrorsChanged<PersonField> {
        &self.errors_changed
    }
}

/// Копия получает собственную точку подписки, подписчики оригинала не переносятся
impl Clone for Person {
    fn clone(&self) -> Self {
        Self {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            errors_changed: ErrorsChanged::default(),
        }
    }
}

impl DataErrorInfo for Person {
    type Field = PersonField;

    fn error_for(&self, field: PersonField) -> Option<String> {
        Person::error_for(self, field)
    }

    fn error(&self) -> Option<String> {
        Person::error(self)
    }
}

impl NotifyDataErrorInfo for Person {
    fn errors(&self, field: Option<PersonField>) -> Vec<String> {
        Person::errors(self, field).collect()
    }

    fn has_errors(&self) -> bool {
        Person::has_errors(self)
    }

    fn errors_changed(&self) -> &ErrorsChanged<PersonField> {
        Person::errors_changed(self)
    }
}

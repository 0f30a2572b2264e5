//! Declarative field rules checked before a form reaches the network.
//!
//! A [`Schema`] lists the form's fields in display order, each with its rules.
//! Validation reports the first failing rule per field, so every invalid field
//! carries exactly one message.

use crate::common::AppError;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::BTreeMap, fmt, sync::LazyLock};

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .ok()
});

/// Returns true when `value` looks like a deliverable email address.
#[must_use]
pub fn valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// A single constraint on a string field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// At least `min` characters, counted without trimming.
    MinLength { min: usize, message: String },
    /// Standard email address grammar.
    Email { message: String },
}

impl Rule {
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Rule::MinLength { message, .. } | Rule::Email { message } => message,
        }
    }

    fn set_message(&mut self, replacement: &str) {
        match self {
            Rule::MinLength { message, .. } | Rule::Email { message } => {
                replacement.clone_into(message);
            }
        }
    }

    /// Checks `value`, returning the rule's message on failure.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<&str> {
        let passed = match self {
            Rule::MinLength { min, .. } => value.chars().count() >= *min,
            Rule::Email { .. } => valid_email(value),
        };
        (!passed).then(|| self.message())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

/// Ordered set of fields and their rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field with its rules, keeping declaration order.
    #[must_use]
    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldSchema {
            name,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Resolves a field name to the schema's static name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.field_names().find(|field| *field == name)
    }

    /// Replaces the message of every rule on `field`. Returns false for unknown fields.
    pub fn override_message(&mut self, field: &str, message: &str) -> bool {
        let Some(schema) = self.fields.iter_mut().find(|f| f.name == field) else {
            return false;
        };
        for rule in &mut schema.rules {
            rule.set_message(message);
        }
        true
    }

    /// Validates one field; unknown fields have no rules and always pass.
    #[must_use]
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.rules.iter().find_map(|rule| rule.check(value)))
            .map(ToString::to_string)
    }

    /// Validates every field. Missing values are checked as empty strings.
    ///
    /// # Errors
    /// Returns the per-field messages when at least one field fails.
    pub fn validate(&self, values: &FieldValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in &self.fields {
            let value = values.get(field.name).unwrap_or_default();
            if let Some(message) = field.rules.iter().find_map(|rule| rule.check(value)) {
                errors.insert(field.name, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Current string value of every field, keyed by wire name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<&'static str, String>);

impl FieldValues {
    /// Empty strings for every field in `schema`.
    #[must_use]
    pub fn empty(schema: &Schema) -> Self {
        Self(
            schema
                .field_names()
                .map(|name| (name, String::new()))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: &'static str, value: String) {
        self.0.insert(name, value);
    }

    /// Decodes the values into the form's typed payload.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the values do not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::to_value(self)
            .and_then(serde_json::from_value)
            .map_err(|err| AppError::Serialization(format!("Failed to decode form values: {err}")))
    }
}

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, name: &'static str, message: impl Into<String>) {
        self.0.insert(name, message.into());
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, message)| (*name, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, message)) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{name}: {message}")?;
        }
        Ok(())
    }
}

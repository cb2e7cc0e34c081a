//! Field rules for `Categoria`.
//!
//! Messages are fixed strings keyed by [`Rule`]. Consumers match on them
//! verbatim, so they must never be composed at runtime.
//!
//! Lengths are measured in UTF-16 code units, so a character outside the Basic
//! Multilingual Plane (e.g. an emoji) counts twice.

use codeflix_core::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names must be strictly longer than this many code units.
pub const NAME_MIN_EXCLUSIVE: usize = 3;

/// Longest accepted name, in UTF-16 code units.
pub const NAME_MAX: usize = 255;

/// Longest accepted description, in UTF-16 code units.
pub const DESCRIPTION_MAX: usize = 10_000;

/// A single field constraint of `Categoria`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    NameRequired,
    NameTooShort,
    NameTooLong,
    DescriptionRequired,
    DescriptionTooLong,
}

impl Rule {
    /// User-facing message (pt-BR).
    pub const fn message(self) -> &'static str {
        match self {
            Rule::NameRequired => "Nome não pode ser vazio ou nulo.",
            Rule::NameTooShort => "Nome não pode ser menor que 3 caracteres.",
            Rule::NameTooLong => "Nome não pode ser maior que 255 caracteres.",
            Rule::DescriptionRequired => "Descricao não pode ser nulo.",
            Rule::DescriptionTooLong => "Descricao não conter mais que 10000 caracteres.",
        }
    }

    /// Stable machine-readable code; same as the serde representation.
    pub const fn code(self) -> &'static str {
        match self {
            Rule::NameRequired => "name_required",
            Rule::NameTooShort => "name_too_short",
            Rule::NameTooLong => "name_too_long",
            Rule::DescriptionRequired => "description_required",
            Rule::DescriptionTooLong => "description_too_long",
        }
    }
}

/// Result type for operations guarded by [`validate`].
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A `Categoria` field constraint was violated.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[error("{}", .rule.message())]
pub struct ValidationError {
    rule: Rule,
}

impl ValidationError {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl From<Rule> for ValidationError {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.message())
    }
}

/// Check a candidate name/description pair.
///
/// Checks run in a fixed order and the first violation is reported. `None`
/// stands for a missing (null) value, which only arises when rehydrating
/// stored records.
pub fn validate(name: Option<&str>, description: Option<&str>) -> ValidationResult<()> {
    validate_name(name)?;
    validate_description(description)
}

fn validate_name(name: Option<&str>) -> ValidationResult<()> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(Rule::NameRequired.into()),
    };

    let len = utf16_len(name);
    if len <= NAME_MIN_EXCLUSIVE {
        return Err(Rule::NameTooShort.into());
    }
    if len > NAME_MAX {
        return Err(Rule::NameTooLong.into());
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    let Some(description) = description else {
        return Err(Rule::DescriptionRequired.into());
    };

    if utf16_len(description) > DESCRIPTION_MAX {
        return Err(Rule::DescriptionTooLong.into());
    }
    Ok(())
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

use std::fmt;

use thiserror::Error;

/// Required registration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Location,
    Nickname,
    Clan,
}

impl RequiredField {
    /// Wire name of the field, as shown to the operator.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Location => "mapa",
            Self::Nickname => "nick",
            Self::Clan => "cla",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A registration draft is missing one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown shift '{0}' (expected Manhã, Tarde, Noite or Madrugada)")]
    InvalidShift(String),
    #[error("unknown interface language '{0}' (expected pt, en or es)")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

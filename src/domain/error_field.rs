use std::fmt;

use serde::{Deserialize, Serialize};

/// Error record returned by gift card mutations.
///
/// `field` is `None` for errors that do not target a specific input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCardError {
    pub code: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl GiftCardError {
    pub fn new(code: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            field: Some(field.into()),
        }
    }

    pub fn global(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            field: None,
        }
    }

    pub fn targets(&self, field: ErrorField) -> bool {
        self.field.as_deref() == Some(field.as_str())
    }
}

impl fmt::Display for GiftCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Form inputs a backend error can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorField {
    Tag,
    Tags,
    ExpiryDate,
    Currency,
    ExpiryPeriod,
    Amount,
    Balance,
    Count,
}

impl ErrorField {
    pub const ALL: [ErrorField; 8] = [
        ErrorField::Tag,
        ErrorField::Tags,
        ErrorField::ExpiryDate,
        ErrorField::Currency,
        ErrorField::ExpiryPeriod,
        ErrorField::Amount,
        ErrorField::Balance,
        ErrorField::Count,
    ];

    /// Name used by the backend in `GiftCardError::field`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorField::Tag => "tag",
            ErrorField::Tags => "tags",
            ErrorField::ExpiryDate => "expiryDate",
            ErrorField::Currency => "currency",
            ErrorField::ExpiryPeriod => "expiryPeriod",
            ErrorField::Amount => "amount",
            ErrorField::Balance => "balance",
            ErrorField::Count => "count",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields the update form displays errors for.
pub const UPDATE_ERROR_FIELDS: &[ErrorField] = &[ErrorField::Tags, ErrorField::ExpiryDate];

/// Fields the bulk create dialog displays errors for.
pub const BULK_CREATE_ERROR_FIELDS: &[ErrorField] = &[
    ErrorField::Tag,
    ErrorField::ExpiryDate,
    ErrorField::Currency,
    ErrorField::Amount,
    ErrorField::Balance,
    ErrorField::Count,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_lookup() {
        for field in ErrorField::ALL {
            assert_eq!(ErrorField::from_wire(field.as_str()), Some(field));
        }
        assert_eq!(ErrorField::from_wire("ExpiryDate"), None);
    }

    #[test]
    fn global_errors_target_nothing() {
        let error = GiftCardError::global("GRAPHQL_ERROR");
        assert!(ErrorField::ALL.iter().all(|field| !error.targets(*field)));
        assert_eq!(error.to_string(), "GRAPHQL_ERROR");
    }
}

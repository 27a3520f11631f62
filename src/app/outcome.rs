use serde::Serialize;

use crate::{
    domain::{ErrorField, GiftCardError},
    form::{FieldErrorMap, map_errors},
};

use super::gateway::{MutationResponse, TransportError};

/// Failures that get a dedicated message instead of the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialCase {
    ExpiryDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Nothing was touched; no request was sent.
    NoOp,
    Success,
    /// The backend rejected the values. `field_errors` may be empty when every error
    /// targets a field the form does not display.
    #[serde(rename_all = "camelCase")]
    ValidationFailed {
        field_errors: FieldErrorMap,
        errors: Vec<GiftCardError>,
        special_case: Option<SpecialCase>,
    },
    SubmissionFailed {
        message: String,
    },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }

    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            SubmitOutcome::ValidationFailed { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }

    pub fn special_case(&self) -> Option<SpecialCase> {
        match self {
            SubmitOutcome::ValidationFailed { special_case, .. } => *special_case,
            _ => None,
        }
    }
}

/// Classifies a mutation result against the fields the form can display errors for.
pub fn classify(
    recognized: &[ErrorField],
    result: Result<MutationResponse, TransportError>,
) -> SubmitOutcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            return SubmitOutcome::SubmissionFailed {
                message: err.message,
            };
        }
    };
    if response.errors.is_empty() {
        return SubmitOutcome::Success;
    }
    let special_case = response
        .errors
        .iter()
        .any(|error| error.targets(ErrorField::ExpiryDate))
        .then_some(SpecialCase::ExpiryDate);
    SubmitOutcome::ValidationFailed {
        field_errors: map_errors(recognized, &response.errors),
        errors: response.errors,
        special_case,
    }
}

use indexmap::IndexMap;

use crate::domain::{ErrorField, GiftCardError};

/// Per-field errors, ordered like the recognized key list they were mapped against.
pub type FieldErrorMap = IndexMap<ErrorField, GiftCardError>;

/// Routes backend errors to the recognized form fields.
///
/// The first error targeting a field wins. Errors for fields outside `recognized` are not
/// part of the result.
pub fn map_errors(recognized: &[ErrorField], errors: &[GiftCardError]) -> FieldErrorMap {
    let mut mapped = FieldErrorMap::new();
    for field in recognized {
        if mapped.contains_key(field) {
            continue;
        }
        if let Some(error) = errors.iter().find(|error| error.targets(*field)) {
            mapped.insert(*field, error.clone());
        }
    }
    mapped
}

/// Errors that no recognized field claims; these belong on the global error path.
pub fn unmapped_errors<'a>(
    recognized: &[ErrorField],
    errors: &'a [GiftCardError],
) -> Vec<&'a GiftCardError> {
    errors
        .iter()
        .filter(|error| !recognized.iter().any(|field| error.targets(*field)))
        .collect()
}

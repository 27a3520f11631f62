use thiserror::Error;

use super::field::{FieldKind, FormField};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} expects a {expected} value, got {found}")]
    KindMismatch {
        field: FormField,
        expected: FieldKind,
        found: FieldKind,
    },
}

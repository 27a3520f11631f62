mod actions;
mod data;
mod diff;
mod error;
mod errors;
mod field;
mod reducers;
mod snapshot;
mod state;

pub use actions::FormCommand;
pub use data::{DEFAULT_CURRENCY, DEFAULT_EXPIRY_PERIOD_AMOUNT, GiftCardFormData};
pub use diff::{SetDiff, diff};
pub use error::FormError;
pub use errors::{FieldErrorMap, map_errors, unmapped_errors};
pub use field::{FieldKind, FieldValue, FormField};
pub use reducers::apply_command;
pub use snapshot::FormSnapshot;
pub use state::FormState;

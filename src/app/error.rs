use thiserror::Error;

use crate::form::FormError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submit is already waiting for its response")]
    InFlight,
    #[error("no gift card is loaded")]
    NoEntity,
    #[error("no submit is waiting for a response")]
    NotPending,
}

/// Rejection of a command dispatched to an edit session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

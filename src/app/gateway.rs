use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::GiftCardError;

use super::payload::GiftCardUpdateRequest;

/// Body of a completed update mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub errors: Vec<GiftCardError>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn with_errors(errors: Vec<GiftCardError>) -> Self {
        Self { errors }
    }
}

/// The request never produced a mutation response (network, server or protocol failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Executes gift card mutations. Timeouts and cancellation are up to the implementation.
pub trait MutationGateway {
    fn update_gift_card(
        &self,
        request: &GiftCardUpdateRequest,
    ) -> impl Future<Output = Result<MutationResponse, TransportError>>;
}

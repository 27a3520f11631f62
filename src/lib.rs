#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod io;

pub use app::{GiftCardUpdateSession, SessionOptions, SubmitOutcome};
pub use io::{DocumentFormat, OutputOptions, parse_document, read_document, render};

pub mod prelude {
    pub use super::app::{
        MutationGateway, MutationResponse, Notification, Notifier, SubmitError, TransportError,
    };
    pub use super::domain::{ErrorField, GiftCard, GiftCardError};
    pub use super::form::{FieldValue, FormField};
    pub use super::{GiftCardUpdateSession, SessionOptions, SubmitOutcome};
}

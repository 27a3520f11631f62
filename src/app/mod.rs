mod bulk_create;
mod error;
mod gateway;
mod notify;
mod options;
mod outcome;
mod payload;
mod session;

pub use bulk_create::{
    GiftCardBulkCreateFormData, GiftCardBulkCreateInput, TimePeriod, build_bulk_create_input,
    map_bulk_create_errors,
};
pub use error::{SessionError, SubmitError};
pub use gateway::{MutationGateway, MutationResponse, TransportError};
pub use notify::{
    INVALID_EXPIRY_DATE_CONTENT, INVALID_EXPIRY_DATE_HEADER, Notification, NotificationStatus,
    Notifier, SAVE_FAILED, SAVED_CHANGES, notification_for,
};
pub use options::SessionOptions;
pub use outcome::{SpecialCase, SubmitOutcome, classify};
pub use payload::{
    GiftCardUpdateInput, GiftCardUpdateRequest, MetadataDelta, build_update_request,
    metadata_delta,
};
pub use session::{GiftCardUpdateSession, SubmitPlan};

mod error_field;
mod gift_card;

pub use error_field::{
    BULK_CREATE_ERROR_FIELDS, ErrorField, GiftCardError, UPDATE_ERROR_FIELDS,
};
pub use gift_card::{
    ExpiryType, GiftCard, GiftCardTag, MetadataItem, Money, TimePeriodType,
};

use std::sync::Arc;

use crate::domain::GiftCard;

use super::data::GiftCardFormData;

/// Last confirmed form values; the baseline every submit is diffed against.
///
/// Snapshots are never edited. A reload or a confirmed submit produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    data: Arc<GiftCardFormData>,
}

impl FormSnapshot {
    pub fn new(data: GiftCardFormData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn from_gift_card(card: Option<&GiftCard>, currency: &str) -> Self {
        Self::new(GiftCardFormData::from_gift_card(card, currency))
    }

    pub fn data(&self) -> &GiftCardFormData {
        &self.data
    }
}

impl From<GiftCardFormData> for FormSnapshot {
    fn from(data: GiftCardFormData) -> Self {
        Self::new(data)
    }
}

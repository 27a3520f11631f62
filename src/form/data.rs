use serde::{Deserialize, Serialize};

use crate::domain::{ExpiryType, GiftCard, MetadataItem, TimePeriodType};

use super::{
    error::FormError,
    field::{FieldValue, FormField, mismatch},
};

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_EXPIRY_PERIOD_AMOUNT: u32 = 12;

/// Values of every gift card form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GiftCardFormData {
    pub tag: String,
    pub tags: Vec<String>,
    pub expiry_selected: bool,
    pub expiry_date: Option<String>,
    pub expiry_type: ExpiryType,
    pub expiry_period_type: TimePeriodType,
    pub expiry_period_amount: u32,
    pub requires_activation: bool,
    pub balance_amount: f64,
    pub balance_currency: String,
    pub metadata: Vec<MetadataItem>,
    pub private_metadata: Vec<MetadataItem>,
}

impl Default for GiftCardFormData {
    fn default() -> Self {
        Self::empty(DEFAULT_CURRENCY)
    }
}

impl GiftCardFormData {
    /// Data shown while no gift card is loaded.
    pub fn empty(currency: &str) -> Self {
        Self {
            tag: String::new(),
            tags: Vec::new(),
            expiry_selected: false,
            expiry_date: None,
            expiry_type: ExpiryType::ExpiryDate,
            expiry_period_type: TimePeriodType::Month,
            expiry_period_amount: DEFAULT_EXPIRY_PERIOD_AMOUNT,
            requires_activation: false,
            balance_amount: 0.0,
            balance_currency: currency.to_string(),
            metadata: Vec::new(),
            private_metadata: Vec::new(),
        }
    }

    pub fn from_gift_card(card: Option<&GiftCard>, currency: &str) -> Self {
        let mut data = Self::empty(currency);
        if let Some(card) = card {
            data.tags = card.tag_names();
            data.expiry_selected = card.expiry_date.is_some();
            data.expiry_date = card.expiry_date.clone();
            data.metadata = card.metadata.clone();
            data.private_metadata = card.private_metadata.clone();
        }
        data
    }

    pub fn get(&self, field: FormField) -> FieldValue {
        match field {
            FormField::Tag => FieldValue::Text(self.tag.clone()),
            FormField::Tags => FieldValue::TagSet(self.tags.clone()),
            FormField::ExpirySelected => FieldValue::Flag(self.expiry_selected),
            FormField::ExpiryDate => FieldValue::OptionalText(self.expiry_date.clone()),
            FormField::ExpiryType => FieldValue::ExpiryType(self.expiry_type),
            FormField::ExpiryPeriodType => FieldValue::PeriodType(self.expiry_period_type),
            FormField::ExpiryPeriodAmount => FieldValue::Count(self.expiry_period_amount),
            FormField::RequiresActivation => FieldValue::Flag(self.requires_activation),
            FormField::BalanceAmount => FieldValue::Amount(self.balance_amount),
            FormField::BalanceCurrency => FieldValue::Text(self.balance_currency.clone()),
            FormField::Metadata => FieldValue::Metadata(self.metadata.clone()),
            FormField::PrivateMetadata => FieldValue::Metadata(self.private_metadata.clone()),
        }
    }

    /// Stores `value` into `field`; the value kind must match the field kind.
    pub fn set(&mut self, field: FormField, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (FormField::Tag, FieldValue::Text(text)) => self.tag = text,
            (FormField::BalanceCurrency, FieldValue::Text(text)) => self.balance_currency = text,
            (FormField::Tags, FieldValue::TagSet(tags)) => self.tags = tags,
            (FormField::ExpirySelected, FieldValue::Flag(flag)) => self.expiry_selected = flag,
            (FormField::RequiresActivation, FieldValue::Flag(flag)) => {
                self.requires_activation = flag
            }
            (FormField::ExpiryDate, FieldValue::OptionalText(date)) => self.expiry_date = date,
            (FormField::ExpiryType, FieldValue::ExpiryType(kind)) => self.expiry_type = kind,
            (FormField::ExpiryPeriodType, FieldValue::PeriodType(period)) => {
                self.expiry_period_type = period
            }
            (FormField::ExpiryPeriodAmount, FieldValue::Count(amount)) => {
                self.expiry_period_amount = amount
            }
            (FormField::BalanceAmount, FieldValue::Amount(amount)) => self.balance_amount = amount,
            (FormField::Metadata, FieldValue::Metadata(items)) => self.metadata = items,
            (FormField::PrivateMetadata, FieldValue::Metadata(items)) => {
                self.private_metadata = items
            }
            (field, value) => return Err(mismatch(field, &value)),
        }
        Ok(())
    }
}

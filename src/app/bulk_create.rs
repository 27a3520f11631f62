use serde::{Deserialize, Serialize};

use crate::{
    domain::{BULK_CREATE_ERROR_FIELDS, ExpiryType, GiftCardError, Money, TimePeriodType},
    form::{FieldErrorMap, GiftCardFormData, map_errors},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardBulkCreateFormData {
    #[serde(flatten)]
    pub common: GiftCardFormData,
    pub cards_amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(rename = "type")]
    pub period_type: TimePeriodType,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardBulkCreateInput {
    pub count: u32,
    pub balance: Money,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_period: Option<TimePeriod>,
    pub is_active: bool,
}

pub fn build_bulk_create_input(form: &GiftCardBulkCreateFormData) -> GiftCardBulkCreateInput {
    let data = &form.common;
    let tag = data.tag.trim();
    let (expiry_date, expiry_period) = match (data.expiry_selected, data.expiry_type) {
        (false, _) => (None, None),
        (true, ExpiryType::ExpiryDate) => (data.expiry_date.clone(), None),
        (true, ExpiryType::ExpiryPeriod) => (
            None,
            Some(TimePeriod {
                period_type: data.expiry_period_type,
                amount: data.expiry_period_amount,
            }),
        ),
    };

    GiftCardBulkCreateInput {
        count: form.cards_amount,
        balance: Money {
            amount: data.balance_amount,
            currency: data.balance_currency.clone(),
        },
        tags: if tag.is_empty() {
            Vec::new()
        } else {
            vec![tag.to_string()]
        },
        expiry_date,
        expiry_period,
        is_active: !data.requires_activation,
    }
}

pub fn map_bulk_create_errors(errors: &[GiftCardError]) -> FieldErrorMap {
    map_errors(BULK_CREATE_ERROR_FIELDS, errors)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{ExpiryType, MetadataItem, TimePeriodType};

use super::error::FormError;

/// Editable inputs of the gift card forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Tag,
    Tags,
    ExpirySelected,
    ExpiryDate,
    ExpiryType,
    ExpiryPeriodType,
    ExpiryPeriodAmount,
    RequiresActivation,
    BalanceAmount,
    BalanceCurrency,
    Metadata,
    PrivateMetadata,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Tag => "tag",
            FormField::Tags => "tags",
            FormField::ExpirySelected => "expirySelected",
            FormField::ExpiryDate => "expiryDate",
            FormField::ExpiryType => "expiryType",
            FormField::ExpiryPeriodType => "expiryPeriodType",
            FormField::ExpiryPeriodAmount => "expiryPeriodAmount",
            FormField::RequiresActivation => "requiresActivation",
            FormField::BalanceAmount => "balanceAmount",
            FormField::BalanceCurrency => "balanceCurrency",
            FormField::Metadata => "metadata",
            FormField::PrivateMetadata => "privateMetadata",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::Tag | FormField::BalanceCurrency => FieldKind::Text,
            FormField::ExpiryDate => FieldKind::OptionalText,
            FormField::ExpirySelected | FormField::RequiresActivation => FieldKind::Flag,
            FormField::BalanceAmount => FieldKind::Amount,
            FormField::ExpiryPeriodAmount => FieldKind::Count,
            FormField::ExpiryType => FieldKind::ExpiryType,
            FormField::ExpiryPeriodType => FieldKind::PeriodType,
            FormField::Tags => FieldKind::TagSet,
            FormField::Metadata | FormField::PrivateMetadata => FieldKind::Metadata,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    OptionalText,
    Flag,
    Amount,
    Count,
    ExpiryType,
    PeriodType,
    TagSet,
    Metadata,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Text => "text",
            FieldKind::OptionalText => "optional text",
            FieldKind::Flag => "flag",
            FieldKind::Amount => "amount",
            FieldKind::Count => "count",
            FieldKind::ExpiryType => "expiry type",
            FieldKind::PeriodType => "period type",
            FieldKind::TagSet => "tag set",
            FieldKind::Metadata => "metadata list",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    OptionalText(Option<String>),
    Flag(bool),
    Amount(f64),
    Count(u32),
    ExpiryType(ExpiryType),
    PeriodType(TimePeriodType),
    TagSet(Vec<String>),
    Metadata(Vec<MetadataItem>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::OptionalText(_) => FieldKind::OptionalText,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Amount(_) => FieldKind::Amount,
            FieldValue::Count(_) => FieldKind::Count,
            FieldValue::ExpiryType(_) => FieldKind::ExpiryType,
            FieldValue::PeriodType(_) => FieldKind::PeriodType,
            FieldValue::TagSet(_) => FieldKind::TagSet,
            FieldValue::Metadata(_) => FieldKind::Metadata,
        }
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::TagSet(tags.into_iter().map(Into::into).collect())
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

pub(crate) fn mismatch(field: FormField, value: &FieldValue) -> FormError {
    FormError::KindMismatch {
        field,
        expected: field.kind(),
        found: value.kind(),
    }
}

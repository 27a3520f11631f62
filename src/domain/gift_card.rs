use serde::{Deserialize, Serialize};

/// Gift card as returned by the details query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCard {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<GiftCardTag>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
    #[serde(default)]
    pub private_metadata: Vec<MetadataItem>,
}

impl GiftCard {
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCardTag {
    pub name: String,
}

impl GiftCardTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataItem {
    pub key: String,
    pub value: String,
}

impl MetadataItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryType {
    #[default]
    ExpiryDate,
    ExpiryPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimePeriodType {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

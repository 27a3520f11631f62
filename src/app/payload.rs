use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{MetadataItem, Money},
    form::{FormSnapshot, FormState, GiftCardFormData, diff},
};

/// Input of the gift card update mutation.
///
/// `expiry_date` is always sent (as `null` to clear it): the backend replaces the whole
/// expiry setting rather than merging it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardUpdateInput {
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDelta {
    pub upserts: Vec<MetadataItem>,
    pub removed_keys: Vec<String>,
}

impl MetadataDelta {
    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.removed_keys.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardUpdateRequest {
    pub id: String,
    pub input: GiftCardUpdateInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<MetadataDelta>,
}

/// Builds the minimal update for `id` that moves `snapshot` to the values in `state`.
pub fn build_update_request(
    id: &str,
    snapshot: &FormSnapshot,
    state: &FormState,
) -> GiftCardUpdateRequest {
    let before = snapshot.data();
    let after = state.data();
    let tags = diff(&before.tags, &after.tags);

    GiftCardUpdateRequest {
        id: id.to_string(),
        input: GiftCardUpdateInput {
            expiry_date: after.expiry_date.clone(),
            add_tags: tags.added,
            remove_tags: tags.removed,
            balance: balance_change(before, after),
        },
        metadata: state
            .is_metadata_touched()
            .then(|| metadata_delta(&before.metadata, &after.metadata))
            .filter(|delta| !delta.is_empty()),
        private_metadata: state
            .is_private_metadata_touched()
            .then(|| metadata_delta(&before.private_metadata, &after.private_metadata))
            .filter(|delta| !delta.is_empty()),
    }
}

fn balance_change(before: &GiftCardFormData, after: &GiftCardFormData) -> Option<Money> {
    let unchanged = before.balance_amount == after.balance_amount
        && before.balance_currency == after.balance_currency;
    (!unchanged).then(|| Money {
        amount: after.balance_amount,
        currency: after.balance_currency.clone(),
    })
}

/// Key-level difference between two metadata lists.
///
/// A later entry with a repeated key overrides the earlier one.
pub fn metadata_delta(before: &[MetadataItem], after: &[MetadataItem]) -> MetadataDelta {
    let before_map = metadata_map(before);
    let after_map = metadata_map(after);
    let before_keys: Vec<&str> = before_map.keys().copied().collect();
    let after_keys: Vec<&str> = after_map.keys().copied().collect();
    let keys = diff(&before_keys, &after_keys);

    let upserts = after_map
        .iter()
        .filter(|(key, value)| before_map.get(*key) != Some(*value))
        .map(|(key, value)| MetadataItem::new(*key, *value))
        .collect();

    MetadataDelta {
        upserts,
        removed_keys: keys.removed.into_iter().map(str::to_string).collect(),
    }
}

fn metadata_map(items: &[MetadataItem]) -> IndexMap<&str, &str> {
    items
        .iter()
        .map(|item| (item.key.as_str(), item.value.as_str()))
        .collect()
}

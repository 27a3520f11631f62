use super::{
    data::GiftCardFormData,
    error::FormError,
    field::{FieldValue, FormField},
    snapshot::FormSnapshot,
};

/// Working copy of the form values.
///
/// `has_changed` is touch based: any accepted `change` marks the state dirty, even when
/// the value is equal to the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    data: GiftCardFormData,
    has_changed: bool,
    metadata_touched: bool,
    private_metadata_touched: bool,
}

impl FormState {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            data: snapshot.data().clone(),
            has_changed: false,
            metadata_touched: false,
            private_metadata_touched: false,
        }
    }

    pub fn data(&self) -> &GiftCardFormData {
        &self.data
    }

    pub fn value(&self, field: FormField) -> FieldValue {
        self.data.get(field)
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    pub fn is_metadata_touched(&self) -> bool {
        self.metadata_touched
    }

    pub fn is_private_metadata_touched(&self) -> bool {
        self.private_metadata_touched
    }

    pub(crate) fn with_change(
        &self,
        field: FormField,
        value: FieldValue,
    ) -> Result<Self, FormError> {
        let mut next = self.clone();
        next.data.set(field, value)?;
        next.has_changed = true;
        match field {
            FormField::Metadata => next.metadata_touched = true,
            FormField::PrivateMetadata => next.private_metadata_touched = true,
            _ => {}
        }
        Ok(next)
    }

    pub(crate) fn cleaned(&self) -> Self {
        Self {
            has_changed: false,
            metadata_touched: false,
            private_metadata_touched: false,
            ..self.clone()
        }
    }
}

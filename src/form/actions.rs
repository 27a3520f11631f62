use super::{
    field::{FieldValue, FormField},
    snapshot::FormSnapshot,
};

#[derive(Debug, Clone)]
pub enum FormCommand {
    Change { field: FormField, value: FieldValue },
    MarkClean,
    Reinitialize(FormSnapshot),
}

impl FormCommand {
    pub fn change(field: FormField, value: FieldValue) -> Self {
        FormCommand::Change { field, value }
    }
}

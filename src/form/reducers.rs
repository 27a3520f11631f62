use tracing::debug;

use super::{actions::FormCommand, error::FormError, state::FormState};

/// Applies `command` to `state` and returns the resulting state.
///
/// A rejected change leaves `state` as it was.
pub fn apply_command(state: &FormState, command: FormCommand) -> Result<FormState, FormError> {
    match command {
        FormCommand::Change { field, value } => {
            debug!(field = %field, kind = %value.kind(), "form change");
            state.with_change(field, value)
        }
        FormCommand::MarkClean => Ok(state.cleaned()),
        FormCommand::Reinitialize(snapshot) => {
            if state.has_changed() {
                debug!("discarding unsaved edits on reinitialize");
            }
            Ok(FormState::from_snapshot(&snapshot))
        }
    }
}

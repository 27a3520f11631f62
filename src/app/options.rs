use crate::{
    domain::{ErrorField, UPDATE_ERROR_FIELDS},
    form::DEFAULT_CURRENCY,
};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Currency used for the empty form while no gift card is loaded.
    pub default_currency: String,
    /// Fields whose errors are routed next to their inputs.
    pub recognized_errors: Vec<ErrorField>,
    /// Skip dispatching when nothing was touched since the last confirmed submit.
    pub skip_unchanged_submit: bool,
    /// Treat submitted values as the new baseline after a successful submit.
    pub rebase_on_success: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            recognized_errors: UPDATE_ERROR_FIELDS.to_vec(),
            skip_unchanged_submit: true,
            rebase_on_success: true,
        }
    }
}

impl SessionOptions {
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    pub fn with_recognized_errors(mut self, fields: &[ErrorField]) -> Self {
        self.recognized_errors = fields.to_vec();
        self
    }

    pub fn with_skip_unchanged_submit(mut self, enabled: bool) -> Self {
        self.skip_unchanged_submit = enabled;
        self
    }

    pub fn with_rebase_on_success(mut self, enabled: bool) -> Self {
        self.rebase_on_success = enabled;
        self
    }
}

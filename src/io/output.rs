use anyhow::{Context, Result};
use serde::Serialize;

use super::DocumentFormat;

/// Controls how results are serialized for display.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize `value` according to the configured format.
pub fn render<T: Serialize>(value: &T, options: &OutputOptions) -> Result<String> {
    match options.format {
        DocumentFormat::Json => {
            if options.pretty {
                serde_json::to_string_pretty(value).context("failed to serialize JSON")
            } else {
                serde_json::to_string(value).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            if options.pretty {
                toml::to_string_pretty(value).context("failed to serialize TOML")
            } else {
                toml::to_string(value).context("failed to serialize TOML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Notification, NotificationStatus};

    #[test]
    fn compact_json_has_no_newlines() {
        let notification = Notification {
            status: NotificationStatus::Success,
            title: None,
            text: "Saved changes".into(),
        };
        let rendered = render(&notification, &OutputOptions::default().with_pretty(false)).unwrap();
        assert_eq!(rendered, r#"{"status":"success","text":"Saved changes"}"#);
    }
}

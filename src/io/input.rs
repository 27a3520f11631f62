use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::DocumentFormat;

/// Parse a document in any supported format into `T`.
pub fn parse_document<T: DeserializeOwned>(contents: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<T>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<T>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            toml::from_str::<T>(contents).with_context(|| "failed to parse TOML document")
        }
    }
}

/// Read and parse a document, picking the format from the file extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&contents, DocumentFormat::from_path(path))
        .with_context(|| format!("invalid document {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::MutationResponse, domain::GiftCard, form::GiftCardFormData};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn parses_gift_card_json() {
        let raw = r#"{"id": "card-1", "tags": [{"name": "vip"}]}"#;
        let card: GiftCard = parse_document(raw, DocumentFormat::Json).unwrap();
        assert_eq!(card.tag_names(), vec!["vip"]);
        assert_eq!(card.expiry_date, None);
    }

    #[test]
    fn parses_response_with_null_field() {
        let raw = r#"{"errors": [{"code": "GRAPHQL_ERROR", "field": null}]}"#;
        let response: MutationResponse = parse_document(raw, DocumentFormat::Json).unwrap();
        assert_eq!(response.errors[0].field, None);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_document::<GiftCardFormData>("{", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("failed to parse JSON document"));
    }

    #[test]
    fn reads_document_from_file() {
        let path = std::env::temp_dir().join(format!(
            "giftcard-form-test-{}.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, r#"{"tags": ["a", "b"]}"#).unwrap();
        let data: GiftCardFormData = read_document(&path).unwrap();
        assert_eq!(data.tags, vec!["a", "b"]);
        let _ = fs::remove_file(path);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parses_yaml_form_data() {
        let raw = "tags:\n  - spring\nexpiryDate: '2030-01-01'";
        let data: GiftCardFormData = parse_document(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(data.tags, vec!["spring"]);
        assert_eq!(data.expiry_date.as_deref(), Some("2030-01-01"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parses_toml_form_data() {
        let raw = "tags = [\"spring\"]\nbalanceAmount = 10.0";
        let data: GiftCardFormData = parse_document(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(data.tags, vec!["spring"]);
        assert_eq!(data.balance_amount, 10.0);
    }
}

use serde::Serialize;

use super::outcome::{SpecialCase, SubmitOutcome};

pub const SAVED_CHANGES: &str = "Saved changes";
pub const SAVE_FAILED: &str = "Could not save changes";
pub const INVALID_EXPIRY_DATE_HEADER: &str = "Invalid expiry date";
pub const INVALID_EXPIRY_DATE_CONTENT: &str = "Gift card expiry date must be in the future";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub status: NotificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

/// Presentation side of a submit: toasts, banners, status lines.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Message the user sees for `outcome`; `None` when nothing happened.
pub fn notification_for(outcome: &SubmitOutcome) -> Option<Notification> {
    let notification = match outcome {
        SubmitOutcome::NoOp => return None,
        SubmitOutcome::Success => Notification {
            status: NotificationStatus::Success,
            title: None,
            text: SAVED_CHANGES.to_string(),
        },
        SubmitOutcome::ValidationFailed {
            special_case: Some(SpecialCase::ExpiryDate),
            ..
        } => Notification {
            status: NotificationStatus::Error,
            title: Some(INVALID_EXPIRY_DATE_HEADER.to_string()),
            text: INVALID_EXPIRY_DATE_CONTENT.to_string(),
        },
        SubmitOutcome::ValidationFailed { errors, .. } => Notification {
            status: NotificationStatus::Error,
            title: Some(SAVE_FAILED.to_string()),
            text: errors
                .first()
                .map(|error| error.to_string())
                .unwrap_or_else(|| SAVE_FAILED.to_string()),
        },
        SubmitOutcome::SubmissionFailed { message } => Notification {
            status: NotificationStatus::Error,
            title: Some(SAVE_FAILED.to_string()),
            text: message.clone(),
        },
    };
    Some(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::GiftCardError, form::FieldErrorMap};

    #[test]
    fn no_op_is_silent() {
        assert_eq!(notification_for(&SubmitOutcome::NoOp), None);
    }

    #[test]
    fn expiry_failures_use_dedicated_header() {
        let outcome = SubmitOutcome::ValidationFailed {
            field_errors: FieldErrorMap::new(),
            errors: vec![
                GiftCardError::new("DUPLICATE", "tags"),
                GiftCardError::new("INVALID", "expiryDate"),
            ],
            special_case: Some(SpecialCase::ExpiryDate),
        };
        let notification = notification_for(&outcome).unwrap();
        assert_eq!(notification.title.as_deref(), Some(INVALID_EXPIRY_DATE_HEADER));
        assert_eq!(notification.text, INVALID_EXPIRY_DATE_CONTENT);
    }

    #[test]
    fn generic_failures_show_first_error() {
        let outcome = SubmitOutcome::ValidationFailed {
            field_errors: FieldErrorMap::new(),
            errors: vec![GiftCardError::global("GRAPHQL_ERROR")],
            special_case: None,
        };
        let notification = notification_for(&outcome).unwrap();
        assert_eq!(notification.status, NotificationStatus::Error);
        assert_eq!(notification.text, "GRAPHQL_ERROR");
    }
}

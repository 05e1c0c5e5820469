//! Contact form types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored contact form inquiry
///
/// `organization` and `phone` are `None` when the sender omitted them, which
/// serializes as JSON null. An explicitly submitted empty string stays
/// `Some("")` so the two cases remain distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    /// 0/1 integer flag, kept wire-compatible with the site frontend.
    pub privacy_agreed: i64,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission, before an id and timestamp are assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub privacy_agreed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_optional_fields_deserialize_as_none() {
        let body = r#"{
            "name": "Jo",
            "email": "jo@x.com",
            "subject": "General",
            "message": "Hi",
            "privacyAgreed": 1
        }"#;
        let new: NewContactMessage = serde_json::from_str(body).unwrap();
        assert_eq!(new.organization, None);
        assert_eq!(new.phone, None);
        assert_eq!(new.privacy_agreed, 1);
    }

    #[test]
    fn empty_string_stays_distinct_from_absent() {
        let body = r#"{
            "name": "Jo",
            "email": "jo@x.com",
            "subject": "General",
            "message": "Hi",
            "organization": "",
            "privacyAgreed": 1
        }"#;
        let new: NewContactMessage = serde_json::from_str(body).unwrap();
        assert_eq!(new.organization, Some(String::new()));
        assert_eq!(new.phone, None);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let message = ContactMessage {
            id: 1,
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "General".to_string(),
            message: "Hi".to_string(),
            organization: None,
            phone: None,
            privacy_agreed: 1,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["privacyAgreed"], 1);
        assert!(json["organization"].is_null());
        assert!(json.get("createdAt").is_some());
    }
}

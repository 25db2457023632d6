use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Body of `POST /api/translate`. Missing fields arrive as empty strings and
/// non-string values are forwarded in their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub from: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A chat message as returned by the provider. Fields beyond `role` and
/// `content` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub result: ChatMessage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One completed translation, as persisted in the client history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub native_text: String,
    pub translate_text: String,
    pub from: String,
    pub to: String,
    #[serde(with = "iso8601_millis")]
    pub timestamp: DateTime<Utc>,
}

/// `2024-05-01T12:00:00.000Z`, the shape browsers produce with `toISOString`.
mod iso8601_millis {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn missing_request_fields_become_empty() {
        let req: TranslateRequest = serde_json::from_value(json!({ "text": "Hello" })).unwrap();
        assert_eq!(req.from, "");
        assert_eq!(req.to, "");
        assert_eq!(req.text, "Hello");
    }

    #[test]
    fn non_string_request_fields_are_stringified() {
        let req: TranslateRequest =
            serde_json::from_value(json!({ "from": 5, "to": null, "text": true })).unwrap();
        assert_eq!(req.from, "5");
        assert_eq!(req.to, "");
        assert_eq!(req.text, "true");
    }

    #[test]
    fn chat_message_keeps_unknown_fields() {
        let raw = json!({ "role": "assistant", "content": "Hola", "refusal": null });
        let msg: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(msg.content.as_deref(), Some("Hola"));
        assert_eq!(serde_json::to_value(&msg).unwrap(), raw);
    }

    #[test]
    fn record_uses_browser_field_names() {
        let record = TranslationRecord {
            native_text: "Hello".into(),
            translate_text: "Hola".into(),
            from: "English".into(),
            to: "Spanish".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "nativeText": "Hello",
                "translateText": "Hola",
                "from": "English",
                "to": "Spanish",
                "timestamp": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn record_accepts_offset_timestamps() {
        let record: TranslationRecord = serde_json::from_value(json!({
            "nativeText": "a",
            "translateText": "b",
            "from": "English",
            "to": "French",
            "timestamp": "2024-05-01T14:00:00+02:00"
        }))
        .unwrap();
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }
}

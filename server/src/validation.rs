use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tts_core::{SynthesisRequest, MAX_TEXT_CHARS};

const TEXT_EMPTY: &str = "Text cannot be empty";
const TEXT_TOO_LONG: &str = "Text is too long";
const REQUIRED: &str = "Required";

/// Field-level validation detail returned with a 400 response.
///
/// Form-level messages plus messages keyed by field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Error about the request body as a whole.
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// First violation, preferring form errors, then fields in the order
    /// they appear in the request schema.
    pub fn first_message(&self) -> Option<&str> {
        self.form_errors
            .first()
            .or_else(|| {
                ["text", "voiceId"]
                    .iter()
                    .find_map(|f| self.field_errors.get(*f).and_then(|m| m.first()))
            })
            .map(String::as_str)
    }
}

/// Validate a decoded `POST /api/tts` body.
///
/// Collects every violation instead of stopping at the first one.
pub fn validate_tts_request(body: &Value) -> Result<SynthesisRequest, ValidationErrors> {
    let Some(obj) = body.as_object() else {
        return Err(ValidationErrors::form(expected_string_like("object", body)));
    };

    let mut errors = ValidationErrors::default();

    let text = match obj.get("text") {
        None => {
            errors.add_field("text", REQUIRED);
            None
        }
        Some(Value::String(text)) => {
            let len = text.chars().count();
            if len == 0 {
                errors.add_field("text", TEXT_EMPTY);
            } else if len > MAX_TEXT_CHARS {
                errors.add_field("text", TEXT_TOO_LONG);
            }
            Some(text.clone())
        }
        Some(other) => {
            errors.add_field("text", expected_string_like("string", other));
            None
        }
    };

    let voice_id = match obj.get("voiceId") {
        None => None,
        Some(Value::String(voice)) => Some(voice.clone()),
        Some(other) => {
            errors.add_field("voiceId", expected_string_like("string", other));
            None
        }
    };

    match text {
        Some(text) if errors.is_empty() => Ok(SynthesisRequest::new(text, voice_id)),
        _ => Err(errors),
    }
}

fn expected_string_like(expected: &str, got: &Value) -> String {
    format!("Expected {}, received {}", expected, json_type_name(got))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Wire shapes of the dispatch request and per-action payloads.
//!
//! Payload fields are all optional and untyped beyond "JSON value". Absent
//! fields must stay distinguishable from explicit `null`s (absent fields
//! are omitted from passthrough envelopes, `null`s are echoed), so every
//! field deserializes through [`present`]: a present key always becomes
//! `Some`, even when its value is `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a `POST /gptImplement` request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DispatchRequest {
    #[serde(default, deserialize_with = "present")]
    pub action: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub payload: Option<Value>,
}

/// Payload for `designCustomActions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomActionPayload {
    #[serde(default, deserialize_with = "present")]
    pub action_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub parameters: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub authentication: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub error_handling: Option<Value>,
}

/// Payload for `troubleshootAPI`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootPayload {
    #[serde(default, deserialize_with = "present")]
    pub error_type: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub context: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub request_details: Option<Value>,
}

/// Payload for `optimizePerformance`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizePayload {
    #[serde(default, deserialize_with = "present")]
    pub current_metrics: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub bottlenecks: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub optimization_goals: Option<Value>,
}

/// Payload for `createGPTArchitect`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectPayload {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub core_functions: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub process_steps: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub response_guidelines: Option<Value>,
}

/// Payload for `createKnowledgeBase`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBasePayload {
    #[serde(default, deserialize_with = "present")]
    pub technical: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub functional: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub operational: Option<Value>,
}

/// Deserialize a present key into `Some`, even for an explicit `null`.
/// Combined with `#[serde(default)]`, absent keys stay `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Loose presence check applied to `action` and `payload`: `null`,
/// `false`, zero, and the empty string count as missing. Objects and
/// arrays are always present, even when empty.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_are_distinguished() {
        let payload: CustomActionPayload =
            serde_json::from_value(json!({ "actionName": null })).unwrap();
        assert_eq!(payload.action_name, Some(Value::Null));
        assert_eq!(payload.parameters, None);
    }

    #[test]
    fn test_falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("x")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
    }

    #[test]
    fn test_request_with_unknown_keys_still_parses() {
        let request: DispatchRequest = serde_json::from_value(json!({
            "action": "troubleshootAPI",
            "payload": { "errorType": "500" },
            "extra": true
        }))
        .unwrap();
        assert_eq!(request.action, Some(json!("troubleshootAPI")));
        assert!(request.payload.is_some());
    }
}

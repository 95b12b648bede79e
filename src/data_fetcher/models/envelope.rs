use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Uniform wrapper returned by every API-Football endpoint.
///
/// The payload type `T` is picked by each call; every other field is
/// diagnostic and defaults when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Echo of the requested endpoint
    #[serde(default)]
    pub get: String,
    /// Echo of the request parameters
    #[serde(default)]
    pub parameters: Value,
    /// Application-level errors reported by the service
    #[serde(default, deserialize_with = "de_upstream_errors")]
    pub errors: Vec<String>,
    #[serde(default)]
    pub results: i64,
    #[serde(default)]
    pub paging: Option<Paging>,
    pub response: T,
}

impl<T> ApiResponse<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Page cursor of a list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub current: u32,
    pub total: u32,
}

/// The service sends `errors` as `[]` when there are none, as a list of
/// strings, or as an object keyed by the offending field.
fn de_upstream_errors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(value_to_message).collect(),
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(field, message)| format!("{field}: {}", value_to_message(message)))
            .collect(),
        Some(other) => vec![value_to_message(other)],
    })
}

fn value_to_message(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_envelope_defaults() {
        let json = r#"{"response":[1,2,3]}"#;
        let envelope: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response, vec![1, 2, 3]);
        assert_eq!(envelope.get, "");
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.results, 0);
        assert!(envelope.paging.is_none());
        assert!(!envelope.has_errors());
    }

    #[test]
    fn test_full_envelope() {
        let json = r#"{
            "get": "teams",
            "parameters": {"search": "Arsenal"},
            "errors": [],
            "results": 1,
            "paging": {"current": 1, "total": 1},
            "response": []
        }"#;
        let envelope: ApiResponse<Vec<Value>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.get, "teams");
        assert_eq!(envelope.parameters["search"], "Arsenal");
        assert_eq!(envelope.results, 1);
        assert_eq!(envelope.paging, Some(Paging { current: 1, total: 1 }));
    }

    #[test]
    fn test_errors_as_object_are_flattened() {
        let json = r#"{
            "errors": {"token": "Error/Missing application key in the headers."},
            "response": []
        }"#;
        let envelope: ApiResponse<Vec<Value>> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.errors,
            vec!["token: Error/Missing application key in the headers.".to_string()]
        );
        assert!(envelope.has_errors());
    }

    #[test]
    fn test_errors_as_list_and_empty_object() {
        let json = r#"{"errors": ["first", "second"], "response": []}"#;
        let envelope: ApiResponse<Vec<Value>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.errors, vec!["first", "second"]);

        let json = r#"{"errors": {}, "response": []}"#;
        let envelope: ApiResponse<Vec<Value>> = serde_json::from_str(json).unwrap();
        assert!(envelope.errors.is_empty());

        let json = r#"{"errors": null, "response": []}"#;
        let envelope: ApiResponse<Vec<Value>> = serde_json::from_str(json).unwrap();
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_missing_response_is_an_error() {
        let json = r#"{"get": "teams", "errors": []}"#;
        assert!(serde_json::from_str::<ApiResponse<Vec<Value>>>(json).is_err());
    }
}

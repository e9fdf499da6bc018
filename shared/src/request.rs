use crate::error::StudentError;
use crate::types::NormalizedRequest;
use lambda_http::{http::Method, Request, RequestExt};
use serde_json::Value;
use std::collections::HashMap;

/// Pull method, query and parsed body out of an API Gateway event
pub fn from_event(event: &Request) -> Result<NormalizedRequest, StudentError> {
    let query = event.query_string_parameters_ref().map(|params| {
        // last value wins for repeated keys, as API Gateway's single-value map does
        params
            .iter()
            .filter_map(|(key, _)| {
                let last = params.all(key).and_then(|values| values.last().copied())?;
                Some((key.to_string(), last.to_string()))
            })
            .collect::<HashMap<_, _>>()
    });

    normalize(event.method().clone(), query, event.body())
}

pub fn normalize(
    method: Method,
    query: Option<HashMap<String, String>>,
    body: &[u8],
) -> Result<NormalizedRequest, StudentError> {
    Ok(NormalizedRequest {
        method,
        query: query.unwrap_or_default(),
        body: parse_body(body)?,
    })
}

/// Empty body reads as `{}`
fn parse_body(body: &[u8]) -> Result<Value, StudentError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejecting unparseable body: {}", e);
        StudentError::Validation(format!("invalid JSON body: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::Body;
    use serde_json::json;

    #[test]
    fn absent_query_and_body_normalize_to_empty() {
        let req = normalize(Method::GET, None, b"").unwrap();
        assert!(req.query.is_empty());
        assert_eq!(req.body, json!({}));
    }

    #[test]
    fn whitespace_body_is_empty_object() {
        let req = normalize(Method::POST, None, b"  \n").unwrap();
        assert_eq!(req.body, json!({}));
    }

    #[test]
    fn parses_json_body() {
        let req = normalize(
            Method::POST,
            None,
            br#"{"student_id":"123","name":"John"}"#,
        )
        .unwrap();
        assert_eq!(req.body, json!({"student_id": "123", "name": "John"}));
    }

    #[test]
    fn malformed_body_is_validation_error() {
        let err = normalize(Method::PUT, None, b"{not json").unwrap_err();
        assert!(matches!(err, StudentError::Validation(ref msg) if msg.starts_with("invalid JSON body")));
    }

    #[test]
    fn reads_query_from_event() {
        let event = lambda_http::http::Request::builder()
            .method(Method::GET)
            .uri("/students?student_id=42")
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(HashMap::from([(
                "student_id".to_string(),
                "42".to_string(),
            )]));

        let req = from_event(&event).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.query.get("student_id").map(String::as_str), Some("42"));
        assert_eq!(req.body, json!({}));
    }

    #[test]
    fn repeated_query_key_keeps_last_value() {
        let event = lambda_http::http::Request::builder()
            .method(Method::DELETE)
            .uri("/students?student_id=1&student_id=2")
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(HashMap::from([(
                "student_id".to_string(),
                vec!["1".to_string(), "2".to_string()],
            )]));

        let req = from_event(&event).unwrap();
        assert_eq!(req.query.get("student_id").map(String::as_str), Some("2"));
    }
}

//! Argument validation against a descriptor's declared parameters, and the
//! JSON Schema rendering of those parameters for discovery.

use serde_json::{Map, Number, Value};
use tracing::debug;

use super::descriptor::{EndpointDescriptor, ParamKind, ParamSpec};
use super::error::ToolError;

/// JSON object as carried by MCP tool calls.
pub type JsonObject = Map<String, Value>;

/// Validate `arguments` and return them coerced to their declared kinds.
///
/// Only declared parameters survive; `null` counts as absent.
pub fn validate_arguments(
    descriptor: &EndpointDescriptor,
    arguments: &JsonObject,
) -> Result<JsonObject, ToolError> {
    for key in arguments.keys() {
        if descriptor.param(key).is_none() {
            debug!(tool = descriptor.name, argument = %key, "Dropping undeclared argument");
        }
    }

    let mut validated = JsonObject::new();
    for param in descriptor.params {
        let value = match arguments.get(param.name) {
            None | Some(Value::Null) => {
                if param.required {
                    return Err(invalid(descriptor, param, "missing required parameter"));
                }
                continue;
            }
            // Clients send "" for optional fields they leave unset.
            Some(Value::String(s)) if !param.required && s.trim().is_empty() => continue,
            Some(value) => value,
        };

        let coerced = coerce(value, param.kind).ok_or_else(|| {
            invalid(
                descriptor,
                param,
                format!("cannot use {} as {}", describe(value), param.kind),
            )
        })?;

        if param.required && is_blank(&coerced) {
            return Err(invalid(descriptor, param, "required parameter must not be empty"));
        }

        validated.insert(param.name.to_string(), coerced);
    }

    Ok(validated)
}

fn invalid(
    descriptor: &EndpointDescriptor,
    param: &ParamSpec,
    reason: impl Into<String>,
) -> ToolError {
    ToolError::validation(descriptor.name, param.name, param.kind, reason)
}

fn coerce(value: &Value, kind: ParamKind) -> Option<Value> {
    match kind {
        ParamKind::String => match value {
            Value::String(_) => Some(value.clone()),
            Value::Number(n) => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(b.to_string())),
            // Tag lists are comma separated upstream.
            Value::Array(items) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map(|parts| Value::String(parts.join(","))),
            _ => None,
        },
        ParamKind::Number => match value {
            Value::Number(_) => Some(value.clone()),
            Value::String(s) => parse_number(s.trim()).map(Value::Number),
            _ => None,
        },
        ParamKind::Boolean => match value {
            Value::Bool(_) => Some(value.clone()),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        },
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.trim().is_empty())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "this string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Render the descriptor's parameters as a JSON Schema object.
pub fn input_schema(descriptor: &EndpointDescriptor) -> JsonObject {
    let mut properties = JsonObject::new();
    for param in descriptor.params {
        properties.insert(
            param.name.to_string(),
            serde_json::json!({
                "type": param.kind.as_str(),
                "description": param.description,
            }),
        );
    }

    let required: Vec<Value> = descriptor
        .required_params()
        .map(|p| Value::String(p.name.to_string()))
        .collect();

    let mut schema = JsonObject::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    schema.insert("required".into(), Value::Array(required));
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{private_quotes, quote};
    use crate::domains::tools::error::ErrorKind;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn expect_invalid(result: Result<JsonObject, ToolError>, parameter: &str) {
        match result {
            Err(ToolError::Validation { parameter: p, .. }) => assert_eq!(p, parameter),
            other => panic!("expected validation error for {parameter}, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required() {
        let result = validate_arguments(&quote::GET_QUOTE, &JsonObject::new());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_null_required_is_missing() {
        expect_invalid(
            validate_arguments(&quote::GET_QUOTE, &args(json!({ "id": null }))),
            "id",
        );
    }

    #[test]
    fn test_blank_required() {
        expect_invalid(
            validate_arguments(&quote::GET_QUOTE, &args(json!({ "id": "  " }))),
            "id",
        );
    }

    #[test]
    fn test_optional_absent_is_ok() {
        let validated = validate_arguments(&quote::GET_QUOTE_RANDOM, &JsonObject::new()).unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn test_optional_empty_strings_dropped() {
        let validated = validate_arguments(
            &quote::GET_QUOTE_SEARCH,
            &args(json!({ "limit": "", "sfw": " ", "author": "Twain" })),
        )
        .unwrap();
        assert_eq!(validated.len(), 1);
        assert_eq!(validated["author"], json!("Twain"));
    }

    #[test]
    fn test_number_coercion() {
        let validated = validate_arguments(
            &quote::GET_QUOTE_SEARCH,
            &args(json!({ "limit": "5", "minlength": 10, "maxlength": "2.5" })),
        )
        .unwrap();
        assert_eq!(validated["limit"], json!(5));
        assert_eq!(validated["minlength"], json!(10));
        assert_eq!(validated["maxlength"], json!(2.5));
    }

    #[test]
    fn test_number_rejects_text() {
        let result = validate_arguments(&quote::GET_QUOTE_RANDOM, &args(json!({ "limit": "ten" })));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("'limit'"));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_boolean_coercion() {
        let validated = validate_arguments(
            &quote::GET_QUOTE_SEARCH,
            &args(json!({ "private": "TRUE", "sfw": false })),
        )
        .unwrap();
        assert_eq!(validated["private"], json!(true));
        assert_eq!(validated["sfw"], json!(false));

        expect_invalid(
            validate_arguments(&quote::GET_QUOTE_SEARCH, &args(json!({ "sfw": "yes" }))),
            "sfw",
        );
        expect_invalid(
            validate_arguments(&quote::GET_QUOTE_SEARCH, &args(json!({ "sfw": 1 }))),
            "sfw",
        );
    }

    #[test]
    fn test_string_coercion() {
        let validated = validate_arguments(
            &private_quotes::POST_QUOTE,
            &args(json!({ "quote": 42, "tags": ["life", " love"] })),
        )
        .unwrap();
        assert_eq!(validated["quote"], json!("42"));
        assert_eq!(validated["tags"], json!("life,love"));

        expect_invalid(
            validate_arguments(
                &private_quotes::POST_QUOTE,
                &args(json!({ "quote": { "text": "x" } })),
            ),
            "quote",
        );
    }

    #[test]
    fn test_undeclared_arguments_dropped() {
        let validated = validate_arguments(
            &quote::GET_QUOTE,
            &args(json!({ "id": "abc", "extra": "ignored" })),
        )
        .unwrap();
        assert_eq!(validated.len(), 1);
        assert_eq!(validated["id"], json!("abc"));
    }

    #[test]
    fn test_input_schema() {
        let schema = input_schema(&private_quotes::POST_QUOTE);
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"]["quote"]["type"], json!("string"));
        assert_eq!(schema["properties"]["language"]["type"], json!("string"));
        assert_eq!(schema["required"], json!(["quote"]));

        let schema = input_schema(&quote::GET_QUOTE_SEARCH);
        assert_eq!(schema["properties"]["limit"]["type"], json!("number"));
        assert_eq!(schema["properties"]["sfw"]["type"], json!("boolean"));
        assert_eq!(schema["required"], json!([]));
    }
}

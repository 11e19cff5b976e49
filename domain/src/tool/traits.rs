//! Tool domain traits
//!
//! Contains the pure validation logic that checks a [`ToolCall`] against its
//! [`ToolDefinition`] and coerces loosely-typed model output into the
//! declared parameter types. No I/O happens here.

use serde_json::{Number, Value};
use std::collections::HashMap;
use thiserror::Error;

use super::entities::{ParamType, ToolArguments, ToolCall, ToolDefinition};

/// Reasons a tool call does not satisfy its input schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    #[error("Missing required parameter '{parameter}' for tool '{tool}'")]
    MissingParameter { tool: String, parameter: String },

    #[error("Parameter '{parameter}' for tool '{tool}' expects {expected}, got {actual}")]
    TypeMismatch {
        tool: String,
        parameter: String,
        expected: ParamType,
        actual: String,
    },
}

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls against their
/// definitions and returns the coerced arguments.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<ToolArguments, SchemaValidationError>;
}

/// Default implementation of ToolValidator
///
/// - every required parameter must be present and non-null
/// - arguments not declared by the tool are dropped
/// - values are coerced to the declared type when unambiguous
/// - omitted optional parameters receive their declared default
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<ToolArguments, SchemaValidationError> {
        let mut coerced = HashMap::new();
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                Some(value) if !value.is_null() => {
                    let value = coerce(value, param.param_type).ok_or_else(|| {
                        SchemaValidationError::TypeMismatch {
                            tool: definition.name.clone(),
                            parameter: param.name.clone(),
                            expected: param.param_type,
                            actual: json_type_name(value).to_string(),
                        }
                    })?;
                    coerced.insert(param.name.clone(), value);
                }
                _ if param.required => {
                    return Err(SchemaValidationError::MissingParameter {
                        tool: definition.name.clone(),
                        parameter: param.name.clone(),
                    });
                }
                _ => {
                    if let Some(default) = &param.default {
                        coerced.insert(param.name.clone(), default.clone());
                    }
                }
            }
        }

        Ok(ToolArguments::new(coerced))
    }
}

/// Argument keys in `call` that `definition` does not declare, sorted.
pub fn undeclared_arguments<'a>(call: &'a ToolCall, definition: &ToolDefinition) -> Vec<&'a str> {
    let mut keys: Vec<&str> = call
        .arguments
        .keys()
        .map(String::as_str)
        .filter(|key| !definition.parameters.iter().any(|p| p.name == *key))
        .collect();
    keys.sort_unstable();
    keys
}

/// Coerce a JSON value into the declared parameter type.
fn coerce(value: &Value, param_type: ParamType) -> Option<Value> {
    match param_type {
        ParamType::String => match value {
            Value::String(_) => Some(value.clone()),
            Value::Number(n) => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(b.to_string())),
            _ => None,
        },
        ParamType::Number => match value {
            Value::Number(_) => Some(value.clone()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            _ => None,
        },
        ParamType::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
            Value::Number(n) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| Value::from(f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
            _ => None,
        },
        ParamType::Boolean => match value {
            Value::Bool(_) => Some(value.clone()),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        },
        ParamType::StringList => match value {
            Value::String(_) => Some(Value::Array(vec![value.clone()])),
            Value::Array(items) => items
                .iter()
                .map(|item| coerce(item, ParamType::String))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            _ => None,
        },
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;
    use serde_json::json;

    fn trend_definition() -> ToolDefinition {
        ToolDefinition::new("market_trend_analysis", "Analyze market trends")
            .with_parameter(ToolParameter::required("market_segment", "Segment"))
            .with_parameter(ToolParameter::required("time_period", "Period"))
            .with_parameter(
                ToolParameter::optional("metrics", "Metrics")
                    .with_type(ParamType::StringList)
                    .with_default(json!(["growth_rate", "market_size"])),
            )
    }

    #[test]
    fn test_validator_missing_required() {
        let call = ToolCall::new("market_trend_analysis").with_arg("market_segment", "retail");
        let result = DefaultToolValidator.validate(&call, &trend_definition());

        assert_eq!(
            result.unwrap_err(),
            SchemaValidationError::MissingParameter {
                tool: "market_trend_analysis".to_string(),
                parameter: "time_period".to_string(),
            }
        );
    }

    #[test]
    fn test_validator_null_required_is_missing() {
        let call = ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", "retail")
            .with_arg("time_period", Value::Null);
        let result = DefaultToolValidator.validate(&call, &trend_definition());

        assert!(matches!(
            result,
            Err(SchemaValidationError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_validator_ignores_undeclared_arguments() {
        let call = ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", "retail")
            .with_arg("time_period", "Q2")
            .with_arg("region", "EMEA");
        let args = DefaultToolValidator
            .validate(&call, &trend_definition())
            .unwrap();

        assert_eq!(args.get_str("market_segment"), Some("retail"));
        assert!(args.get("region").is_none());
        assert_eq!(undeclared_arguments(&call, &trend_definition()), vec!["region"]);
    }

    #[test]
    fn test_validator_applies_defaults() {
        let call = ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", "retail")
            .with_arg("time_period", "Q2 2024");
        let args = DefaultToolValidator
            .validate(&call, &trend_definition())
            .unwrap();

        assert_eq!(args.get_str("market_segment"), Some("retail"));
        assert_eq!(
            args.get_string_list("metrics"),
            vec!["growth_rate", "market_size"]
        );
    }

    #[test]
    fn test_validator_coerces_single_string_to_list() {
        let call = ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", "retail")
            .with_arg("time_period", "Q2")
            .with_arg("metrics", "key_trends");
        let args = DefaultToolValidator
            .validate(&call, &trend_definition())
            .unwrap();

        assert_eq!(args.get_string_list("metrics"), vec!["key_trends"]);
    }

    #[test]
    fn test_validator_type_mismatch() {
        let call = ToolCall::new("market_trend_analysis")
            .with_arg("market_segment", json!({"name": "retail"}))
            .with_arg("time_period", "Q2");
        let err = DefaultToolValidator
            .validate(&call, &trend_definition())
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaValidationError::TypeMismatch { ref parameter, .. } if parameter == "market_segment"
        ));
    }

    #[test]
    fn test_coerce_scalars() {
        assert_eq!(coerce(&json!(2024), ParamType::String), Some(json!("2024")));
        assert_eq!(coerce(&json!("12.5"), ParamType::Number), Some(json!(12.5)));
        assert_eq!(coerce(&json!("7"), ParamType::Integer), Some(json!(7)));
        assert_eq!(coerce(&json!(7.0), ParamType::Integer), Some(json!(7)));
        assert_eq!(coerce(&json!(7.5), ParamType::Integer), None);
        assert_eq!(coerce(&json!("TRUE"), ParamType::Boolean), Some(json!(true)));
        assert_eq!(coerce(&json!("maybe"), ParamType::Boolean), None);
        assert_eq!(coerce(&json!([1, "a"]), ParamType::StringList), Some(json!(["1", "a"])));
        assert_eq!(coerce(&json!([{}]), ParamType::StringList), None);
    }
}

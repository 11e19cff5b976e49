//! JSON Schema rendering of tool definitions.
//!
//! Produces the provider-neutral schema handed to live inference backends
//! for native tool use.

use analyst_domain::{ParamType, ToolDefinition};
use serde_json::{Map, Value, json};

/// JSON Schema fragment for a single parameter type
fn type_schema(param_type: ParamType) -> Value {
    match param_type {
        ParamType::String => json!({ "type": "string" }),
        ParamType::Number => json!({ "type": "number" }),
        ParamType::Integer => json!({ "type": "integer" }),
        ParamType::Boolean => json!({ "type": "boolean" }),
        ParamType::StringList => json!({ "type": "array", "items": { "type": "string" } }),
    }
}

/// Input schema object (`{"type": "object", "properties": .., "required": ..}`)
pub fn input_schema(tool: &ToolDefinition) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in &tool.parameters {
        let mut prop = type_schema(param.param_type);
        if let Some(obj) = prop.as_object_mut() {
            obj.insert("description".to_string(), json!(param.description));
            if let Some(default) = &param.default {
                obj.insert("default".to_string(), default.clone());
            }
        }
        properties.insert(param.name.clone(), prop);

        if param.required {
            required.push(json!(param.name));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Full tool schema with name and description
pub fn tool_to_schema(tool: &ToolDefinition) -> Value {
    json!({
        "name": tool.name,
        "description": tool.description,
        "input_schema": input_schema(tool),
    })
}

//! Small builders for the OpenAPI fragments modules contribute.

use serde_json::json;

pub fn path_param(name: &str) -> serde_json::Value {
    json!({ "name": name, "in": "path", "required": true, "schema": { "type": "string" } })
}

pub fn text_response(description: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": { "text/plain": { "schema": { "type": "string" } } }
    })
}

pub fn json_body(schema: &str) -> serde_json::Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": {
            "$ref": format!("#/components/schemas/{}", schema)
        } } }
    })
}

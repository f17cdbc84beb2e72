//! Shape check for catalog documents.
//!
//! The JSON Schema is embedded rather than read from disk: the document
//! layout is fixed and there is no version negotiation. Validation runs before
//! typed decoding so a malformed document reports every offending field at
//! once instead of stopping at the first serde error.

use crate::error::ParseError;
use jsonschema::JSONSchema;
use serde_json::{Value, json};
use std::sync::OnceLock;

fn document_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "learning hub document",
            "type": "object",
            "required": ["learningHubData"],
            "properties": {
                "learningHubData": {
                    "type": "object",
                    "required": ["sections"],
                    "properties": {
                        "sections": {
                            "type": "array",
                            "items": { "$ref": "#/definitions/section" }
                        }
                    }
                }
            },
            "definitions": {
                "section": {
                    "type": "object",
                    "required": ["title", "description", "resources"],
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "resources": {
                            "type": "array",
                            "items": { "$ref": "#/definitions/resource" }
                        }
                    }
                },
                "resource": {
                    "type": "object",
                    "required": ["name", "url", "type", "description", "tags"],
                    "properties": {
                        "name": { "type": "string" },
                        "url": { "type": "string" },
                        "type": { "type": "string" },
                        "description": { "type": "string" },
                        "tags": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    }
                }
            }
        })
    })
}

/// Validate a parsed document against the embedded schema.
pub fn validate_document(document: &Value) -> Result<(), ParseError> {
    let compiled = JSONSchema::compile(document_schema()).map_err(|err| ParseError::Shape {
        details: format!("embedded schema failed to compile: {err}"),
    })?;

    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        return Err(ParseError::Shape { details });
    }
    Ok(())
}

//! JSON Schema for configuration files
//!
//! The descriptor's serde accepts several spellings per field (severity
//! names or levels, string-or-list values), so the schema is assembled by
//! hand instead of derived. Printed by `lintrc schema` and referenced from
//! generated configs through their `$schema` field.

use schemars::{Schema, json_schema};

/// Canonical URL configs may reference in `$schema`
pub const SCHEMA_URL: &str = "https://lintrc.dev/schema/v1.json";

/// Schema describing every accepted form of a configuration file
pub fn descriptor_schema() -> Schema {
    json_schema!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": SCHEMA_URL,
        "title": "lintrc configuration",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "$schema": {
                "type": "string",
                "description": "Schema URL for editor validation"
            },
            "root": {
                "type": "boolean",
                "description": "Stop ancestor config lookup at this file"
            },
            "extends": {
                "$ref": "#/$defs/stringOrList",
                "description": "Presets applied left to right before this file's own rules"
            },
            "parser": {
                "type": "string",
                "description": "Parser identifier registered in the catalog"
            },
            "plugins": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Plugin namespaces whose rules become addressable"
            },
            "env": { "$ref": "#/$defs/env" },
            "rules": { "$ref": "#/$defs/rules" },
            "overrides": {
                "type": "array",
                "items": { "$ref": "#/$defs/override" },
                "description": "Scoped tweaks applied in order to matching files"
            }
        },
        "$defs": {
            "stringOrList": {
                "anyOf": [
                    { "type": "string" },
                    { "type": "array", "items": { "type": "string" } }
                ]
            },
            "severity": {
                "anyOf": [
                    { "enum": ["off", "warn", "error"] },
                    { "type": "integer", "minimum": 0, "maximum": 2 }
                ]
            },
            "ruleEntry": {
                "anyOf": [
                    { "$ref": "#/$defs/severity" },
                    {
                        "type": "array",
                        "minItems": 1,
                        "prefixItems": [{ "$ref": "#/$defs/severity" }]
                    }
                ]
            },
            "rules": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/ruleEntry" },
                "description": "Rule activations keyed by `name` or `plugin/name`"
            },
            "env": {
                "type": "object",
                "additionalProperties": { "type": "boolean" },
                "description": "Named environments toggled on or off"
            },
            "override": {
                "type": "object",
                "additionalProperties": false,
                "required": ["files"],
                "properties": {
                    "files": { "$ref": "#/$defs/stringOrList" },
                    "excludedFiles": { "$ref": "#/$defs/stringOrList" },
                    "extends": { "$ref": "#/$defs/stringOrList" },
                    "parser": { "type": "string" },
                    "plugins": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "env": { "$ref": "#/$defs/env" },
                    "rules": { "$ref": "#/$defs/rules" }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_every_descriptor_field() {
        let value = serde_json::to_value(descriptor_schema()).unwrap();
        let properties = value["properties"].as_object().unwrap();

        for field in [
            "$schema", "root", "extends", "parser", "plugins", "env", "rules", "overrides",
        ] {
            assert!(properties.contains_key(field), "schema lost field {field}");
        }
        assert_eq!(value["additionalProperties"], serde_json::json!(false));
    }

    #[test]
    fn override_schema_requires_files() {
        let value = serde_json::to_value(descriptor_schema()).unwrap();
        assert_eq!(
            value["$defs"]["override"]["required"],
            serde_json::json!(["files"])
        );
    }
}

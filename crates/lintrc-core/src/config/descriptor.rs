//! Configuration descriptor types
//!
//! The serde model for lintrc files. A descriptor is purely declarative: it
//! names presets, plugins, parsers, and environments, and the rule catalog
//! decides whether those names exist. Unknown top-level keys are rejected so
//! typos surface as parse errors instead of silently ignored settings.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity assigned to a rule activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Report without failing the run
    Warn,
    /// Report and fail the run
    Error,
}

impl Severity {
    /// Parse the lowercase names used in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    /// Parse the numeric shorthand (0, 1, 2)
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Whether a rule at this severity produces diagnostics
    pub fn is_active(&self) -> bool {
        !matches!(self, Severity::Off)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a severity of \"off\", 0, \"warn\", 1, \"error\", or 2")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Severity::from_name(value)
                    .ok_or_else(|| E::custom(format!("unknown severity '{value}'")))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                i64::try_from(value)
                    .ok()
                    .and_then(Severity::from_level)
                    .ok_or_else(|| E::custom(format!("severity level {value} is out of range 0..=2")))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Severity::from_level(value)
                    .ok_or_else(|| E::custom(format!("severity level {value} is out of range 0..=2")))
            }

            // JSON5 sources hand every number over as a float
            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                if value.fract() == 0.0 && (0.0..=2.0).contains(&value) {
                    self.visit_i64(value as i64)
                } else {
                    Err(E::custom(format!("severity level {value} is out of range 0..=2")))
                }
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

/// A rule activation: severity plus any rule-specific options
///
/// Serializes back to the compact form it was written in: a bare severity
/// when there are no options, otherwise `[severity, option...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Vec<serde_json::Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(severity: Severity, options: Vec<serde_json::Value>) -> Self {
        Self { severity, options }
    }

    /// Whether this activation produces diagnostics
    pub fn is_active(&self) -> bool {
        self.severity.is_active()
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        Self::new(severity)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
            seq.serialize_element(&self.severity)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a severity or a non-empty [severity, option...] array")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Severity::deserialize(de::value::StrDeserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Severity::deserialize(de::value::U64Deserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Severity::deserialize(de::value::I64Deserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Severity::deserialize(de::value::F64Deserializer::new(value)).map(RuleEntry::new)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(option) = seq.next_element::<serde_json::Value>()? {
                    options.push(option);
                }
                Ok(RuleEntry { severity, options })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

/// Accept either `"value"` or `["value", ...]` for list-valued fields
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrList;

    impl<'de> Visitor<'de> for StringOrList {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<String>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_any(StringOrList)
}

/// One configuration file, as written
///
/// Field order mirrors the conventional layout of the files themselves, and
/// serialization preserves it. Map-valued fields keep the author's key order
/// because later entries shadow earlier ones during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConfigDescriptor {
    /// Schema URL for editor validation, carried through untouched
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Stop ancestor directory lookup at this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,

    /// Presets applied left to right before this file's own rules
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extends: Vec<String>,

    /// Parser identifier; the catalog's default parser when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Plugin namespaces whose rule definitions become addressable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Named environments toggled on or off
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, bool>,

    /// Rule activations keyed by rule id (`name` or `plugin/name`)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleEntry>,

    /// Scoped tweaks applied, in order, to files matching their globs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideBlock>,
}

impl ConfigDescriptor {
    /// Whether this file terminates the upward configuration search
    pub fn is_root(&self) -> bool {
        self.root.unwrap_or(false)
    }
}

/// A scoped configuration block inside `overrides`
///
/// Carries the same vocabulary as the top level minus `root` and nested
/// `overrides`. `files` is mandatory; an override that matches nothing by
/// construction is a config error caught at resolver build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct OverrideBlock {
    /// Glob patterns selecting the files this block applies to
    #[serde(deserialize_with = "string_or_list")]
    pub files: Vec<String>,

    /// Glob patterns carving exceptions out of `files`
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub excluded_files: Vec<String>,

    /// Presets applied within this block, before its own rules
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extends: Vec<String>,

    /// Parser replacing the base parser for matching files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Additional plugin namespaces loaded for matching files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Environment toggles merged over the base set
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, bool>,

    /// Rule activations merged over the base set
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_parses_names() {
        assert_eq!(
            serde_json::from_str::<Severity>("\"off\"").unwrap(),
            Severity::Off
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"warn\"").unwrap(),
            Severity::Warn
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"error\"").unwrap(),
            Severity::Error
        );
    }

    #[test]
    fn severity_parses_numeric_levels() {
        assert_eq!(serde_json::from_str::<Severity>("0").unwrap(), Severity::Off);
        assert_eq!(
            serde_json::from_str::<Severity>("1").unwrap(),
            Severity::Warn
        );
        assert_eq!(
            serde_json::from_str::<Severity>("2").unwrap(),
            Severity::Error
        );
    }

    #[test]
    fn severity_rejects_unknown_forms() {
        assert!(serde_json::from_str::<Severity>("\"fatal\"").is_err());
        assert!(serde_json::from_str::<Severity>("3").is_err());
        assert!(serde_json::from_str::<Severity>("-1").is_err());
        assert!(serde_json::from_str::<Severity>("1.5").is_err());
    }

    #[test]
    fn severity_serializes_to_names() {
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"warn\"");
    }

    #[test]
    fn rule_entry_accepts_bare_severity() {
        let entry: RuleEntry = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert!(entry.options.is_empty());

        let entry: RuleEntry = serde_json::from_str("1").unwrap();
        assert_eq!(entry.severity, Severity::Warn);
    }

    #[test]
    fn rule_entry_accepts_severity_with_options() {
        let entry: RuleEntry =
            serde_json::from_value(json!(["error", "always", { "null": "ignore" }])).unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert_eq!(entry.options.len(), 2);
        assert_eq!(entry.options[0], json!("always"));
    }

    #[test]
    fn rule_entry_rejects_empty_array() {
        let result = serde_json::from_str::<RuleEntry>("[]");
        assert!(result.is_err());
    }

    #[test]
    fn rule_entry_rejects_bad_leading_severity() {
        let result = serde_json::from_value::<RuleEntry>(json!([{ "max": 3 }, "error"]));
        assert!(result.is_err());
    }

    #[test]
    fn rule_entry_serializes_compactly() {
        let bare = RuleEntry::new(Severity::Error);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!("error"));

        let detailed = RuleEntry::with_options(Severity::Warn, vec![json!({ "max": 120 })]);
        assert_eq!(
            serde_json::to_value(&detailed).unwrap(),
            json!(["warn", { "max": 120 }])
        );
    }

    #[test]
    fn descriptor_parses_full_document() {
        let descriptor: ConfigDescriptor = serde_json::from_value(json!({
            "$schema": "https://lintrc.dev/schema.json",
            "root": true,
            "extends": ["recommended", "formatter-compat"],
            "parser": "typescript",
            "plugins": ["import"],
            "env": { "browser": true, "node": false },
            "rules": {
                "eqeqeq": ["error", "always"],
                "no-console": "warn",
                "semi": 0
            },
            "overrides": [{
                "files": "*.test.js",
                "env": { "jest": true },
                "rules": { "no-console": "off" }
            }]
        }))
        .unwrap();

        assert!(descriptor.is_root());
        assert_eq!(descriptor.extends, vec!["recommended", "formatter-compat"]);
        assert_eq!(descriptor.parser.as_deref(), Some("typescript"));
        assert_eq!(descriptor.env.get("node"), Some(&false));
        assert_eq!(
            descriptor.rules.get("semi"),
            Some(&RuleEntry::new(Severity::Off))
        );
        assert_eq!(descriptor.overrides.len(), 1);
        assert_eq!(descriptor.overrides[0].files, vec!["*.test.js"]);
    }

    #[test]
    fn descriptor_accepts_single_string_extends() {
        let descriptor: ConfigDescriptor =
            serde_json::from_value(json!({ "extends": "recommended" })).unwrap();
        assert_eq!(descriptor.extends, vec!["recommended"]);
    }

    #[test]
    fn descriptor_rejects_unknown_fields() {
        let result = serde_json::from_value::<ConfigDescriptor>(json!({ "extendz": ["oops"] }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("extendz"), "got: {message}");
    }

    #[test]
    fn override_requires_files() {
        let result = serde_json::from_value::<OverrideBlock>(json!({
            "rules": { "no-console": "off" }
        }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("files"), "got: {message}");
    }

    #[test]
    fn default_descriptor_serializes_empty() {
        let descriptor = ConfigDescriptor::default();
        assert_eq!(serde_json::to_string(&descriptor).unwrap(), "{}");
    }
}

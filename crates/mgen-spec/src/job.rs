//! Job spec decoding
//!
//! A spec file is a YAML document of the form:
//!
//! ```yaml
//! name: broker
//! properties:
//!   broker.port:
//!     default: 8080
//!     description: Port the broker listens on
//!   broker.password:
//!     description: Admin password
//! ```
//!
//! Property declarations are flattened into [`PropertyRecord`]s in document
//! order.

use crate::error::{SpecError, SpecResult};
use mgen_tree::PropertyRecord;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// A decoded job spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    /// Job name, also used as release name in the manifest
    pub name: String,
    /// Declared properties in document order
    pub properties: Vec<PropertyRecord>,
}

impl JobSpec {
    /// Create spec with no properties
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// With an additional property record
    #[inline]
    #[must_use]
    pub fn with_property(mut self, record: PropertyRecord) -> Self {
        self.properties.push(record);
        self
    }

    /// Decode a spec document
    ///
    /// `fallback_name` is used when the document has no usable `name`,
    /// normally the job's directory name. `origin` only labels errors.
    ///
    /// # Errors
    /// Returns [`SpecError::Yaml`] on malformed YAML, [`SpecError::EmptySpec`]
    /// for an empty document, and [`SpecError::InvalidProperty`] for property
    /// entries that are not a mapping or carry a non-string key.
    pub fn from_yaml_str(content: &str, fallback_name: &str, origin: &Path) -> SpecResult<Self> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|e| SpecError::yaml_error(origin, e))?;
        if value.is_null() {
            return Err(SpecError::EmptySpec(origin.to_path_buf()));
        }

        let raw: RawJobSpec =
            serde_yaml::from_value(value).map_err(|e| SpecError::yaml_error(origin, e))?;

        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                tracing::warn!(
                    spec = %origin.display(),
                    fallback = fallback_name,
                    "job spec has no name, using directory name"
                );
                fallback_name.to_string()
            }
        };

        let properties = match raw.properties {
            Some(map) => decode_properties(&name, &map)?,
            None => Vec::new(),
        };

        tracing::debug!(job = %name, properties = properties.len(), "decoded job spec");
        Ok(Self { name, properties })
    }
}

/// Document shape; everything else in the spec (templates, packages, ...) is ignored
#[derive(Debug, Deserialize)]
struct RawJobSpec {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: Option<Mapping>,
}

fn decode_properties(job: &str, map: &Mapping) -> SpecResult<Vec<PropertyRecord>> {
    map.iter()
        .map(|(key, body)| {
            let key = match key {
                Value::String(s) => s.clone(),
                other => {
                    return Err(SpecError::invalid_property(
                        job,
                        scalar_text(other).unwrap_or_default(),
                        "property keys must be strings",
                    ))
                }
            };
            decode_property(job, key, body)
        })
        .collect()
}

fn decode_property(job: &str, key: String, body: &Value) -> SpecResult<PropertyRecord> {
    let body = match body {
        Value::Null => return Ok(PropertyRecord::new(key, "")),
        Value::Mapping(m) => m,
        Value::Tagged(t) => return decode_property(job, key, &t.value),
        _ => {
            return Err(SpecError::invalid_property(
                job,
                key,
                "property declaration must be a mapping",
            ))
        }
    };

    let default = match body.get("default") {
        Some(v) => value_text(v).map_err(|reason| SpecError::invalid_property(job, &key, reason))?,
        None => String::new(),
    };

    // Older specs spell the key with a capital D.
    let description = match body.get("description").or_else(|| body.get("Description")) {
        Some(v) => value_text(v).map_err(|reason| SpecError::invalid_property(job, &key, reason))?,
        None => String::new(),
    };

    Ok(PropertyRecord::new(key, default).with_description(description))
}

/// Text for a scalar; `None` for sequences and mappings
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(t) => scalar_text(&t.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Text for a default value or description
///
/// Scalars render as their YAML text; collections render in flow syntax
/// (JSON is a subset of YAML flow style).
fn value_text(value: &Value) -> Result<String, String> {
    if let Some(text) = scalar_text(value) {
        return Ok(text);
    }
    serde_json::to_string(value).map_err(|e| format!("value cannot be rendered: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(content: &str) -> SpecResult<JobSpec> {
        JobSpec::from_yaml_str(content, "dir-name", Path::new("jobs/dir-name/spec"))
    }

    #[test]
    fn decodes_properties_in_document_order() {
        let spec = decode(
            r#"
name: broker
templates:
  ctl.erb: bin/ctl
properties:
  broker.port:
    default: 8080
    description: Port to listen on
  broker.password:
    description: Admin password
  ":broker.tls.enabled":
    default: false
"#,
        )
        .unwrap();

        assert_eq!(spec.name, "broker");
        assert_eq!(
            spec.properties,
            vec![
                PropertyRecord::new("broker.port", "8080").with_description("Port to listen on"),
                PropertyRecord::new("broker.password", "").with_description("Admin password"),
                PropertyRecord::new(":broker.tls.enabled", "false"),
            ]
        );
    }

    #[test]
    fn collection_defaults_use_flow_syntax() {
        let spec = decode(
            r#"
name: web
properties:
  web.hosts:
    default: [a, b]
  web.limits:
    default: {cpu: 2}
"#,
        )
        .unwrap();

        assert_eq!(spec.properties[0].default, r#"["a","b"]"#);
        assert_eq!(spec.properties[1].default, r#"{"cpu":2}"#);
    }

    #[test]
    fn collection_descriptions_use_flow_syntax() {
        let spec = decode(
            r#"
name: web
properties:
  web.mode:
    description: [fast, safe]
  web.port:
    description: {unit: tcp}
"#,
        )
        .unwrap();

        assert_eq!(spec.properties[0].description, r#"["fast","safe"]"#);
        assert_eq!(spec.properties[1].description, r#"{"unit":"tcp"}"#);
    }

    #[test]
    fn unrenderable_description_rejected() {
        let err = decode("name: web\nproperties:\n  a.b:\n    description:\n      ? [1]\n      : x\n").unwrap_err();
        assert!(matches!(err, SpecError::InvalidProperty { ref key, .. } if key == "a.b"));
    }

    #[test]
    fn null_property_body_is_empty_record() {
        let spec = decode("name: web\nproperties:\n  web.flag:\n").unwrap();
        assert_eq!(spec.properties, vec![PropertyRecord::new("web.flag", "")]);
    }

    #[test]
    fn capitalised_description_accepted() {
        let spec = decode("name: web\nproperties:\n  a.b:\n    Description: old style\n").unwrap();
        assert_eq!(spec.properties[0].description, "old style");
    }

    #[test]
    fn multi_line_description_preserved() {
        let spec = decode(
            "name: web\nproperties:\n  a.b:\n    description: |\n      line one\n      line two\n",
        )
        .unwrap();
        assert_eq!(spec.properties[0].description, "line one\nline two\n");
    }

    #[test]
    fn missing_name_falls_back_to_directory() {
        let spec = decode("properties:\n  a.b:\n    default: 1\n").unwrap();
        assert_eq!(spec.name, "dir-name");
    }

    #[test]
    fn missing_properties_is_empty() {
        let spec = decode("name: bare\n").unwrap();
        assert!(spec.properties.is_empty());
    }

    #[test]
    fn empty_document_rejected() {
        assert!(matches!(decode(""), Err(SpecError::EmptySpec(_))));
    }

    #[test]
    fn malformed_yaml_rejected() {
        assert!(matches!(decode("name: [unclosed"), Err(SpecError::Yaml { .. })));
    }

    #[test]
    fn scalar_property_body_rejected() {
        let err = decode("name: web\nproperties:\n  a.b: 5\n").unwrap_err();
        assert!(matches!(err, SpecError::InvalidProperty { ref key, .. } if key == "a.b"));
    }

    #[test]
    fn non_string_key_rejected() {
        let err = decode("name: web\nproperties:\n  7:\n    default: 1\n").unwrap_err();
        assert!(matches!(err, SpecError::InvalidProperty { ref key, .. } if key == "7"));
    }
}

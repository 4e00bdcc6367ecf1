//! Data model for the document schema — deserialized once, never mutated.
//!
//! Field presence is explicit: required text fields default to the empty
//! string when absent (they render as empty output), and optional lists are
//! `Option<Vec<_>>` so an absent field (`None`, block omitted) stays distinct
//! from a present-but-empty one (`Some(vec![])`, block emitted with an empty
//! list). Optional *text* fields are the opposite boundary: the legacy guards
//! are truthiness checks, and an empty string is falsy — so `""` on the wire
//! deserializes to `None`, never `Some("")`. Unknown fields in the input are
//! ignored.

use serde::{Deserialize, Deserializer};

/// Optional text field: absent, `null`, and `""` all mean "not present".
fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

/// Top-level document: one page of rendered documentation.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled group of properties and classes.
#[derive(Debug, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    pub properties: Option<Vec<Property>>,
    pub classes: Option<Vec<ClassDef>>,
}

/// A named value with a datatype, at section or class level.
#[derive(Debug, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub datatype: String,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub description: Option<String>,
}

/// A documented class: signature, description, members.
///
/// Classes nest properties and methods one level deep — no classes within
/// classes.
#[derive(Debug, Deserialize)]
pub struct ClassDef {
    #[serde(default)]
    pub name: String,
    /// Decorator-like label rendered before the name.
    #[serde(default, deserialize_with = "non_empty_text")]
    pub prefix: Option<String>,
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub description: Option<String>,
    pub raises: Option<Vec<ExceptionDef>>,
    pub properties: Option<Vec<Property>>,
    pub methods: Option<Vec<Method>>,
}

/// A parameter of a class constructor or method.
#[derive(Debug, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub datatype: Option<String>,
    /// Default value, shown as `name=default` in signatures.
    #[serde(default, deserialize_with = "non_empty_text")]
    pub default: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    pub description: Option<String>,
}

/// A documented method of a class.
#[derive(Debug, Deserialize)]
pub struct Method {
    #[serde(default)]
    pub name: String,
    /// Wire name "async": renders a cosmetic `await` marker before the
    /// signature. Carries no runtime behavior.
    #[serde(default, rename = "async")]
    pub is_async: bool,
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default)]
    pub description: String,
    pub raises: Option<Vec<ExceptionDef>>,
    pub returns: Option<Vec<ReturnDef>>,
}

/// An exception a class or method may raise, and when.
#[derive(Debug, Deserialize)]
pub struct ExceptionDef {
    #[serde(default)]
    pub exception: String,
    #[serde(default)]
    pub condition: String,
}

/// A return value descriptor of a method.
#[derive(Debug, Deserialize)]
pub struct ReturnDef {
    #[serde(default)]
    pub datatype: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_list_is_none() {
        let section: Section = serde_json::from_str(r#"{"title": "Core"}"#).unwrap();
        assert!(section.properties.is_none());
        assert!(section.classes.is_none());
    }

    #[test]
    fn empty_list_is_some_empty() {
        let section: Section =
            serde_json::from_str(r#"{"title": "Core", "properties": []}"#).unwrap();
        assert_eq!(section.properties.unwrap().len(), 0);
    }

    #[test]
    fn missing_required_text_defaults_to_empty() {
        let method: Method = serde_json::from_str(r#"{"name": "run"}"#).unwrap();
        assert_eq!(method.description, "");
        assert!(!method.is_async);
    }

    #[test]
    fn async_wire_name() {
        let method: Method =
            serde_json::from_str(r#"{"name": "fetch", "async": true, "description": "d"}"#)
                .unwrap();
        assert!(method.is_async);
    }

    #[test]
    fn unknown_fields_ignored() {
        let doc: Document =
            serde_json::from_str(r#"{"title": "API", "version": "1.0", "sections": []}"#).unwrap();
        assert_eq!(doc.title, "API");
    }

    #[test]
    fn parameter_default_value() {
        let param: Parameter =
            serde_json::from_str(r#"{"name": "timeout", "default": "60"}"#).unwrap();
        assert_eq!(param.default.as_deref(), Some("60"));
        assert!(param.datatype.is_none());
    }

    #[test]
    fn empty_string_text_is_absent() {
        let param: Parameter = serde_json::from_str(
            r#"{"name": "x", "datatype": "", "default": "", "description": ""}"#,
        )
        .unwrap();
        assert!(param.datatype.is_none());
        assert!(param.default.is_none());
        assert!(param.description.is_none());

        let property: Property =
            serde_json::from_str(r#"{"name": "x", "datatype": "int", "description": ""}"#)
                .unwrap();
        assert!(property.description.is_none());

        let class: ClassDef =
            serde_json::from_str(r#"{"name": "C", "prefix": "", "description": ""}"#).unwrap();
        assert!(class.prefix.is_none());
        assert!(class.description.is_none());
    }

    #[test]
    fn null_text_is_absent() {
        let param: Parameter =
            serde_json::from_str(r#"{"name": "x", "default": null}"#).unwrap();
        assert!(param.default.is_none());
    }
}

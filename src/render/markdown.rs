//! Markdown renderer for the same document model.
//!
//! Heading hierarchy: document `#`, section `##`, class `###`, method `####`.
//! Parameter/Raises/Returns groups use bold labels so they never collide with
//! the method heading level. Absent-vs-empty list semantics match the HTML
//! renderer.

use crate::model::*;
use crate::render::{signature, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", doc.title));
        if !doc.description.is_empty() {
            out.push_str(&doc.description);
            out.push_str("\n\n");
        }
        for section in &doc.sections {
            render_section(&mut out, section);
        }
        out
    }
}

fn render_section(out: &mut String, section: &Section) {
    out.push_str(&format!("## {}\n\n", section.title));
    if let Some(ref properties) = section.properties {
        for property in properties {
            out.push_str(&property_item(property));
            out.push('\n');
        }
        out.push('\n');
    }
    if let Some(ref classes) = section.classes {
        for class in classes {
            render_class(out, class);
        }
    }
}

fn render_class(out: &mut String, class: &ClassDef) {
    out.push_str("### class ");
    if let Some(ref prefix) = class.prefix {
        out.push_str(&format!("{} ", prefix));
    }
    let params = class.parameters.as_deref().unwrap_or(&[]);
    out.push_str(&format!("{}({})\n\n", class.name, signature(params)));

    if let Some(ref description) = class.description {
        out.push_str(description);
        out.push_str("\n\n");
    }
    if let Some(ref parameters) = class.parameters {
        render_list(out, "Parameters", parameters.iter().map(parameter_item));
    }
    if let Some(ref raises) = class.raises {
        render_list(out, "Raises", raises.iter().map(exception_item));
    }
    if let Some(ref properties) = class.properties {
        for property in properties {
            out.push_str(&property_item(property));
            out.push('\n');
        }
        out.push('\n');
    }
    if let Some(ref methods) = class.methods {
        for method in methods {
            render_method(out, method);
        }
    }
}

fn render_method(out: &mut String, method: &Method) {
    out.push_str("#### ");
    if method.is_async {
        out.push_str("await ");
    }
    let params = method.parameters.as_deref().unwrap_or(&[]);
    out.push_str(&format!("{}({})\n\n", method.name, signature(params)));

    if !method.description.is_empty() {
        out.push_str(&method.description);
        out.push_str("\n\n");
    }
    if let Some(ref parameters) = method.parameters {
        render_list(out, "Parameters", parameters.iter().map(parameter_item));
    }
    if let Some(ref raises) = method.raises {
        render_list(out, "Raises", raises.iter().map(exception_item));
    }
    if let Some(ref returns) = method.returns {
        render_list(out, "Returns", returns.iter().map(return_item));
    }
}

/// A labeled bullet list: `**{label}**` followed by one bullet per item.
fn render_list(out: &mut String, label: &str, items: impl Iterator<Item = String>) {
    out.push_str(&format!("**{}**\n\n", label));
    for item in items {
        out.push_str(&item);
        out.push('\n');
    }
    out.push('\n');
}

fn property_item(property: &Property) -> String {
    let mut item = format!("* **{}** ({})", property.name, property.datatype);
    if let Some(ref description) = property.description {
        item.push_str(&format!(": {}", description));
    }
    item
}

fn parameter_item(parameter: &Parameter) -> String {
    let mut item = format!("* **{}**", parameter.name);
    if let Some(ref datatype) = parameter.datatype {
        item.push_str(&format!(" ({})", datatype));
    }
    if let Some(ref description) = parameter.description {
        item.push_str(&format!(": {}", description));
    }
    item
}

fn exception_item(exception: &ExceptionDef) -> String {
    format!("* **{}**: {}", exception.exception, exception.condition)
}

fn return_item(return_value: &ReturnDef) -> String {
    format!("* **{}**: {}", return_value.datatype, return_value.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: &str) -> String {
        let doc: Document = serde_json::from_str(json).unwrap();
        MarkdownRenderer.render(&doc)
    }

    #[test]
    fn document_header() {
        let out = render(r#"{"title": "API", "description": "desc", "sections": []}"#);
        assert_eq!(out, "# API\n\ndesc\n\n");
    }

    #[test]
    fn section_with_property() {
        let out = render(
            r#"{"title": "t", "description": "d",
                "sections": [{"title": "Core",
                              "properties": [{"name": "x", "datatype": "int",
                                              "description": "count"}]}]}"#,
        );
        assert!(out.contains("## Core\n\n* **x** (int): count\n\n"));
    }

    #[test]
    fn class_heading_with_prefix() {
        let out = render(
            r#"{"title": "t", "description": "d",
                "sections": [{"title": "s",
                              "classes": [{"name": "Command", "prefix": "@register",
                                           "parameters": [{"name": "x", "default": "5"}]}]}]}"#,
        );
        assert!(out.contains("### class @register Command(x=5)\n\n"));
    }

    #[test]
    fn async_method_heading() {
        let out = render(
            r#"{"title": "t", "description": "d",
                "sections": [{"title": "s",
                              "classes": [{"name": "C",
                                           "methods": [{"name": "fetch", "async": true,
                                                        "description": "d"}]}]}]}"#,
        );
        assert!(out.contains("#### await fetch()\n\nd\n\n"));
    }

    #[test]
    fn empty_string_fields_treated_as_absent() {
        let out = render(
            r#"{"title": "t", "description": "d",
                "sections": [{"title": "s",
                              "classes": [{"name": "C", "prefix": "",
                                           "parameters": [{"name": "x", "datatype": "",
                                                           "default": "",
                                                           "description": ""}]}]}]}"#,
        );
        assert!(out.contains("### class C(x)\n\n"));
        assert!(out.contains("* **x**\n"));
    }

    #[test]
    fn raises_and_returns_lists() {
        let out = render(
            r#"{"title": "t", "description": "d",
                "sections": [{"title": "s",
                              "classes": [{"name": "C",
                                           "methods": [{"name": "m", "description": "d",
                                                        "raises": [{"exception": "E",
                                                                    "condition": "when"}],
                                                        "returns": [{"datatype": "int",
                                                                     "description": "n"}]}]}]}]}"#,
        );
        assert!(out.contains("**Raises**\n\n* **E**: when\n\n"));
        assert!(out.contains("**Returns**\n\n* **int**: n\n\n"));
    }
}

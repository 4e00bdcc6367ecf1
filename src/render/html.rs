//! HTML renderer — byte-compatible with the legacy browser-page output.
//!
//! One fragment per entity, concatenated top-down with no whitespace between
//! fragments. Field values are emitted verbatim, without HTML escaping, to
//! preserve the legacy output exactly; the schema source is trusted input.
//!
//! A present-but-empty list still emits its block with an empty `<ul>`; only
//! an absent field omits the block. Optional text goes the other way: `""` on
//! the wire is treated as absent by the model, so its fragment is omitted.

use crate::model::*;
use crate::render::{signature, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        out.push_str(&format!("<h1>{}</h1>", doc.title));
        out.push_str(&format!("<hr><p>{}</p><br>", doc.description));
        for section in &doc.sections {
            out.push_str(&render_section(section));
        }
        out
    }
}

fn render_section(section: &Section) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div id=\"{}\">", section.title));
    out.push_str(&format!("<h2>{}</h2><hr>", section.title));
    if let Some(ref properties) = section.properties {
        out.push_str("<ul>");
        for property in properties {
            out.push_str(&render_property(property));
        }
        out.push_str("</ul>");
    }
    if let Some(ref classes) = section.classes {
        out.push_str("<ul>");
        for class in classes {
            out.push_str(&render_class(class));
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>");
    out
}

fn render_property(property: &Property) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"code_line\"><p><b>{}</b></p></div>",
        property.name
    ));
    out.push_str(&format!("<p>( {} )", property.datatype));
    if let Some(ref description) = property.description {
        out.push_str(&format!(" - {}", description));
    }
    out.push_str("</p><br>");
    out
}

fn render_class(class: &ClassDef) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"class {}\">", class.name));
    out.push_str("<div class=\"code_line\"><p><i>class</i> ");
    if let Some(ref prefix) = class.prefix {
        out.push_str(&format!("{} ", prefix));
    }
    out.push_str(&format!("<b>{}(</b><i>", class.name));
    if let Some(ref parameters) = class.parameters {
        out.push_str(&signature(parameters));
    }
    out.push_str("</i><b>)</b></p></div><div class=\"indent\">");
    if let Some(ref description) = class.description {
        out.push_str(&format!("<p>{}</p>", description));
    }
    if let Some(ref parameters) = class.parameters {
        out.push_str("<p><b>Parameters</b></p><ul>");
        for parameter in parameters {
            out.push_str(&format!("<li>{}</li>", render_parameter(parameter)));
        }
        out.push_str("</ul>");
    }
    if let Some(ref raises) = class.raises {
        out.push_str("<p><b>Raises</b></p><ul>");
        for exception in raises {
            out.push_str(&format!("<li>{}</li>", render_exception(exception)));
        }
        out.push_str("</ul><br>");
    }
    // Nested members are appended directly, without an enclosing list.
    if let Some(ref properties) = class.properties {
        for property in properties {
            out.push_str(&render_property(property));
        }
    }
    if let Some(ref methods) = class.methods {
        for method in methods {
            out.push_str(&render_method(method));
        }
    }
    out.push_str("</div></div>");
    out
}

fn render_parameter(parameter: &Parameter) -> String {
    let mut out = String::new();
    out.push_str(&format!("<p><b>{}</b> ", parameter.name));
    if let Some(ref datatype) = parameter.datatype {
        out.push_str(&format!("( {} )", datatype));
    }
    if let Some(ref description) = parameter.description {
        out.push_str(&format!(" - {}", description));
    }
    out.push_str("</p>");
    out
}

fn render_method(method: &Method) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"code_line\"><p>");
    if method.is_async {
        out.push_str("<i>await</i> ");
    }
    out.push_str(&format!("<b>{}(</b><i>", method.name));
    if let Some(ref parameters) = method.parameters {
        out.push_str(&signature(parameters));
    }
    out.push_str("</i><b>)</b></p></div>");
    // Description is rendered unconditionally; absent becomes empty.
    out.push_str(&format!("<div class=\"indent\"><p>{}</p>", method.description));
    if let Some(ref parameters) = method.parameters {
        out.push_str("<p><b>Parameters</b></p><ul>");
        for parameter in parameters {
            out.push_str(&format!("<li>{}</li>", render_parameter(parameter)));
        }
        out.push_str("</ul>");
    }
    if let Some(ref raises) = method.raises {
        out.push_str("<p><b>Raises</b></p><ul>");
        for exception in raises {
            out.push_str(&format!("<li>{}</li>", render_exception(exception)));
        }
        out.push_str("</ul><br>");
    }
    if let Some(ref returns) = method.returns {
        out.push_str("<p><b>Returns</b></p><ul>");
        for return_value in returns {
            out.push_str(&format!("<li>{}</li>", render_return(return_value)));
        }
        out.push_str("</ul><br>");
    }
    out.push_str("</div>");
    out
}

fn render_exception(exception: &ExceptionDef) -> String {
    format!("<p>{} - {}</p>", exception.exception, exception.condition)
}

fn render_return(return_value: &ReturnDef) -> String {
    format!("<p>{} - {}</p>", return_value.datatype, return_value.description)
}

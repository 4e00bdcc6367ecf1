//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod markdown;

use crate::model::{Document, Parameter};
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
///
/// Renderers are pure: same document in, same markup out, no side effects.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or markdown", format)),
    }
}

/// Comma-joined parameter signature: `name` or `name=default` per parameter.
/// An empty default counts as no default, like the legacy truthiness guard.
pub fn signature(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|param| match param.default {
            Some(ref default) if !default.is_empty() => {
                format!("{}={}", param.name, default)
            }
            _ => param.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

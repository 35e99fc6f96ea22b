//! Output reporters for safety reports and knowledge graphs
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown
//! - `dot` - Graphviz DOT (knowledge graph only)

mod dot;
mod json;
mod markdown;
mod text;

use crate::catalog::Catalog;
use crate::graph::GraphData;
use crate::models::{SafetyReport, SupplementSafetyProfile};
use anyhow::{anyhow, bail, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
    Dot,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown, dot",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Render a safety report
pub fn render_safety(report: &SafetyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_safety(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render_safety(report),
        OutputFormat::Dot => bail!("DOT output is only available for the knowledge graph"),
    }
}

/// Render assembled knowledge-graph data
pub fn render_graph(data: &GraphData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_graph(data),
        OutputFormat::Json => json::render(data),
        OutputFormat::Markdown => markdown::render_graph(data),
        OutputFormat::Dot => dot::render(data),
    }
}

/// Render a single supplement's safety profile
pub fn render_profile(
    profile: &SupplementSafetyProfile,
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_profile(profile, name),
        OutputFormat::Json => json::render(profile),
        OutputFormat::Markdown => markdown::render_profile(profile, name),
        OutputFormat::Dot => bail!("DOT output is only available for the knowledge graph"),
    }
}

/// Render the supplement listing of a catalog
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_catalog(catalog),
        OutputFormat::Json => json::render(catalog.supplements()),
        OutputFormat::Markdown => markdown::render_catalog(catalog),
        OutputFormat::Dot => bail!("DOT output is only available for the knowledge graph"),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Dot => "dot",
    }
}

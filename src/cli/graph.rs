//! Graph command - assemble and export the knowledge graph

use super::{write_output, Env};
use crate::graph::{GraphAssembler, GraphOptions};
use crate::reporters::{self, OutputFormat};
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(env: &Env, options: &GraphOptions, format: &str, output: Option<&Path>) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let data = GraphAssembler::new(&env.catalog)
        .with_scoring(env.config.scoring.clone())
        .generate(options);
    info!(
        "Graph: {} nodes, {} relationships, {} unmapped text(s)",
        data.nodes.len(),
        data.relationships.len(),
        data.mapping.unmapped.len()
    );

    let rendered = reporters::render_graph(&data, format)?;
    write_output(&rendered, output, format)
}

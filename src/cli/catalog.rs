//! Catalog command - list the supplements a check can reference

use super::Env;
use crate::reporters::{self, OutputFormat};
use anyhow::Result;

pub fn run(env: &Env, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let output = reporters::render_catalog(&env.catalog, format)?;
    println!("{}", output);
    Ok(())
}

//! Init command - write an example suplementor.toml

use crate::config::{init_config, CONFIG_FILE_NAME};
use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if init_config(dir)? {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    } else {
        println!(
            "{} Already exists: {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}

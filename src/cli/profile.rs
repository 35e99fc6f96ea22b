//! Profile command - quick safety profile of one supplement

use super::Env;
use crate::catalog::SupplementLookup;
use crate::models::UserProfile;
use crate::reporters::{self, OutputFormat};
use crate::safety::supplement_safety_profile;
use anyhow::{anyhow, Result};

pub fn run(env: &Env, supplement_id: &str, user: UserProfile, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let supplement = env.catalog.supplement(supplement_id).ok_or_else(|| {
        anyhow!(
            "Unknown supplement '{}'. Run `suplementor catalog` to list ids",
            supplement_id
        )
    })?;

    let profile = supplement_safety_profile(supplement, &user);
    let output = reporters::render_profile(&profile, &supplement.name, format)?;
    println!("{}", output);
    Ok(())
}

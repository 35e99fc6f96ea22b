//! CLI command definitions and handlers

mod catalog;
mod graph;
mod init;
mod profile;
mod safety;

use crate::catalog::Catalog;
use crate::config::{load_config, SuplementorConfig};
use crate::models::UserProfile;
use crate::reporters::{file_extension, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suplementor - supplement safety checks and neuroscience knowledge graphs
#[derive(Parser, Debug)]
#[command(name = "suplementor")]
#[command(
    version,
    about = "Supplement safety checks and neuroscience knowledge graphs",
    long_about = "Suplementor cross-references a health profile against a supplement \
catalog to flag contraindications, drug and supplement interactions and allergy risks, \
and assembles a knowledge graph linking supplements to neurotransmitters, brain regions \
and cognitive functions.\n\n\
Output is educational and does not replace medical advice.",
    after_help = "\
Examples:
  suplementor catalog                                    List catalog supplements
  suplementor safety --age 30 -s omega-3 -s magnesium    Check a stack
  suplementor safety --profile me.json -s bacopa --format json
  suplementor profile rhodiola --age 70                  Quick per-supplement check
  suplementor graph --format dot -o graph.dot            Export the knowledge graph"
)]
pub struct Cli {
    /// Supplement catalog (.json or .toml); overrides [catalog] path in config
    #[arg(long, global = true, env = "SUPLEMENTOR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a suplementor.toml with example settings into the current directory
    Init,

    /// Analyze a supplement stack against a health profile
    #[command(after_help = "\
Examples:
  suplementor safety --age 30 -s omega-3 -s magnesium
  suplementor safety --age 28 --pregnant -s bacopa
  suplementor safety --age 45 --medication warfarin -s omega-3 --format markdown
  suplementor safety --profile me.json -s rhodiola --fail-on high   Exit 1 on high risk (CI mode)")]
    Safety {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Supplement id to include (repeatable)
        #[arg(long = "supplement", short = 's', required = true)]
        supplements: Vec<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if overall risk is at this level or higher
        #[arg(long, value_parser = ["medium", "high"])]
        fail_on: Option<String>,
    },

    /// Quick safety profile of a single supplement
    Profile {
        /// Catalog id of the supplement
        supplement: String,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,
    },

    /// Assemble the neuroscience knowledge graph
    #[command(after_help = "\
Examples:
  suplementor graph                                 Summary in the terminal
  suplementor graph --format json --seed 42         Reproducible JSON for the frontend
  suplementor graph --no-pathways --min-evidence moderate
  suplementor graph --format dot -o graph.dot && dot -Tsvg graph.dot > graph.svg")]
    Graph {
        /// Leave out supplement nodes
        #[arg(long)]
        no_supplements: bool,

        /// Leave out neurotransmitter nodes
        #[arg(long)]
        no_neurotransmitters: bool,

        /// Leave out brain region nodes
        #[arg(long)]
        no_brain_regions: bool,

        /// Leave out cognitive function nodes
        #[arg(long)]
        no_cognitive_functions: bool,

        /// Leave out pathway nodes
        #[arg(long)]
        no_pathways: bool,

        /// Leave out neuroplasticity mechanism nodes
        #[arg(long)]
        no_mechanisms: bool,

        /// Drop relationships below this evidence level
        #[arg(long, value_parser = ["strong", "moderate", "weak", "insufficient", "conflicting"])]
        min_evidence: Option<String>,

        /// Keep at most this many nodes
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Seed for reproducible layout coordinates
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json, markdown (or md), dot
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md", "dot"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List supplements in the catalog
    Catalog {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,
    },
}

/// Health profile, from a JSON file and/or individual flags
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// JSON file with a user profile (age, pregnant, breastfeeding,
    /// healthConditions, allergies, currentMedications)
    #[arg(long = "profile", value_name = "JSON")]
    pub profile_file: Option<PathBuf>,

    /// Age in years; overrides the profile file
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub pregnant: bool,

    #[arg(long)]
    pub breastfeeding: bool,

    /// Health condition (repeatable)
    #[arg(long = "condition")]
    pub conditions: Vec<String>,

    /// Allergy (repeatable)
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Current medication (repeatable)
    #[arg(long = "medication")]
    pub medications: Vec<String>,
}

impl ProfileArgs {
    /// Merge the profile file with the flags; list flags extend the file's lists
    pub fn into_user_profile(self) -> Result<UserProfile> {
        let mut profile = match self.profile_file {
            Some(ref path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read profile {}", path.display()))?;
                let value: serde_json::Value = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid profile JSON in {}", path.display()))?;
                if value.get("age").is_none() && self.age.is_none() {
                    bail!(
                        "Profile {} has no \"age\"; add it or pass --age",
                        path.display()
                    );
                }
                serde_json::from_value::<UserProfile>(value)
                    .with_context(|| format!("Invalid profile in {}", path.display()))?
            }
            None => {
                if self.age.is_none() {
                    bail!("Age is required: pass --age or --profile <JSON>");
                }
                UserProfile::default()
            }
        };

        if let Some(age) = self.age {
            profile.age = age;
        }
        profile.pregnant |= self.pregnant;
        profile.breastfeeding |= self.breastfeeding;
        profile.health_conditions.extend(self.conditions);
        profile.allergies.extend(self.allergies);
        profile.current_medications.extend(self.medications);
        Ok(profile)
    }
}

/// Everything a command needs from the environment
pub(crate) struct Env {
    pub config: SuplementorConfig,
    pub catalog: Catalog,
}

impl Env {
    fn load(catalog_flag: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let config = load_config(&cwd);

        let catalog = match catalog_flag
            .map(Path::to_path_buf)
            .or_else(|| config.catalog.resolved_path(&cwd))
        {
            Some(path) => Catalog::from_path(&path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => {
                debug!("Using built-in catalog");
                Catalog::builtin().context("Built-in catalog is invalid")?
            }
        };

        Ok(Self { config, catalog })
    }
}

/// Print rendered output, or write it to `path` (adding the format's extension when missing)
pub(crate) fn write_output(output: &str, path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match path {
        Some(p) => {
            let mut out_path = p.to_path_buf();
            if out_path.extension().is_none() {
                out_path.set_extension(file_extension(format));
            }
            std::fs::write(&out_path, output)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            eprintln!(
                "{} Written to {}",
                style("✓").green(),
                style(out_path.display()).cyan()
            );
        }
        None => println!("{}", output),
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            init::run(&cwd)
        }

        Commands::Safety {
            profile,
            supplements,
            format,
            output,
            fail_on,
        } => {
            let env = Env::load(cli.catalog.as_deref())?;
            safety::run(
                &env,
                profile.into_user_profile()?,
                &supplements,
                &format,
                output.as_deref(),
                fail_on,
            )
        }

        Commands::Profile {
            supplement,
            profile,
            format,
        } => {
            let env = Env::load(cli.catalog.as_deref())?;
            profile::run(&env, &supplement, profile.into_user_profile()?, &format)
        }

        Commands::Graph {
            no_supplements,
            no_neurotransmitters,
            no_brain_regions,
            no_cognitive_functions,
            no_pathways,
            no_mechanisms,
            min_evidence,
            max_nodes,
            seed,
            format,
            output,
        } => {
            let env = Env::load(cli.catalog.as_deref())?;
            let mut options = env.config.graph_options();
            options.include_supplements &= !no_supplements;
            options.include_neurotransmitters &= !no_neurotransmitters;
            options.include_brain_regions &= !no_brain_regions;
            options.include_cognitive_functions &= !no_cognitive_functions;
            options.include_pathways &= !no_pathways;
            options.include_mechanisms &= !no_mechanisms;
            if let Some(level) = min_evidence {
                options.min_evidence_level = level.parse()?;
            }
            if let Some(n) = max_nodes {
                options.max_nodes = n;
            }
            if seed.is_some() {
                options.layout.seed = seed;
            }
            graph::run(&env, &options, &format, output.as_deref())
        }

        Commands::Catalog { format } => {
            let env = Env::load(cli.catalog.as_deref())?;
            catalog::run(&env, &format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_safety() {
        let cli = Cli::try_parse_from([
            "suplementor",
            "safety",
            "--age",
            "30",
            "--medication",
            "warfarin",
            "-s",
            "omega-3",
            "-s",
            "magnesium",
            "--fail-on",
            "high",
        ])
        .unwrap();
        match cli.command {
            Commands::Safety {
                profile,
                supplements,
                fail_on,
                ..
            } => {
                assert_eq!(supplements, vec!["omega-3", "magnesium"]);
                assert_eq!(fail_on.as_deref(), Some("high"));
                let user = profile.into_user_profile().unwrap();
                assert_eq!(user.age, 30);
                assert_eq!(user.current_medications, vec!["warfarin"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_safety_requires_supplement() {
        assert!(Cli::try_parse_from(["suplementor", "safety", "--age", "30"]).is_err());
    }

    #[test]
    fn test_profile_requires_age() {
        let err = ProfileArgs::default().into_user_profile().unwrap_err();
        assert!(err.to_string().contains("Age is required"));
    }

    #[test]
    fn test_profile_file_merged_with_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        std::fs::write(
            &path,
            r#"{"age": 40, "allergies": ["fish"], "currentMedications": ["Warfarin"]}"#,
        )
        .unwrap();

        let args = ProfileArgs {
            profile_file: Some(path),
            pregnant: true,
            medications: vec!["sertraline".into()],
            ..Default::default()
        };
        let user = args.into_user_profile().unwrap();
        assert_eq!(user.age, 40);
        assert!(user.pregnant);
        assert_eq!(user.allergies, vec!["fish"]);
        assert_eq!(user.current_medications, vec!["Warfarin", "sertraline"]);
    }

    #[test]
    fn test_profile_file_without_age_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        std::fs::write(&path, r#"{"pregnant": true}"#).unwrap();

        let args = ProfileArgs {
            profile_file: Some(path.clone()),
            ..Default::default()
        };
        assert!(args.into_user_profile().is_err());

        let args = ProfileArgs {
            profile_file: Some(path),
            age: Some(25),
            ..Default::default()
        };
        assert_eq!(args.into_user_profile().unwrap().age, 25);
    }
}

//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use lexpace_api::AnnotatorKind;
use lexpace_core::{get_rule_table, list_rule_sets};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag documents with display categories and merged punctuation
    Process(process::ProcessArgs),

    /// Validate a rule table file
    Validate(validate::ValidateArgs),

    /// Generate a rule table template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List annotation providers
    Annotators,

    /// List built-in rule tables
    RuleSets,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render()?);
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        match self {
            ListCommands::Annotators => {
                out.push_str("Available annotators:\n");
                for kind in AnnotatorKind::ALL {
                    out.push_str(&format!("  {:<10} {}\n", kind.as_str(), kind.description()));
                }
            }
            ListCommands::RuleSets => {
                out.push_str("Available rule sets:\n");
                for name in list_rule_sets() {
                    let rules = get_rule_table(name)?;
                    out.push_str(&format!(
                        "  {:<10} {} ({} tags)\n",
                        name,
                        rules.description().unwrap_or(""),
                        rules.tag_count()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in process::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        out.push_str(&format!(
                            "  {:<10} {}\n",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        ));
                    }
                }
            }
        }
        Ok(out)
    }
}

//! Validate command implementation

use anyhow::Result;
use clap::Args;
use lexpace_core::{Category, RuleTable};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule table file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule table: {}", self.rules_config.display());

        match RuleTable::from_file(&self.rules_config) {
            Ok(rules) => {
                println!("✓ Rule table is valid!");
                println!("  Name: {}", rules.name());
                if let Some(description) = rules.description() {
                    println!("  Description: {description}");
                }
                for category in Category::TAGGED {
                    let count = rules.tags(category).map_or(0, |tags| tags.len());
                    println!("  {category}: {count} tags");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

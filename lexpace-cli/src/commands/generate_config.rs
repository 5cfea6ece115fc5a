//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use lexpace_core::{get_rule_table, Category, RuleTable, DEFAULT_RULE_SET};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name for the new rule table
    #[arg(short, long, value_name = "NAME", required = true)]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Built-in rule table to copy tag lists from
    #[arg(short, long, value_name = "RULESET", default_value = DEFAULT_RULE_SET)]
    pub base: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rule table template...");
        println!("  Name: {}", self.name);
        println!("  Based on: {}", self.base);
        println!("  Output file: {}", self.output.display());

        let base = get_rule_table(&self.base)?;
        let template = self.generate_template(base)?;

        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the tag lists to match your tagger's tag set");
        println!("2. Validate your rule table:");
        println!(
            "   lexpace validate --rules-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   lexpace process -i input.txt --rules-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Render a commented rule table seeded from `base`
    fn generate_template(&self, base: &RuleTable) -> Result<String> {
        let mut config = base.to_config();
        config.metadata.name = self.name.clone();
        config.metadata.description = Some("Custom rule table".to_string());
        let body = toml::to_string(&config).context("Failed to serialize rule table")?;

        let mut out = format!("# Rule table generated from \"{}\"\n#\n", base.name());
        out.push_str("# Tag lists per display category. A tag may appear in one list only;\n");
        out.push_str("# tags not listed anywhere fall back to \"other\".\n");
        out.push_str("#   named_entity: decided by the annotator's entity flag; must stay empty\n");
        for category in Category::TAGGED {
            out.push_str(&format!("#   {category}: {}\n", category_comment(category)));
        }
        out.push('\n');
        out.push_str(&body);
        Ok(out)
    }
}

fn category_comment(category: Category) -> &'static str {
    match category {
        Category::Content => "words carrying meaning: nouns, verbs, adjectives",
        Category::Function => "grammatical glue: determiners, pronouns, adpositions",
        Category::Modifier => "adverbs and numerals",
        Category::Punctuation => "folded into the preceding token when merging",
        Category::NamedEntity | Category::Other => "",
    }
}

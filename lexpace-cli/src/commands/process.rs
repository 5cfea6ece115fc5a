//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Document, FileReader, STDIN_MARKER};
use crate::output::{
    BoxedWriter, JsonFormatter, MarkdownFormatter, OutputFormatter, TaggedDocument, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lexpace_api::{AnnotatorKind, Config, TokenTagger};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Annotation provider: lexicon, conllu or json [default: lexicon]
    #[arg(short, long, value_name = "NAME", value_parser = parse_annotator)]
    pub annotator: Option<AnnotatorKind>,

    /// Built-in rule table [default: universal]
    #[arg(short, long, value_name = "NAME", conflicts_with = "rules_config")]
    pub rule_set: Option<String>,

    /// Rule table TOML file
    #[arg(long, value_name = "FILE")]
    pub rules_config: Option<PathBuf>,

    /// Lexicon TOML file for the lexicon annotator
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Read XPOS instead of UPOS tags from CoNLL-U input
    #[arg(long)]
    pub xpos: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LEXPACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tag multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `token<TAB>category` line per display unit
    Text,
    /// JSON array of documents with parallel tokens and groups
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a config file
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
    }
}

fn parse_annotator(value: &str) -> Result<AnnotatorKind, String> {
    value.parse::<AnnotatorKind>().map_err(|e| e.to_string())
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let tagger = TokenTagger::with_config(self.tagger_config(&file_config)?)
            .context("Failed to set up tagger")?;
        let documents = self.load_documents()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        let tag = |doc: &Document| -> Result<TaggedDocument> {
            let output = tagger
                .process_text(&doc.text)
                .map_err(|e| CliError::ProcessingError(format!("{}: {e}", doc.source)))?;
            progress.file_completed(&doc.source);
            Ok(TaggedDocument {
                source: doc.source.clone(),
                tokens: output.tokens,
                groups: output.groups,
            })
        };

        let tagged: Vec<TaggedDocument> = if self.parallel && documents.len() > 1 {
            log::info!("Tagging {} documents in parallel", documents.len());
            documents.par_iter().map(tag).collect::<Result<_>>()?
        } else {
            documents.iter().map(tag).collect::<Result<_>>()?
        };
        progress.finish();

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.format)?,
        };
        let mut formatter = self.create_formatter(format, file_config.output.pretty_json)?;
        for document in &tagged {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        log::info!("Tagged {} documents", tagged.len());
        Ok(())
    }

    /// Merge command-line flags over the config file
    fn tagger_config(&self, file_config: &CliConfig) -> Result<Config> {
        let processing = &file_config.processing;

        let annotator = match self.annotator {
            Some(kind) => kind,
            None => processing
                .annotator
                .parse::<AnnotatorKind>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        };

        let mut builder = Config::builder()
            .annotator_kind(annotator)
            .xpos(self.xpos || processing.xpos);

        let rules_config = match (&self.rule_set, &self.rules_config) {
            (Some(_), _) => None,
            (None, Some(path)) => Some(path.clone()),
            (None, None) => processing.rules_config.clone(),
        };
        builder = match rules_config {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                builder.rules_file(path)
            }
            None => builder.rule_set(
                self.rule_set
                    .clone()
                    .unwrap_or_else(|| processing.rule_set.clone()),
            ),
        };

        if let Some(path) = self.lexicon.as_ref().or(processing.lexicon.as_ref()) {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            builder = builder.lexicon_file(path.clone());
        }

        Ok(builder.build()?)
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        if self.input.iter().any(|input| input == STDIN_MARKER) {
            if self.input.len() > 1 {
                return Err(CliError::ConfigError(
                    "standard input cannot be combined with file inputs".to_string(),
                )
                .into());
            }
            return Ok(vec![FileReader::read_stdin()?]);
        }

        resolve_patterns(&self.input)?
            .iter()
            .map(|path| FileReader::read_document(path))
            .collect()
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: BoxedWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialisation in the same process is a no-op
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

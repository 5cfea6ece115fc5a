//! Built-in lexicon annotator
//!
//! A small rule-based tagger for running without an external NLP model.
//! Text is segmented on Unicode word boundaries; closed-class words come from
//! a TOML lexicon and everything else is decided by surface shape. It is a
//! heuristic: open-class words all end up as `NOUN`, which lands in the same
//! display category as `VERB` and `ADJ` anyway.

use crate::error::{EngineError, Result};
use lexpace_core::{AnnotatedToken, AnnotationError, AnnotationProvider};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use unicode_segmentation::UnicodeSegmentation;

const ENGLISH_LEXICON: &str = include_str!("../../configs/lexicon/english.toml");

/// ASCII punctuation that the universal tag set treats as symbols
const SYMBOL_CHARS: &[char] = &['$', '%', '&', '*', '+', '<', '=', '>', '^', '`', '|', '~', '#', '@'];

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…'];

static ENGLISH: OnceLock<Arc<LexiconAnnotator>> = OnceLock::new();

/// On-disk form of a lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Descriptive metadata
    pub metadata: LexiconMetadata,
    /// Tag -> words carrying that tag
    pub words: BTreeMap<String, Vec<String>>,
}

/// Lexicon metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconMetadata {
    /// Language code, e.g. `en`
    pub language: String,
    /// Human readable name
    pub name: String,
}

/// Rule-based annotator backed by a closed-class word list
#[derive(Debug, Clone)]
pub struct LexiconAnnotator {
    language: String,
    words: HashMap<String, String>,
}

impl LexiconAnnotator {
    /// Annotator using the embedded English lexicon
    pub fn english() -> Result<Self> {
        Self::from_toml_str(ENGLISH_LEXICON)
    }

    /// Embedded English annotator, parsed once and shared
    pub fn shared_english() -> Arc<Self> {
        ENGLISH
            .get_or_init(|| {
                Arc::new(Self::english().expect("Failed to load embedded English lexicon"))
            })
            .clone()
    }

    /// Build from a lexicon config, rejecting words listed under two tags
    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        let mut words = HashMap::new();

        for (tag, entries) in config.words {
            if tag.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "lexicon contains a blank tag".to_string(),
                ));
            }
            for word in entries {
                let key = word.to_lowercase();
                if let Some(previous) = words.insert(key.clone(), tag.clone()) {
                    if previous != tag {
                        return Err(EngineError::ConfigError(format!(
                            "lexicon word '{key}' listed under both {previous} and {tag}"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            language: config.metadata.language,
            words,
        })
    }

    /// Parse a lexicon from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse lexicon: {e}")))?;
        Self::from_config(config)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read lexicon {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Language code from the lexicon metadata
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of distinct words in the lexicon
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> (&str, bool) {
        if let Some(tag) = self.words.get(&word.to_lowercase()) {
            return (tag.as_str(), false);
        }
        if is_numeric(word) {
            return ("NUM", false);
        }
        if is_acronym(word) || (!sentence_start && is_capitalized(word)) {
            return ("PROPN", true);
        }
        if word.chars().count() > 4 && word.to_lowercase().ends_with("ly") {
            return ("ADV", false);
        }
        ("NOUN", false)
    }
}

fn is_punctuation_char(c: char) -> bool {
    (c.is_ascii_punctuation() && !SYMBOL_CHARS.contains(&c))
        || matches!(
            c,
            '“' | '”' | '‘' | '’' | '«' | '»' | '‹' | '›' | '—' | '–' | '…' | '¡' | '¿' | '·'
        )
}

fn is_numeric(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '/'))
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2 && word.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

impl AnnotationProvider for LexiconAnnotator {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn annotate(&self, text: &str) -> std::result::Result<Vec<AnnotatedToken>, AnnotationError> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                // A lone space is the separator a tokenizer strips; any other
                // run survives as its own SPACE token.
                if segment != " " {
                    tokens.push(AnnotatedToken::new(segment, "SPACE"));
                }
                if segment.contains('\n') {
                    sentence_start = true;
                }
                continue;
            }

            if segment.chars().all(is_punctuation_char) {
                tokens.push(AnnotatedToken::new(segment, "PUNCT"));
                if segment.contains(SENTENCE_TERMINATORS) {
                    sentence_start = true;
                }
                continue;
            }

            if segment.chars().all(|c| !c.is_alphanumeric()) {
                tokens.push(AnnotatedToken::new(segment, "SYM"));
                continue;
            }

            let (tag, is_entity) = self.tag_word(segment, sentence_start);
            tokens.push(AnnotatedToken {
                text: segment.to_string(),
                pos_tag: tag.to_string(),
                is_named_entity: is_entity,
            });
            sentence_start = false;
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> Vec<(String, String, bool)> {
        LexiconAnnotator::english()
            .unwrap()
            .annotate(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.pos_tag, t.is_named_entity))
            .collect()
    }

    fn tags(text: &str) -> Vec<String> {
        annotate(text).into_iter().map(|(_, tag, _)| tag).collect()
    }

    #[test]
    fn test_embedded_lexicon_loads() {
        let annotator = LexiconAnnotator::english().unwrap();
        assert_eq!(annotator.language(), "en");
        assert!(annotator.word_count() > 100);
    }

    #[test]
    fn test_shared_english_parsed_once() {
        let first = LexiconAnnotator::shared_english();
        let second = LexiconAnnotator::shared_english();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.word_count(), LexiconAnnotator::english().unwrap().word_count());
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(tags("The cat sat."), vec!["DET", "NOUN", "NOUN", "PUNCT"]);
    }

    #[test]
    fn test_single_spaces_dropped() {
        let texts: Vec<String> = annotate("a  b").into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(texts, vec!["a", "  ", "b"]);
    }

    #[test]
    fn test_newline_becomes_space_token() {
        assert_eq!(tags("Stop.\nGo"), vec!["NOUN", "PUNCT", "SPACE", "NOUN"]);
    }

    #[test]
    fn test_mid_sentence_capital_is_entity() {
        let tokens = annotate("We visited Paris today");
        assert_eq!(tokens[2], ("Paris".to_string(), "PROPN".to_string(), true));
        assert_eq!(tokens[3].1, "ADV");
    }

    #[test]
    fn test_sentence_initial_capital_is_not_entity() {
        let tokens = annotate("Cats sleep. Dogs bark.");
        assert!(!tokens[0].2);
        assert_eq!(tokens[3].0, "Dogs");
        assert!(!tokens[3].2);
    }

    #[test]
    fn test_acronym_is_entity_anywhere() {
        let tokens = annotate("NASA launched it");
        assert_eq!(tokens[0].1, "PROPN");
        assert!(tokens[0].2);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(tags("It costs $3.50 now"), vec!["PRON", "NOUN", "SYM", "NUM", "ADV"]);
    }

    #[test]
    fn test_ly_adverb() {
        assert_eq!(tags("she quickly left"), vec!["PRON", "ADV", "NOUN"]);
        // Short "-ly" words stay nouns
        assert_eq!(tags("fly"), vec!["NOUN"]);
    }

    #[test]
    fn test_contraction_stays_whole() {
        assert_eq!(tags("don't"), vec!["AUX"]);
    }

    #[test]
    fn test_lexicon_is_case_insensitive() {
        assert_eq!(tags("THE"), vec!["DET"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(annotate("").is_empty());
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let err = LexiconAnnotator::from_toml_str(
            r#"
            [metadata]
            language = "xx"
            name = "Broken"

            [words]
            DET = ["that"]
            SCONJ = ["That"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
        assert!(err.to_string().contains("that"));
    }

    #[test]
    fn test_custom_lexicon_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "[metadata]\nlanguage = \"xx\"\nname = \"Tiny\"\n\n[words]\nINTJ = [\"zap\"]\n",
        )
        .unwrap();

        let annotator = LexiconAnnotator::from_file(file.path()).unwrap();
        assert_eq!(annotator.word_count(), 1);
        let tokens = annotator.annotate("zap").unwrap();
        assert_eq!(tokens, vec![AnnotatedToken::new("zap", "INTJ")]);
    }
}

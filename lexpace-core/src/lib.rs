//! Token categories and punctuation merging for rapid serial visual presentation
//!
//! Readers that flash one word at a time need to know how long to hold each
//! word. This crate turns a sequence of part-of-speech annotated tokens into
//! display units: trailing punctuation is folded into the word before it, and
//! every unit gets one of a handful of coarse [`Category`] values that a
//! reader can map to a delay.
//!
//! # Architecture
//!
//! - **Rule tables** ([`RuleTable`]): validated tag -> category mappings,
//!   embedded as TOML or loaded from disk
//! - **Classification** ([`TokenClassifier`]): named-entity flag first, then
//!   tag lookup, then the `other` fallback
//! - **Merging** ([`merge`]): a single forward scan over the tokens
//! - **Annotation** ([`AnnotationProvider`]): the seam to whatever tagger
//!   produces the base tokens
//!
//! # Example
//!
//! ```rust
//! use lexpace_core::{merge, AnnotatedToken, Category, RuleTable};
//!
//! let tokens = vec![
//!     AnnotatedToken::new("The", "DET"),
//!     AnnotatedToken::new("cat", "NOUN"),
//!     AnnotatedToken::new("sat", "VERB"),
//!     AnnotatedToken::new(".", "PUNCT"),
//! ];
//!
//! let merged = merge(&tokens, RuleTable::reference());
//! assert_eq!(merged.len(), 3);
//! assert_eq!(merged[2].text, "sat.");
//! assert_eq!(merged[2].category, Category::Content);
//! ```

pub mod category;
pub mod classify;
pub mod error;
pub mod merge;
pub mod provider;
pub mod rules;
pub mod token;

pub use category::Category;
pub use classify::{classify, TokenClassifier};
pub use error::{AnnotationError, CoreError, Result};
pub use merge::{merge, merge_default};
pub use provider::AnnotationProvider;
pub use rules::{get_rule_table, list_rule_sets, RuleTable, DEFAULT_RULE_SET};
pub use token::{into_columns, AnnotatedToken, MergedToken};

//! Display categories assigned to merged tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse semantic class used by readers to pick a display delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Token flagged by the annotator as part of a named entity
    NamedEntity,
    /// Nouns, verbs, adjectives and interjections
    Content,
    /// Determiners, pronouns, adpositions, auxiliaries and conjunctions
    Function,
    /// Adverbs and numerals
    Modifier,
    /// Punctuation, whitespace and symbols
    Punctuation,
    /// Any tag the rule table does not list
    Other,
}

impl Category {
    /// Every category, in rule-table order, `Other` last
    pub const ALL: [Category; 6] = [
        Category::NamedEntity,
        Category::Content,
        Category::Function,
        Category::Modifier,
        Category::Punctuation,
        Category::Other,
    ];

    /// Categories decided by tag membership, in lookup order
    pub const TAGGED: [Category; 4] = [
        Category::Content,
        Category::Function,
        Category::Modifier,
        Category::Punctuation,
    ];

    /// Lowercase wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NamedEntity => "named_entity",
            Category::Content => "content",
            Category::Function => "function",
            Category::Modifier => "modifier",
            Category::Punctuation => "punctuation",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

//! Token classification

use crate::category::Category;
use crate::rules::RuleTable;
use crate::token::AnnotatedToken;

/// Pure token classification logic
pub trait TokenClassifier: Send + Sync {
    /// Classify one annotated token
    fn classify(&self, token: &AnnotatedToken) -> Category;

    /// Check if tokens with this tag fold into the preceding token
    fn is_merge_tag(&self, pos_tag: &str) -> bool;
}

impl TokenClassifier for RuleTable {
    fn classify(&self, token: &AnnotatedToken) -> Category {
        // Entity status outranks every tag, punctuation included.
        if token.is_named_entity {
            return Category::NamedEntity;
        }

        self.category_for_tag(&token.pos_tag)
            .unwrap_or(Category::Other)
    }

    fn is_merge_tag(&self, pos_tag: &str) -> bool {
        RuleTable::is_merge_tag(self, pos_tag)
    }
}

/// Classify a token against the built-in universal rule table
pub fn classify(token: &AnnotatedToken) -> Category {
    RuleTable::reference().classify(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(tag: &str) -> AnnotatedToken {
        AnnotatedToken::new("w", tag)
    }

    #[test]
    fn test_named_entity_wins_over_any_tag() {
        for tag in ["PROPN", "NOUN", "DET", "ADV", "PUNCT", "SYM", "X", ""] {
            assert_eq!(
                classify(&AnnotatedToken::entity("w", tag)),
                Category::NamedEntity,
                "entity with tag {tag:?}"
            );
        }
    }

    #[test]
    fn test_content_tags() {
        for tag in ["NOUN", "PROPN", "VERB", "ADJ", "INTJ"] {
            assert_eq!(classify(&plain(tag)), Category::Content, "{tag}");
        }
    }

    #[test]
    fn test_function_tags() {
        for tag in ["DET", "PRON", "ADP", "AUX", "CCONJ", "SCONJ"] {
            assert_eq!(classify(&plain(tag)), Category::Function, "{tag}");
        }
    }

    #[test]
    fn test_modifier_tags() {
        for tag in ["ADV", "NUM"] {
            assert_eq!(classify(&plain(tag)), Category::Modifier, "{tag}");
        }
    }

    #[test]
    fn test_punctuation_tags() {
        for tag in ["PUNCT", "SPACE", "SYM"] {
            assert_eq!(classify(&plain(tag)), Category::Punctuation, "{tag}");
        }
    }

    #[test]
    fn test_unknown_tags_fall_back_to_other() {
        for tag in ["X", "PART", "noun", "", "NN"] {
            assert_eq!(classify(&plain(tag)), Category::Other, "{tag:?}");
        }
    }

    #[test]
    fn test_custom_table() {
        let table = RuleTable::new("numbers", [(Category::Content, vec!["NUM"])]).unwrap();
        assert_eq!(table.classify(&plain("NUM")), Category::Content);
        assert_eq!(table.classify(&plain("ADV")), Category::Other);
        assert!(!TokenClassifier::is_merge_tag(&table, "PUNCT"));
    }
}

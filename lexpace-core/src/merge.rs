//! Punctuation merging
//!
//! One forward pass over the annotated tokens. Punctuation, whitespace and
//! symbol tokens are appended to the open group and inherit its category; any
//! other token closes the open group and starts a new one. A merge-tag token
//! that arrives with no group open starts its own group.

use crate::category::Category;
use crate::classify::TokenClassifier;
use crate::rules::RuleTable;
use crate::token::{AnnotatedToken, MergedToken};

/// Pending group carried across the scan
#[derive(Debug, Default)]
struct Accumulator {
    pending: Option<MergedToken>,
}

impl Accumulator {
    /// A group is open once it holds some text
    fn is_open(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|group| !group.text.is_empty())
    }

    fn start(&mut self, text: &str, category: Category) {
        self.pending = Some(MergedToken::new(text, category));
    }

    fn append(&mut self, text: &str) {
        if let Some(group) = self.pending.as_mut() {
            group.text.push_str(text);
        }
    }

    fn flush_into(&mut self, output: &mut Vec<MergedToken>) {
        if let Some(group) = self.pending.take() {
            output.push(group);
        }
    }
}

/// Merge trailing punctuation into preceding tokens and classify each group
pub fn merge<C>(tokens: &[AnnotatedToken], classifier: &C) -> Vec<MergedToken>
where
    C: TokenClassifier + ?Sized,
{
    let mut output = Vec::with_capacity(tokens.len());
    let mut acc = Accumulator::default();

    for token in tokens {
        if classifier.is_merge_tag(&token.pos_tag) {
            if acc.is_open() {
                acc.append(&token.text);
            } else {
                acc.start(&token.text, classifier.classify(token));
            }
        } else {
            if acc.is_open() {
                acc.flush_into(&mut output);
            }
            acc.start(&token.text, classifier.classify(token));
        }
    }

    acc.flush_into(&mut output);
    output
}

/// Merge against the built-in universal rule table
pub fn merge_default(tokens: &[AnnotatedToken]) -> Vec<MergedToken> {
    merge(tokens, RuleTable::reference())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, tag: &str) -> AnnotatedToken {
        AnnotatedToken::new(text, tag)
    }

    fn pairs(merged: &[MergedToken]) -> Vec<(&str, Category)> {
        merged.iter().map(|m| (m.text.as_str(), m.category)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_default(&[]).is_empty());
    }

    #[test]
    fn test_sentence_final_period() {
        let tokens = [
            tok("The", "DET"),
            tok("cat", "NOUN"),
            tok("sat", "VERB"),
            tok(".", "PUNCT"),
        ];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![
                ("The", Category::Function),
                ("cat", Category::Content),
                ("sat.", Category::Content),
            ]
        );
    }

    #[test]
    fn test_entities_keep_category_through_comma() {
        let tokens = [
            AnnotatedToken::entity("Paris", "PROPN"),
            tok(",", "PUNCT"),
            AnnotatedToken::entity("France", "PROPN"),
        ];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![
                ("Paris,", Category::NamedEntity),
                ("France", Category::NamedEntity),
            ]
        );
    }

    #[test]
    fn test_leading_punctuation_starts_group() {
        let tokens = [tok("!", "PUNCT"), tok("Wow", "INTJ")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("!", Category::Punctuation), ("Wow", Category::Content)]
        );
    }

    #[test]
    fn test_single_token() {
        assert_eq!(
            pairs(&merge_default(&[tok("Run", "VERB")])),
            vec![("Run", Category::Content)]
        );
    }

    #[test]
    fn test_only_punctuation() {
        let tokens = [tok("...", "PUNCT"), tok("\n", "SPACE"), tok("$", "SYM")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("...\n$", Category::Punctuation)]
        );
    }

    #[test]
    fn test_stacked_punctuation() {
        let tokens = [tok("Really", "ADV"), tok("?", "PUNCT"), tok("!", "PUNCT")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("Really?!", Category::Modifier)]
        );
    }

    #[test]
    fn test_entity_punctuation_opening_group() {
        let tokens = [AnnotatedToken::entity("&", "SYM"), tok("Co", "PROPN")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("&", Category::NamedEntity), ("Co", Category::Content)]
        );
    }

    #[test]
    fn test_entity_punctuation_inside_group_keeps_group_category() {
        let tokens = [tok("Johnson", "PROPN"), AnnotatedToken::entity("&", "SYM")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("Johnson&", Category::Content)]
        );
    }

    #[test]
    fn test_unknown_tag_is_other_and_not_merged() {
        let tokens = [tok("to", "PART"), tok("go", "VERB")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![("to", Category::Other), ("go", Category::Content)]
        );
    }

    #[test]
    fn test_empty_text_token_does_not_open_group() {
        let tokens = [tok("", "NOUN"), tok(",", "PUNCT"), tok("ok", "INTJ")];
        assert_eq!(
            pairs(&merge_default(&tokens)),
            vec![(",", Category::Punctuation), ("ok", Category::Content)]
        );
    }

    #[test]
    fn test_custom_classifier_changes_merge_set() {
        let table = RuleTable::new(
            "no-symbols",
            [
                (Category::Content, vec!["NOUN", "SYM"]),
                (Category::Punctuation, vec!["PUNCT"]),
            ],
        )
        .unwrap();

        let tokens = [tok("cost", "NOUN"), tok("$", "SYM"), tok(".", "PUNCT")];
        assert_eq!(
            pairs(&merge(&tokens, &table)),
            vec![("cost", Category::Content), ("$.", Category::Content)]
        );
    }

    #[test]
    fn test_dyn_classifier() {
        let classifier: &dyn TokenClassifier = RuleTable::reference();
        let merged = merge(&[tok("Go", "VERB"), tok("!", "PUNCT")], classifier);
        assert_eq!(pairs(&merged), vec![("Go!", Category::Content)]);
    }
}

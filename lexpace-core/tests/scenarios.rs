//! End-to-end scenarios against the built-in rule tables

use lexpace_core::{
    get_rule_table, into_columns, merge, merge_default, AnnotatedToken, Category, RuleTable,
};

fn texts_and_categories(tokens: &[AnnotatedToken]) -> (Vec<String>, Vec<Category>) {
    into_columns(merge_default(tokens))
}

#[test]
fn test_the_cat_sat() {
    let tokens = vec![
        AnnotatedToken::new("The", "DET"),
        AnnotatedToken::new("cat", "NOUN"),
        AnnotatedToken::new("sat", "VERB"),
        AnnotatedToken::new(".", "PUNCT"),
    ];

    let (texts, categories) = texts_and_categories(&tokens);
    assert_eq!(texts, vec!["The", "cat", "sat."]);
    assert_eq!(
        categories,
        vec![Category::Function, Category::Content, Category::Content]
    );
}

#[test]
fn test_paris_france() {
    let tokens = vec![
        AnnotatedToken::entity("Paris", "PROPN"),
        AnnotatedToken::new(",", "PUNCT"),
        AnnotatedToken::entity("France", "PROPN"),
    ];

    let (texts, categories) = texts_and_categories(&tokens);
    assert_eq!(texts, vec!["Paris,", "France"]);
    assert_eq!(categories, vec![Category::NamedEntity, Category::NamedEntity]);
}

#[test]
fn test_leading_exclamation() {
    let tokens = vec![
        AnnotatedToken::new("!", "PUNCT"),
        AnnotatedToken::new("Wow", "INTJ"),
    ];

    let (texts, categories) = texts_and_categories(&tokens);
    assert_eq!(texts, vec!["!", "Wow"]);
    assert_eq!(categories, vec![Category::Punctuation, Category::Content]);
}

#[test]
fn test_single_verb() {
    let (texts, categories) = texts_and_categories(&[AnnotatedToken::new("Run", "VERB")]);
    assert_eq!(texts, vec!["Run"]);
    assert_eq!(categories, vec![Category::Content]);
}

#[test]
fn test_empty_document() {
    let (texts, categories) = texts_and_categories(&[]);
    assert!(texts.is_empty());
    assert!(categories.is_empty());
}

#[test]
fn test_longer_sentence_with_newline() {
    // "She quickly read 3 books, twice!\n"
    let tokens = vec![
        AnnotatedToken::new("She", "PRON"),
        AnnotatedToken::new("quickly", "ADV"),
        AnnotatedToken::new("read", "VERB"),
        AnnotatedToken::new("3", "NUM"),
        AnnotatedToken::new("books", "NOUN"),
        AnnotatedToken::new(",", "PUNCT"),
        AnnotatedToken::new("twice", "ADV"),
        AnnotatedToken::new("!", "PUNCT"),
        AnnotatedToken::new("\n", "SPACE"),
    ];

    let (texts, categories) = texts_and_categories(&tokens);
    assert_eq!(texts, vec!["She", "quickly", "read", "3", "books,", "twice!\n"]);
    assert_eq!(
        categories,
        vec![
            Category::Function,
            Category::Modifier,
            Category::Content,
            Category::Modifier,
            Category::Content,
            Category::Modifier,
        ]
    );
}

#[test]
fn test_penn_rule_set() {
    let table: &RuleTable = get_rule_table("penn").unwrap();
    let tokens = vec![
        AnnotatedToken::new("It", "PRP"),
        AnnotatedToken::new("costs", "VBZ"),
        AnnotatedToken::new("$", "$"),
        AnnotatedToken::new("5", "CD"),
        AnnotatedToken::new(".", "."),
    ];

    let (texts, categories) = into_columns(merge(&tokens, table));
    assert_eq!(texts, vec!["It", "costs$", "5."]);
    assert_eq!(
        categories,
        vec![Category::Function, Category::Content, Category::Modifier]
    );
}

//! Category rule tables
//!
//! A rule table maps part-of-speech tags to the four tag-driven categories.
//! Named entities are decided by the annotator's entity flag, so their tag
//! list is always empty, and no tag may appear under two categories.

pub mod config;
pub mod loader;

pub use config::{GroupsConfig, MetadataConfig, RuleTableConfig};
pub use loader::{default_rule_table, get_rule_table, list_rule_sets, DEFAULT_RULE_SET};

use crate::category::Category;
use crate::error::{CoreError, Result};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Validated, read-only mapping from tags to categories
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    name: String,
    description: Option<String>,
    /// Tag sets in `Category::TAGGED` order
    groups: Vec<(Category, BTreeSet<String>)>,
    index: HashMap<String, Category>,
}

impl RuleTable {
    /// Build a table from `(category, tags)` pairs
    ///
    /// Pairs may come in any order; lookups always follow
    /// `content, function, modifier, punctuation`. A `named_entity` pair must
    /// carry no tags and `other` may not appear at all.
    pub fn new<I, T, S>(name: impl Into<String>, groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, T)>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_category: HashMap<Category, BTreeSet<String>> = HashMap::new();
        let mut index: HashMap<String, Category> = HashMap::new();

        for (category, tags) in groups {
            let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
            match category {
                Category::NamedEntity if !tags.is_empty() => {
                    return Err(CoreError::InvalidRuleTable(format!(
                        "named_entity is decided by the entity flag and cannot list tags (found {})",
                        tags.join(", ")
                    )));
                }
                Category::NamedEntity => continue,
                Category::Other => {
                    return Err(CoreError::InvalidRuleTable(
                        "other is the fallback category and cannot list tags".to_string(),
                    ));
                }
                _ => {}
            }

            for tag in tags {
                let tag = tag.trim().to_string();
                if tag.is_empty() {
                    return Err(CoreError::InvalidRuleTable(format!(
                        "blank tag in {category} group"
                    )));
                }
                if let Some(existing) = index.get(&tag) {
                    if *existing != category {
                        return Err(CoreError::InvalidRuleTable(format!(
                            "tag {tag} listed under both {existing} and {category}"
                        )));
                    }
                }
                index.insert(tag.clone(), category);
                by_category.entry(category).or_default().insert(tag);
            }
        }

        let groups = Category::TAGGED
            .iter()
            .map(|category| {
                (
                    *category,
                    by_category.remove(category).unwrap_or_default(),
                )
            })
            .collect();

        Ok(Self {
            name: name.into(),
            description: None,
            groups,
            index,
        })
    }

    /// Build a table from its TOML representation
    pub fn from_config(config: RuleTableConfig) -> Result<Self> {
        if config.metadata.name.trim().is_empty() {
            return Err(CoreError::InvalidRuleTable(
                "rule table name cannot be empty".to_string(),
            ));
        }

        let GroupsConfig {
            named_entity,
            content,
            function,
            modifier,
            punctuation,
        } = config.groups;

        let mut table = Self::new(
            config.metadata.name,
            [
                (Category::NamedEntity, named_entity),
                (Category::Content, content),
                (Category::Function, function),
                (Category::Modifier, modifier),
                (Category::Punctuation, punctuation),
            ],
        )?;
        table.description = config.metadata.description;
        Ok(table)
    }

    /// Parse and validate a TOML rule table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RuleTableConfig = toml::from_str(content)
            .map_err(|e| CoreError::ConfigurationError(format!("Failed to parse rule table: {e}")))?;
        Self::from_config(config)
    }

    /// Load and validate a TOML rule table from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::ConfigurationError(msg) => {
                CoreError::ConfigurationError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// The built-in Universal Dependencies table
    pub fn reference() -> &'static RuleTable {
        default_rule_table()
    }

    /// Convert back into the serializable form
    pub fn to_config(&self) -> RuleTableConfig {
        let tags_for = |category: Category| -> Vec<String> {
            self.tags(category)
                .map(|tags| tags.iter().cloned().collect())
                .unwrap_or_default()
        };

        RuleTableConfig {
            metadata: MetadataConfig {
                name: self.name.clone(),
                description: self.description.clone(),
            },
            groups: GroupsConfig {
                named_entity: Vec::new(),
                content: tags_for(Category::Content),
                function: tags_for(Category::Function),
                modifier: tags_for(Category::Modifier),
                punctuation: tags_for(Category::Punctuation),
            },
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional human readable description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Tags listed under a tag-driven category
    pub fn tags(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.groups
            .iter()
            .find(|(group, _)| *group == category)
            .map(|(_, tags)| tags)
    }

    /// Category a tag maps to, if the table lists it
    pub fn category_for_tag(&self, pos_tag: &str) -> Option<Category> {
        self.index.get(pos_tag).copied()
    }

    /// Whether tokens with this tag fold into the preceding token
    pub fn is_merge_tag(&self, pos_tag: &str) -> bool {
        self.category_for_tag(pos_tag) == Some(Category::Punctuation)
    }

    /// Total number of tags across all groups
    pub fn tag_count(&self) -> usize {
        self.index.len()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::reference().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_orders_groups() {
        let table = RuleTable::new(
            "scrambled",
            [
                (Category::Punctuation, vec!["PUNCT"]),
                (Category::Content, vec!["NOUN"]),
            ],
        )
        .unwrap();

        let order: Vec<Category> = table.groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::TAGGED.to_vec());
        assert!(table.tags(Category::Function).unwrap().is_empty());
        assert_eq!(table.tag_count(), 2);
    }

    #[test]
    fn test_named_entity_tags_rejected() {
        let err = RuleTable::new("bad", [(Category::NamedEntity, vec!["PROPN"])]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleTable(_)));
        assert!(err.to_string().contains("named_entity"));
    }

    #[test]
    fn test_other_group_rejected() {
        let err = RuleTable::new("bad", [(Category::Other, vec!["X"])]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleTable(_)));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let err = RuleTable::new(
            "bad",
            [
                (Category::Content, vec!["NUM"]),
                (Category::Modifier, vec!["NUM"]),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("NUM"));
    }

    #[test]
    fn test_repeated_tag_in_same_group_is_fine() {
        let table = RuleTable::new("dup", [(Category::Content, vec!["NOUN", "NOUN"])]).unwrap();
        assert_eq!(table.tag_count(), 1);
    }

    #[test]
    fn test_blank_tag_rejected() {
        let err = RuleTable::new("bad", [(Category::Modifier, vec!["  "])]).unwrap_err();
        assert!(err.to_string().contains("blank tag"));
    }

    #[test]
    fn test_merge_tags_follow_punctuation_group() {
        let table = RuleTable::reference();
        for tag in ["PUNCT", "SPACE", "SYM"] {
            assert!(table.is_merge_tag(tag), "{tag} should merge");
        }
        assert!(!table.is_merge_tag("NOUN"));
        assert!(!table.is_merge_tag("X"));
    }

    #[test]
    fn test_from_toml_str() {
        let table = RuleTable::from_toml_str(
            r#"
            [metadata]
            name = "custom"
            description = "numbers are content"

            [groups]
            content = ["NOUN", "NUM"]
            punctuation = ["PUNCT"]
            "#,
        )
        .unwrap();

        assert_eq!(table.name(), "custom");
        assert_eq!(table.description(), Some("numbers are content"));
        assert_eq!(table.category_for_tag("NUM"), Some(Category::Content));
    }

    #[test]
    fn test_from_toml_str_empty_name() {
        let err = RuleTable::from_toml_str(
            r#"
            [metadata]
            name = ""

            [groups]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleTable(_)));
    }

    #[test]
    fn test_from_toml_str_parse_error() {
        let err = RuleTable::from_toml_str("not = [valid").unwrap_err();
        assert!(matches!(err, CoreError::ConfigurationError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
name = "from-disk"

[groups]
modifier = ["ADV"]
"#
        )
        .unwrap();

        let table = RuleTable::from_file(file.path()).unwrap();
        assert_eq!(table.name(), "from-disk");
        assert_eq!(table.category_for_tag("ADV"), Some(Category::Modifier));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RuleTable::from_file("/nonexistent/rules.toml").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_to_config_roundtrip() {
        let original = RuleTable::reference();
        let rebuilt = RuleTable::from_config(original.to_config()).unwrap();
        assert_eq!(&rebuilt, original);
    }

    #[test]
    fn test_default_matches_reference() {
        assert_eq!(&RuleTable::default(), RuleTable::reference());
    }
}

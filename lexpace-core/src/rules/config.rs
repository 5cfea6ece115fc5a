use serde::{Deserialize, Serialize};

/// On-disk form of a rule table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTableConfig {
    pub metadata: MetadataConfig,
    pub groups: GroupsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Tag lists per category. Keys follow the category wire labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupsConfig {
    #[serde(default)]
    pub named_entity: Vec<String>,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub function: Vec<String>,
    #[serde(default)]
    pub modifier: Vec<String>,
    #[serde(default)]
    pub punctuation: Vec<String>,
}

use super::config::RuleTableConfig;
use super::RuleTable;
use crate::error::CoreError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Rule set used when nothing else is requested
pub const DEFAULT_RULE_SET: &str = "universal";

static RULE_TABLES: OnceLock<HashMap<String, RuleTable>> = OnceLock::new();

macro_rules! embed_rule_table {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

fn load_embedded_tables() -> Result<HashMap<String, RuleTable>, CoreError> {
    let mut tables = HashMap::new();

    let embedded_tables = [
        embed_rule_table!("universal", "../../configs/rules/universal.toml"),
        embed_rule_table!("penn", "../../configs/rules/penn.toml"),
    ];

    for (name, toml_content) in embedded_tables {
        let config: RuleTableConfig = toml::from_str(toml_content).map_err(|e| {
            CoreError::ConfigurationError(format!("Failed to parse {name} rule table: {e}"))
        })?;

        if config.metadata.name != name {
            return Err(CoreError::ConfigurationError(format!(
                "Rule table name mismatch: expected {}, got {}",
                name, config.metadata.name
            )));
        }

        tables.insert(name.to_string(), RuleTable::from_config(config)?);
    }

    Ok(tables)
}

fn registry() -> &'static HashMap<String, RuleTable> {
    RULE_TABLES.get_or_init(|| load_embedded_tables().expect("Failed to load embedded rule tables"))
}

pub fn get_rule_table(name: &str) -> Result<&'static RuleTable, CoreError> {
    registry()
        .get(name)
        .ok_or_else(|| CoreError::UnknownRuleSet(name.to_string()))
}

pub fn default_rule_table() -> &'static RuleTable {
    registry()
        .get(DEFAULT_RULE_SET)
        .expect("default rule table is embedded")
}

pub fn list_rule_sets() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = registry().keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

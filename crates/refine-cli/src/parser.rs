use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub column: Vec<ColumnConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    /// One of "integer", "one_of", "pattern".
    pub check: String,
    pub min: Option<i64>,
    pub max: Option<i64>,
    #[serde(default)]
    pub include_x: bool,
    pub values: Option<Vec<String>>,
    pub pattern: Option<String>,
}

pub fn parse_config(path: &str) -> Result<Config> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", path))?;
    Ok(config)
}

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub extract: Vec<Extract>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Extract {
    pub name: String,
    pub path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    pub header: Option<bool>,
    pub columns: Option<Vec<String>>,
    pub expected_columns: Option<Vec<String>>,
    #[serde(default)]
    pub critical_columns: Vec<String>,
    #[serde(default)]
    pub types: Vec<ColumnType>,
    pub min_rows: Option<usize>,
    pub max_rows: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnType {
    pub column: String,
    #[serde(rename = "type")]
    pub datatype: String,
}

fn default_delimiter() -> String {
    "|".to_string()
}

pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    if config.extract.is_empty() {
        return Err(ConfigError::NoExtract.into());
    }
    let mut seen = HashSet::new();
    for extract in &config.extract {
        if !seen.insert(extract.name.as_str()) {
            return Err(ConfigError::DuplicateExtract {
                extract: extract.name.clone(),
            }
            .into());
        }
    }
    Ok(config)
}

pub fn parse_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_extract() {
        let config = parse_config_str(
            r#"
            [[extract]]
            name = "orders"
            path = "order_extract.csv"
            expected_columns = ["order_id", "customer_id", "amount"]
            critical_columns = ["order_id", "customer_id"]
            types = [
                { column = "order_id", type = "integer" },
                { column = "amount", type = "float" },
            ]
            min_rows = 1
            max_rows = 1000
            "#,
        )
        .unwrap();

        let orders = &config.extract[0];
        assert_eq!(orders.delimiter, "|");
        assert_eq!(orders.header, None);
        assert_eq!(orders.critical_columns, vec!["order_id", "customer_id"]);
        assert_eq!(orders.types[1].column, "amount");
        assert_eq!(orders.types[1].datatype, "float");
        assert_eq!(orders.max_rows, Some(1000));
    }

    #[test]
    fn test_parse_minimal_extract() {
        let config = parse_config_str(
            r#"
            [[extract]]
            name = "iss"
            path = "export_file.csv"
            header = false
            "#,
        )
        .unwrap();
        let iss = &config.extract[0];
        assert_eq!(iss.header, Some(false));
        assert!(iss.critical_columns.is_empty());
        assert!(iss.types.is_empty());
        assert_eq!(iss.min_rows, None);
    }

    #[test]
    fn test_parse_rejects_empty_config() {
        let err = parse_config_str("").unwrap_err();
        assert!(err.to_string().contains("no extract"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let result = parse_config_str(
            r#"
            [[extract]]
            name = "orders"
            path = "o.csv"
            min_row = 1
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let err = parse_config_str(
            r#"
            [[extract]]
            name = "orders"
            path = "a.csv"

            [[extract]]
            name = "orders"
            path = "b.csv"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}

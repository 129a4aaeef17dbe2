use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;

/// Logical type a column's values must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    Integer,
    Float,
    Timestamp,
}

impl LogicalType {
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Integer => "integer",
            LogicalType::Float => "float",
            LogicalType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalType {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" | "i64" => Ok(LogicalType::Integer),
            "float" | "double" | "f64" => Ok(LogicalType::Float),
            "datetime" | "timestamp" | "date" => Ok(LogicalType::Timestamp),
            other => Err(ExtractError::UnknownType(other.to_string())),
        }
    }
}

/// Ordered mapping from column name to [`LogicalType`].
///
/// Columns are checked in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSchema {
    columns: Vec<(String, LogicalType)>,
}

impl TypeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `column` as `logical_type`. Redeclaring a column replaces its
    /// type but keeps its original position.
    pub fn with_column(mut self, column: impl Into<String>, logical_type: LogicalType) -> Self {
        self.insert(column, logical_type);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, logical_type: LogicalType) {
        let column = column.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = logical_type,
            None => self.columns.push((column, logical_type)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LogicalType)> {
        self.columns.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, LogicalType)> for TypeSchema {
    fn from_iter<I: IntoIterator<Item = (S, LogicalType)>>(iter: I) -> Self {
        let mut schema = TypeSchema::new();
        for (column, ty) in iter {
            schema.insert(column, ty);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logical_type_aliases() {
        assert_eq!("int".parse::<LogicalType>().unwrap(), LogicalType::Integer);
        assert_eq!("Integer".parse::<LogicalType>().unwrap(), LogicalType::Integer);
        assert_eq!("double".parse::<LogicalType>().unwrap(), LogicalType::Float);
        assert_eq!("datetime".parse::<LogicalType>().unwrap(), LogicalType::Timestamp);
        assert!(matches!(
            "uuid".parse::<LogicalType>(),
            Err(ExtractError::UnknownType(t)) if t == "uuid"
        ));
    }

    #[test]
    fn test_schema_keeps_insertion_order() {
        let schema = TypeSchema::new()
            .with_column("b", LogicalType::Float)
            .with_column("a", LogicalType::Integer)
            .with_column("b", LogicalType::Timestamp);

        let columns: Vec<_> = schema.iter().collect();
        assert_eq!(
            columns,
            vec![("b", LogicalType::Timestamp), ("a", LogicalType::Integer)]
        );
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_schema_from_iter() {
        let schema: TypeSchema = [("id", LogicalType::Integer), ("ts", LogicalType::Timestamp)]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }
}

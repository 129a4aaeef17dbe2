use regex::Regex;

use crate::errors::ExtractError;

/// Markers read as null: the pandas defaults plus the MySQL dump `\N`.
const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "\\N",
];

/// Where the column names of an extract come from.
///
/// The first line of a delimited file can be data or column names; the
/// producer knows which, so the caller states it here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// The first line holds the column names.
    #[default]
    FirstRow,
    /// Every line is data; these are the column names.
    Provided(Vec<String>),
    /// Every line is data; columns are named `column_1..column_n`.
    Generated,
}

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub delimiter: u8,
    pub header: HeaderMode,
    pub null_markers: Vec<String>,
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            header: HeaderMode::FirstRow,
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            batch_size: 64 * 1024,
        }
    }
}

impl ReaderConfig {
    pub fn has_header(&self) -> bool {
        matches!(self.header, HeaderMode::FirstRow)
    }

    /// Compile the null markers into a single anchored alternation.
    ///
    /// Returns `None` when no marker is configured; the CSV reader then only
    /// treats empty fields as null.
    pub fn null_regex(&self) -> Result<Option<Regex>, ExtractError> {
        if self.null_markers.is_empty() {
            return Ok(None);
        }
        let alternation = self
            .null_markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Some(Regex::new(&format!("^(?:{})$", alternation))?))
    }
}

pub struct ReaderConfigBuilder {
    delimiter: u8,
    header: HeaderMode,
    null_markers: Vec<String>,
    batch_size: usize,
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfigBuilder {
    /// Create a new [`ReaderConfigBuilder`] seeded with the defaults
    pub fn new() -> Self {
        let config = ReaderConfig::default();
        Self {
            delimiter: config.delimiter,
            header: config.header,
            null_markers: config.null_markers,
            batch_size: config.batch_size,
        }
    }

    /// Build a [`ReaderConfig`]
    pub fn build(self) -> ReaderConfig {
        ReaderConfig {
            delimiter: self.delimiter,
            header: self.header,
            null_markers: self.null_markers,
            batch_size: self.batch_size.max(1),
        }
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    pub fn with_header(self, header: HeaderMode) -> Self {
        Self { header, ..self }
    }

    pub fn with_column_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: HeaderMode::Provided(names.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    pub fn with_null_markers<I, S>(self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            null_markers: markers.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }
}

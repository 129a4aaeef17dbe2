use arrow_array::{Array, ArrayRef, RecordBatch};

/// An extract loaded in memory: the header and its records as Arrow batches.
///
/// Every column is a nullable UTF-8 column; nulls are the fields that matched
/// one of the reader's null markers.
#[derive(Debug, Clone)]
pub struct Extract {
    header: Vec<String>,
    batches: Vec<RecordBatch>,
}

impl Extract {
    pub fn new(header: Vec<String>, batches: Vec<RecordBatch>) -> Self {
        Self { header, batches }
    }

    /// An extract read from a file without any line
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            batches: Vec::new(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|c| c == name)
    }

    /// The arrays holding `name` in each record batch, in file order.
    ///
    /// Returns `None` when the column is not part of the header.
    pub fn column_chunks(&self, name: &str) -> Option<Vec<ArrayRef>> {
        let idx = self.position(name)?;
        Some(
            self.batches
                .iter()
                .map(|batch| batch.column(idx).clone())
                .collect(),
        )
    }

    /// Number of null values in `name`, or `None` when the column is absent
    pub fn null_count(&self, name: &str) -> Option<usize> {
        self.column_chunks(name)
            .map(|chunks| chunks.iter().map(|a| a.null_count()).sum())
    }
}

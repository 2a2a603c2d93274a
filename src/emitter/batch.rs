use super::record::Record;
use crate::checkpoint::Position;

/// A closed, ordered run of records from one shard
///
/// Carries the positions of its first and last records, which name the
/// emitted object and tell the caller where to checkpoint once the emit
/// succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<R> {
    records: Vec<R>,
    first: Position,
    last: Position,
}

impl<R: Record> Batch<R> {
    pub fn new(records: Vec<R>, first: impl Into<Position>, last: impl Into<Position>) -> Self {
        Self {
            records,
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn builder() -> BatchBuilder<R> {
        BatchBuilder::default()
    }

    pub fn first_sequence_number(&self) -> &Position {
        &self.first
    }

    pub fn last_sequence_number(&self) -> &Position {
        &self.last
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Concatenated text of every record, in order, with no separator
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = String::new();
        for record in &self.records {
            payload.push_str(&record.to_text());
        }
        payload.into_bytes()
    }
}

/// Accumulates records and tracks the first and last positions seen
///
/// Deciding when the batch is full is up to the caller.
#[derive(Debug, Clone)]
pub struct BatchBuilder<R> {
    records: Vec<R>,
    first: Option<Position>,
    last: Option<Position>,
}

impl<R> Default for BatchBuilder<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            first: None,
            last: None,
        }
    }
}

impl<R: Record> BatchBuilder<R> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            first: None,
            last: None,
        }
    }

    pub fn push(&mut self, record: R, position: impl Into<Position>) -> &mut Self {
        let position = position.into();
        if self.first.is_none() {
            self.first = Some(position.clone());
        }
        self.last = Some(position);
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Close the batch; an empty builder yields empty positions
    pub fn build(self) -> Batch<R> {
        Batch {
            records: self.records,
            first: self.first.unwrap_or_default(),
            last: self.last.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_tracks_first_and_last() {
        let mut builder = Batch::builder();
        builder.push("a", "1").push("b", "2").push("c", "3");
        let batch = builder.build();

        assert_eq!(batch.num_records(), 3);
        assert_eq!(batch.first_sequence_number().as_str(), "1");
        assert_eq!(batch.last_sequence_number().as_str(), "3");
    }

    #[test]
    fn test_single_record_batch_has_equal_endpoints() {
        let mut builder = BatchBuilder::with_capacity(1);
        builder.push(String::from("only"), "42");
        let batch = builder.build();
        assert_eq!(batch.first_sequence_number(), batch.last_sequence_number());
    }

    #[test]
    fn test_payload_has_no_separators() {
        let batch = Batch::new(vec!["a", "b", "c"], "1", "3");
        assert_eq!(batch.payload(), b"abc".to_vec());
    }

    #[test]
    fn test_empty_builder() {
        let batch: Batch<String> = BatchBuilder::default().build();
        assert!(batch.is_empty());
        assert!(batch.first_sequence_number().is_empty());
        assert!(batch.last_sequence_number().is_empty());
        assert!(batch.payload().is_empty());
    }
}

use crate::domain::plan::BillingCycle;
use crate::error::{CheckoutError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch-quoting input file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct QuoteRequest {
    pub plan: String,
    pub dependents: u32,
    pub cycle: BillingCycle,
    pub date: NaiveDate,
}

/// Reads quote requests from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// and yields rows lazily so large files stream without loading fully into
/// memory.
pub struct QuoteRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteRequestReader<R> {
    /// Creates a reader from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<QuoteRequest>> {
        self.reader
            .into_deserialize()
            .map(|row| row.map_err(CheckoutError::from))
    }
}

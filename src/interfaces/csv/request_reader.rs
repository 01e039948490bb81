use crate::domain::loan::LoanRequest;
use crate::error::{LoanError, Result};
use std::io::Read;

/// Reads loan requests from a CSV source with an `identifier,amount,period` header.
///
/// Whitespace around fields is trimmed.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error for that row only; iteration continues.
    pub fn requests(self) -> impl Iterator<Item = Result<LoanRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}

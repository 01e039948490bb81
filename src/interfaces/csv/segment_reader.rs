use crate::domain::segment::Segment;
use crate::error::{LoanError, Result};
use crate::infrastructure::in_memory::InMemorySegmentResolver;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum SegmentKind {
    Debt,
    Credit,
}

/// One row of an `identifier,segment,credit_modifier` file.
#[derive(Debug, Deserialize)]
struct SegmentRecord {
    identifier: String,
    segment: SegmentKind,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    credit_modifier: Option<Decimal>,
}

impl SegmentRecord {
    fn into_entry(self) -> Result<(String, Segment)> {
        let segment = match (self.segment, self.credit_modifier) {
            (SegmentKind::Debt, _) => Segment::Debt,
            (SegmentKind::Credit, Some(modifier)) => Segment::credit(modifier)?,
            (SegmentKind::Credit, None) => {
                return Err(LoanError::ValidationError(format!(
                    "credit segment for {} has no modifier",
                    self.identifier
                )));
            }
        };
        Ok((self.identifier, segment))
    }
}

/// Loads a segment directory from CSV.
///
/// Unlike request files, any bad row fails the whole load.
pub fn read_segments<R: Read>(source: R) -> Result<InMemorySegmentResolver> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    reader
        .deserialize::<SegmentRecord>()
        .map(|row| row.map_err(LoanError::from).and_then(SegmentRecord::into_entry))
        .collect()
}

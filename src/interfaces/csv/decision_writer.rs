use crate::domain::loan::{LoanDecision, LoanResponse};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct DecisionRecord<'a> {
    identifier: &'a str,
    decision: LoanDecision,
    requested_amount: Option<Decimal>,
    requested_period: Option<u32>,
    approved_amount: Option<Decimal>,
    approved_period: Option<u32>,
}

/// Writes one CSV row per evaluated request. Absent fields are left empty.
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_decision(&mut self, identifier: &str, response: &LoanResponse) -> Result<()> {
        self.writer.serialize(DecisionRecord {
            identifier,
            decision: response.decision(),
            requested_amount: response.requested_amount(),
            requested_period: response.requested_period(),
            approved_amount: response.approved_amount(),
            approved_period: response.approved_period(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

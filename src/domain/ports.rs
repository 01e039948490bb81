use super::segment::Segment;
use crate::error::Result;
use rust_decimal::Decimal;

/// Resolves an applicant identifier to its risk segment.
pub trait SegmentResolver: Send + Sync {
    fn resolve(&self, identifier: &str) -> Result<Segment>;
}

/// Read-only loan bounds consulted during an evaluation.
pub trait LoanConfiguration: Send + Sync {
    fn min_amount(&self) -> Decimal;
    fn max_amount(&self) -> Decimal;
    fn max_period(&self) -> u32;
}

pub type SegmentResolverBox = Box<dyn SegmentResolver>;
pub type LoanConfigurationBox = Box<dyn LoanConfiguration>;

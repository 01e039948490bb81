use super::evaluator::LoanEvaluator;
use crate::domain::loan::{LoanRequest, LoanResponse};
use crate::domain::ports::{LoanConfigurationBox, SegmentResolverBox};
use crate::error::Result;

/// Entry point for callers: resolves the applicant's segment and evaluates the loan.
pub struct LoanService {
    segment_resolver: SegmentResolverBox,
    config: LoanConfigurationBox,
    evaluator: LoanEvaluator,
}

impl LoanService {
    /// Creates a new `LoanService`.
    ///
    /// # Arguments
    ///
    /// * `segment_resolver` - Lookup from applicant identifier to segment.
    /// * `config` - Amount and period bounds.
    /// * `evaluator` - Decision logic, carrying the amount approval strategy.
    pub fn new(
        segment_resolver: SegmentResolverBox,
        config: LoanConfigurationBox,
        evaluator: LoanEvaluator,
    ) -> Self {
        Self {
            segment_resolver,
            config,
            evaluator,
        }
    }

    /// Evaluates a single request. The segment is resolved exactly once.
    pub fn evaluate_loan(&self, request: &LoanRequest) -> Result<LoanResponse> {
        let segment = self.segment_resolver.resolve(&request.identifier)?;
        self.evaluator
            .evaluate(request, &segment, self.config.as_ref())
    }
}

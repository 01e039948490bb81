use super::strategy::{
    AmountApprovalStrategy, AmountBounds, AmountStrategyBox, BinarySearchStrategy,
};
use crate::domain::loan::{LoanRequest, LoanResponse};
use crate::domain::ports::LoanConfiguration;
use crate::domain::score::suitable_period;
use crate::domain::segment::Segment;
use crate::error::Result;
use tracing::debug;

/// Computes a loan decision from a resolved segment and the configured bounds.
///
/// Evaluation is a pure function of `(request, segment, config)`: it keeps no state
/// between calls and performs no I/O.
pub struct LoanEvaluator {
    strategy: AmountStrategyBox,
}

impl Default for LoanEvaluator {
    fn default() -> Self {
        Self::new(Box::new(BinarySearchStrategy))
    }
}

impl LoanEvaluator {
    /// Creates an evaluator using `strategy` to find the approvable amount.
    pub fn new(strategy: AmountStrategyBox) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Evaluates `request` for an applicant in `segment`.
    ///
    /// 1. Debt applicants are rejected without consulting `config`.
    /// 2. The largest amount within the configured bounds that qualifies at the
    ///    requested period is offered, capped at the maximum amount.
    /// 3. Otherwise the requested amount is offered over the shortest qualifying
    ///    period, if that period does not exceed the configured maximum.
    /// 4. Otherwise the request is rejected.
    ///
    /// Arithmetic faults (a zero amount) are returned as errors, never as decisions.
    pub fn evaluate<C>(
        &self,
        request: &LoanRequest,
        segment: &Segment,
        config: &C,
    ) -> Result<LoanResponse>
    where
        C: LoanConfiguration + ?Sized,
    {
        let modifier = match segment {
            Segment::Debt => {
                debug!(identifier = %request.identifier, "debt segment, rejecting");
                return Ok(LoanResponse::negative());
            }
            Segment::Credit(modifier) => *modifier,
        };

        let bounds = AmountBounds::new(config.min_amount(), config.max_amount());
        let found = self
            .strategy
            .max_approvable_amount(modifier, request.requested_period, bounds)?;
        if let Some(amount) = found {
            let approved = amount.min(bounds.max);
            debug!(
                identifier = %request.identifier,
                strategy = self.strategy.name(),
                %approved,
                "approved amount for requested period"
            );
            return Ok(LoanResponse::positive(
                request,
                approved,
                request.requested_period,
            ));
        }

        if let Some(period) = suitable_period(modifier.value(), request.requested_amount)?
            && period <= config.max_period()
        {
            debug!(
                identifier = %request.identifier,
                period,
                "approved requested amount for derived period"
            );
            return Ok(LoanResponse::positive(
                request,
                request.requested_amount,
                period,
            ));
        }

        debug!(identifier = %request.identifier, "no qualifying amount or period");
        Ok(LoanResponse::negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::strategy::ClosedFormStrategy;
    use crate::domain::loan::LoanDecision;
    use crate::infrastructure::config::LoanConfig;
    use rust_decimal_macros::dec;

    fn request() -> LoanRequest {
        LoanRequest::new("49002010976", dec!(5000), 12)
    }

    #[test]
    fn test_debt_segment_is_negative() {
        let response = LoanEvaluator::default()
            .evaluate(&request(), &Segment::Debt, &LoanConfig::default())
            .unwrap();
        assert_eq!(response, LoanResponse::negative());
    }

    #[test]
    fn test_larger_amount_for_requested_period() {
        let segment = Segment::credit(dec!(1000)).unwrap();
        let response = LoanEvaluator::default()
            .evaluate(&request(), &segment, &LoanConfig::default())
            .unwrap();

        assert_eq!(response.decision(), LoanDecision::Positive);
        assert_eq!(response.approved_amount(), Some(dec!(10000)));
        assert_eq!(response.approved_period(), Some(12));
    }

    #[test]
    fn test_derived_period_for_requested_amount() {
        let segment = Segment::credit(dec!(100)).unwrap();
        let response = LoanEvaluator::default()
            .evaluate(&request(), &segment, &LoanConfig::default())
            .unwrap();

        assert_eq!(response.approved_amount(), Some(dec!(5000)));
        assert_eq!(response.approved_period(), Some(50));
    }

    #[test]
    fn test_closed_form_evaluator() {
        let evaluator = LoanEvaluator::new(Box::new(ClosedFormStrategy));
        assert_eq!(evaluator.strategy_name(), "closed-form");

        let segment = Segment::credit(dec!(300)).unwrap();
        let response = evaluator
            .evaluate(&request(), &segment, &LoanConfig::default())
            .unwrap();
        assert_eq!(response.approved_amount(), Some(dec!(3600)));
        assert_eq!(response.approved_period(), Some(12));
    }
}

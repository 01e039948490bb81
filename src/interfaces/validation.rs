use crate::domain::loan::LoanRequest;
use crate::domain::ports::LoanConfiguration;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;

/// Caller-side checks applied before a request reaches the evaluator.
///
/// The evaluator assumes positive amounts and periods; this is where that holds.
pub struct RequestValidator<'a, C: LoanConfiguration + ?Sized> {
    config: &'a C,
    min_period: u32,
}

impl<'a, C: LoanConfiguration + ?Sized> RequestValidator<'a, C> {
    pub fn new(config: &'a C, min_period: u32) -> Self {
        Self { config, min_period }
    }

    /// Inclusive on both ends. The upper bound is only read once the lower passed.
    pub fn amount_within_bounds(&self, amount: Decimal) -> bool {
        amount >= self.config.min_amount() && amount <= self.config.max_amount()
    }

    pub fn period_within_bounds(&self, period: u32) -> bool {
        period >= self.min_period.max(1) && period <= self.config.max_period()
    }

    pub fn validate(&self, request: &LoanRequest) -> Result<()> {
        if request.identifier.trim().is_empty() {
            return Err(LoanError::ValidationError(
                "identifier must not be empty".to_string(),
            ));
        }
        if !self.amount_within_bounds(request.requested_amount) {
            return Err(LoanError::ValidationError(format!(
                "amount {} outside [{}, {}]",
                request.requested_amount,
                self.config.min_amount(),
                self.config.max_amount()
            )));
        }
        if !self.period_within_bounds(request.requested_period) {
            return Err(LoanError::ValidationError(format!(
                "period {} outside [{}, {}]",
                request.requested_period,
                self.min_period,
                self.config.max_period()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LoanConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_bounds_are_inclusive() {
        let config = LoanConfig::default();
        let validator = RequestValidator::new(&config, config.min_period);

        assert!(validator.amount_within_bounds(dec!(2000)));
        assert!(validator.amount_within_bounds(dec!(10000)));
        assert!(!validator.amount_within_bounds(dec!(1999.99)));
        assert!(!validator.amount_within_bounds(dec!(10000.01)));
    }

    #[test]
    fn test_validate_request() {
        let config = LoanConfig::default();
        let validator = RequestValidator::new(&config, config.min_period);

        assert!(validator
            .validate(&LoanRequest::new("49002010976", dec!(5000), 12))
            .is_ok());
        assert!(validator
            .validate(&LoanRequest::new("49002010976", dec!(5000), 60))
            .is_ok());
        assert!(matches!(
            validator.validate(&LoanRequest::new(" ", dec!(5000), 12)),
            Err(LoanError::ValidationError(_))
        ));
        assert!(matches!(
            validator.validate(&LoanRequest::new("49002010976", dec!(0), 12)),
            Err(LoanError::ValidationError(_))
        ));
        assert!(matches!(
            validator.validate(&LoanRequest::new("49002010976", dec!(5000), 11)),
            Err(LoanError::ValidationError(_))
        ));
        assert!(matches!(
            validator.validate(&LoanRequest::new("49002010976", dec!(5000), 61)),
            Err(LoanError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_period_rejected_without_min_period() {
        let config = LoanConfig::default();
        let validator = RequestValidator::new(&config, 0);
        assert!(!validator.period_within_bounds(0));
        assert!(validator.period_within_bounds(1));
    }
}

//! Credit scoring primitives.
//!
//! The ratio and the score are rounded half-to-even at fixed scales. The derived
//! period is rounded up. Callers must not substitute one policy for another:
//! boundary outcomes move by one unit when they do.

use crate::error::{LoanError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept for `modifier / amount`.
pub const RATIO_SCALE: u32 = 12;
/// Fractional digits kept for the final score.
pub const SCORE_SCALE: u32 = 8;

/// `modifier / amount`, rounded half-to-even at [`RATIO_SCALE`].
pub fn credit_score_ratio(modifier: Decimal, amount: Decimal) -> Result<Decimal> {
    modifier
        .checked_div(amount)
        .map(|ratio| ratio.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointNearestEven))
        .ok_or_else(|| {
            LoanError::ArithmeticError(format!("cannot divide modifier {modifier} by amount {amount}"))
        })
}

/// `credit_score_ratio * period`, rounded half-to-even at [`SCORE_SCALE`].
pub fn credit_score(modifier: Decimal, amount: Decimal, period: u32) -> Result<Decimal> {
    let ratio = credit_score_ratio(modifier, amount)?;
    ratio
        .checked_mul(Decimal::from(period))
        .map(|score| score.round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointNearestEven))
        .ok_or_else(|| LoanError::ArithmeticError(format!("score overflow for period {period}")))
}

/// The sole eligibility predicate: a score of one or more qualifies.
pub fn is_eligible(score: Decimal) -> bool {
    score >= Decimal::ONE
}

/// Shortest period at which `amount` becomes eligible: `ceil(1 / ratio)`.
///
/// Returns `None` when no finite period exists in `u32` (zero ratio, or a
/// reciprocal too large to represent).
pub fn suitable_period(modifier: Decimal, amount: Decimal) -> Result<Option<u32>> {
    let ratio = credit_score_ratio(modifier, amount)?;
    if ratio.is_zero() {
        return Ok(None);
    }

    let period = Decimal::ONE
        .checked_div(ratio)
        .ok_or_else(|| LoanError::ArithmeticError(format!("cannot invert ratio {ratio}")))?
        .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero);

    Ok(u32::try_from(period).ok())
}

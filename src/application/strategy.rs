use crate::domain::score::{credit_score, is_eligible};
use crate::domain::segment::CreditModifier;
use crate::error::{LoanError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Inclusive amount range the search is allowed to approve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl AmountBounds {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Scale shared by both bounds; results are expressed at this scale.
    fn scale(&self) -> u32 {
        self.min.scale().max(self.max.scale())
    }
}

/// Finds the largest amount within `bounds` that qualifies at `period`.
pub trait AmountApprovalStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn max_approvable_amount(
        &self,
        modifier: CreditModifier,
        period: u32,
        bounds: AmountBounds,
    ) -> Result<Option<Decimal>>;
}

pub type AmountStrategyBox = Box<dyn AmountApprovalStrategy>;

/// Searches the bound range by bisection, scoring each midpoint.
///
/// The score is monotonically non-increasing in the amount, so the last eligible
/// midpoint is the largest eligible amount on the search lattice.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearchStrategy;

impl AmountApprovalStrategy for BinarySearchStrategy {
    fn name(&self) -> &'static str {
        "binary-search"
    }

    fn max_approvable_amount(
        &self,
        modifier: CreditModifier,
        period: u32,
        bounds: AmountBounds,
    ) -> Result<Option<Decimal>> {
        let modifier = modifier.value();
        let mut low = bounds.min;
        let mut high = bounds.max;
        let mut best = None;

        while low <= high {
            let mid = midpoint(low, high)?;
            let score = credit_score(modifier, mid, period)?;

            if is_eligible(score) {
                best = Some(mid);
                low = mid.checked_add(Decimal::ONE).ok_or_else(|| overflow(mid))?;
            } else {
                high = mid.checked_sub(Decimal::ONE).ok_or_else(|| overflow(mid))?;
            }
        }

        Ok(best)
    }
}

/// Solves `modifier * period / amount >= 1` directly: `floor(modifier * period)`.
///
/// Skips the rounded score entirely, so at the exact boundary it can land one unit
/// below [`BinarySearchStrategy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosedFormStrategy;

impl AmountApprovalStrategy for ClosedFormStrategy {
    fn name(&self) -> &'static str {
        "closed-form"
    }

    fn max_approvable_amount(
        &self,
        modifier: CreditModifier,
        period: u32,
        bounds: AmountBounds,
    ) -> Result<Option<Decimal>> {
        let product = modifier
            .value()
            .checked_mul(Decimal::from(period))
            .ok_or_else(|| overflow(modifier.value()))?;
        let candidate =
            product.round_dp_with_strategy(bounds.scale(), RoundingStrategy::ToNegativeInfinity);

        if candidate < bounds.min {
            Ok(None)
        } else {
            Ok(Some(candidate.min(bounds.max)))
        }
    }
}

/// `(low + high) / 2`, rounded half-up at the scale of the sum.
fn midpoint(low: Decimal, high: Decimal) -> Result<Decimal> {
    let sum = low.checked_add(high).ok_or_else(|| overflow(low))?;
    let scale = sum.scale();
    sum.checked_div(Decimal::TWO)
        .map(|mid| mid.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| overflow(sum))
}

fn overflow(value: Decimal) -> LoanError {
    LoanError::ArithmeticError(format!("amount search overflowed near {value}"))
}

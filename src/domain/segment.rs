use crate::error::LoanError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Per-segment scaling constant used by credit scoring.
///
/// Higher means more creditworthy. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CreditModifier(Decimal);

impl CreditModifier {
    pub const SEGMENT_1: Self = Self(dec!(100));
    pub const SEGMENT_2: Self = Self(dec!(300));
    pub const SEGMENT_3: Self = Self(dec!(1000));

    pub fn new(value: Decimal) -> Result<Self, LoanError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LoanError::ValidationError(
                "Credit modifier must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for CreditModifier {
    type Error = LoanError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreditModifier> for Decimal {
    fn from(modifier: CreditModifier) -> Self {
        modifier.0
    }
}

/// Risk classification of an applicant.
///
/// `Debt` applicants are categorically ineligible and carry no modifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Debt,
    Credit(CreditModifier),
}

impl Segment {
    pub const SEGMENT_1: Self = Self::Credit(CreditModifier::SEGMENT_1);
    pub const SEGMENT_2: Self = Self::Credit(CreditModifier::SEGMENT_2);
    pub const SEGMENT_3: Self = Self::Credit(CreditModifier::SEGMENT_3);

    pub fn credit(modifier: Decimal) -> Result<Self, LoanError> {
        Ok(Self::Credit(CreditModifier::new(modifier)?))
    }

    pub fn credit_modifier(&self) -> Option<CreditModifier> {
        match self {
            Segment::Debt => None,
            Segment::Credit(modifier) => Some(*modifier),
        }
    }

    pub fn is_debt(&self) -> bool {
        matches!(self, Segment::Debt)
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan application as supplied by the caller.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LoanRequest {
    pub identifier: String,
    #[serde(rename = "amount", with = "rust_decimal::serde::str")]
    pub requested_amount: Decimal,
    /// Period in months.
    #[serde(rename = "period")]
    pub requested_period: u32,
}

impl LoanRequest {
    pub fn new(identifier: impl Into<String>, requested_amount: Decimal, requested_period: u32) -> Self {
        Self {
            identifier: identifier.into(),
            requested_amount,
            requested_period,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanDecision {
    Positive,
    Negative,
}

/// Outcome of a single evaluation.
///
/// A negative response carries no amounts or periods at all. A positive one always
/// carries both the requested and the approved terms.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct LoanResponse {
    decision: LoanDecision,
    requested_amount: Option<Decimal>,
    requested_period: Option<u32>,
    approved_amount: Option<Decimal>,
    approved_period: Option<u32>,
}

impl LoanResponse {
    pub fn negative() -> Self {
        Self {
            decision: LoanDecision::Negative,
            requested_amount: None,
            requested_period: None,
            approved_amount: None,
            approved_period: None,
        }
    }

    pub fn positive(request: &LoanRequest, approved_amount: Decimal, approved_period: u32) -> Self {
        Self {
            decision: LoanDecision::Positive,
            requested_amount: Some(request.requested_amount),
            requested_period: Some(request.requested_period),
            approved_amount: Some(approved_amount),
            approved_period: Some(approved_period),
        }
    }

    pub fn decision(&self) -> LoanDecision {
        self.decision
    }

    pub fn is_positive(&self) -> bool {
        self.decision == LoanDecision::Positive
    }

    pub fn requested_amount(&self) -> Option<Decimal> {
        self.requested_amount
    }

    pub fn requested_period(&self) -> Option<u32> {
        self.requested_period
    }

    pub fn approved_amount(&self) -> Option<Decimal> {
        self.approved_amount
    }

    pub fn approved_period(&self) -> Option<u32> {
        self.approved_period
    }
}

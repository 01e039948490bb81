//! Application layer containing the loan decision logic.
//!
//! `LoanService` is the entry point for callers. It resolves the applicant's segment
//! and hands it to `LoanEvaluator`, which applies the configured amount approval
//! strategy.

pub mod evaluator;
pub mod service;
pub mod strategy;

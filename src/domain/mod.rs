//! Domain types and ports for loan evaluation.

pub mod loan;
pub mod ports;
pub mod score;
pub mod segment;

pub mod csv;
pub mod validation;

//! CSV adapters: request input, decision output and segment directories.

pub mod decision_writer;
pub mod request_reader;
pub mod segment_reader;

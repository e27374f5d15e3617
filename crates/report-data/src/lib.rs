//! Data pipeline for the session-report tool.
//!
//! Responsible for reading the input log, classifying and decoding its
//! lines, grouping sessions by owning user, reducing each group into
//! statistics and assembling the final report.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod reader;
pub mod report;

pub use report_core as core;

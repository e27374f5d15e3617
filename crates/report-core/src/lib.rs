//! Core domain types for the session-report tool.
//!
//! Holds the record and report models, the error type, formatting helpers
//! and the CLI settings shared by the data layer and the binary.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

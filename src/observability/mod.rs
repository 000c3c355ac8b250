//! # Observability
//!
//! Structured logging for the catalog service.

mod logger;

pub use logger::{Logger, Severity};

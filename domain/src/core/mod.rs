//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: an incoming natural-language request, plus the
//!   [`query::preview`] helper for log lines
//! - [`error::ConfigurationError`]: setup-time errors
//! - [`validation::ConfigIssue`]: problems found in loaded settings

pub mod error;
pub mod query;
pub mod validation;

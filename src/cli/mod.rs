//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod explain;
mod score;

pub use explain::run_explain;
pub use score::run_score;

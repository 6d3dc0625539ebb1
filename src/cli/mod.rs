//! Command-Line Interface
//!
//! Subcommand implementations. Output is either human-readable text or the
//! JSON wire shapes of the two inbound operations.

pub mod commands;

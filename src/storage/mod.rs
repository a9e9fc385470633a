//! Storage layer for edgekit
//!
//! Handles the TOML configuration file holding per-user defaults for the
//! command-line front end.

pub mod config;

//! # Migration Linter Library
//!
//! Extracts SQL embedded in migration sources and checks it with an external
//! linter.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod lint;
pub mod loader;
pub mod output;
pub mod paths;

//! Common utilities for the Lark toolkit.
//!
//! This crate provides shared infrastructure used by the tokenizer and its tools:
//! - **Warning System** - colored, deduplicated terminal output for diagnostics

pub mod warning;

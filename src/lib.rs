//! Tidbits: small everyday helpers
//!
//! A grab-bag of independent utilities: prefix-grouping summaries of string
//! lists, natural sort keys, a scoped working-directory guard, a moving
//! average iterator, relative-path and wildcard probing, clipboard access and
//! substring scanning.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod scan;
pub mod search;
pub mod summary;
pub mod utils;

pub use error::{Result, TidbitsError};

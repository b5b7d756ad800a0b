//! tidbits: small everyday helpers from the command line
//!
//! Summarize string lists by shared prefix, natural-sort lines, compute
//! moving averages, probe for files, scan for substrings and use the
//! clipboard.

use anyhow::Result;

fn main() -> Result<()> {
    tidbits::cli::run()
}

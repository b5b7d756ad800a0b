//! Locate occurrences of a substring inside a file

use regex::bytes::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, TidbitsError};

/// Byte offsets of non-overlapping occurrences of `needle` in `haystack`,
/// left to right. An empty needle has no occurrences.
pub fn find_offsets(needle: &str, haystack: &[u8]) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    match Regex::new(&regex::escape(needle)) {
        Ok(re) => re.find_iter(haystack).map(|m| m.start()).collect(),
        // Only reachable if the escaped needle exceeds the regex size limit.
        Err(_) => naive_offsets(needle.as_bytes(), haystack),
    }
}

fn naive_offsets(needle: &[u8], haystack: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if &haystack[pos..pos + needle.len()] == needle {
            offsets.push(pos);
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    offsets
}

/// Read `path` and return the byte offsets of every non-overlapping
/// occurrence of `needle`. Binary files are fine.
pub fn scan_file_for_substring(needle: &str, path: impl AsRef<Path>) -> Result<Vec<usize>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| TidbitsError::io(path, e))?;
    let offsets = find_offsets(needle, &data);
    debug!(path = %path.display(), bytes = data.len(), hits = offsets.len(), "scanned file");
    Ok(offsets)
}

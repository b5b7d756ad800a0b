//! Natural ("human") ordering for strings containing numbers

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit-run regex is valid"));

/// One piece of a [`NaturalKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Lowercased non-digit text.
    Text(String),
    /// A run of ASCII digits, leading zeros stripped.
    Number(String),
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            // Digits only, no leading zeros: longer is bigger.
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key alternating text and number segments, always starting (and
/// ending) with a possibly empty text segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(pub Vec<Segment>);

/// Build the natural sort key of `s`, so that `"file2"` sorts before
/// `"file10"` and case is ignored.
pub fn natural_sort_key(s: &str) -> NaturalKey {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in DIGIT_RUN.find_iter(s) {
        segments.push(Segment::Text(s[last..m.start()].to_lowercase()));
        let digits = m.as_str().trim_start_matches('0');
        segments.push(Segment::Number(digits.to_string()));
        last = m.end();
    }
    segments.push(Segment::Text(s[last..].to_lowercase()));
    NaturalKey(segments)
}

/// Sort `items` in place by [`natural_sort_key`].
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by_cached_key(|item| natural_sort_key(item.as_ref()));
}

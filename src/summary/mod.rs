//! Prefix-grouping summaries for lists of strings
//!
//! Given a set of names such as `["apple1", "apple2", "apple3", "banana"]`,
//! [`summarize`] clusters the ones sharing a long common prefix and keeps the
//! rest as standalone entries:
//!
//! ```
//! use tidbits::summary::{summarize, SummaryOptions};
//!
//! let summary = summarize(["apple1", "apple2", "apple3", "banana"], &SummaryOptions::default());
//! assert_eq!(summary["apple"], vec!["1", "2", "3"]);
//! assert!(summary["banana"].is_empty());
//! ```
//!
//! Prefix lengths are scanned from longest to shortest, so the most specific
//! shared prefix wins. A string belongs to exactly one entry of the result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Ordered summary: prefix (or leftover string) -> suffixes.
///
/// Committed prefixes come first, longest pass first; leftovers follow with
/// empty suffix lists.
pub type PrefixSummary = IndexMap<String, Vec<String>>;

/// Thresholds controlling when strings are clustered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Shortest prefix length (in chars) that may form a group.
    pub min_prefix_len: usize,

    /// A prefix of length `i` applies to a string of length `len` only when
    /// `i > len * min_prefix_percent`.
    pub min_prefix_percent: f64,

    /// Minimum number of strings needed to commit a group.
    pub group_threshold: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { min_prefix_len: 2, min_prefix_percent: 0.5, group_threshold: 2 }
    }
}

struct Candidate {
    text: String,
    len: usize,
}

impl Candidate {
    fn new(text: String) -> Self {
        let len = text.chars().count();
        Self { text, len }
    }

    fn split_at(&self, chars: usize) -> (&str, &str) {
        let byte = self.text.char_indices().nth(chars).map_or(self.text.len(), |(b, _)| b);
        self.text.split_at(byte)
    }
}

/// Summarize `strings` into prefix groups and leftovers.
///
/// Duplicates collapse to one occurrence. Equal-length strings are visited
/// in lexicographic order, which makes the output fully deterministic.
pub fn summarize<I, S>(strings: I, options: &SummaryOptions) -> PrefixSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = strings.into_iter().map(|s| s.as_ref().to_string()).collect();
    if unique.is_empty() {
        return PrefixSummary::new();
    }

    // BTreeSet yields lexicographic order; the stable sort keeps it for ties.
    let mut candidates: Vec<Candidate> = unique.into_iter().map(Candidate::new).collect();
    candidates.sort_by(|a, b| b.len.cmp(&a.len));
    let max_len = candidates[0].len;

    let mut live = vec![true; candidates.len()];
    let mut summary = PrefixSummary::new();

    for i in (options.min_prefix_len..max_len).rev() {
        let mut buckets: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.len <= i {
                break;
            }
            if !live[idx] {
                continue;
            }
            if i as f64 > candidate.len as f64 * options.min_prefix_percent {
                let (prefix, _) = candidate.split_at(i);
                buckets.entry(prefix).or_default().push(idx);
            }
        }

        for (prefix, members) in buckets {
            if members.len() < options.group_threshold {
                continue;
            }
            debug!(prefix, members = members.len(), prefix_len = i, "committing prefix group");
            let suffixes = summary.entry(prefix.to_string()).or_default();
            for idx in members {
                let (_, suffix) = candidates[idx].split_at(i);
                suffixes.push(suffix.to_string());
                live[idx] = false;
            }
        }
    }

    for (candidate, alive) in candidates.into_iter().zip(live) {
        if !alive {
            continue;
        }
        // A leftover equal to a committed prefix joins it as an empty suffix.
        match summary.get_mut(&candidate.text) {
            Some(suffixes) => suffixes.push(String::new()),
            None => {
                summary.insert(candidate.text, Vec::new());
            }
        }
    }

    summary
}

/// [`summarize`] with the default thresholds (2, 0.5, 2).
pub fn summarize_with_defaults<I, S>(strings: I) -> PrefixSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    summarize(strings, &SummaryOptions::default())
}

/// Rebuild the full strings a summary stands for, in summary order.
pub fn expand_summary(summary: &PrefixSummary) -> Vec<String> {
    summary
        .iter()
        .flat_map(|(key, suffixes)| {
            if suffixes.is_empty() {
                vec![key.clone()]
            } else {
                suffixes.iter().map(|suffix| format!("{key}{suffix}")).collect()
            }
        })
        .collect()
}

/// Render one line per entry: `prefix{a,b,c}` for groups, the bare string
/// for leftovers.
pub fn render_summary(summary: &PrefixSummary) -> String {
    let mut out = String::new();
    for (key, suffixes) in summary {
        out.push_str(key);
        if !suffixes.is_empty() {
            out.push('{');
            out.push_str(&suffixes.join(","));
            out.push('}');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{expand_summary, render_summary, summarize, summarize_with_defaults, SummaryOptions};
    use similar_asserts::assert_eq;
    use std::collections::BTreeSet;

    fn entries(summary: &super::PrefixSummary) -> Vec<(String, Vec<String>)> {
        summary.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn owned(key: &str, values: &[&str]) -> (String, Vec<String>) {
        (key.to_string(), values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn groups_shared_prefix_and_keeps_leftover() {
        let summary = summarize_with_defaults(["apple1", "apple2", "apple3", "banana"]);
        assert_eq!(
            entries(&summary),
            vec![owned("apple", &["1", "2", "3"]), owned("banana", &[])]
        );
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = summarize_with_defaults(Vec::<String>::new());
        assert!(summary.is_empty());
    }

    #[test]
    fn unrelated_strings_stay_leftovers() {
        let summary = summarize_with_defaults(["abc", "xyz"]);
        assert_eq!(entries(&summary), vec![owned("abc", &[]), owned("xyz", &[])]);
    }

    #[test]
    fn duplicates_collapse_before_grouping() {
        let summary = summarize_with_defaults(["log1", "log1", "log2"]);
        assert_eq!(entries(&summary), vec![owned("log", &["1", "2"])]);

        let summary = summarize_with_defaults(["same", "same"]);
        assert_eq!(entries(&summary), vec![owned("same", &[])]);
    }

    #[test]
    fn longer_prefix_wins_and_comes_first() {
        let summary = summarize_with_defaults(["foo3", "foobar1", "foo4", "foobar2"]);
        assert_eq!(
            entries(&summary),
            vec![owned("foobar", &["1", "2"]), owned("foo", &["3", "4"])]
        );
    }

    #[test]
    fn percent_boundary_is_strict() {
        // i == len * percent (2 == 4 * 0.5) must not group
        let summary = summarize_with_defaults(["abXY", "abZW"]);
        assert_eq!(entries(&summary), vec![owned("abXY", &[]), owned("abZW", &[])]);

        let options = SummaryOptions { min_prefix_percent: 0.49, ..SummaryOptions::default() };
        let summary = summarize(["abXY", "abZW"], &options);
        assert_eq!(entries(&summary), vec![owned("ab", &["XY", "ZW"])]);
    }

    #[test]
    fn group_threshold_blocks_small_clusters() {
        let options = SummaryOptions { group_threshold: 3, ..SummaryOptions::default() };
        let summary = summarize(["ab1", "ab2", "cd"], &options);
        assert_eq!(entries(&summary), vec![owned("ab1", &[]), owned("ab2", &[]), owned("cd", &[])]);

        let summary = summarize(["ab1", "ab2", "ab3", "cd"], &options);
        assert_eq!(entries(&summary), vec![owned("ab", &["1", "2", "3"]), owned("cd", &[])]);
    }

    #[test]
    fn min_prefix_len_above_longest_disables_grouping() {
        let options = SummaryOptions { min_prefix_len: 10, ..SummaryOptions::default() };
        let summary = summarize(["alpha1", "alpha2"], &options);
        assert_eq!(entries(&summary), vec![owned("alpha1", &[]), owned("alpha2", &[])]);
    }

    #[test]
    fn committed_members_are_not_reconsidered() {
        // "data_v1"/"data_v2" group at "data_v"; "data_x" would otherwise
        // join them at "data_" but is left alone.
        let summary = summarize_with_defaults(["data_v1", "data_v2", "data_x"]);
        assert_eq!(
            entries(&summary),
            vec![owned("data_v", &["1", "2"]), owned("data_x", &[])]
        );
    }

    #[test]
    fn leftover_matching_a_prefix_joins_the_group() {
        let summary = summarize_with_defaults(["ab", "ab1", "ab2"]);
        assert_eq!(entries(&summary), vec![owned("ab", &["1", "2", ""])]);
        assert_eq!(expand_summary(&summary), vec!["ab1", "ab2", "ab"]);
    }

    #[test]
    fn prefixes_are_measured_in_chars() {
        let summary = summarize_with_defaults(["café1", "café2"]);
        assert_eq!(entries(&summary), vec![owned("café", &["1", "2"])]);
    }

    #[test]
    fn summary_partitions_input() {
        let inputs = [
            "report_2020_q1",
            "report_2020_q2",
            "report_2021_q1",
            "readme",
            "read",
            "src_main",
            "src_lib",
            "x",
            "",
            "sr",
            "report_2020_q1",
        ];
        for options in [
            SummaryOptions::default(),
            SummaryOptions { min_prefix_len: 0, min_prefix_percent: 0.0, group_threshold: 1 },
            SummaryOptions { min_prefix_len: 3, min_prefix_percent: 0.8, group_threshold: 3 },
        ] {
            let summary = summarize(inputs, &options);

            let expanded = expand_summary(&summary);
            let unique: BTreeSet<String> = expanded.iter().cloned().collect();
            assert_eq!(unique.len(), expanded.len());
            let expected: BTreeSet<String> = inputs.iter().map(|s| s.to_string()).collect();
            assert_eq!(unique, expected);

            for (prefix, suffixes) in &summary {
                if suffixes.is_empty() {
                    continue;
                }
                assert!(suffixes.len() >= options.group_threshold);
                let i = prefix.chars().count();
                for suffix in suffixes {
                    let len = i + suffix.chars().count();
                    assert!(i as f64 > len as f64 * options.min_prefix_percent);
                    assert!(i >= options.min_prefix_len);
                }
            }
        }
    }

    #[test]
    fn summary_is_deterministic_across_input_order() {
        let a = summarize_with_defaults(["ab12", "ab13", "ab22", "ab23", "zz"]);
        let b = summarize_with_defaults(["zz", "ab23", "ab22", "ab13", "ab12"]);
        assert_eq!(entries(&a), entries(&b));
        assert_eq!(
            entries(&a),
            vec![owned("ab1", &["2", "3"]), owned("ab2", &["2", "3"]), owned("zz", &[])]
        );
    }

    #[test]
    fn render_uses_brace_groups() {
        let summary = summarize_with_defaults(["apple1", "apple2", "banana"]);
        assert_eq!(render_summary(&summary), "apple{1,2}\nbanana\n");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SummaryOptions = serde_json::from_str(r#"{"group_threshold": 4}"#).unwrap();
        assert_eq!(options.group_threshold, 4);
        assert_eq!(options.min_prefix_len, 2);
        assert_eq!(options.min_prefix_percent, 0.5);
    }
}

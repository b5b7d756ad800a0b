//! Probing for files at their usual relative locations
//!
//! Both helpers take candidate paths such as `config/app/settings.toml` and
//! try progressively longer tails of them under a root directory:
//! `root/settings.toml`, then `root/app/settings.toml`, then
//! `root/config/app/settings.toml`. The first hit wins.

use globset::{GlobBuilder, GlobMatcher};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, TidbitsError};

/// Path components worth probing; root and prefix markers are dropped so an
/// absolute candidate still probes relative to the search root.
fn probe_components(candidate: &Path) -> Vec<Component<'_>> {
    candidate
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect()
}

/// Tails of `candidate`, shortest first.
fn tails(candidate: &Path) -> Vec<PathBuf> {
    let components = probe_components(candidate);
    (1..=components.len())
        .map(|k| components[components.len() - k..].iter().collect())
        .collect()
}

/// Find the first existing file among the tails of `candidates` under
/// `root`.
///
/// If `root` already ends with a candidate, `root` itself is returned.
pub fn find_relative_file<I, S>(root: impl AsRef<Path>, candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let root = root.as_ref();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.as_os_str().is_empty() {
            continue;
        }
        if root.ends_with(candidate) {
            debug!(root = %root.display(), "root already ends with candidate");
            return Some(root.to_path_buf());
        }
        for tail in tails(candidate) {
            let look_for = root.join(&tail);
            if look_for.exists() {
                debug!(path = %look_for.display(), "found relative file");
                return Some(look_for);
            }
        }
    }
    None
}

/// Find the directory holding the first match of any wildcard tail (see
/// module docs) under `root`.
///
/// Wildcards never cross a path separator and skip hidden entries unless the
/// pattern component starts with `.`. Entries are visited in file-name order,
/// so the result is stable across runs.
pub fn find_file_spec<I, S>(root: impl AsRef<Path>, wildcards: I) -> Result<Option<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = root.as_ref();
    for spec in wildcards {
        for tail in tails(Path::new(spec.as_ref())) {
            if let Some(hit) = first_glob_match(root, &tail)? {
                debug!(pattern = %tail.display(), path = %hit.display(), "wildcard matched");
                return Ok(hit.parent().map(Path::to_path_buf));
            }
        }
    }
    Ok(None)
}

fn build_matcher(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| TidbitsError::InvalidPattern { pattern: pattern.to_string(), source })
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Hidden entries only match a pattern component that itself starts with `.`.
fn hidden_allowed(relative: &Path, parts: &[String]) -> bool {
    relative
        .components()
        .zip(parts)
        .all(|(component, part)| part.starts_with('.') || !is_hidden(component.as_os_str()))
}

fn first_glob_match(root: &Path, tail: &Path) -> Result<Option<PathBuf>> {
    let parts: Vec<String> =
        tail.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
    let depth = parts.len();
    let matcher = build_matcher(&parts.join("/"))?;

    let hit = WalkDir::new(root)
        .min_depth(depth)
        .max_depth(depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .map(|relative| hidden_allowed(relative, &parts) && matcher.is_match(relative))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path());
    Ok(hit)
}

//! Scoped change of the process working directory

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, TidbitsError};

/// Changes the current directory on creation and restores the previous one
/// when dropped, including on early returns and panics.
///
/// The working directory is process-wide; hold one guard at a time.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let previous = env::current_dir().map_err(|e| TidbitsError::io(".", e))?;
        env::set_current_dir(path).map_err(|e| TidbitsError::io(path, e))?;
        debug!(from = %previous.display(), to = %path.display(), "entered working directory");
        Ok(Self { previous })
    }

    /// Directory that will be restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            warn!(path = %self.previous.display(), error = %err, "failed to restore working directory");
        }
    }
}

/// Run `f` with `path` as the current directory.
pub fn with_working_dir<T>(path: impl AsRef<Path>, f: impl FnOnce() -> T) -> Result<T> {
    let _guard = WorkingDirGuard::enter(path)?;
    Ok(f())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{with_working_dir, WorkingDirGuard};
    use crate::error::TidbitsError;
    use std::env;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static CWD_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch the process working directory.
    pub(crate) fn cwd_lock() -> MutexGuard<'static, ()> {
        CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn guard_restores_previous_directory() {
        let _lock = cwd_lock();
        let before = env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();
        {
            let guard = WorkingDirGuard::enter(dir.path()).unwrap();
            assert_eq!(guard.previous(), before.as_path());
            assert_eq!(
                env::current_dir().unwrap().canonicalize().unwrap(),
                dir.path().canonicalize().unwrap()
            );
        }
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn closure_result_is_returned_and_directory_restored_on_error() {
        let _lock = cwd_lock();
        let before = env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let outcome: Result<(), String> =
            with_working_dir(dir.path(), || Err("failed inside".to_string())).unwrap();
        assert!(outcome.is_err());
        assert_eq!(env::current_dir().unwrap(), before);

        let found = with_working_dir(dir.path(), || std::path::Path::new("marker.txt").exists());
        assert!(found.unwrap());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn guard_restores_after_panic() {
        let _lock = cwd_lock();
        let before = env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        let result = std::panic::catch_unwind(move || {
            let _guard = WorkingDirGuard::enter(&path).unwrap();
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let _lock = cwd_lock();
        let before = env::current_dir().unwrap();
        let err = WorkingDirGuard::enter("/definitely/not/here").unwrap_err();
        assert!(matches!(err, TidbitsError::NotFound { .. }));
        assert_eq!(env::current_dir().unwrap(), before);
    }
}

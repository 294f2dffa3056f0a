use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use globset::GlobBuilder;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// FileCandidate – a matching export file
// ---------------------------------------------------------------------------

/// A file in the export directory whose name matches the configured
/// pattern. Recomputed on every refresh, never cached.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub modified: SystemTime,
}

// ---------------------------------------------------------------------------
// Latest-export resolution
// ---------------------------------------------------------------------------

/// Find the most recently modified file in `dir` whose *name* matches the
/// glob `pattern` (e.g. `UCSF_ECHO_*.CSV`). Non-recursive: only direct
/// children of `dir` are considered.
///
/// Returns `Ok(None)` when the directory is readable but holds no matching
/// file — a normal "no export yet" outcome. An unreadable or missing
/// directory is [`Error::DirectoryUnavailable`] instead, since it points at
/// a mount/VPN problem rather than a missing export.
///
/// When two candidates share the same timestamp the winner is arbitrary
/// (whichever directory iteration yields last).
pub fn resolve_latest(
    dir: &Path,
    pattern: &str,
    case_sensitive: bool,
) -> Result<Option<FileCandidate>> {
    let matcher = GlobBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut latest: Option<FileCandidate> = None;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        let name = entry.file_name();
        if !matcher.is_match(Path::new(&name)) {
            continue;
        }

        let modified = match entry.metadata().and_then(|m| {
            if m.is_file() {
                m.modified()
            } else {
                Err(std::io::Error::other("not a regular file"))
            }
        }) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("Skipping {}: {err}", entry.path().display());
                continue;
            }
        };

        let newer = match &latest {
            Some(current) => modified >= current.modified,
            None => true,
        };
        if newer {
            latest = Some(FileCandidate {
                path: entry.path(),
                modified,
            });
        }
    }

    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    const PATTERN: &str = "UCSF_ECHO_*.CSV";

    /// Create a file and pin its modification time to `secs` after epoch.
    fn touch(dir: &Path, name: &str, secs: u64) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).expect("create file");
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .expect("set mtime");
        path
    }

    #[test]
    fn empty_directory_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        let result = resolve_latest(tmp.path(), PATTERN, false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn picks_newest_by_modification_time() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "UCSF_ECHO_20240101.CSV", 1_000);
        let newest = touch(tmp.path(), "UCSF_ECHO_20240301.CSV", 3_000);
        touch(tmp.path(), "UCSF_ECHO_20240201.CSV", 2_000);

        let candidate = resolve_latest(tmp.path(), PATTERN, false)
            .unwrap()
            .expect("one file should match");
        assert_eq!(candidate.path, newest);
    }

    #[test]
    fn newest_beats_every_other_candidate() {
        let tmp = tempfile::tempdir().unwrap();
        for (i, secs) in [400u64, 100, 900, 250].into_iter().enumerate() {
            touch(tmp.path(), &format!("UCSF_ECHO_{i}.CSV"), secs);
        }
        let candidate = resolve_latest(tmp.path(), PATTERN, false)
            .unwrap()
            .unwrap();
        assert_eq!(
            candidate.modified,
            SystemTime::UNIX_EPOCH + Duration::from_secs(900)
        );
    }

    #[test]
    fn non_matching_names_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "OTHER_FEED_20240101.CSV", 5_000);
        touch(tmp.path(), "UCSF_ECHO_20240101.txt", 5_000);
        let old = touch(tmp.path(), "UCSF_ECHO_20230101.CSV", 1_000);

        let candidate = resolve_latest(tmp.path(), PATTERN, false)
            .unwrap()
            .unwrap();
        assert_eq!(candidate.path, old);
    }

    #[test]
    fn directories_are_not_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("UCSF_ECHO_SUBDIR.CSV")).unwrap();

        let result = resolve_latest(tmp.path(), PATTERN, false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn pattern_match_is_case_insensitive_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        let lower = touch(tmp.path(), "ucsf_echo_20240101.csv", 1_000);

        let candidate = resolve_latest(tmp.path(), PATTERN, false)
            .unwrap()
            .unwrap();
        assert_eq!(candidate.path, lower);

        let strict = resolve_latest(tmp.path(), PATTERN, true).unwrap();
        assert!(strict.is_none());
    }

    #[test]
    fn missing_directory_is_unavailable_not_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("not-mounted");

        let err = resolve_latest(&gone, PATTERN, false).unwrap_err();
        assert!(matches!(err, Error::DirectoryUnavailable { .. }));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_latest(tmp.path(), "UCSF_ECHO_[.CSV", false).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}

//! File pattern resolution using glob

use super::{Job, STDIN_PATTERN};
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve file patterns to jobs, in the order given
///
/// A plain path is kept even when it does not exist, so the failure is
/// reported for that input. A glob that matches no files is an error.
/// Duplicates keep their first position.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            if seen.insert(Job::Stdin) {
                jobs.push(Job::Stdin);
            }
            continue;
        }

        if !is_glob(pattern) {
            let job = Job::File(PathBuf::from(pattern));
            if seen.insert(job.clone()) {
                jobs.push(job);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let mut matched = false;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if !path.is_file() {
                continue;
            }
            matched = true;
            let job = Job::File(path);
            if seen.insert(job.clone()) {
                jobs.push(job);
            }
        }

        if !matched {
            return Err(CliError::NoMatches(pattern.clone()).into());
        }
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).to_string_lossy().into_owned()
    }

    #[test]
    fn test_glob_matches_files_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.log"), "a").unwrap();
        fs::write(temp_dir.path().join("b.log"), "b").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "c").unwrap();
        fs::create_dir(temp_dir.path().join("d.log")).unwrap();

        let jobs = resolve_patterns(&[pattern(&temp_dir, "*.log")]).unwrap();
        assert_eq!(
            jobs,
            vec![
                Job::File(temp_dir.path().join("a.log")),
                Job::File(temp_dir.path().join("b.log")),
            ]
        );
    }

    #[test]
    fn test_order_is_kept_and_duplicates_dropped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.log"), "a").unwrap();
        fs::write(temp_dir.path().join("b.log"), "b").unwrap();

        let b = pattern(&temp_dir, "b.log");
        let jobs = resolve_patterns(&[b.clone(), pattern(&temp_dir, "*.log"), b]).unwrap();
        assert_eq!(
            jobs,
            vec![
                Job::File(temp_dir.path().join("b.log")),
                Job::File(temp_dir.path().join("a.log")),
            ]
        );
    }

    #[test]
    fn test_plain_missing_path_is_kept() {
        let jobs = resolve_patterns(&["/nonexistent/revline.log".to_string()]).unwrap();
        assert_eq!(jobs, vec![Job::File(PathBuf::from("/nonexistent/revline.log"))]);
    }

    #[test]
    fn test_dash_is_stdin() {
        let jobs = resolve_patterns(&["-".to_string(), "-".to_string()]).unwrap();
        assert_eq!(jobs, vec![Job::Stdin]);
    }

    #[test]
    fn test_unmatched_glob_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.none")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoMatches(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}

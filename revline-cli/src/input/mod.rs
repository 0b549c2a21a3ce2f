//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use revline_api::Input;
use std::io;
use std::path::PathBuf;

/// Pattern naming standard input
pub const STDIN_PATTERN: &str = "-";

/// Label reported for standard input
pub const STDIN_LABEL: &str = "stdin";

/// One unit of work for the reverse command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Job {
    /// Text given on the command line
    Text(String),
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Job {
    /// Label shown in progress messages
    pub fn label(&self) -> String {
        match self {
            Job::Text(_) => revline_api::DIRECT_TEXT_LABEL.to_string(),
            Job::Stdin => STDIN_LABEL.to_string(),
            Job::File(path) => path.display().to_string(),
        }
    }

    /// Build the library input for this job
    pub fn to_input(&self) -> Input {
        match self {
            Job::Text(text) => Input::from_text(text.as_str()),
            Job::Stdin => Input::from_reader(io::stdin(), None).with_label(STDIN_LABEL),
            Job::File(path) => Input::from_file(path.clone()),
        }
    }
}

/// Work out the jobs for one run
///
/// `text` wins over everything else; with neither patterns nor text the
/// run reads standard input, as `tac` does.
pub fn collect_jobs(
    text: Option<&str>,
    stdin: bool,
    patterns: &[String],
) -> anyhow::Result<Vec<Job>> {
    if let Some(text) = text {
        return Ok(vec![Job::Text(text.to_string())]);
    }
    if stdin || patterns.is_empty() {
        return Ok(vec![Job::Stdin]);
    }
    resolve_patterns(patterns)
}

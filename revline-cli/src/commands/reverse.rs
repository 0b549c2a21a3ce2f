//! Reverse command implementation

use crate::{
    config::CliConfig,
    error::{CliError, CliResult},
    input::{collect_jobs, Job},
    output::{create_formatter, OutputFormat, OutputOptions},
    progress::ProgressReporter,
};
use anyhow::Context;
use clap::Args;
use rayon::prelude::*;
use revline_api::{ApiError, Config, Method, Output, Reverser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the reverse command
#[derive(Debug, Default, Args)]
pub struct ReverseArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Reverse this text instead of reading files
    #[arg(short, long, value_name = "TEXT", conflicts_with_all = ["input", "stdin"])]
    pub text: Option<String>,

    /// Read from standard input (the default when no input is given)
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Processing method
    #[arg(short, long, value_enum, default_value = "auto")]
    pub method: MethodChoice,

    /// Chunk size in KB; smaller inputs are reversed in memory
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Largest accepted input in MB
    #[arg(long, value_name = "MB")]
    pub max_mb: Option<u64>,

    /// Encoding of input bytes
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Processing method selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MethodChoice {
    /// Pick by input size
    #[default]
    Auto,
    /// Always read the whole input first
    InMemory,
    /// Always read chunk by chunk
    Streaming,
}

impl MethodChoice {
    fn forced(self) -> Option<Method> {
        match self {
            MethodChoice::Auto => None,
            MethodChoice::InMemory => Some(Method::InMemory),
            MethodChoice::Streaming => Some(Method::Streaming),
        }
    }
}

/// Flags and configuration file merged into what one run needs
#[derive(Debug, Clone)]
pub struct Settings {
    /// Library configuration
    pub config: Config,
    /// Output format
    pub format: OutputFormat,
    /// Formatter switches
    pub output: OutputOptions,
    /// Worker thread count, already resolved from 0
    pub threads: usize,
}

impl ReverseArgs {
    /// Execute the reverse command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting line reversal");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config)?;
        let jobs = collect_jobs(self.text.as_deref(), self.stdin, &self.input)?;
        log::info!(
            "{} input(s), {} worker thread(s)",
            jobs.len(),
            settings.threads
        );

        let reverser = Reverser::with_config(settings.config.clone());
        let mut results = self.run_jobs(&reverser, &jobs, settings.threads)?;

        // A lone failing input is reported as itself, with nothing written
        if results.len() == 1 && results[0].1.is_err() {
            if let Some((_, Err(err))) = results.pop() {
                return Err(err.into());
            }
        }

        self.write_results(results, &settings)
    }

    /// Merge flags over the configuration file
    pub fn settings(&self, file: &CliConfig) -> CliResult<Settings> {
        let encoding = self
            .encoding
            .clone()
            .unwrap_or_else(|| file.processing.encoding.clone());
        let chunk_kb = self.chunk_kb.unwrap_or(file.processing.chunk_size_kb);
        let max_mb = self.max_mb.unwrap_or(file.processing.max_input_mb);

        let chunk_size = chunk_kb
            .checked_mul(1024)
            .ok_or_else(|| CliError::ConfigError(format!("chunk size {chunk_kb} KB is too large")))?;
        let max_input_size = max_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| CliError::ConfigError(format!("input limit {max_mb} MB is too large")))?;

        let config = Config::builder()
            .encoding(encoding)
            .chunk_size(chunk_size)
            .max_input_size(max_input_size)
            .build()?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&file.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    file.output.default_format
                ))
            })?,
        };

        let threads = match self.jobs.unwrap_or(file.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        Ok(Settings {
            config,
            format,
            output: OutputOptions {
                pretty_json: file.output.pretty_json,
                include_original: file.output.include_original,
            },
            threads,
        })
    }

    /// Reverse every job on a worker pool, keeping input order
    fn run_jobs(
        &self,
        reverser: &Reverser,
        jobs: &[Job],
        threads: usize,
    ) -> CliResult<Vec<(String, Result<Output, ApiError>)>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to start worker pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(jobs.len() as u64);
        let forced = self.method.forced();

        let results = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let label = job.label();
                    let input = job.to_input();
                    let result = match forced {
                        Some(method) => reverser.process_with_method(input, method),
                        None => reverser.process(input),
                    };
                    if let Err(err) = &result {
                        log::debug!("{label}: {err}");
                    }
                    progress.input_completed(&label);
                    (label, result)
                })
                .collect()
        });

        progress.finish();
        Ok(results)
    }

    fn write_results(
        &self,
        results: Vec<(String, Result<Output, ApiError>)>,
        settings: &Settings,
    ) -> CliResult<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let total = results.len();
        let mut formatter =
            create_formatter(settings.format, writer, settings.output, total);
        let mut failed = 0;
        let mut client_only = true;

        for (_, result) in results {
            match result {
                Ok(output) => formatter.format_output(&output)?,
                Err(err) => {
                    failed += 1;
                    client_only &= err.is_client_error();
                    eprintln!("error[{}]: {}", err.code(), err);
                }
            }
        }
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::InputsFailed {
                failed,
                total,
                client_only,
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_defaults() {
        let settings = ReverseArgs::default()
            .settings(&CliConfig::default())
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.config.options().chunk_size(), 64 * 1024);
        assert_eq!(settings.config.options().max_input_size(), 512 * 1024 * 1024);
        assert!(settings.threads >= 1);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = CliConfig::default();
        file.processing.chunk_size_kb = 8;
        file.output.default_format = "json".to_string();
        file.performance.worker_threads = 3;

        let from_file = ReverseArgs::default().settings(&file).unwrap();
        assert_eq!(from_file.config.options().chunk_size(), 8 * 1024);
        assert_eq!(from_file.format, OutputFormat::Json);
        assert_eq!(from_file.threads, 3);

        let args = ReverseArgs {
            chunk_kb: Some(1),
            format: Some(OutputFormat::Steps),
            jobs: Some(2),
            max_mb: Some(1),
            ..Default::default()
        };
        let settings = args.settings(&file).unwrap();
        assert_eq!(settings.config.options().chunk_size(), 1024);
        assert_eq!(settings.config.options().max_input_size(), 1024 * 1024);
        assert_eq!(settings.format, OutputFormat::Steps);
        assert_eq!(settings.threads, 2);
    }

    #[test]
    fn test_invalid_settings() {
        let args = ReverseArgs {
            encoding: Some("no-such-encoding".to_string()),
            ..Default::default()
        };
        let err = args.settings(&CliConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>().map(|e| e.code()), Some("invalid-config"));

        let args = ReverseArgs {
            chunk_kb: Some(0),
            ..Default::default()
        };
        assert!(args.settings(&CliConfig::default()).is_err());

        let mut file = CliConfig::default();
        file.output.default_format = "yaml".to_string();
        let err = ReverseArgs::default().settings(&file).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_method_choice() {
        assert_eq!(MethodChoice::Auto.forced(), None);
        assert_eq!(MethodChoice::Streaming.forced(), Some(Method::Streaming));
        assert_eq!(MethodChoice::InMemory.forced(), Some(Method::InMemory));
    }

    #[test]
    fn test_jobs_keep_input_order() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut jobs = Vec::new();
        for i in 0..8 {
            let path = temp_dir.path().join(format!("{i}.txt"));
            std::fs::write(&path, format!("{i}a\n{i}b")).unwrap();
            jobs.push(Job::File(path));
        }

        let args = ReverseArgs {
            quiet: true,
            ..Default::default()
        };
        let results = args.run_jobs(&Reverser::new(), &jobs, 4).unwrap();
        for (i, (label, result)) in results.iter().enumerate() {
            assert!(label.ends_with(&format!("{i}.txt")));
            assert_eq!(result.as_ref().unwrap().transformed, format!("{i}b\n{i}a"));
        }
    }
}

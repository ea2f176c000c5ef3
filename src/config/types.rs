//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Args, ValueEnum};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_FILE_HOSTS, DEFAULT_MAX_HOPS, DEFAULT_USER_AGENT,
    HOP_TIMEOUT_SECS, MAX_RESPONSE_BODY_SIZE, OVERALL_TIMEOUT_SECS, RETRY_MAX_ATTEMPTS,
};
use crate::fetch::NavigatorConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolver configuration.
///
/// Parsed from the command line by the binary, and constructible programmatically
/// through `Default` by library callers.
///
/// # Examples
///
/// ```no_run
/// use chain_resolver::Config;
///
/// let config = Config {
///     max_hops: 5,
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Page the prompt is submitted to (receives `?prompt=...`)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum navigation hops before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: usize,

    /// Per-hop timeout in seconds
    #[arg(long, default_value_t = HOP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Wall-clock budget for one resolution in seconds
    #[arg(long, default_value_t = OVERALL_TIMEOUT_SECS)]
    pub overall_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Largest response body accepted on any hop, in bytes
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE)]
    pub max_body_size: usize,

    /// Additional file-hosting domain to follow when linked from a page (repeatable)
    #[arg(long = "file-host")]
    pub extra_file_hosts: Vec<String>,

    /// Fresh resolutions attempted after a retriable failure
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS)]
    pub retries: usize,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_hops: DEFAULT_MAX_HOPS,
            timeout_seconds: HOP_TIMEOUT_SECS,
            overall_timeout_seconds: OVERALL_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_size: MAX_RESPONSE_BODY_SIZE,
            extra_file_hosts: Vec::new(),
            retries: RETRY_MAX_ATTEMPTS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// File-hosting domains followed by the navigator: the built-in list plus
    /// `extra_file_hosts`, lowercased and deduplicated.
    pub fn file_hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = Vec::new();
        let all = DEFAULT_FILE_HOSTS
            .iter()
            .map(|h| h.to_string())
            .chain(self.extra_file_hosts.iter().cloned());
        for host in all {
            let host = host.trim().trim_start_matches('.').to_ascii_lowercase();
            if !host.is_empty() && !hosts.contains(&host) {
                hosts.push(host);
            }
        }
        hosts
    }

    /// Builds the navigator settings for one resolution call.
    pub fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            max_hops: self.max_hops,
            hop_timeout: Duration::from_secs(self.timeout_seconds),
            overall_timeout: Duration::from_secs(self.overall_timeout_seconds),
            user_agent: self.user_agent.clone(),
            max_body_size: self.max_body_size,
            file_hosts: self.file_hosts(),
        }
    }
}

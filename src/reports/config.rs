// Command-line configuration for the report pusher

use std::sync::OnceLock;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches};

use crate::error::AppError;
use crate::reports::DEFAULT_SEVERITIES;
use crate::validation;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_ENDPOINT: &str = "/reports";

/// Environment variables consulted for the token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["REPORT_JWT", "JWT_TOKEN"];

#[derive(Debug, Clone)]
pub struct PushConfig {
    pub token: String,
    /// Full target, `{base_url}{endpoint}`
    pub url: String,
    pub count: u64,
    pub categories: Vec<i64>,
    pub severities: Vec<String>,
    pub public_rate: f64,
    pub anon_rate: f64,
    pub sleep: Duration,
    pub timeout: Duration,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

// clap wants a 'static default; the list lives in reports::DEFAULT_SEVERITIES
fn default_severities_arg() -> &'static str {
    static JOINED: OnceLock<String> = OnceLock::new();
    JOINED.get_or_init(|| DEFAULT_SEVERITIES.join(","))
}

pub fn command() -> clap::Command {
    clap::Command::new("push-reports")
        .about("Push randomly generated reports to the report service.")
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("TOKEN")
                .help("JWT token for the Authorization header (or set REPORT_JWT/JWT_TOKEN)"),
        )
        .arg(
            Arg::new("base_url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Base URL for the report service")
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .value_name("PATH")
                .help("Endpoint path to POST reports to")
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("N")
                .help("Number of reports to send")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("10"),
        )
        .arg(
            Arg::new("categories")
                .long("categories")
                .value_name("IDS")
                .help("Comma-separated report_categories_id values")
                .default_value("1"),
        )
        .arg(
            Arg::new("severities")
                .long("severities")
                .value_name("LIST")
                .help("Comma-separated severities to choose from")
                .default_value(default_severities_arg()),
        )
        .arg(
            Arg::new("public_rate")
                .long("public-rate")
                .value_name("P")
                .help("Probability of is_public being true")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0.7"),
        )
        .arg(
            Arg::new("anon_rate")
                .long("anon-rate")
                .value_name("P")
                .help("Probability of is_anon being true")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0.2"),
        )
        .arg(
            Arg::new("sleep")
                .long("sleep")
                .value_name("SECONDS")
                .help("Seconds to sleep between requests")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-request timeout in seconds")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("10"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Random seed for reproducible data")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print payloads without sending requests")
                .action(ArgAction::SetTrue),
        )
}

impl PushConfig {
    /// Build and validate a config. `env` resolves environment variables so
    /// tests can supply their own.
    pub fn from_matches<F>(matches: &ArgMatches, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = matches
            .get_one::<String>("token")
            .cloned()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                TOKEN_ENV_VARS
                    .iter()
                    .filter_map(|&name| env(name))
                    .find(|t| !t.trim().is_empty())
            })
            .ok_or_else(|| {
                AppError::Usage(
                    "JWT token is required via --token or REPORT_JWT/JWT_TOKEN.".to_string(),
                )
            })?;

        let count = matches.get_one::<i64>("count").copied().unwrap_or(10);
        if count <= 0 {
            return Err(AppError::Usage("--count must be greater than zero.".to_string()));
        }

        let categories = validation::parse_int_list(string_arg(matches, "categories"), "category")?;
        let severities = validation::parse_string_list(string_arg(matches, "severities"), "severity")?;

        let public_rate = float_arg(matches, "public_rate");
        validation::validate_rate("--public-rate", public_rate)?;
        let anon_rate = float_arg(matches, "anon_rate");
        validation::validate_rate("--anon-rate", anon_rate)?;

        let sleep = float_arg(matches, "sleep");
        if !sleep.is_finite() || sleep < 0.0 {
            return Err(AppError::Usage("--sleep must not be negative.".to_string()));
        }
        let sleep = seconds("--sleep", sleep)?;

        let timeout = float_arg(matches, "timeout");
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err(AppError::Usage("--timeout must be greater than zero.".to_string()));
        }
        let timeout = seconds("--timeout", timeout)?;

        let base_url = validation::validate_base_url(string_arg(matches, "base_url"))?;
        let url = validation::join_endpoint(&base_url, string_arg(matches, "endpoint"));

        Ok(Self {
            token,
            url,
            count: count as u64,
            categories,
            severities,
            public_rate,
            anon_rate,
            sleep,
            timeout,
            seed: matches.get_one::<u64>("seed").copied(),
            dry_run: matches.get_flag("dry_run"),
        })
    }
}

// Every string arg read here carries a default value
fn string_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(|s| s.as_str()).unwrap_or_default()
}

fn float_arg(matches: &ArgMatches, id: &str) -> f64 {
    matches.get_one::<f64>(id).copied().unwrap_or_default()
}

fn seconds(flag: &str, value: f64) -> Result<Duration, AppError> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| AppError::Usage(format!("{} is out of range.", flag)))
}

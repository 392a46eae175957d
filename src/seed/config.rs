// Command-line configuration shared by both seeder binaries

use clap::{Arg, ArgAction, ArgMatches};

use crate::auth;
use crate::error::AppError;

pub const DEFAULT_DSN: &str =
    "host=localhost user=postgres password=postgres dbname=agarthan port=5432 sslmode=disable";

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub dsn: String,
    pub cost: u32,
    pub dry_run: bool,
}

pub fn command(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name)
        .about(about)
        .arg(
            Arg::new("dsn")
                .long("dsn")
                .value_name("DSN")
                .env("DB_DSN")
                .help("Database DSN (host=... dbname=..., postgres://... or sqlite:...)")
                .default_value(DEFAULT_DSN),
        )
        .arg(
            Arg::new("cost")
                .long("cost")
                .value_name("ROUNDS")
                .env("BCRYPT_COST")
                .help("bcrypt cost rounds")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("10"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print intended upserts without writing")
                .action(ArgAction::SetTrue),
        )
}

impl SeedConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, AppError> {
        let dsn = matches
            .get_one::<String>("dsn")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DSN.to_string());

        let raw_cost = matches
            .get_one::<i64>("cost")
            .copied()
            .unwrap_or(auth::DEFAULT_COST as i64);
        let cost = u32::try_from(raw_cost).unwrap_or(0);
        auth::validate_cost(cost)?;

        Ok(Self {
            dsn,
            cost,
            dry_run: matches.get_flag("dry_run"),
        })
    }
}

// Sequential push loop: generate, deliver (or print), tally

use std::io::Write;

use anyhow::Result;

use super::{Delivery, PushConfig, ReportClient, ReportGenerator};
use crate::error::{EXIT_FAILURE, EXIT_OK};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushSummary {
    pub attempted: u64,
    pub successes: u64,
    pub failures: u64,
}

impl PushSummary {
    pub fn exit_code(&self) -> u8 {
        if self.failures == 0 {
            EXIT_OK
        } else {
            EXIT_FAILURE
        }
    }
}

/// Run the whole batch described by `config`, writing one status line per
/// report and a final tally to `out`.
pub async fn run_push<W: Write>(config: &PushConfig, out: &mut W) -> Result<PushSummary> {
    let mut generator = ReportGenerator::new(
        config.seed,
        config.categories.clone(),
        config.severities.clone(),
        config.public_rate,
        config.anon_rate,
    )?;

    // No client in dry-run mode: nothing may touch the network
    let client = if config.dry_run {
        None
    } else {
        Some(ReportClient::new(&config.url, &config.token, config.timeout)?)
    };

    tracing::info!(
        url = %config.url,
        count = config.count,
        dry_run = config.dry_run,
        "pushing reports"
    );

    let mut summary = PushSummary::default();
    let total = config.count;

    for idx in 1..=total {
        let report = generator.next_report();
        summary.attempted += 1;

        let Some(client) = client.as_ref() else {
            writeln!(out, "[{}/{}] DRY RUN {}", idx, total, serde_json::to_string(&report)?)?;
            continue;
        };

        match client.send(&report).await {
            Delivery::Accepted { status } => {
                summary.successes += 1;
                writeln!(out, "[{}/{}] {} queued", idx, total, status)?;
            }
            Delivery::Rejected { status, body } => {
                summary.failures += 1;
                writeln!(out, "[{}/{}] {} {}", idx, total, status, body)?;
            }
            Delivery::Failed { error } => {
                summary.failures += 1;
                writeln!(out, "[{}/{}] error {}", idx, total, error)?;
            }
        }

        if !config.sleep.is_zero() && idx < total {
            tokio::time::sleep(config.sleep).await;
        }
    }

    writeln!(
        out,
        "Done. Success: {}, Failed: {}",
        summary.successes, summary.failures
    )?;
    Ok(summary)
}

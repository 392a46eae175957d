// HTTP delivery of reports to the report service

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;

use super::Report;

/// Outcome of a single POST
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// 2xx response
    Accepted { status: u16 },
    /// Non-2xx response, with the body the server sent back
    Rejected { status: u16, body: String },
    /// No response at all: connect failure, timeout, broken stream
    Failed { error: String },
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        matches!(self, Delivery::Accepted { .. })
    }
}

pub struct ReportClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl ReportClient {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: url.to_string(),
            token: token.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST one report. Never errors: every failure is folded into the outcome.
    pub async fn send(&self, report: &Report) -> Delivery {
        let started = Instant::now();

        // json() also sets Content-Type: application/json
        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(report)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "request failed without a response");
                return Delivery::Failed {
                    error: describe_transport_error(&e),
                };
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if status.is_success() => {
                tracing::warn!(status = status.as_u16(), error = %e, "could not read response body");
                String::new()
            }
            Err(e) => format!("<unreadable body: {}>", e),
        };

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "report delivered"
        );

        if status.is_success() {
            Delivery::Accepted {
                status: status.as_u16(),
            }
        } else {
            Delivery::Rejected {
                status: status.as_u16(),
                body: text,
            }
        }
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

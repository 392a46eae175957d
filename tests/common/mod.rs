// Common test utilities shared across test files
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, Connection, SqliteConnection};
use tempfile::TempDir;

/// Build a file-backed SQLite database in a temp dir.
/// Returns the dir (keep it alive) and a DSN for the seeders.
pub async fn setup_seed_db(with_schema: bool) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("seed.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create SQLite database");

    if with_schema {
        let migration = include_str!("../../migrations/001_reference_schema.sql");
        sqlx::raw_sql(migration)
            .execute(&mut conn)
            .await
            .expect("Failed to run migration 001");
    }

    conn.close().await.expect("Failed to close setup connection");

    (dir, format!("sqlite://{}", path.display()))
}

/// Open a second connection to inspect what a seeder wrote
pub async fn open(dsn: &str) -> SqliteConnection {
    SqliteConnection::connect(dsn)
        .await
        .expect("Failed to open SQLite database")
}

pub async fn count_rows(dsn: &str, table: &str) -> i64 {
    let mut conn = open(dsn).await;
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut conn)
        .await
        .expect("Failed to count rows");
    conn.close().await.ok();
    count
}

/// One request as the fake report service saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A throwaway report service on 127.0.0.1 that records every POST
pub struct MockReportService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockReportService {
    pub async fn start(status: StatusCode) -> Self {
        Self::start_with_delay(status, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: StatusCode, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            delay,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/reports", post(record_report))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().expect("Mock service has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_report(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let reply = if state.status.is_success() {
        r#"{"status":"queued"}"#.to_string()
    } else {
        r#"{"error":"rejected"}"#.to_string()
    };
    (state.status, reply)
}

/// An address nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind scratch listener");
    let addr = listener.local_addr().expect("Scratch listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

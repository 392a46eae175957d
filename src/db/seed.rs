// Idempotent seeding: one connection, one transaction, upserts only

use anyhow::{Context, Result};
use chrono::Utc;

use crate::auth;
use crate::db::{redact, ConnectTarget};
use crate::error::{AppError, DbResultExt};
use crate::seed::{normalize_users, NormalizedUser, SeedConfig, SeedCounts, SeedDataset, SeedOutcome};

const UPSERT_ROLE: &str = "
    INSERT INTO roles (role_id, name)
    VALUES ($1, $2)
    ON CONFLICT (role_id) DO UPDATE SET name = EXCLUDED.name";

const UPSERT_DEPARTMENT: &str = "
    INSERT INTO departments (department_id, name)
    VALUES ($1, $2)
    ON CONFLICT (department_id) DO UPDATE SET name = EXCLUDED.name";

const UPSERT_REPORT_CATEGORY: &str = "
    INSERT INTO report_categories (report_categories_id, name, department_id)
    VALUES ($1, $2, $3)
    ON CONFLICT (report_categories_id) DO UPDATE SET
        name = EXCLUDED.name,
        department_id = EXCLUDED.department_id";

const UPSERT_USER: &str = "
    INSERT INTO users (
        user_id,
        email,
        password,
        name,
        is_active,
        created_at,
        role_id,
        department_id
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    ON CONFLICT (email) DO UPDATE SET
        password = EXCLUDED.password,
        name = EXCLUDED.name,
        is_active = EXCLUDED.is_active,
        created_at = EXCLUDED.created_at,
        role_id = EXCLUDED.role_id,
        department_id = EXCLUDED.department_id";

/// Seed `dataset` according to `config`.
///
/// Validation, the driver check and password hashing all happen before a
/// connection is opened. In dry-run mode no connection is opened at all.
pub async fn run_seed(config: &SeedConfig, dataset: &SeedDataset) -> Result<SeedOutcome, AppError> {
    auth::validate_cost(config.cost)?;
    let target = ConnectTarget::from_dsn(&config.dsn)?;
    auth::self_test()?;

    let users = normalize_users(dataset.users, config.cost, Utc::now())?;

    if config.dry_run {
        return Ok(SeedOutcome {
            counts: SeedCounts::planned(dataset, &users),
            dry_run: true,
        });
    }

    tracing::info!(
        backend = %target.backend(),
        dsn = %redact(&config.dsn),
        dataset = dataset.name,
        "seeding database"
    );

    let counts = match &target {
        ConnectTarget::Postgres(options) => postgres::seed(options, dataset, &users).await?,
        ConnectTarget::Sqlite(options) => sqlite::seed(options, dataset, &users).await?,
    };

    Ok(SeedOutcome {
        counts,
        dry_run: false,
    })
}

// Same statements for every driver; only the connection type differs
macro_rules! seed_backend {
    ($module:ident, $conn:ty) => {
        mod $module {
            use super::*;
            use sqlx::Connection;

            /// Open one connection, write everything in one transaction and
            /// close the connection whether or not the write succeeded.
            pub(super) async fn seed(
                options: &<$conn as Connection>::Options,
                dataset: &SeedDataset,
                users: &[NormalizedUser],
            ) -> Result<SeedCounts, AppError> {
                let mut conn = <$conn>::connect_with(options).await.map_err(|e| {
                    AppError::Preflight(format!("Failed to connect to database: {}", e))
                })?;

                let outcome = write_dataset(&mut conn, dataset, users).await;

                if let Err(e) = conn.close().await {
                    tracing::warn!(error = %e, "failed to close database connection cleanly");
                }

                outcome.db_err()
            }

            async fn write_dataset(
                conn: &mut $conn,
                dataset: &SeedDataset,
                users: &[NormalizedUser],
            ) -> Result<SeedCounts> {
                let mut tx = conn.begin().await.context("Failed to begin transaction")?;

                let result = upsert_all(&mut tx, dataset, users).await;
                match result {
                    Ok(counts) => {
                        tx.commit().await.context("Failed to commit transaction")?;
                        Ok(counts)
                    }
                    Err(e) => {
                        if let Err(rollback_err) = tx.rollback().await {
                            tracing::warn!(error = %rollback_err, "rollback failed");
                        } else {
                            tracing::warn!("transaction rolled back");
                        }
                        Err(e)
                    }
                }
            }

            async fn upsert_all(
                conn: &mut $conn,
                dataset: &SeedDataset,
                users: &[NormalizedUser],
            ) -> Result<SeedCounts> {
                let mut counts = SeedCounts::default();

                for role in dataset.roles {
                    sqlx::query(UPSERT_ROLE)
                        .bind(role.id)
                        .bind(role.name)
                        .execute(&mut *conn)
                        .await
                        .with_context(|| format!("Failed to upsert role {}", role.id))?;
                    counts.roles += 1;
                }

                for department in dataset.departments {
                    sqlx::query(UPSERT_DEPARTMENT)
                        .bind(department.id)
                        .bind(department.name)
                        .execute(&mut *conn)
                        .await
                        .with_context(|| format!("Failed to upsert department {}", department.id))?;
                    counts.departments += 1;
                }

                for category in dataset.categories {
                    sqlx::query(UPSERT_REPORT_CATEGORY)
                        .bind(category.id)
                        .bind(category.name)
                        .bind(category.department_id)
                        .execute(&mut *conn)
                        .await
                        .with_context(|| format!("Failed to upsert report category {}", category.id))?;
                    counts.categories += 1;
                }

                for user in users {
                    sqlx::query(UPSERT_USER)
                        .bind(user.id)
                        .bind(&user.email)
                        .bind(&user.password_hash)
                        .bind(&user.name)
                        .bind(user.is_active)
                        .bind(user.created_at)
                        .bind(user.role_id)
                        .bind(user.department_id)
                        .execute(&mut *conn)
                        .await
                        .with_context(|| format!("Failed to upsert user {}", user.email))?;
                    counts.users += 1;
                }

                tracing::debug!(?counts, "upserts applied");
                Ok(counts)
            }
        }
    };
}

seed_backend!(postgres, sqlx::PgConnection);
seed_backend!(sqlite, sqlx::SqliteConnection);

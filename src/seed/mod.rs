// Seed data model and normalization

pub mod config;
pub mod datasets;
pub mod timestamp;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::auth;
use crate::error::AppError;

pub use config::SeedConfig;
pub use timestamp::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportCategory {
    pub id: i64,
    pub name: &'static str,
    pub department_id: i64,
}

/// A user as written in source, password still in plaintext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub id: i64,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub is_active: bool,
    pub created_at: Option<&'static str>,
    pub role_id: i64,
    pub department_id: Option<i64>,
}

/// Everything one seeder run writes
#[derive(Debug, Clone, Copy)]
pub struct SeedDataset {
    pub name: &'static str,
    pub roles: &'static [Role],
    pub departments: &'static [Department],
    pub categories: &'static [ReportCategory],
    pub users: &'static [SeedUser],
}

/// A user row ready for the `users` table
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub role_id: i64,
    pub department_id: Option<i64>,
}

/// Rows written (or that would be written) per table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub roles: usize,
    pub departments: usize,
    pub categories: usize,
    pub users: usize,
}

impl SeedCounts {
    pub fn planned(dataset: &SeedDataset, users: &[NormalizedUser]) -> Self {
        Self {
            roles: dataset.roles.len(),
            departments: dataset.departments.len(),
            categories: dataset.categories.len(),
            users: users.len(),
        }
    }
}

/// What a seeder run did, or would have done in dry-run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub counts: SeedCounts,
    pub dry_run: bool,
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would upsert" } else { "Upserted" };
        writeln!(f, "{} roles: {}", verb, self.counts.roles)?;
        writeln!(f, "{} departments: {}", verb, self.counts.departments)?;
        writeln!(f, "{} report categories: {}", verb, self.counts.categories)?;
        write!(f, "{} users: {}", verb, self.counts.users)
    }
}

/// Hash passwords and resolve timestamps. `now` is the run's start time and
/// stands in for any missing `created_at`.
pub fn normalize_users(
    users: &[SeedUser],
    cost: u32,
    now: DateTime<Utc>,
) -> Result<Vec<NormalizedUser>, AppError> {
    users
        .iter()
        .map(|user| {
            let created_at = parse_timestamp(user.created_at, now)?;
            let password_hash = auth::hash_password(user.password, cost).map_err(|e| {
                AppError::Preflight(format!("Failed to hash password for {}: {:#}", user.email, e))
            })?;

            Ok(NormalizedUser {
                id: user.id,
                email: user.email.to_string(),
                password_hash,
                name: user.name.to_string(),
                is_active: user.is_active,
                created_at,
                role_id: user.role_id,
                department_id: user.department_id,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const USERS: &[SeedUser] = &[
        SeedUser {
            id: 7,
            email: "a@example.com",
            password: "Secret123!",
            name: "A",
            is_active: true,
            created_at: Some("2025-01-01T00:00:00Z"),
            role_id: 1,
            department_id: Some(3),
        },
        SeedUser {
            id: 8,
            email: "b@example.com",
            password: "Other123!",
            name: "B",
            is_active: false,
            created_at: None,
            role_id: 2,
            department_id: None,
        },
    ];

    #[test]
    fn test_normalize_users() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let rows = normalize_users(USERS, 4, now).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email, "a@example.com");
        assert_eq!(rows[0].created_at, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(rows[0].department_id, Some(3));
        assert!(auth::verify_password("Secret123!", &rows[0].password_hash).unwrap());
        assert_ne!(rows[0].password_hash, "Secret123!");

        assert_eq!(rows[1].created_at, now);
        assert!(!rows[1].is_active);
        assert_eq!(rows[1].department_id, None);
    }

    #[test]
    fn test_normalize_rejects_bad_timestamp() {
        let users = [SeedUser {
            created_at: Some("yesterday"),
            ..USERS[0]
        }];
        let err = normalize_users(&users, 4, Utc::now()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Invalid created_at timestamp: yesterday"));
    }

    #[test]
    fn test_planned_counts() {
        let dataset = datasets::REFERENCE;
        let rows = normalize_users(dataset.users, 4, Utc::now()).unwrap();
        let counts = SeedCounts::planned(&dataset, &rows);
        assert_eq!(counts.roles, 2);
        assert_eq!(counts.departments, 1);
        assert_eq!(counts.categories, 1);
        assert_eq!(counts.users, 2);
    }

    #[test]
    fn test_outcome_display() {
        let counts = SeedCounts {
            roles: 0,
            departments: 0,
            categories: 0,
            users: 2,
        };
        let dry = SeedOutcome { counts, dry_run: true }.to_string();
        assert_eq!(
            dry,
            "Would upsert roles: 0\nWould upsert departments: 0\nWould upsert report categories: 0\nWould upsert users: 2"
        );

        let live = SeedOutcome { counts, dry_run: false }.to_string();
        assert!(live.starts_with("Upserted roles: 0\n"));
        assert!(live.ends_with("Upserted users: 2"));
    }
}

// Password hashing for seeded accounts

use anyhow::{Context, Result};
use bcrypt::{hash, verify};

use crate::error::AppError;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;
pub const DEFAULT_COST: u32 = 10;

// Reject cost factors bcrypt would refuse, before touching the database
pub fn validate_cost(cost: u32) -> Result<(), AppError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(AppError::Usage(format!(
            "bcrypt cost must be between {} and {}.",
            MIN_COST, MAX_COST
        )));
    }
    Ok(())
}

// Hash a password using bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).context("Failed to hash password")
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}

/// Hash and verify a sample password at the cheapest cost so a broken hasher shows up
/// before any connection is made.
pub fn self_test() -> Result<(), AppError> {
    let sample = "agarthan-self-test";
    let hashed = hash_password(sample, MIN_COST).map_err(|e| {
        AppError::Preflight(format!(
            "Password hashing is unavailable ({:#}). Rebuild with the bcrypt dependency enabled.",
            e
        ))
    })?;

    match verify_password(sample, &hashed) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::Preflight(
            "Password hashing self-test failed: sample did not verify.".to_string(),
        )),
        Err(e) => Err(AppError::Preflight(format!(
            "Password hashing self-test failed: {:#}",
            e
        ))),
    }
}

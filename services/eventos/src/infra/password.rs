//! Argon2id password hashing. Hashes are self-describing PHC strings.
//! Both entry points run on the blocking pool.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::EventosServiceError;

pub async fn hash_password(password: String) -> Result<String, EventosServiceError> {
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| anyhow::anyhow!("hash task failed: {e}"))?
}

/// `false` on mismatch and on a stored hash that does not parse.
pub async fn verify_password(
    password: String,
    stored_hash: String,
) -> Result<bool, EventosServiceError> {
    let matches = tokio::task::spawn_blocking(move || verify_blocking(&password, &stored_hash))
        .await
        .map_err(|e| anyhow::anyhow!("verify task failed: {e}"))?;
    Ok(matches)
}

fn hash_blocking(password: &str) -> Result<String, EventosServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

fn verify_blocking(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

//! API key issuance and verification.
//!
//! Every station receives one API key at registration. The plaintext is
//! returned to the caller exactly once; only a bcrypt hash is stored. bcrypt
//! embeds its own salt and cost factor in the hash string, and its
//! comparison does not short-circuit on the first differing byte.

use crate::{db::DbPool, error::AppError, models::station::Station};
use bcrypt::{DEFAULT_COST, hash, verify};
use uuid::Uuid;

/// Entropy per issued key. 24 random bytes hex-encode to 48 characters.
const API_KEY_BYTES: usize = 24;

/// Generate a new plaintext API key.
///
/// # Output
///
/// 48 hex characters (24 random bytes from the OS generator)
pub fn issue_api_key() -> String {
    let bytes: [u8; API_KEY_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Hash a plaintext API key for storage.
pub fn hash_api_key(api_key: &str) -> Result<String, bcrypt::BcryptError> {
    hash(api_key, DEFAULT_COST)
}

/// Check a presented key against a stored hash.
///
/// Any failure, including a malformed stored hash, counts as a mismatch.
/// This function never errors; callers only ever see true or false.
pub fn verify_api_key(presented: &str, stored_hash: &str) -> bool {
    verify(presented, stored_hash).unwrap_or(false)
}

/// Authenticate a request against a station's stored credential.
///
/// # Flow
///
/// 1. Load the station by id
/// 2. If the station does not exist: `StationNotFound` (404)
/// 3. If the presented key does not verify: `InvalidApiKey` (401)
///
/// The two failures are distinguished by status code, and the station
/// lookup happens before any hash comparison.
pub async fn authenticate(
    pool: &DbPool,
    station_id: Uuid,
    presented: &str,
) -> Result<(), AppError> {
    let station = sqlx::query_as::<_, Station>(
        "SELECT station_id, name, location_text, api_key_hash, created_at
         FROM stations
         WHERE station_id = $1",
    )
    .bind(station_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::StationNotFound)?;

    if verify_api_key(presented, &station.api_key_hash) {
        tracing::debug!(%station_id, station = %station.name, "Station authenticated");
        Ok(())
    } else {
        Err(AppError::InvalidApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn issued_keys_are_48_hex_characters() {
        let key = issue_api_key();
        assert_eq!(key.len(), 48);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn issued_keys_are_unique() {
        assert_ne!(issue_api_key(), issue_api_key());
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let key = issue_api_key();
        let stored = hash_api_key(&key).unwrap();

        assert!(verify_api_key(&key, &stored));
        assert!(!verify_api_key("wrong-key", &stored));
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        assert!(!verify_api_key("anything", "not-a-bcrypt-hash"));
    }
}

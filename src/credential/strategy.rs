//! Strategy types and the default Argon2id hash/verify pair.
//! The configuration is centralized so that every credential field using the
//! defaults shares the same memory, iteration, and parallelism parameters.

use argon2::password_hash::SaltString;
use argon2::{
    password_hash, Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuned Argon2id parameters for interactive credential checks.
/// - memory_cost: 19 MiB keeps GPU cracking expensive while remaining server friendly
/// - time_cost: 3 iterations for interactive latency without sacrificing safety
/// - parallelism: 1 thread to keep resource usage predictable on shared hosts
const MEMORY_COST_KIB: u32 = 19 * 1024;
const TIME_COST: u32 = 3;
const PARALLELISM: u32 = 1;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("no committed hash or pending secret to verify against")]
    NoHashAvailable,
    #[error("verify strategy failed: {0}")]
    StrategyFailed(String),
}

/// One-way representation stored in place of a plaintext secret. The field
/// core never parses it; the default strategy emits self-describing PHC
/// strings (algorithm + parameters + salt + digest), so stored hashes remain
/// verifiable across parameter upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueHash(String);

impl OpaqueHash {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for OpaqueHash {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

/// Injectable hashing strategy: plaintext in, opaque representation out.
pub type HashFn = Box<dyn Fn(&str) -> Result<OpaqueHash, EncodeError> + Send + Sync>;

/// Injectable verification strategy: a candidate plaintext against a stored
/// representation. A clean mismatch is `Ok(false)`; an uninterpretable stored
/// representation is `Err(StrategyFailed)`.
pub type VerifyFn = Box<dyn Fn(&str, &OpaqueHash) -> Result<bool, VerifyError> + Send + Sync>;

fn argon2_config() -> Result<Argon2<'static>, password_hash::Error> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Default hashing strategy: Argon2id with a fresh random salt per call,
/// emitting the PHC string form.
pub fn default_hash_strategy() -> HashFn {
    Box::new(|plaintext| {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = argon2_config().map_err(|e| EncodeError::HashingFailed(format!("{e}")))?;
        let encoded = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| EncodeError::HashingFailed(format!("{e}")))?
            .to_string();
        Ok(OpaqueHash::new(encoded))
    })
}

/// Default verification strategy matching [`default_hash_strategy`]. The PHC
/// string carries its own parameters, so hashes produced under older tuning
/// still verify.
pub fn default_verify_strategy() -> VerifyFn {
    Box::new(|candidate, stored| {
        let parsed = PasswordHash::new(stored.as_str())
            .map_err(|e| VerifyError::StrategyFailed(format!("unparseable stored hash: {e}")))?;
        let argon2 = argon2_config().map_err(|e| VerifyError::StrategyFailed(format!("{e}")))?;
        match argon2.verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(VerifyError::StrategyFailed(format!("{e}"))),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{default_hash_strategy, default_verify_strategy, OpaqueHash, VerifyError};

    #[test]
    fn hashes_and_verifies_passwords() {
        let hash = default_hash_strategy();
        let verify = default_verify_strategy();
        let stored = hash("Tr0ub4dor").expect("hashing should succeed");
        assert_ne!(stored.as_str(), "Tr0ub4dor");
        assert!(stored.as_str().starts_with("$argon2id$"));
        assert!(verify("Tr0ub4dor", &stored).expect("verification should run"));
        assert!(!verify("wrong", &stored).expect("verification should run"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hash = default_hash_strategy();
        let first = hash("same-secret").expect("hashing should succeed");
        let second = hash("same-secret").expect("hashing should succeed");
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_foreign_hash_formats() {
        let verify = default_verify_strategy();
        let bogus = OpaqueHash::new("not-a-phc-string");
        let err = verify("anything", &bogus).unwrap_err();
        assert!(matches!(err, VerifyError::StrategyFailed(_)));
    }
}

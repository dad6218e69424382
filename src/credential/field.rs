//! The credential field itself: a value container that hashes on write,
//! caches the opaque representation for verification, and never hands the
//! plaintext back out.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::credential::strategy::{
    default_hash_strategy, default_verify_strategy, EncodeError, HashFn, OpaqueHash, VerifyError,
    VerifyFn,
};

/// Where a decoded value is headed. Only `Rendering` destinations receive the
/// opaque hash back from [`CredentialField::decode`]; everything else gets no
/// value, so a loaded record re-serialized to storage cannot forge one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationKind {
    Rendering,
    Storage,
}

/// Lifecycle position of a field instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    PendingPlaintext,
    Hashed,
}

/// One logical credential attribute on a record.
///
/// Lifecycle: `set` stores an uncommitted plaintext and drops any cached
/// hash; `encode`/`commit` turn the plaintext into an opaque hash at save
/// time; `decode` adopts a hash read back from storage; `verify` checks a
/// candidate against whichever of the two the field currently holds.
///
/// Cloning copies the pending value and cached hash but rebinds both
/// strategies to the defaults. Custom strategies must be re-injected on the
/// clone deliberately; two clones must never share captured closures.
pub struct CredentialField {
    pending: Option<Zeroizing<String>>,
    cached_hash: Option<OpaqueHash>,
    hash_with: HashFn,
    verify_with: VerifyFn,
}

impl CredentialField {
    /// Builds a field bound to the default Argon2id strategies.
    pub fn new() -> Self {
        Self::with_strategies(default_hash_strategy(), default_verify_strategy())
    }

    /// Builds a field with a custom hash/verify strategy pair.
    pub fn with_strategies(hash_with: HashFn, verify_with: VerifyFn) -> Self {
        Self {
            pending: None,
            cached_hash: None,
            hash_with,
            verify_with,
        }
    }

    /// Replaces the hashing strategy for subsequent commits.
    pub fn set_hash_strategy(&mut self, hash_with: HashFn) {
        self.hash_with = hash_with;
    }

    /// Replaces the verification strategy for subsequent checks.
    pub fn set_verify_strategy(&mut self, verify_with: VerifyFn) {
        self.verify_with = verify_with;
    }

    /// Assigns a new raw value (or clears it with `None`). Any cached hash is
    /// dropped unconditionally, even when the value is unchanged: a stale
    /// hash must never survive a reassignment, and hashing is recomputed at
    /// the next commit rather than reused. The previous pending plaintext is
    /// zeroized as it drops.
    pub fn set(&mut self, value: Option<String>) {
        self.cached_hash = None;
        self.pending = value.map(Zeroizing::new);
    }

    /// Save-time hook: turns the supplied plaintext into the value to
    /// persist. With no plaintext this returns `Ok(None)` and leaves the
    /// cached hash untouched, so saving a record without a new password does
    /// not erase the stored credential. A strategy failure leaves the field
    /// state exactly as it was.
    pub fn encode(&mut self, pending_plaintext: Option<&str>) -> Result<Option<OpaqueHash>, EncodeError> {
        let Some(plaintext) = pending_plaintext else {
            return Ok(None);
        };
        let hashed = (self.hash_with)(plaintext)?;
        self.cached_hash = Some(hashed.clone());
        Ok(Some(hashed))
    }

    /// Commits the field's own pending plaintext through [`encode`]. On
    /// success the pending plaintext is dropped (and zeroized); on failure it
    /// is kept so the caller can retry or re-prompt.
    ///
    /// [`encode`]: CredentialField::encode
    pub fn commit(&mut self) -> Result<Option<OpaqueHash>, EncodeError> {
        let pending = self.pending.take();
        match self.encode(pending.as_deref().map(String::as_str)) {
            Ok(hashed) => Ok(hashed),
            Err(e) => {
                self.pending = pending;
                Err(e)
            }
        }
    }

    /// Load-time hook: adopts an opaque representation read from storage.
    /// The hash is cached verbatim, never re-hashed, and any uncommitted
    /// plaintext is discarded; the loaded state supersedes it. The return
    /// value is the hash string for `Rendering` destinations only (so a UI
    /// can show an opaque token or masked placeholder); all other
    /// destinations get `None`, keeping the representation from flowing back
    /// out through the record's value channel.
    pub fn decode(&mut self, stored_hash: String, destination: DestinationKind) -> Option<String> {
        let rendered = matches!(destination, DestinationKind::Rendering).then(|| stored_hash.clone());
        self.pending = None;
        self.cached_hash = Some(OpaqueHash::new(stored_hash));
        rendered
    }

    /// Checks a plaintext candidate against the field. A cached hash wins and
    /// goes through the verify strategy. With no hash yet, the candidate is
    /// compared to the pending plaintext by exact equality — a just-set but
    /// uncommitted password (e.g. a confirmation field before save) must
    /// still be verifiable. With neither, verification cannot proceed.
    pub fn verify(&self, candidate: &str) -> Result<bool, VerifyError> {
        if let Some(stored) = &self.cached_hash {
            return (self.verify_with)(candidate, stored);
        }
        match &self.pending {
            Some(pending) => Ok(pending.as_str() == candidate),
            None => Err(VerifyError::NoHashAvailable),
        }
    }

    /// The opaque representation currently held, if any.
    pub fn cached_hash(&self) -> Option<&OpaqueHash> {
        self.cached_hash.as_ref()
    }

    /// Whether an uncommitted plaintext is currently held.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> FieldState {
        if self.cached_hash.is_some() {
            FieldState::Hashed
        } else if self.pending.is_some() {
            FieldState::PendingPlaintext
        } else {
            FieldState::Empty
        }
    }
}

impl Default for CredentialField {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CredentialField {
    /// Copies the pending value and cached hash; strategy bindings reset to
    /// the defaults and must be re-injected if the clone needs custom ones.
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            cached_hash: self.cached_hash.clone(),
            hash_with: default_hash_strategy(),
            verify_with: default_verify_strategy(),
        }
    }
}

impl fmt::Debug for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialField")
            .field("pending", &self.pending.as_ref().map(|_| "<redacted>"))
            .field("cached_hash", &self.cached_hash)
            .finish_non_exhaustive()
    }
}

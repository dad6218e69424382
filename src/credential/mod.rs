//! Credential field core: the field state machine plus injectable hashing and
//! verification strategies. Each submodule keeps a single responsibility so
//! the secret-handling surface stays small and auditable.

pub mod field;
pub mod strategy;

pub use field::{CredentialField, DestinationKind, FieldState};
pub use strategy::{
    default_hash_strategy, default_verify_strategy, EncodeError, HashFn, OpaqueHash, VerifyError,
    VerifyFn,
};

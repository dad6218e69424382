//! Hash-on-write credential handling. A [`CredentialField`] owns one secret's
//! lifecycle: plaintext goes in, an opaque one-way representation comes out at
//! commit time, and verification runs against the retained representation so
//! the original secret is never re-exposed on read.

pub mod credential;
pub mod suggest;

pub use credential::field::{CredentialField, DestinationKind, FieldState};
pub use credential::strategy::{EncodeError, HashFn, OpaqueHash, VerifyError, VerifyFn};

//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: digest algorithm
//! and how missing folders are treated during chain walks.

use serde::{Deserialize, Serialize};

/// Digest used for stored password hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    // Future:
    // Argon2id,
}

/// What a chain walk does when a folder id is absent from the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingFolderPolicy {
    /// Unknown folders block access (fail closed)
    #[default]
    Deny,
    /// Unknown folders are treated like the root
    Allow,
}

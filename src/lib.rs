// src/lib.rs
//! folder-lock — password protection for a tree of folders
//!
//! Features:
//! - Salted SHA-256 stored hashes (`base64(salt):base64(digest)`)
//! - Session-scoped unlock tracking, never persisted
//! - Inherited locks: a locked folder hides everything beneath it
//! - Bulk filtering of links and folders against a folder snapshot

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::FolderPassword;
pub use config::{load as load_config, AccessConfig, Config};
pub use crate::core::{
    apply_protection, hash_password, hash_secret, inherits_protection, verify_password,
    verify_secret, verify_stored, AccessSession, Contained, Folder, FolderId, FolderSnapshot,
    Link, ProtectionChange, Result as CoreResult, StoredHash,
};
pub use enums::{DigestAlgorithm, MissingFolderPolicy};
pub use error::CoreError;

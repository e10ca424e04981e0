//! Shared constants — hashing parameters and access defaults

/// Random salt length in bytes for every stored hash
pub const SALT_LEN: usize = 16;

/// SHA-256 digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// Separator between the base64 salt and the base64 digest
pub const HASH_SEPARATOR: char = ':';

/// Maximum number of folders visited while walking a parent chain.
// Deeper chains (or cycles) are treated as locked.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;

/// Raw parent id the data layer stores for folders and links in the root
pub const ROOT_FOLDER_ID: i64 = -1;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "FOLDER_LOCK_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "folder-lock.toml";

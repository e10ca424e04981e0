//! Changes to a folder's own protection, as made from the folder editor

use tracing::debug;

use crate::config::AccessConfig;
use crate::core::credential::{hash_password, StoredHash};
use crate::core::folder::{Folder, FolderSnapshot};

/// What the editor asks for when a folder record is saved
#[derive(Clone, PartialEq, Eq)]
pub enum ProtectionChange {
    /// Password field left at its masked placeholder
    Keep,
    /// New plaintext password, already validated by the form
    Set(String),
    Remove,
}

// Plaintext stays out of debug output
impl std::fmt::Debug for ProtectionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtectionChange::Keep => f.write_str("Keep"),
            ProtectionChange::Set(_) => f.write_str("Set(..)"),
            ProtectionChange::Remove => f.write_str("Remove"),
        }
    }
}

/// New stored-hash field for a folder record. `Keep` never re-hashes.
pub fn apply_protection(
    current: Option<StoredHash>,
    change: ProtectionChange,
) -> Option<StoredHash> {
    match change {
        ProtectionChange::Keep => current,
        ProtectionChange::Set(plaintext) => Some(hash_password(&plaintext)),
        ProtectionChange::Remove => None,
    }
}

/// True when some ancestor carries a password, i.e. the folder is already
/// covered by inherited protection. Missing ancestors end the walk.
pub fn inherits_protection(
    folder: &Folder,
    snapshot: &FolderSnapshot,
    config: &AccessConfig,
) -> bool {
    let mut current = folder.parent;
    for _ in 0..config.effective_depth() {
        let Some(parent) = current.and_then(|id| snapshot.get(id)) else {
            return false;
        };
        if parent.is_protected() {
            return true;
        }
        current = parent.parent;
    }

    if current.is_none() {
        return false;
    }
    debug!(folder = folder.id.0, "ancestor walk hit depth limit");
    // Over-deep chains are treated as protected
    true
}

// src/core/session.rs
//! Access session — which folders are unlocked right now, and what that makes visible
//!
//! A session is an ordinary value: construct one per application session,
//! share it by reference or `Arc`, and call [`AccessSession::reset`] at the
//! session boundary. Nothing is persisted.
//!
//! Accessibility is decided by walking the parent chain of a folder
//! snapshot. A folder is *open* when it is unprotected or explicitly
//! unlocked, and its parent is open; the root is always open. Locks flow
//! down the tree, never up, and unlocking a folder never marks its
//! children; they see it while walking.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::AccessConfig;
use crate::consts::ROOT_FOLDER_ID;
use crate::core::credential::verify_stored;
use crate::core::folder::{Contained, Folder, FolderId, FolderSnapshot};
use crate::enums::MissingFolderPolicy;

#[derive(Debug, Default)]
pub struct AccessSession {
    config: AccessConfig,
    unlocked: RwLock<HashSet<FolderId>>,
}

impl AccessSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AccessConfig) -> Self {
        Self {
            config,
            unlocked: RwLock::new(HashSet::new()),
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Record that `id`'s password was verified. Idempotent, never cascades.
    pub fn unlock(&self, id: FolderId) {
        if self.unlocked.write().insert(id) {
            debug!(folder = id.0, "folder unlocked");
        }
    }

    pub fn is_unlocked(&self, id: FolderId) -> bool {
        self.unlocked.read().contains(&id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.read().len()
    }

    /// Forget every unlock; call at the application-session boundary
    pub fn reset(&self) {
        let mut unlocked = self.unlocked.write();
        debug!(cleared = unlocked.len(), "access session reset");
        unlocked.clear();
    }

    /// Verify `password` against the folder's stored hash and unlock it on success.
    ///
    /// An unprotected folder needs no password: returns `true` and records nothing.
    pub fn unlock_with_password(&self, folder: &Folder, password: &str) -> bool {
        let Some(stored) = folder.password.as_ref() else {
            return true;
        };

        if verify_stored(password, stored) {
            self.unlock(folder.id);
            true
        } else {
            debug!(folder = folder.id.0, "password rejected");
            false
        }
    }

    /// Whether `folder` itself can be opened, taking inherited locks into account
    pub fn is_accessible(&self, folder: &Folder, snapshot: &FolderSnapshot) -> bool {
        let unlocked = self.unlocked.read();
        self.folder_open(&unlocked, folder, snapshot)
    }

    /// Whether items whose direct container is `container` may be shown
    pub fn is_chain_accessible(
        &self,
        container: Option<FolderId>,
        snapshot: &FolderSnapshot,
    ) -> bool {
        let unlocked = self.unlocked.read();
        let origin = container.unwrap_or(FolderId(ROOT_FOLDER_ID));
        self.walk(
            &unlocked,
            origin,
            container,
            snapshot,
            self.config.effective_depth(),
        )
    }

    /// Keep the items whose container chain is open, preserving order
    pub fn filter_visible<T, I>(&self, items: I, snapshot: &FolderSnapshot) -> Vec<T>
    where
        T: Contained,
        I: IntoIterator<Item = T>,
    {
        let unlocked = self.unlocked.read();
        let budget = self.config.effective_depth();
        items
            .into_iter()
            .filter(|item| {
                let container = item.container();
                let origin = container.unwrap_or(FolderId(ROOT_FOLDER_ID));
                self.walk(&unlocked, origin, container, snapshot, budget)
            })
            .collect()
    }

    /// Every folder in the snapshot that is itself accessible, ordered by id
    pub fn accessible_folders<'a>(&self, snapshot: &'a FolderSnapshot) -> Vec<&'a Folder> {
        let unlocked = self.unlocked.read();
        let mut open: Vec<&Folder> = snapshot
            .iter()
            .filter(|folder| self.folder_open(&unlocked, folder, snapshot))
            .collect();
        open.sort_by_key(|folder| folder.id);
        open
    }

    fn folder_open(
        &self,
        unlocked: &HashSet<FolderId>,
        folder: &Folder,
        snapshot: &FolderSnapshot,
    ) -> bool {
        if folder.is_protected() && !unlocked.contains(&folder.id) {
            return false;
        }
        // The folder itself used one step of the budget
        let budget = self.config.effective_depth() - 1;
        self.walk(unlocked, folder.id, folder.parent, snapshot, budget)
    }

    /// Walk from `start` towards the root, visiting at most `budget` folders.
    ///
    /// `origin` is only used for logging.
    fn walk(
        &self,
        unlocked: &HashSet<FolderId>,
        origin: FolderId,
        start: Option<FolderId>,
        snapshot: &FolderSnapshot,
        budget: usize,
    ) -> bool {
        let mut current = start;
        for _ in 0..budget {
            let Some(id) = current else {
                return true;
            };
            let Some(folder) = snapshot.get(id) else {
                return self.on_missing(origin, id);
            };
            if folder.is_protected() && !unlocked.contains(&id) {
                return false;
            }
            current = folder.parent;
        }

        if current.is_none() {
            return true;
        }
        warn!(
            folder = origin.0,
            max_depth = self.config.effective_depth(),
            "parent chain exceeds depth limit (cycle?), treating as locked"
        );
        false
    }

    fn on_missing(&self, origin: FolderId, missing: FolderId) -> bool {
        debug!(
            folder = origin.0,
            missing = missing.0,
            policy = ?self.config.missing_folder,
            "folder missing from snapshot"
        );
        match self.config.missing_folder {
            MissingFolderPolicy::Deny => false,
            MissingFolderPolicy::Allow => true,
        }
    }
}

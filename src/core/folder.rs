//! Read-only folder snapshot types
//!
//! The data layer owns folders and links; the access core only ever sees
//! an immutable [`FolderSnapshot`] supplied fresh for each query. A parent
//! of `None` means the folder (or link) sits in the root.

use std::collections::hash_map::{self, HashMap};

use serde::{Deserialize, Serialize};

use crate::consts::ROOT_FOLDER_ID;
use crate::core::credential::StoredHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub i64);

impl FolderId {
    /// Map a stored parent id to a parent; the root sentinel becomes `None`
    pub fn parent_from_raw(raw: i64) -> Option<FolderId> {
        (raw != ROOT_FOLDER_ID).then_some(FolderId(raw))
    }

    /// Inverse of [`FolderId::parent_from_raw`] for writing records back
    pub fn raw_parent(parent: Option<FolderId>) -> i64 {
        parent.map_or(ROOT_FOLDER_ID, |id| id.0)
    }
}

impl From<i64> for FolderId {
    fn from(raw: i64) -> Self {
        FolderId(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    #[serde(default)]
    pub parent: Option<FolderId>,
    #[serde(default)]
    pub password: Option<StoredHash>,
}

impl Folder {
    pub fn root(id: impl Into<FolderId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            password: None,
        }
    }

    pub fn child(id: impl Into<FolderId>, parent: impl Into<FolderId>) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
            password: None,
        }
    }

    pub fn with_password(mut self, password: StoredHash) -> Self {
        self.password = Some(password);
        self
    }

    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }
}

/// A non-folder item; links never carry passwords of their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    #[serde(default)]
    pub folder: Option<FolderId>,
}

impl Link {
    pub fn new(id: i64, folder: Option<FolderId>) -> Self {
        Self { id, folder }
    }
}

/// Anything that sits directly inside a folder (or the root)
pub trait Contained {
    fn container(&self) -> Option<FolderId>;
}

impl Contained for Folder {
    fn container(&self) -> Option<FolderId> {
        self.parent
    }
}

impl Contained for Link {
    fn container(&self) -> Option<FolderId> {
        self.folder
    }
}

impl<T: Contained + ?Sized> Contained for &T {
    fn container(&self) -> Option<FolderId> {
        (**self).container()
    }
}

/// Folder tree as it exists at query time
#[derive(Debug, Clone, Default)]
pub struct FolderSnapshot {
    folders: HashMap<FolderId, Folder>,
}

impl FolderSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn iter(&self) -> hash_map::Values<'_, FolderId, Folder> {
        self.folders.values()
    }
}

impl FromIterator<Folder> for FolderSnapshot {
    fn from_iter<I: IntoIterator<Item = Folder>>(iter: I) -> Self {
        Self {
            folders: iter.into_iter().map(|f| (f.id, f)).collect(),
        }
    }
}

impl From<HashMap<FolderId, Folder>> for FolderSnapshot {
    fn from(folders: HashMap<FolderId, Folder>) -> Self {
        Self { folders }
    }
}

impl From<Vec<Folder>> for FolderSnapshot {
    fn from(folders: Vec<Folder>) -> Self {
        folders.into_iter().collect()
    }
}

// tests/common.rs
//! Shared test utilities — logging setup and folder fixtures

#![allow(dead_code)]

use folder_lock::{hash_password, Folder, FolderSnapshot};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; respects RUST_LOG=
/// Safe to call from every test
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub const PASSWORD: &str = "hunter22";

/// A (root, protected) → B → C, where only A carries a password
pub fn locked_chain() -> (Folder, Folder, Folder, FolderSnapshot) {
    let a = Folder::root(1).with_password(hash_password(PASSWORD));
    let b = Folder::child(2, 1);
    let c = Folder::child(3, 2);
    let snapshot = FolderSnapshot::from(vec![a.clone(), b.clone(), c.clone()]);
    (a, b, c, snapshot)
}

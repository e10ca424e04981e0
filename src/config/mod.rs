// src/config/mod.rs
//! Configuration system for folder-lock
//!
//! TOML file with serde defaults for every field; the path comes from
//! `FOLDER_LOCK_CONFIG`. Nothing here is global: callers hand the loaded
//! [`AccessConfig`] to each session they construct.

pub use app::{from_toml_str, load, load_from, AccessConfig, Config};

mod app;
mod defaults;

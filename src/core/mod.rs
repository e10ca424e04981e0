// src/core/mod.rs
pub mod credential;
pub mod folder;
pub mod protection;
pub mod session;

pub use credential::*;
pub use folder::*;
pub use protection::*;
pub use session::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;

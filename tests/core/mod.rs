// tests/core/mod.rs

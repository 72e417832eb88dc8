//! Shared utilities for jaruid.
//!
//! This crate provides cross-cutting concerns used by all other jaruid
//! crates: error types, content hashing, filesystem helpers, and terminal
//! progress indicators. It is intentionally free of domain knowledge about
//! jars or Maven.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;

use std::path::{Path, PathBuf};

/// Returns the path to the jaruid data directory (`~/.jaruid/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".jaruid")
}

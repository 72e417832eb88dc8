//! Maven repository protocol: settings discovery, download, metadata
//! parsing, temp local cache, and the Repo Checker online verification
//! engine (C5/C9).

pub mod auth;
pub mod cache;
pub mod checker;
pub mod download;
pub mod metadata;
pub mod repository;
pub mod settings;

pub use checker::RepoChecker;
pub use repository::MavenRepository;

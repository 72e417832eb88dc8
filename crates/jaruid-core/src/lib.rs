//! Core data types for jaruid.
//!
//! This crate defines the data model shared by every other jaruid crate:
//! UID components and their validity rules, scored candidates, the
//! per-jar analysis bucket, online match classification, the final
//! per-jar report, and layered configuration.
//!
//! This crate is intentionally free of async code, network I/O, and zip
//! parsing — it only models data and the pure aggregation rule (§4.4 of
//! the design) that builds an `AnalysisBucket` from scored tuples.

pub mod aggregator;
pub mod candidate;
pub mod config;
pub mod jar;
pub mod online;
pub mod report;
pub mod uid;

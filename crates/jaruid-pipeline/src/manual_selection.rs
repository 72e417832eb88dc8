//! Manual Selection collaborator (C11): consumed by the Pipeline at
//! consolidation time whenever auto-selection (§4.8) does not succeed.
//! The core Pipeline depends only on this trait; a terminal-backed default
//! implementation lives outside this crate.

use async_trait::async_trait;

use jaruid_core::candidate::AnalysisBucket;
use jaruid_core::online::UidCheck;
use jaruid_core::uid::{MavenUid, MavenUidComponent};
use std::collections::HashMap;

/// The operator's decision for a jar that auto-selection could not resolve.
#[derive(Debug, Clone)]
pub enum ManualDecision {
    Selected(MavenUid),
    Skip,
}

#[async_trait]
pub trait ManualSelection: Send + Sync {
    /// Present the jar's ranked candidates and any online proposals, and
    /// obtain either a manually-entered `MavenUid` or a skip signal.
    async fn select(
        &self,
        jar_name: &str,
        buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
        online_results: &[UidCheck],
    ) -> ManualDecision;
}

/// A non-interactive implementation that always skips: used when
/// `--skip-not-found` is set, or in tests.
pub struct AlwaysSkip;

#[async_trait]
impl ManualSelection for AlwaysSkip {
    async fn select(
        &self,
        _jar_name: &str,
        _buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
        _online_results: &[UidCheck],
    ) -> ManualDecision {
        ManualDecision::Skip
    }
}

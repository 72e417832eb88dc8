//! Offline evidence analyzers.
//!
//! Every analyzer shares one interface: given a [`Collector`] and its own
//! input view of a jar, it emits zero or more scored candidates. Analyzers
//! are pure and independent of each other; only the post-analyzer sees the
//! aggregate.

pub mod class_filepath;
pub mod class_timestamp;
pub mod filename;
pub mod manifest;
pub mod pom;
pub mod post;

use jaruid_core::aggregator::ScoredValue;
use jaruid_core::candidate::ValueSource;
use jaruid_core::uid::MavenUidComponent;

/// Which analyzer emitted a candidate, used as the `analyzer` tag on its
/// [`ValueSource`] and to key the post-analyzer's view of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerKind {
    Manifest,
    Filename,
    Pom,
    ClassFilepath,
    ClassTimestamp,
}

impl AnalyzerKind {
    pub fn tag(&self) -> &'static str {
        match self {
            AnalyzerKind::Manifest => "manifest",
            AnalyzerKind::Filename => "filename",
            AnalyzerKind::Pom => "pom",
            AnalyzerKind::ClassFilepath => "classFilepath",
            AnalyzerKind::ClassTimestamp => "classTimestamp",
        }
    }
}

/// Sink that analyzers emit scored candidates into.
#[derive(Debug, Default)]
pub struct Collector {
    values: Vec<ScoredValue>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(
        &mut self,
        kind: AnalyzerKind,
        component: MavenUidComponent,
        value: impl Into<String>,
        score: u8,
        detail: impl Into<String>,
    ) {
        self.values.push(ScoredValue {
            component,
            value: value.into(),
            source: ValueSource::new(kind.tag(), score, detail),
        });
    }

    pub fn into_values(self) -> Vec<ScoredValue> {
        self.values
    }
}

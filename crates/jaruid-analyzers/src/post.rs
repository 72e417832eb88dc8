//! Post-analyzer (§4.3.6): runs after aggregation and may cross-promote a
//! derived candidate by looking at the assembled buckets. Deterministic;
//! never removes evidence, only adds.

use std::collections::HashMap;

use jaruid_core::aggregator::ScoredValue;
use jaruid_core::candidate::{AnalysisBucket, ValueSource};
use jaruid_core::uid::MavenUidComponent;

use crate::AnalyzerKind;

const KIND: AnalyzerKind = AnalyzerKind::ClassTimestamp;

/// If both groupId and artifactId have a top candidate backed by ≥2
/// distinct analyzers, and a version candidate from the class-timestamp
/// analyzer exists, boost that version candidate's score by one source
/// (capped at the usual 1-4 range) — corroborating evidence from two
/// independently-strong components raises confidence in the weak
/// timestamp-derived version.
pub fn run(buckets: &HashMap<MavenUidComponent, AnalysisBucket>) -> Vec<ScoredValue> {
    let group_strong = buckets
        .get(&MavenUidComponent::GroupId)
        .and_then(|b| b.top())
        .map(|c| c.sources.len() >= 2)
        .unwrap_or(false);
    let artifact_strong = buckets
        .get(&MavenUidComponent::ArtifactId)
        .and_then(|b| b.top())
        .map(|c| c.sources.len() >= 2)
        .unwrap_or(false);

    if !(group_strong && artifact_strong) {
        return Vec::new();
    }

    let Some(version_bucket) = buckets.get(&MavenUidComponent::Version) else {
        return Vec::new();
    };
    let Some(top_version) = version_bucket.top() else {
        return Vec::new();
    };
    if !top_version
        .sources
        .iter()
        .any(|s| s.analyzer == AnalyzerKind::ClassTimestamp.tag())
    {
        return Vec::new();
    }

    vec![ScoredValue {
        component: MavenUidComponent::Version,
        value: top_version.value.clone(),
        source: ValueSource::new(
            KIND.tag(),
            1,
            "corroborated by strong groupId and artifactId consensus",
        ),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaruid_core::candidate::ValueCandidate;

    fn bucket(component: MavenUidComponent, candidates: Vec<ValueCandidate>) -> AnalysisBucket {
        AnalysisBucket {
            component: Some(component),
            candidates,
        }
    }

    #[test]
    fn boosts_version_when_group_and_artifact_are_strong() {
        let mut buckets = HashMap::new();
        buckets.insert(
            MavenUidComponent::GroupId,
            bucket(
                MavenUidComponent::GroupId,
                vec![ValueCandidate {
                    value: "org.example".into(),
                    sources: vec![
                        ValueSource::new("manifest", 3, "x"),
                        ValueSource::new("pom", 4, "y"),
                    ],
                }],
            ),
        );
        buckets.insert(
            MavenUidComponent::ArtifactId,
            bucket(
                MavenUidComponent::ArtifactId,
                vec![ValueCandidate {
                    value: "lib".into(),
                    sources: vec![
                        ValueSource::new("manifest", 2, "x"),
                        ValueSource::new("filename", 2, "y"),
                    ],
                }],
            ),
        );
        buckets.insert(
            MavenUidComponent::Version,
            bucket(
                MavenUidComponent::Version,
                vec![ValueCandidate {
                    value: "2024.01.15".into(),
                    sources: vec![ValueSource::new("classTimestamp", 1, "modal date")],
                }],
            ),
        );

        let boosted = run(&buckets);
        assert_eq!(boosted.len(), 1);
        assert_eq!(boosted[0].value, "2024.01.15");
    }

    #[test]
    fn no_boost_when_group_or_artifact_is_weak() {
        let mut buckets = HashMap::new();
        buckets.insert(
            MavenUidComponent::GroupId,
            bucket(
                MavenUidComponent::GroupId,
                vec![ValueCandidate {
                    value: "org.example".into(),
                    sources: vec![ValueSource::new("manifest", 3, "x")],
                }],
            ),
        );
        assert!(run(&buckets).is_empty());
    }
}

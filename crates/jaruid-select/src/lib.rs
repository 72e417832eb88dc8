//! Candidate Selector (C6): picks which `(groupId, artifactId, version)`
//! triples from an [`AnalysisBucket`] set to probe online.

use std::collections::HashMap;

use jaruid_core::candidate::AnalysisBucket;
use jaruid_core::config::SelectorK;
use jaruid_core::uid::{MavenUid, MavenUidComponent};

/// Minimum `scoreSum` a candidate must reach to be eligible for selection.
const MIN_SCORE_SUM: u32 = 2;

/// Select the `MavenUid` set to probe online: top-K per component
/// (`scoreSum >= 2`), cartesian product across components (at most
/// K_group × K_artifact × K_version), ordered so higher-scoring
/// combinations come first. If no version candidate clears the bar, a
/// version-less triple is emitted per (groupId, artifactId) pair to
/// trigger version discovery.
pub fn select(
    buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
    k: &SelectorK,
) -> Vec<MavenUid> {
    let groups = eligible_values(buckets, MavenUidComponent::GroupId, k.group_id);
    let artifacts = eligible_values(buckets, MavenUidComponent::ArtifactId, k.artifact_id);
    let versions = eligible_values(buckets, MavenUidComponent::Version, k.version);

    let mut out = Vec::new();
    if versions.is_empty() {
        for group in &groups {
            for artifact in &artifacts {
                out.push(MavenUid::without_version(group.clone(), artifact.clone()));
            }
        }
    } else {
        for version in &versions {
            for group in &groups {
                for artifact in &artifacts {
                    out.push(MavenUid::new(group.clone(), artifact.clone(), version.clone()));
                }
            }
        }
    }
    out
}

fn eligible_values(
    buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
    component: MavenUidComponent,
    k: usize,
) -> Vec<String> {
    buckets
        .get(&component)
        .map(|bucket| {
            bucket
                .top_n(k)
                .iter()
                .filter(|c| c.score_sum() >= MIN_SCORE_SUM)
                .map(|c| c.value.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaruid_core::candidate::{ValueCandidate, ValueSource};

    fn bucket(candidates: Vec<(&str, u32)>) -> AnalysisBucket {
        AnalysisBucket {
            component: None,
            candidates: candidates
                .into_iter()
                .map(|(value, score)| ValueCandidate {
                    value: value.to_string(),
                    sources: vec![ValueSource::new("test", score.min(4) as u8, "d")],
                })
                .collect(),
        }
    }

    #[test]
    fn cartesian_product_bounded_by_k() {
        let mut buckets = HashMap::new();
        buckets.insert(
            MavenUidComponent::GroupId,
            bucket(vec![("g1", 3), ("g2", 3)]),
        );
        buckets.insert(
            MavenUidComponent::ArtifactId,
            bucket(vec![("a1", 3), ("a2", 3)]),
        );
        buckets.insert(MavenUidComponent::Version, bucket(vec![("1.0", 3)]));

        let k = SelectorK {
            group_id: 2,
            artifact_id: 2,
            version: 2,
        };
        let selected = select(&buckets, &k);
        assert_eq!(selected.len(), 4);
        assert!(selected.iter().all(|u| u.is_checkable()));
    }

    #[test]
    fn below_threshold_candidates_are_excluded() {
        let mut buckets = HashMap::new();
        buckets.insert(MavenUidComponent::GroupId, bucket(vec![("weak", 1)]));
        buckets.insert(MavenUidComponent::ArtifactId, bucket(vec![("a", 3)]));

        let k = SelectorK::default();
        let selected = select(&buckets, &k);
        assert!(selected.is_empty());
    }

    #[test]
    fn empty_version_bucket_emits_version_less_triples() {
        let mut buckets = HashMap::new();
        buckets.insert(MavenUidComponent::GroupId, bucket(vec![("org.example", 3)]));
        buckets.insert(MavenUidComponent::ArtifactId, bucket(vec![("lib", 3)]));

        let k = SelectorK::default();
        let selected = select(&buckets, &k);
        assert_eq!(selected.len(), 1);
        assert!(selected[0].version.is_none());
        assert!(selected[0].is_checkable());
    }

    #[test]
    fn selector_respects_k_limit_of_one() {
        let mut buckets = HashMap::new();
        buckets.insert(
            MavenUidComponent::GroupId,
            bucket(vec![("g1", 4), ("g2", 3)]),
        );
        buckets.insert(MavenUidComponent::ArtifactId, bucket(vec![("a1", 3)]));

        let k = SelectorK {
            group_id: 1,
            artifact_id: 1,
            version: 1,
        };
        let selected = select(&buckets, &k);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].group_id.as_deref(), Some("g1"));
    }
}

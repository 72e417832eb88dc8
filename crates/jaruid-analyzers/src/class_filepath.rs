//! Class filepath analyzer (§4.3.4): infers groupId from the deepest
//! shared package prefix, and artifactId from the most populous immediate
//! sub-package.

use std::collections::HashMap;

use jaruid_core::jar::ClassEntry;
use jaruid_core::uid::MavenUidComponent;

use crate::{AnalyzerKind, Collector};

const KIND: AnalyzerKind = AnalyzerKind::ClassFilepath;

/// Split a class path's directory segments (dropping the filename).
fn package_segments(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = path.split('/').collect();
    parts.pop();
    parts
}

fn is_valid_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Find the deepest prefix of package segments shared by `threshold`
/// fraction of classes, where every segment is a syntactically valid Java
/// identifier. Returns (prefix segments, classes sharing it).
fn deepest_shared_prefix(classes: &[ClassEntry]) -> (Vec<String>, usize) {
    let package_paths: Vec<Vec<&str>> = classes
        .iter()
        .map(|c| package_segments(&c.path))
        .filter(|segs| segs.iter().all(|s| is_valid_java_identifier(s)))
        .collect();

    if package_paths.is_empty() {
        return (Vec::new(), 0);
    }

    let max_depth = package_paths.iter().map(|p| p.len()).min().unwrap_or(0);
    let mut best_prefix: Vec<String> = Vec::new();
    let mut best_count = 0;

    for depth in 0..=max_depth {
        let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();
        for segs in &package_paths {
            let prefix: Vec<&str> = segs[..depth].to_vec();
            *counts.entry(prefix).or_insert(0) += 1;
        }
        if let Some((prefix, count)) = counts.into_iter().max_by_key(|(_, c)| *c) {
            if depth == 0 || count as f64 / package_paths.len() as f64 >= 0.5 {
                best_prefix = prefix.iter().map(|s| s.to_string()).collect();
                best_count = count;
            }
        }
    }

    (best_prefix, best_count)
}

pub fn analyze(classes: &[ClassEntry], collector: &mut Collector) {
    if classes.is_empty() {
        return;
    }

    let (prefix, shared_count) = deepest_shared_prefix(classes);
    if prefix.is_empty() {
        return;
    }

    let group_id = prefix.join(".");
    let fraction = shared_count as f64 / classes.len() as f64;
    let score = if fraction >= 0.9 {
        3
    } else if fraction >= 0.5 {
        2
    } else {
        1
    };
    collector.emit(
        KIND,
        MavenUidComponent::GroupId,
        group_id,
        score,
        format!("shared package prefix ({:.0}% of classes)", fraction * 100.0),
    );

    // Weak artifactId guess: the immediately-deeper segment with the most classes.
    let mut next_segment_counts: HashMap<&str, usize> = HashMap::new();
    for class in classes {
        let segments = package_segments(&class.path);
        if segments.len() > prefix.len() {
            *next_segment_counts.entry(segments[prefix.len()]).or_insert(0) += 1;
        }
    }
    if let Some((segment, _)) = next_segment_counts.into_iter().max_by_key(|(_, c)| *c) {
        collector.emit(
            KIND,
            MavenUidComponent::ArtifactId,
            segment,
            1,
            "most populous sub-package",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(path: &str) -> ClassEntry {
        ClassEntry {
            path: path.to_string(),
            created: None,
            last_modified: None,
        }
    }

    #[test]
    fn finds_shared_package_prefix_as_group_id() {
        let classes = vec![
            class("org/example/lib/Foo.class"),
            class("org/example/lib/Bar.class"),
            class("org/example/lib/util/Baz.class"),
        ];
        let mut collector = Collector::new();
        analyze(&classes, &mut collector);
        let values = collector.into_values();
        let group = values
            .iter()
            .find(|v| v.component == MavenUidComponent::GroupId)
            .unwrap();
        assert_eq!(group.value, "org.example.lib");
    }

    #[test]
    fn empty_classes_emits_nothing() {
        let mut collector = Collector::new();
        analyze(&[], &mut collector);
        assert!(collector.into_values().is_empty());
    }

    #[test]
    fn suggests_artifact_id_from_deeper_segment() {
        let classes = vec![
            class("org/example/widgets/Foo.class"),
            class("org/example/widgets/Bar.class"),
            class("org/example/widgets/impl/Baz.class"),
        ];
        let mut collector = Collector::new();
        analyze(&classes, &mut collector);
        let values = collector.into_values();
        assert!(values
            .iter()
            .any(|v| v.component == MavenUidComponent::ArtifactId && v.value == "widgets"));
    }
}

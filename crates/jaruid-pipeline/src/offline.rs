//! Phase A: offline analysis of a single jar (§4.7).

use std::collections::HashMap;

use jaruid_analyzers::{class_filepath, class_timestamp, filename, manifest, pom, post, Collector};
use jaruid_core::aggregator::{self, ScoredValue};
use jaruid_core::candidate::AnalysisBucket;
use jaruid_core::jar::Jar;
use jaruid_core::uid::MavenUidComponent;
use jaruid_jar::{hash_jar_contents, read_jar};
use jaruid_util::errors::JarUidError;

/// The result of Phase A for one jar: its identity plus the aggregated
/// evidence bucket, and the `.class` paths needed for classname-based
/// online comparison.
pub struct OfflineResult {
    pub jar: Jar,
    pub buckets: HashMap<MavenUidComponent, AnalysisBucket>,
    pub class_paths: Vec<String>,
}

/// Read the jar once, compute its content hash, run every offline
/// analyzer, then the post-analyzer over the aggregate.
pub fn analyze_offline(file_name: &str, bytes: &[u8]) -> Result<OfflineResult, JarUidError> {
    let read = read_jar(bytes).map_err(|e| match e {
        JarUidError::MalformedJar { message, .. } => JarUidError::MalformedJar {
            jar: file_name.to_string(),
            message,
        },
        other => other,
    })?;
    let hash = hash_jar_contents(&read);
    let jar = Jar::new(file_name, hash);

    let mut collector = Collector::new();
    if let Some(m) = &read.contents.manifest {
        manifest::analyze(m, &mut collector);
    }
    filename::analyze(file_name, &mut collector);
    pom::analyze(
        read.contents.pom_xml.as_deref(),
        read.contents.pom_properties.as_deref(),
        &mut collector,
    );
    class_filepath::analyze(&read.contents.classes, &mut collector);
    class_timestamp::analyze(&read.contents.classes, &mut collector);

    let mut buckets = aggregator::aggregate(collector.into_values());

    let boosted: Vec<ScoredValue> = post::run(&buckets);
    if !boosted.is_empty() {
        let extra = aggregator::aggregate(boosted);
        for (component, extra_bucket) in extra {
            let bucket = buckets.entry(component).or_insert_with(|| AnalysisBucket::new(component));
            for candidate in extra_bucket.candidates {
                if let Some(existing) = bucket.candidates.iter_mut().find(|c| c.value == candidate.value) {
                    existing.sources.extend(candidate.sources);
                } else {
                    bucket.candidates.push(candidate);
                }
            }
            bucket.candidates.sort_by(|a, b| b.score_sum().cmp(&a.score_sum()));
        }
    }

    let class_paths = read.contents.classes.iter().map(|c| c.path.clone()).collect();

    Ok(OfflineResult {
        jar,
        buckets,
        class_paths,
    })
}

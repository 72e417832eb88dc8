//! Class timestamp analyzer (§4.3.5): buckets classes by their effective
//! timestamp's UTC date and proposes the modal date as a version.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use jaruid_core::jar::ClassEntry;
use jaruid_core::uid::MavenUidComponent;

use crate::{AnalyzerKind, Collector};

const KIND: AnalyzerKind = AnalyzerKind::ClassTimestamp;

/// Only emit a version candidate when the modal date covers more than
/// this fraction of classes.
const MODAL_THRESHOLD: f64 = 0.60;

fn date_bucket(unix_seconds: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(unix_seconds, 0)?;
    Some(dt.format("%Y.%m.%d").to_string())
}

pub fn analyze(classes: &[ClassEntry], collector: &mut Collector) {
    if classes.is_empty() {
        return;
    }

    let mut buckets: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for class in classes {
        let Some(time) = class.effective_time() else {
            continue;
        };
        // Classes whose timestamp is the zip epoch (1980-01-01, effectively
        // an unset DOS field) carry no evidence.
        if time < 315_532_800 {
            continue;
        }
        let Some(date) = date_bucket(time) else {
            continue;
        };
        *buckets.entry(date).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return;
    }

    if let Some((date, count)) = buckets.into_iter().max_by_key(|(_, c)| *c) {
        let ratio = count as f64 / total as f64;
        if ratio > MODAL_THRESHOLD {
            collector.emit(
                KIND,
                MavenUidComponent::Version,
                date,
                1,
                format!("modal build date covers {:.0}% of classes", ratio * 100.0),
            );
        }
    }
}

//! Jar filename analyzer (§4.3.2): splits a stem at a detected version
//! boundary into artifactId + version, or emits the whole stem as a weak
//! artifactId candidate when no version-like suffix is found.

use jaruid_core::uid::MavenUidComponent;

use crate::{AnalyzerKind, Collector};

const KIND: AnalyzerKind = AnalyzerKind::Filename;

pub fn analyze(file_name: &str, collector: &mut Collector) {
    let stem = file_name.strip_suffix(".jar").unwrap_or(file_name);

    if let Some((artifact, version)) = split_version_suffix(stem) {
        collector.emit(KIND, MavenUidComponent::ArtifactId, artifact, 2, "filename prefix");
        collector.emit(KIND, MavenUidComponent::Version, version, 2, "filename suffix");
    } else if !stem.is_empty() {
        collector.emit(KIND, MavenUidComponent::ArtifactId, stem, 1, "filename stem (no version detected)");
    }
}

/// Find the last `-` or `.` boundary such that what follows looks like a
/// version (starts with a digit and is a valid version string). Returns
/// (prefix, version) with the boundary separator dropped.
fn split_version_suffix(stem: &str) -> Option<(&str, &str)> {
    let bytes = stem.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'-' && b != b'.' {
            continue;
        }
        let candidate = &stem[i + 1..];
        if candidate
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
            && MavenUidComponent::Version.is_valid(candidate)
        {
            let prefix = &stem[..i];
            if !prefix.is_empty() {
                return Some((prefix, candidate));
            }
        }
    }
    None
}

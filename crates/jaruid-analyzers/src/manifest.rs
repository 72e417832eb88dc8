//! Manifest analyzer (§4.3.1): maps well-known `META-INF/MANIFEST.MF`
//! attributes to UID components by fixed rules.

use std::collections::HashMap;

use jaruid_core::uid::MavenUidComponent;

use crate::{AnalyzerKind, Collector};

const KIND: AnalyzerKind = AnalyzerKind::Manifest;

/// Parse a jar manifest into a flat attribute map. Manifests use
/// `Key: Value` lines with continuation lines starting with a single
/// space; section headers (`Name: foo/`) are ignored — only the main
/// section's attributes matter for identification.
pub fn parse_manifest_attributes(manifest: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    let mut current_key: Option<String> = None;
    let mut current_value = String::new();

    for raw_line in manifest.lines() {
        if raw_line.starts_with(' ') {
            current_value.push_str(raw_line.trim_start_matches(' '));
            continue;
        }
        if let Some(key) = current_key.take() {
            attrs.insert(key, std::mem::take(&mut current_value));
        }
        if raw_line.trim().is_empty() {
            continue;
        }
        if let Some((key, value)) = raw_line.split_once(':') {
            current_key = Some(key.trim().to_string());
            current_value = value.trim_start().to_string();
        }
    }
    if let Some(key) = current_key {
        attrs.insert(key, current_value);
    }
    attrs
}

/// Emit candidates from a manifest's attributes.
pub fn analyze(manifest: &str, collector: &mut Collector) {
    let attrs = parse_manifest_attributes(manifest);

    if let Some(v) = attrs.get("Implementation-Vendor-Id") {
        collector.emit(
            KIND,
            MavenUidComponent::GroupId,
            v,
            3,
            "Implementation-Vendor-Id",
        );
    }

    if let Some(symbolic_name) = attrs.get("Bundle-SymbolicName") {
        let name = symbolic_name.split(';').next().unwrap_or(symbolic_name).trim();
        if let Some((group, artifact)) = name.rsplit_once('.') {
            collector.emit(
                KIND,
                MavenUidComponent::GroupId,
                group,
                2,
                "Bundle-SymbolicName",
            );
            collector.emit(
                KIND,
                MavenUidComponent::ArtifactId,
                artifact,
                2,
                "Bundle-SymbolicName",
            );
        } else {
            collector.emit(
                KIND,
                MavenUidComponent::ArtifactId,
                name,
                2,
                "Bundle-SymbolicName",
            );
        }
    }

    if let Some(title) = attrs.get("Implementation-Title").or_else(|| attrs.get("Bundle-Name")) {
        collector.emit(KIND, MavenUidComponent::ArtifactId, title, 1, "Implementation-Title/Bundle-Name");
    }

    if let Some(version) = attrs
        .get("Implementation-Version")
        .or_else(|| attrs.get("Bundle-Version"))
    {
        if MavenUidComponent::Version.is_valid(version) {
            collector.emit(
                KIND,
                MavenUidComponent::Version,
                version,
                3,
                "Implementation-Version/Bundle-Version",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_attributes() {
        let manifest = "Manifest-Version: 1.0\nImplementation-Vendor-Id: org.example\n";
        let attrs = parse_manifest_attributes(manifest);
        assert_eq!(attrs.get("Implementation-Vendor-Id").unwrap(), "org.example");
    }

    #[test]
    fn handles_continuation_lines() {
        let manifest = "Implementation-Title: My Very Long Titl\n e That Wraps\n";
        let attrs = parse_manifest_attributes(manifest);
        assert_eq!(
            attrs.get("Implementation-Title").unwrap(),
            "My Very Long Title That Wraps"
        );
    }

    #[test]
    fn emits_group_id_from_vendor_id() {
        let manifest = "Implementation-Vendor-Id: org.example\n";
        let mut collector = Collector::new();
        analyze(manifest, &mut collector);
        let values = collector.into_values();
        assert!(values
            .iter()
            .any(|v| v.component == MavenUidComponent::GroupId && v.value == "org.example" && v.source.score == 3));
    }

    #[test]
    fn splits_bundle_symbolic_name_into_group_and_artifact() {
        let manifest = "Bundle-SymbolicName: org.example.mylib;singleton:=true\n";
        let mut collector = Collector::new();
        analyze(manifest, &mut collector);
        let values = collector.into_values();
        assert!(values
            .iter()
            .any(|v| v.component == MavenUidComponent::GroupId && v.value == "org.example"));
        assert!(values
            .iter()
            .any(|v| v.component == MavenUidComponent::ArtifactId && v.value == "mylib"));
    }

    #[test]
    fn rejects_invalid_version_strings() {
        let manifest = "Implementation-Version: not a version!\n";
        let mut collector = Collector::new();
        analyze(manifest, &mut collector);
        assert!(collector
            .into_values()
            .iter()
            .all(|v| v.component != MavenUidComponent::Version));
    }
}

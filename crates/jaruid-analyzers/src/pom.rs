//! Pom analyzer (§4.3.3): embedded `pom.xml` or `pom.properties` identity.

use quick_xml::events::Event;
use quick_xml::Reader;

use jaruid_core::uid::MavenUidComponent;

use crate::{AnalyzerKind, Collector};

const KIND: AnalyzerKind = AnalyzerKind::Pom;

/// The identity fields a pom carries, with parent fallback already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomIdentity {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// Parse `pom.xml`'s top-level identity, falling back to `<parent>` for
/// groupId/version when the project element omits them.
pub fn parse_pom_xml(xml: &str) -> PomIdentity {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut identity = PomIdentity::default();
    let mut parent_group_id = None;
    let mut parent_version = None;
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                path.push(tag);
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path.join(">");
                match ctx.as_str() {
                    "project>groupId" => identity.group_id = Some(text_buf.clone()),
                    "project>artifactId" => identity.artifact_id = Some(text_buf.clone()),
                    "project>version" => identity.version = Some(text_buf.clone()),
                    "project>parent>groupId" => parent_group_id = Some(text_buf.clone()),
                    "project>parent>version" => parent_version = Some(text_buf.clone()),
                    _ => {}
                }
                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    identity.group_id = identity.group_id.or(parent_group_id);
    identity.version = identity.version.or(parent_version);
    identity
}

/// Parse `pom.properties`' `key=value` lines (the subset Maven writes at
/// build time: `groupId`, `artifactId`, `version`).
pub fn parse_pom_properties(content: &str) -> PomIdentity {
    let mut identity = PomIdentity::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "groupId" => identity.group_id = Some(value.trim().to_string()),
                "artifactId" => identity.artifact_id = Some(value.trim().to_string()),
                "version" => identity.version = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }
    identity
}

/// Emit candidates from a jar's embedded pom.xml and/or pom.properties, at
/// the highest score (pom identity is considered near-certain evidence).
pub fn analyze(pom_xml: Option<&str>, pom_properties: Option<&str>, collector: &mut Collector) {
    let mut emit_identity = |identity: PomIdentity, detail: &str| {
        if let Some(g) = identity.group_id {
            collector.emit(KIND, MavenUidComponent::GroupId, g, 4, detail);
        }
        if let Some(a) = identity.artifact_id {
            collector.emit(KIND, MavenUidComponent::ArtifactId, a, 4, detail);
        }
        if let Some(v) = identity.version {
            if MavenUidComponent::Version.is_valid(&v) {
                collector.emit(KIND, MavenUidComponent::Version, v, 4, detail);
            }
        }
    };

    if let Some(xml) = pom_xml {
        emit_identity(parse_pom_xml(xml), "pom.xml");
    }
    if let Some(properties) = pom_properties {
        emit_identity(parse_pom_properties(properties), "pom.properties");
    }
}

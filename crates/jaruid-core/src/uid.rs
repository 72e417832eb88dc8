//! Maven UID components and coordinates.

use std::fmt;

/// A component of a Maven coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MavenUidComponent {
    GroupId,
    ArtifactId,
    Version,
}

impl MavenUidComponent {
    /// All three components, in a fixed, stable order.
    pub const ALL: [MavenUidComponent; 3] = [
        MavenUidComponent::GroupId,
        MavenUidComponent::ArtifactId,
        MavenUidComponent::Version,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MavenUidComponent::GroupId => "groupId",
            MavenUidComponent::ArtifactId => "artifactId",
            MavenUidComponent::Version => "version",
        }
    }

    /// Whether `value` is a syntactically valid string for this component.
    ///
    /// groupId / artifactId: `[A-Za-z_][A-Za-z0-9_\-.]*`, segmented by `.`
    /// (each dot-separated segment must itself start with a letter or
    /// underscore). version: `[A-Za-z0-9_.\-]+` (Maven is liberal; no
    /// SemVer enforcement).
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            MavenUidComponent::GroupId | MavenUidComponent::ArtifactId => {
                !value.is_empty() && value.split('.').all(is_valid_identifier_segment)
            }
            MavenUidComponent::Version => {
                !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
            }
        }
    }
}

/// A single dot-separated segment of a groupId/artifactId: must start with
/// a letter or underscore, followed by letters, digits, `_`, `-`, or `.`
/// (the `.` case only matters for the outer splitter, never appears here).
fn is_valid_identifier_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

impl fmt::Display for MavenUidComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Maven coordinate triple, any field of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MavenUid {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl MavenUid {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
        }
    }

    pub fn without_version(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: None,
        }
    }

    /// Valid as input to online checking: groupId and artifactId present
    /// (version may be absent, triggering version discovery).
    pub fn is_checkable(&self) -> bool {
        self.group_id.is_some() && self.artifact_id.is_some()
    }

    /// Valid as a final, reportable UID: all three components present and
    /// each one passes its component's validity rule.
    pub fn is_complete_and_valid(&self) -> bool {
        match (&self.group_id, &self.artifact_id, &self.version) {
            (Some(g), Some(a), Some(v)) => {
                MavenUidComponent::GroupId.is_valid(g)
                    && MavenUidComponent::ArtifactId.is_valid(a)
                    && MavenUidComponent::Version.is_valid(v)
            }
            _ => false,
        }
    }

    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: Some(version.into()),
        }
    }
}

impl fmt::Display for MavenUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?"),
            self.version.as_deref().unwrap_or("?"),
        )
    }
}

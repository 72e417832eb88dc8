//! Jar identity: filename plus content hash.

use serde::{Deserialize, Serialize};

/// A jar's identity for the purposes of this tool: its filename and a
/// compression-independent content hash (see [`jaruid_util::hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jar {
    pub file_name: String,
    /// Base64 SHA-256 over concatenated uncompressed entry bytes.
    pub content_hash: String,
}

impl Jar {
    pub fn new(file_name: impl Into<String>, content_hash: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_hash: content_hash.into(),
        }
    }
}

/// A `.class` entry's path plus the timestamps the zip format carries for it.
///
/// Bytecode is never retained; only path and timestamps matter downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    /// Path within the archive, separators normalized to `/`.
    pub path: String,
    pub created: Option<i64>,
    pub last_modified: Option<i64>,
}

impl ClassEntry {
    /// The later of creation/last-modified, used by the timestamp analyzer.
    pub fn effective_time(&self) -> Option<i64> {
        match (self.created, self.last_modified) {
            (Some(c), Some(m)) => Some(c.max(m)),
            (Some(c), None) => Some(c),
            (None, Some(m)) => Some(m),
            (None, None) => None,
        }
    }
}

/// The parsed contents of a jar, as produced by the jar reader.
#[derive(Debug, Clone, Default)]
pub struct JarContents {
    pub manifest: Option<String>,
    pub pom_xml: Option<String>,
    pub pom_properties: Option<String>,
    pub classes: Vec<ClassEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_time_prefers_max_when_both_present() {
        let entry = ClassEntry {
            path: "a/B.class".into(),
            created: Some(10),
            last_modified: Some(20),
        };
        assert_eq!(entry.effective_time(), Some(20));
    }

    #[test]
    fn effective_time_falls_back_to_whichever_is_present() {
        let entry = ClassEntry {
            path: "a/B.class".into(),
            created: None,
            last_modified: Some(5),
        };
        assert_eq!(entry.effective_time(), Some(5));
    }

    #[test]
    fn effective_time_none_when_neither_present() {
        let entry = ClassEntry {
            path: "a/B.class".into(),
            created: None,
            last_modified: None,
        };
        assert_eq!(entry.effective_time(), None);
    }
}

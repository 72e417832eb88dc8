//! Temp local repository at `./temp-m2/`, mirroring standard Maven layout.
//!
//! Purged at startup (not reused across runs, per the non-caching
//! non-goal), repopulated on demand as artifacts are downloaded.

use std::fs;
use std::path::{Path, PathBuf};

use jaruid_util::errors::JarUidError;

#[derive(Debug, Clone)]
pub struct LocalCache {
    root: PathBuf,
}

impl LocalCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The default cache root, `./temp-m2/`.
    pub fn default_root() -> Self {
        Self::new("./temp-m2")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Delete any prior contents. Called once at Repo Checker startup.
    pub fn purge(&self) -> Result<(), JarUidError> {
        if self.root.is_dir() {
            fs::remove_dir_all(&self.root).map_err(JarUidError::Io)?;
        }
        Ok(())
    }

    fn artifact_dir(&self, group: &str, artifact: &str, version: &str) -> PathBuf {
        self.root.join(group.replace('.', "/")).join(artifact).join(version)
    }

    pub fn get_jar(&self, group: &str, artifact: &str, version: &str) -> Option<PathBuf> {
        let path = self
            .artifact_dir(group, artifact, version)
            .join(format!("{artifact}-{version}.jar"));
        path.is_file().then_some(path)
    }

    pub fn put_jar(
        &self,
        group: &str,
        artifact: &str,
        version: &str,
        data: &[u8],
    ) -> Result<PathBuf, JarUidError> {
        let dir = self.artifact_dir(group, artifact, version);
        fs::create_dir_all(&dir).map_err(JarUidError::Io)?;
        let path = dir.join(format!("{artifact}-{version}.jar"));
        fs::write(&path, data).map_err(JarUidError::Io)?;
        Ok(path)
    }
}

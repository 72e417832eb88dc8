//! Maven repository URL layout.

use jaruid_core::config::RemoteRepository;

/// A remote repository plus the standard Maven layout URL builders.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<&RemoteRepository> for MavenRepository {
    fn from(repo: &RemoteRepository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.trim_end_matches('/').to_string(),
            username: repo.username.clone(),
            password: repo.password.clone(),
        }
    }
}

impl MavenRepository {
    /// `org.example:lib:1.0` becomes `org/example/lib/1.0`.
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    pub fn jar_url(&self, group: &str, artifact: &str, version: &str) -> String {
        format!(
            "{}/{}/{artifact}-{version}.jar",
            self.url,
            Self::coordinate_path(group, artifact, version),
        )
    }

    pub fn metadata_url(&self, group: &str, artifact: &str) -> String {
        format!(
            "{}/{}/{artifact}/maven-metadata.xml",
            self.url,
            group.replace('.', "/"),
        )
    }

    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

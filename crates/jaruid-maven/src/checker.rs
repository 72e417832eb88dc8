//! Repo Checker (C5): resolves artifacts and version metadata against a
//! set of remote Maven repositories and classifies the match.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use jaruid_core::config::RemoteRepository;
use jaruid_core::online::{OnlineMatch, UidCheck};
use jaruid_core::uid::MavenUid;
use jaruid_jar::{hash_jar_contents, read_jar};
use jaruid_util::errors::JarUidError;

use crate::cache::LocalCache;
use crate::download;
use crate::metadata;
use crate::repository::MavenRepository;
use crate::settings;

const CANARY: (&str, &str, &str) = ("junit", "junit", "4.12");
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Resolves coordinates against a fixed, read-only-after-startup list of
/// repositories (settings-discovered repos, configured extras, then
/// Maven Central as the unconditional fallback).
pub struct RepoChecker {
    client: Client,
    repos: Arc<Vec<MavenRepository>>,
    cache: LocalCache,
}

impl RepoChecker {
    /// Construct a Repo Checker: purge the temp cache, read
    /// `~/.m2/settings.xml`, append any configured extra repositories and
    /// Maven Central, then verify reachability via the canary artifact.
    ///
    /// Per §4.6, failure of the canary is fatal unless the caller never
    /// constructs this type (i.e. `--offline` was passed).
    pub async fn startup(
        configured: &[RemoteRepository],
        request_timeout_secs: u64,
    ) -> Result<Self, JarUidError> {
        let cache = LocalCache::default_root();
        cache.purge()?;

        let settings_repos = settings::read_user_settings().unwrap_or_else(|e| {
            tracing::warn!("failed to read ~/.m2/settings.xml: {e}");
            Vec::new()
        });

        let mut repos: Vec<MavenRepository> = settings_repos.iter().map(MavenRepository::from).collect();
        repos.extend(configured.iter().map(MavenRepository::from));
        repos.push(MavenRepository::from(&RemoteRepository::central()));

        let client = download::build_client(request_timeout_secs)?;

        let checker = Self {
            client,
            repos: Arc::new(repos),
            cache,
        };

        checker.verify_canary().await?;
        Ok(checker)
    }

    async fn verify_canary(&self) -> Result<(), JarUidError> {
        let (group, artifact, version) = CANARY;
        for repo in self.repos.iter() {
            let url = repo.jar_url(group, artifact, version);
            match download::download_bytes(&self.client, repo, &url).await {
                Ok(Some(_)) => return Ok(()),
                Ok(None) => continue,
                Err(_) => continue,
            }
        }
        Err(JarUidError::Network {
            message: "canary artifact junit:junit:4.12 unreachable on all configured repositories".to_string(),
        })
    }

    /// For each versioned UID, attempt to resolve the jar and compare
    /// content hashes. Returns the first `EXACT_SHA` immediately
    /// (short-circuit); otherwise classifies every UID.
    pub async fn check_with_version(
        &self,
        local_hash: &str,
        local_class_paths: &[String],
        uids: &[MavenUid],
    ) -> Vec<UidCheck> {
        let mut results = Vec::new();
        for uid in uids {
            let check = self.resolve_one(local_hash, local_class_paths, uid).await;
            let is_exact = check.is_exact_sha();
            results.push(check);
            if is_exact {
                return results;
            }
        }
        results
    }

    async fn resolve_one(
        &self,
        local_hash: &str,
        local_class_paths: &[String],
        uid: &MavenUid,
    ) -> UidCheck {
        let (Some(group), Some(artifact), Some(version)) =
            (&uid.group_id, &uid.artifact_id, &uid.version)
        else {
            return UidCheck::not_found(uid.clone());
        };

        for repo in self.repos.iter() {
            let url = repo.jar_url(group, artifact, version);
            match download::download_bytes(&self.client, repo, &url).await {
                Ok(Some(bytes)) => {
                    let _ = self.cache.put_jar(group, artifact, version, &bytes);
                    let Ok(read) = read_jar(&bytes) else {
                        continue;
                    };
                    let remote_hash = hash_jar_contents(&read);
                    let online_match = if remote_hash == local_hash {
                        OnlineMatch::ExactSha
                    } else {
                        let remote_classes: Vec<String> =
                            read.contents.classes.iter().map(|c| c.path.clone()).collect();
                        OnlineMatch::classify_by_classnames(local_class_paths, &remote_classes)
                    };
                    return UidCheck {
                        uid: uid.clone(),
                        online_match,
                        resolved_by: Some(repo.name.clone()),
                    };
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("resolution error for {uid} at {}: {e}", repo.name);
                    continue;
                }
            }
        }
        UidCheck::not_found(uid.clone())
    }

    /// Fetch `maven-metadata.xml` for (groupId, artifactId) from each
    /// configured repo in turn until one resolves.
    pub async fn discover_versions(&self, group: &str, artifact: &str) -> Vec<String> {
        for repo in self.repos.iter() {
            let url = repo.metadata_url(group, artifact);
            match download::download_text(&self.client, repo, &url).await {
                Ok(Some(xml)) => {
                    if let Ok(meta) = metadata::parse_metadata(&xml) {
                        if !meta.versions.is_empty() {
                            return meta.versions;
                        }
                    }
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("metadata fetch failed at {}: {e}", repo.name);
                    continue;
                }
            }
        }
        Vec::new()
    }

    /// For UIDs lacking a version: discover versions, then probe at most
    /// the first (oldest, as listed) and last (newest) via
    /// `check_with_version`. Bounds download cost for version-less UIDs.
    pub async fn check_no_version(
        &self,
        local_hash: &str,
        local_class_paths: &[String],
        uids_no_version: &[MavenUid],
    ) -> Vec<UidCheck> {
        let mut results = Vec::new();
        for uid in uids_no_version {
            let (Some(group), Some(artifact)) = (&uid.group_id, &uid.artifact_id) else {
                continue;
            };
            let versions = self.discover_versions(group, artifact).await;
            if versions.is_empty() {
                results.push(UidCheck::not_found(uid.clone()));
                continue;
            }
            let mut probe_versions = vec![versions[0].clone()];
            if versions.len() > 1 {
                probe_versions.push(versions[versions.len() - 1].clone());
            }
            let probe_uids: Vec<MavenUid> = probe_versions
                .into_iter()
                .map(|v| uid.with_version(v))
                .collect();
            results.extend(
                self.check_with_version(local_hash, local_class_paths, &probe_uids)
                    .await,
            );
        }
        results
    }

    pub fn repositories(&self) -> &[MavenRepository] {
        &self.repos
    }

    /// Cancel outstanding work cooperatively, bounded by a grace window.
    pub async fn shutdown<F>(future: F)
    where
        F: std::future::Future<Output = ()>,
    {
        let _ = tokio::time::timeout(SHUTDOWN_GRACE, future).await;
    }
}

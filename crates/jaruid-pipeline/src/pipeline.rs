//! The Pipeline (C7): drives every input jar through Phase A (offline
//! analysis, serial), Phase B (online checking, concurrent per jar, started
//! as soon as Phase A produces that jar's candidates), and Phase C
//! (consolidation, serial, input order).

use std::sync::Arc;

use jaruid_core::candidate::AnalysisBucket;
use jaruid_core::config::Config;
use jaruid_core::jar::Jar;
use jaruid_core::online::UidCheck;
use jaruid_core::report::{JarReport, MatchOrManual, ReportedUid};
use jaruid_core::uid::MavenUidComponent;
use jaruid_maven::RepoChecker;
use jaruid_util::errors::JarUidError;
use std::collections::HashMap;
use tokio::sync::Semaphore;

use crate::manual_selection::{ManualDecision, ManualSelection};
use crate::offline::analyze_offline;

/// One input jar as read from disk, prior to any analysis.
pub struct InputJar {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Orchestrates analysis and checking for a batch of jars.
pub struct Pipeline {
    config: Config,
    checker: Option<Arc<RepoChecker>>,
}

impl Pipeline {
    pub fn new(config: Config, checker: Option<RepoChecker>) -> Self {
        Self {
            config,
            checker: checker.map(Arc::new),
        }
    }

    /// Run the full pipeline over `jars`, producing one [`JarReport`] per
    /// input, in input order, using `manual` whenever auto-selection (§4.8)
    /// does not resolve a jar to exactly one `EXACT_SHA`.
    pub async fn run(
        &self,
        jars: Vec<InputJar>,
        manual: &dyn ManualSelection,
    ) -> Vec<JarReport> {
        let limit = self.config.concurrency_limit.max(1);
        let semaphore = Arc::new(Semaphore::new(limit));

        let mut online_tasks = Vec::with_capacity(jars.len());

        // Phase A: serial offline analysis per jar, immediately followed
        // by spawning that jar's Phase B online task (§4.7: online checks
        // start as soon as that jar's candidates exist, not after every
        // jar has been analyzed).
        for input in jars {
            let offline = match analyze_offline(&input.file_name, &input.bytes) {
                Ok(result) => result,
                Err(e) => {
                    online_tasks.push(tokio::spawn(async move { Err::<PhaseBOutput, JarUidError>(e) }));
                    continue;
                }
            };

            let checker = self.checker.clone();
            let selector_k = self.config.selector_k.clone();
            let online_enabled = self.config.online_enabled;
            let semaphore = semaphore.clone();

            online_tasks.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let jar = offline.jar;
                let buckets = offline.buckets;
                let class_paths = offline.class_paths;

                let checks = if online_enabled {
                    if let Some(checker) = checker {
                        run_online(&checker, &jar, &class_paths, &buckets, &selector_k).await
                    } else {
                        Vec::new()
                    }
                } else {
                    Vec::new()
                };

                Ok(PhaseBOutput {
                    jar,
                    buckets,
                    checks,
                })
            }));
        }

        // Phase C: consolidate in input order, awaiting each jar's Phase B
        // task in turn (tasks themselves already ran concurrently). A
        // malformed jar is logged and dropped — it never appears in the
        // report (§7: "jar absent from report").
        let mut reports = Vec::with_capacity(online_tasks.len());
        for task in online_tasks {
            match task.await {
                Ok(Ok(output)) => reports.push(self.consolidate(output, manual).await),
                Ok(Err(e)) => tracing::warn!("jar analysis failed: {e}"),
                Err(join_err) => tracing::warn!("analysis task panicked: {join_err}"),
            }
        }

        if let Some(checker) = &self.checker {
            let checker = checker.clone();
            RepoChecker::shutdown(async move {
                drop(checker);
            })
            .await;
        }

        reports
    }

    /// Decide a jar's final `uid`/`matchType`, falling back to manual
    /// selection when auto-selection does not succeed.
    async fn consolidate(&self, output: PhaseBOutput, manual: &dyn ManualSelection) -> JarReport {
        let PhaseBOutput { jar, buckets, checks } = output;

        let exact_sha: Vec<&UidCheck> = checks.iter().filter(|c| c.is_exact_sha()).collect();

        if exact_sha.len() == 1 {
            let check = exact_sha[0];
            if let Some(reported) = ReportedUid::from_uid(&check.uid) {
                return JarReport {
                    jar_name: jar.file_name,
                    sha256: jar.content_hash,
                    match_type: Some(MatchOrManual::from(check.online_match)),
                    uid: Some(reported),
                };
            }
        }

        if self.config.skip_not_found {
            return JarReport {
                jar_name: jar.file_name,
                sha256: jar.content_hash,
                match_type: checks.first().map(|c| MatchOrManual::from(c.online_match)),
                uid: None,
            };
        }

        match manual.select(&jar.file_name, &buckets, &checks).await {
            ManualDecision::Selected(uid) => {
                if let Some(reported) = ReportedUid::from_uid(&uid) {
                    JarReport {
                        jar_name: jar.file_name,
                        sha256: jar.content_hash,
                        match_type: Some(MatchOrManual::Manual),
                        uid: Some(reported),
                    }
                } else {
                    JarReport {
                        jar_name: jar.file_name,
                        sha256: jar.content_hash,
                        match_type: None,
                        uid: None,
                    }
                }
            }
            ManualDecision::Skip => JarReport {
                jar_name: jar.file_name,
                sha256: jar.content_hash,
                match_type: checks.first().map(|c| MatchOrManual::from(c.online_match)),
                uid: None,
            },
        }
    }
}

struct PhaseBOutput {
    jar: Jar,
    buckets: HashMap<MavenUidComponent, AnalysisBucket>,
    checks: Vec<UidCheck>,
}

async fn run_online(
    checker: &RepoChecker,
    jar: &Jar,
    class_paths: &[String],
    buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
    selector_k: &jaruid_core::config::SelectorK,
) -> Vec<UidCheck> {
    let candidates = jaruid_select::select(buckets, selector_k);
    let (with_version, without_version): (Vec<_>, Vec<_>) =
        candidates.into_iter().partition(|u| u.version.is_some());

    // Two independent tasks per jar, per §4.7 Phase B: with-version and
    // no-version resolution proceed concurrently rather than one gating
    // the other.
    let (with_version_checks, without_version_checks) = tokio::join!(
        checker.check_with_version(&jar.content_hash, class_paths, &with_version),
        checker.check_no_version(&jar.content_hash, class_paths, &without_version),
    );

    let mut checks = with_version_checks;
    checks.extend(without_version_checks);
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual_selection::AlwaysSkip;
    use std::io::{Cursor, Write};

    fn build_test_jar(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options: zip::write::FileOptions<()> = zip::write::FileOptions::default();
            for (name, data) in entries {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            writer.finish().unwrap();
        }
        buf
    }

    #[tokio::test]
    async fn offline_only_pipeline_skips_without_a_checker() {
        let xml = b"<project><groupId>org.example</groupId><artifactId>lib</artifactId><version>1.0.0</version></project>";
        let bytes = build_test_jar(&[("pom.xml", xml)]);

        let mut config = Config::default();
        config.online_enabled = false;

        let pipeline = Pipeline::new(config, None);
        let jars = vec![InputJar {
            file_name: "lib-1.0.0.jar".to_string(),
            bytes,
        }];

        let reports = pipeline.run(jars, &AlwaysSkip).await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].jar_name, "lib-1.0.0.jar");
        assert!(reports[0].uid.is_none());
    }

    #[tokio::test]
    async fn preserves_input_order_across_multiple_jars() {
        let mut config = Config::default();
        config.online_enabled = false;

        let pipeline = Pipeline::new(config, None);
        let jars = vec![
            InputJar {
                file_name: "a.jar".to_string(),
                bytes: build_test_jar(&[("x.txt", b"1")]),
            },
            InputJar {
                file_name: "b.jar".to_string(),
                bytes: build_test_jar(&[("x.txt", b"2")]),
            },
            InputJar {
                file_name: "c.jar".to_string(),
                bytes: build_test_jar(&[("x.txt", b"3")]),
            },
        ];

        let reports = pipeline.run(jars, &AlwaysSkip).await;
        let names: Vec<&str> = reports.iter().map(|r| r.jar_name.as_str()).collect();
        assert_eq!(names, vec!["a.jar", "b.jar", "c.jar"]);
    }

    #[tokio::test]
    async fn malformed_jar_is_absent_from_the_report() {
        let mut config = Config::default();
        config.online_enabled = false;
        let pipeline = Pipeline::new(config, None);

        let jars = vec![InputJar {
            file_name: "broken.jar".to_string(),
            bytes: b"not a zip".to_vec(),
        }];

        let reports = pipeline.run(jars, &AlwaysSkip).await;
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn malformed_jar_does_not_displace_its_well_formed_neighbors() {
        let mut config = Config::default();
        config.online_enabled = false;
        let pipeline = Pipeline::new(config, None);

        let jars = vec![
            InputJar {
                file_name: "a.jar".to_string(),
                bytes: build_test_jar(&[("x.txt", b"1")]),
            },
            InputJar {
                file_name: "broken.jar".to_string(),
                bytes: b"not a zip".to_vec(),
            },
            InputJar {
                file_name: "c.jar".to_string(),
                bytes: build_test_jar(&[("x.txt", b"3")]),
            },
        ];

        let reports = pipeline.run(jars, &AlwaysSkip).await;
        let names: Vec<&str> = reports.iter().map(|r| r.jar_name.as_str()).collect();
        assert_eq!(names, vec!["a.jar", "c.jar"]);
    }
}

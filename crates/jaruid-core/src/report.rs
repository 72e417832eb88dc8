//! Final report shape, serialized to JSON.

use serde::{Deserialize, Serialize};

use crate::online::OnlineMatch;
use crate::uid::MavenUid;

/// One jar's final outcome.
///
/// Invariant: if `uid` is `Some`, it is complete and every component passes
/// its validity rule (enforced by callers before construction via
/// [`MavenUid::is_complete_and_valid`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JarReport {
    pub jar_name: String,
    pub sha256: String,
    pub match_type: Option<MatchOrManual>,
    pub uid: Option<ReportedUid>,
}

/// The report's `matchType` field: either one of the online classifications
/// or the literal `"MANUAL"` for an operator-entered UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOrManual {
    ExactSha,
    ExactClassnames,
    SupersetClassnames,
    NoMatch,
    NotFound,
    Manual,
}

impl From<OnlineMatch> for MatchOrManual {
    fn from(m: OnlineMatch) -> Self {
        match m {
            OnlineMatch::ExactSha => MatchOrManual::ExactSha,
            OnlineMatch::ExactClassnames => MatchOrManual::ExactClassnames,
            OnlineMatch::SupersetClassnames => MatchOrManual::SupersetClassnames,
            OnlineMatch::NoMatch => MatchOrManual::NoMatch,
            OnlineMatch::NotFound => MatchOrManual::NotFound,
        }
    }
}

/// The UID as it appears in a [`JarReport`]: three required strings, not
/// the optional triple used internally during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedUid {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ReportedUid {
    /// Build from a complete, valid `MavenUid`. Returns `None` if any
    /// component is absent — callers must validate before reporting.
    pub fn from_uid(uid: &MavenUid) -> Option<Self> {
        if !uid.is_complete_and_valid() {
            return None;
        }
        Some(Self {
            group_id: uid.group_id.clone().unwrap(),
            artifact_id: uid.artifact_id.clone().unwrap(),
            version: uid.version.clone().unwrap(),
        })
    }
}

/// A configured remote repository, as it appears in the report's
/// `analysisInfo.remoteRepositories` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInfo {
    pub online_check_enabled: bool,
    pub remote_repositories: Vec<RepositorySummary>,
}

/// The full report document written to the report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub analysis_info: AnalysisInfo,
    pub jar_results: Vec<JarReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_uid_requires_completeness() {
        let incomplete = MavenUid::without_version("org.example", "lib");
        assert!(ReportedUid::from_uid(&incomplete).is_none());

        let complete = MavenUid::new("org.example", "lib", "1.0.0");
        let reported = ReportedUid::from_uid(&complete).unwrap();
        assert_eq!(reported.group_id, "org.example");
        assert_eq!(reported.version, "1.0.0");
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = Report {
            analysis_info: AnalysisInfo {
                online_check_enabled: true,
                remote_repositories: vec![RepositorySummary {
                    name: "central".into(),
                    url: "https://repo1.maven.org/maven2/".into(),
                }],
            },
            jar_results: vec![JarReport {
                jar_name: "foo.jar".into(),
                sha256: "deadbeef".into(),
                match_type: Some(MatchOrManual::ExactSha),
                uid: Some(ReportedUid {
                    group_id: "org.example".into(),
                    artifact_id: "foo".into(),
                    version: "1.0.0".into(),
                }),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.jar_results.len(), 1);
        assert_eq!(parsed.jar_results[0].jar_name, "foo.jar");
    }

    #[test]
    fn match_type_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&MatchOrManual::ExactClassnames).unwrap();
        assert_eq!(json, "\"EXACT_CLASSNAMES\"");
        let json = serde_json::to_string(&MatchOrManual::Manual).unwrap();
        assert_eq!(json, "\"MANUAL\"");
    }
}

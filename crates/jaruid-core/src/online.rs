//! Online match classification.

use serde::{Deserialize, Serialize};

use crate::uid::MavenUid;

/// The result of comparing a local jar against a remote-resolved artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnlineMatch {
    /// Local content hash equals the remote jar's content hash.
    ExactSha,
    /// Hashes differ, but the sets of `.class` entry paths are equal.
    ExactClassnames,
    /// The remote jar's `.class` entry paths are a strict superset of local.
    SupersetClassnames,
    /// Remote artifact resolved but neither hash nor classnames match.
    NoMatch,
    /// Remote artifact does not exist at any configured repository.
    NotFound,
}

impl OnlineMatch {
    /// Classify two `.class` path sets that did not hash-match.
    ///
    /// Paths are compared case-sensitively with separators normalized to
    /// `/`; nested/inner classes (`Outer$Inner.class`) participate as
    /// ordinary entries.
    pub fn classify_by_classnames(local: &[String], remote: &[String]) -> OnlineMatch {
        use std::collections::HashSet;

        let normalize = |paths: &[String]| -> HashSet<String> {
            paths.iter().map(|p| p.replace('\\', "/")).collect()
        };
        let local_set = normalize(local);
        let remote_set = normalize(remote);

        if local_set == remote_set {
            OnlineMatch::ExactClassnames
        } else if local_set.is_subset(&remote_set) && local_set != remote_set {
            OnlineMatch::SupersetClassnames
        } else {
            OnlineMatch::NoMatch
        }
    }
}

/// A fully-resolved UID plus its online match classification and the
/// repository that resolved it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UidCheck {
    pub uid: MavenUid,
    pub online_match: OnlineMatch,
    pub resolved_by: Option<String>,
}

impl UidCheck {
    pub fn not_found(uid: MavenUid) -> Self {
        Self {
            uid,
            online_match: OnlineMatch::NotFound,
            resolved_by: None,
        }
    }

    pub fn is_exact_sha(&self) -> bool {
        matches!(self.online_match, OnlineMatch::ExactSha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_class_sets_are_exact_classnames() {
        let local = vec!["a/B.class".to_string(), "a/C$Inner.class".to_string()];
        let remote = local.clone();
        assert_eq!(
            OnlineMatch::classify_by_classnames(&local, &remote),
            OnlineMatch::ExactClassnames
        );
    }

    #[test]
    fn strict_remote_superset_is_superset_classnames() {
        let local = vec!["a/B.class".to_string()];
        let remote = vec!["a/B.class".to_string(), "a/C.class".to_string()];
        assert_eq!(
            OnlineMatch::classify_by_classnames(&local, &remote),
            OnlineMatch::SupersetClassnames
        );
    }

    #[test]
    fn disjoint_sets_are_no_match() {
        let local = vec!["a/B.class".to_string()];
        let remote = vec!["x/Y.class".to_string()];
        assert_eq!(
            OnlineMatch::classify_by_classnames(&local, &remote),
            OnlineMatch::NoMatch
        );
    }

    #[test]
    fn separators_are_normalized_before_comparison() {
        let local = vec!["a\\B.class".to_string()];
        let remote = vec!["a/B.class".to_string()];
        assert_eq!(
            OnlineMatch::classify_by_classnames(&local, &remote),
            OnlineMatch::ExactClassnames
        );
    }

    #[test]
    fn local_superset_of_remote_is_no_match_not_superset() {
        let local = vec!["a/B.class".to_string(), "a/C.class".to_string()];
        let remote = vec!["a/B.class".to_string()];
        assert_eq!(
            OnlineMatch::classify_by_classnames(&local, &remote),
            OnlineMatch::NoMatch
        );
    }
}

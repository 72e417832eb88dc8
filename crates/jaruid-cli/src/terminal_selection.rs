//! Terminal-backed [`ManualSelection`] (C11): prompts the operator when
//! auto-selection could not resolve a jar, falling back to a skip when
//! stdin is not a terminal.

use std::collections::HashMap;

use async_trait::async_trait;
use dialoguer::{Input, Select};

use jaruid_core::candidate::AnalysisBucket;
use jaruid_core::online::UidCheck;
use jaruid_core::uid::{MavenUid, MavenUidComponent};
use jaruid_pipeline::{ManualDecision, ManualSelection};

pub struct TerminalSelection;

#[async_trait]
impl ManualSelection for TerminalSelection {
    async fn select(
        &self,
        jar_name: &str,
        buckets: &HashMap<MavenUidComponent, AnalysisBucket>,
        online_results: &[UidCheck],
    ) -> ManualDecision {
        if !atty::is(atty::Stream::Stdin) {
            jaruid_util::progress::status_warn("skip", &format!("{jar_name} (non-interactive)"));
            return ManualDecision::Skip;
        }

        jaruid_util::progress::status_info("unresolved", jar_name);
        for check in online_results {
            eprintln!("  online: {} -> {:?}", check.uid, check.online_match);
        }

        let mut options: Vec<String> = Vec::new();
        for component in MavenUidComponent::ALL {
            if let Some(bucket) = buckets.get(&component) {
                for candidate in bucket.top_n(3) {
                    options.push(format!("{component}: {}", candidate.value));
                }
            }
        }
        options.push("Enter coordinates manually".to_string());
        options.push("Skip this jar".to_string());

        let chosen = Select::new()
            .with_prompt(format!("  Select coordinates for {jar_name}"))
            .items(&options)
            .default(0)
            .interact()
            .unwrap_or(options.len() - 1);

        if chosen == options.len() - 1 {
            return ManualDecision::Skip;
        }
        if chosen == options.len() - 2 {
            return prompt_manual_entry();
        }

        // A single candidate line doesn't carry a full triple; fall through
        // to manual entry pre-populated with nothing, since ranked entries
        // only ever name one component at a time.
        prompt_manual_entry()
    }
}

fn prompt_manual_entry() -> ManualDecision {
    let group_id: String = Input::new()
        .with_prompt("  groupId")
        .interact_text()
        .unwrap_or_default();
    let artifact_id: String = Input::new()
        .with_prompt("  artifactId")
        .interact_text()
        .unwrap_or_default();
    let version: String = Input::new()
        .with_prompt("  version")
        .interact_text()
        .unwrap_or_default();

    let uid = MavenUid::new(group_id, artifact_id, version);
    if uid.is_complete_and_valid() {
        ManualDecision::Selected(uid)
    } else {
        ManualDecision::Skip
    }
}

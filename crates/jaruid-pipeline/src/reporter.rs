//! Reporter (C8): assembles the final [`Report`] and writes it to disk,
//! resolving the `{datetime}` placeholder in the configured path template.

use chrono::Utc;

use jaruid_core::config::{Config, RemoteRepository};
use jaruid_core::report::{AnalysisInfo, JarReport, Report, RepositorySummary};
use jaruid_util::errors::JarUidError;

/// Build the full report document from the pipeline's per-jar results.
pub fn build_report(config: &Config, jar_results: Vec<JarReport>) -> Report {
    let remote_repositories = config
        .repositories
        .iter()
        .chain(std::iter::once(&RemoteRepository::central()))
        .map(|r| RepositorySummary {
            name: r.name.clone(),
            url: r.url.clone(),
        })
        .collect();

    Report {
        analysis_info: AnalysisInfo {
            online_check_enabled: config.online_enabled,
            remote_repositories,
        },
        jar_results,
    }
}

/// Substitute `{datetime}` in the report path template with the current
/// UTC time, formatted `yyyy-MM-dd-HH-mm-ss`.
pub fn resolve_report_path(template: &str) -> String {
    let stamp = Utc::now().format("%Y-%m-%d-%H-%M-%S").to_string();
    template.replace("{datetime}", &stamp)
}

/// Serialize `report` as pretty JSON and write it to `path`.
pub fn write_report(report: &Report, path: &str) -> Result<(), JarUidError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| JarUidError::Report {
        message: format!("failed to serialize report: {e}"),
    })?;
    std::fs::write(path, json).map_err(|e| JarUidError::Report {
        message: format!("failed to write report to {path}: {e}"),
    })
}

//! Handler for `jaruid analyze`.

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};

use jaruid_core::config::{CliOverrides, Config, GlobalConfig};
use jaruid_maven::RepoChecker;
use jaruid_pipeline::{build_report, resolve_report_path, write_report, InputJar, Pipeline};
use jaruid_util::errors::JarUidError;

use crate::terminal_selection::TerminalSelection;

#[allow(clippy::too_many_arguments)]
pub async fn exec(
    jars: Vec<String>,
    report_file: Option<String>,
    offline: bool,
    limit: Option<usize>,
    skip_not_found: bool,
    force_detailed_output: bool,
    verbose: bool,
) -> Result<()> {
    let global = GlobalConfig::load().into_diagnostic()?;
    let cli = CliOverrides {
        offline,
        limit,
        skip_not_found,
        force_detailed_output,
        report_file,
    };
    let config = Config::resolve(&global, &cli);

    let paths = collect_jar_paths(&jars, config.limit)?;
    if paths.is_empty() {
        jaruid_util::progress::status_warn("warning", "no jar files found for the given paths");
        return Ok(());
    }

    let mut inputs = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes = std::fs::read(path).into_diagnostic()?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        inputs.push(InputJar { file_name, bytes });
    }

    if verbose {
        jaruid_util::progress::status_info("analyzing", &format!("{} jar(s)", inputs.len()));
    }

    let checker = if config.online_enabled {
        Some(
            RepoChecker::startup(&config.repositories, config.request_timeout_secs)
                .await
                .into_diagnostic()?,
        )
    } else {
        None
    };

    let pipeline = Pipeline::new(config.clone(), checker);
    let manual = TerminalSelection;
    let jar_results = if config.skip_not_found {
        pipeline.run(inputs, &jaruid_pipeline::AlwaysSkip).await
    } else {
        pipeline.run(inputs, &manual).await
    };

    let report = build_report(&config, jar_results);
    let report_path = resolve_report_path(&config.report_path_template);
    write_report(&report, &report_path).into_diagnostic()?;

    jaruid_util::progress::status("done", &format!("report written to {report_path}"));
    Ok(())
}

/// Expand `--jars` inputs (files or directories) into a flat list of
/// `.jar` file paths, applying `limit` if set.
///
/// Preserves the order of the top-level `--jars` operands (testable
/// invariant 7: the report lists jars in the same order as the input
/// argument expansion); only a directory's own flattened listing is
/// sorted, since it has no inherent order of its own.
fn collect_jar_paths(inputs: &[String], limit: Option<usize>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let mut found = jaruid_util::fs::list_files_with_extension(path, "jar").into_diagnostic()?;
            found.sort();
            paths.extend(found);
        } else if path.is_file() {
            paths.push(path.to_path_buf());
        } else {
            return Err(JarUidError::InvalidInput {
                message: format!("{input} does not exist"),
            }
            .into());
        }
    }
    if let Some(limit) = limit {
        paths.truncate(limit);
    }
    Ok(paths)
}

//! Command dispatch and handler modules.

mod analyze;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            jars,
            report_file,
            offline,
            limit,
            skip_not_found,
            force_detailed_output,
        } => {
            analyze::exec(
                jars,
                report_file,
                offline,
                limit,
                skip_not_found,
                force_detailed_output,
                cli.verbose,
            )
            .await
        }
    }
}

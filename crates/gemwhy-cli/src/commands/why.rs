//! Handler for the why query.

use miette::Result;

use gemwhy_core::errors::GemwhyError;
use gemwhy_ops::ops_why::{self, OutputMode, WhyOptions};

use crate::cli::Cli;

pub fn exec(cli: Cli) -> Result<()> {
    let Some(package) = cli.package else {
        return Err(GemwhyError::MissingPackageName.into());
    };

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.chains {
        OutputMode::Chains
    } else if cli.flat {
        OutputMode::Flat
    } else {
        OutputMode::Tree
    };

    let opts = WhyOptions {
        mode,
        depth: cli.depth,
    };

    tracing::debug!(package = %package, ?mode, "running why query");
    let output = ops_why::why(&cli.lockfile, &package, &opts)?;
    print!("{output}");
    Ok(())
}

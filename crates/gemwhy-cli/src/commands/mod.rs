//! Command dispatch and handler modules.

mod why;

use miette::Result;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    why::exec(cli)
}

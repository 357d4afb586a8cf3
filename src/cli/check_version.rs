//! `check-version`: require a version to lie within a range.

use crate::version::require_in_range;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Require `--version` to lie within `--range`.
#[derive(Args, Debug)]
pub struct CheckVersionCommand {
    /// Version range, e.g. `[0.3,0.4)` or an exact version
    #[arg(long, visible_alias = "range-spec", value_name = "RANGE")]
    pub range: String,

    /// Version to check
    #[arg(long, value_name = "VERSION")]
    pub version: String,
}

impl CheckVersionCommand {
    pub fn execute(self) -> Result<()> {
        require_in_range(&self.version, &self.range)?;
        println!("{} {} is within {}", "✓".green(), self.version, self.range);
        Ok(())
    }
}

//! `check-parent-pom`: verify a child's parent reference.

use crate::config::Settings;
use crate::descriptor::DescriptorReader;
use crate::parent::ParentReferenceCheck;
use crate::repository::{DescriptorProjectBuilder, LocalRepository};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Require the child descriptor to reference the parent descriptor.
#[derive(Args, Debug)]
pub struct CheckParentPomCommand {
    /// Parent descriptor
    #[arg(long, value_name = "FILE")]
    pub parent_path: PathBuf,

    /// Child descriptor whose `<parent>` block is checked
    #[arg(long, value_name = "FILE")]
    pub child_path: PathBuf,

    /// Local artifact repository (default `~/.m2/repository`)
    #[arg(long, value_name = "DIR")]
    pub repo_local: Option<PathBuf>,
}

impl CheckParentPomCommand {
    pub fn execute(self, settings: &Settings) -> Result<()> {
        let reader = DescriptorReader::new(settings.dev_mode);
        let check = ParentReferenceCheck::new(
            reader,
            LocalRepository::new(&settings.local_repository),
            DescriptorProjectBuilder::new(reader),
        );

        let report = check.run(&self.parent_path, &self.child_path)?;

        if report.installed {
            println!(
                "{} Installed {} into {}",
                "✓".green(),
                report.expected,
                settings.local_repository.display()
            );
        }
        println!(
            "{} {} references {} ({})",
            "✓".green(),
            self.child_path.display(),
            report.expected,
            report.declared.version()
        );
        Ok(())
    }
}

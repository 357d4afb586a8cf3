//! `verify-file`: verify a file, optionally repairing it.

use crate::config::Settings;
use crate::integrity::{Fetcher, IntegrityOutcome, IntegrityRequest, verify_or_repair};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Verify a file against the checksum published at `--cksum-url`.
#[derive(Args, Debug)]
pub struct VerifyFileCommand {
    /// Local file to verify
    #[arg(long, value_name = "FILE")]
    pub file_path: PathBuf,

    /// URL of the reference checksum (`file://`, `http://` or `https://`)
    #[arg(long, value_name = "URL")]
    pub cksum_url: String,

    /// URL of the reference copy of the file
    #[arg(long, value_name = "URL")]
    pub ref_url: Option<String>,

    /// Replace the file from `--ref-url` instead of failing on mismatch
    #[arg(long)]
    pub replace_on_fail: bool,
}

impl VerifyFileCommand {
    fn request(&self) -> IntegrityRequest {
        IntegrityRequest {
            file: self.file_path.clone(),
            checksum_url: self.cksum_url.clone(),
            reference_url: self.ref_url.clone(),
            replace_on_fail: self.replace_on_fail,
        }
    }

    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let fetcher = Fetcher::new(settings.fetch_timeout)?;

        match verify_or_repair(&self.request(), &fetcher).await? {
            IntegrityOutcome::Verified => {
                println!("{} {} matches its checksum", "✓".green(), self.file_path.display());
            }
            IntegrityOutcome::Replaced { path } => {
                eprintln!(
                    "{} {} did not match its checksum and was replaced",
                    "warning:".yellow().bold(),
                    path.display()
                );
            }
        }
        Ok(())
    }
}

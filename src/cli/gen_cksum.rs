//! `gen-cksum`: print a file's checksum.

use crate::integrity::compute_checksum;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Print the uppercase MD5 checksum of a file on stdout.
///
/// The output is exactly the digest, so it can be redirected into the
/// checksum file that `verify-file` later reads.
#[derive(Args, Debug)]
pub struct GenCksumCommand {
    /// File to checksum
    #[arg(long, value_name = "FILE")]
    pub file_path: PathBuf,
}

impl GenCksumCommand {
    pub async fn execute(self) -> Result<()> {
        let digest = compute_checksum(&self.file_path).await?;
        println!("{digest}");
        Ok(())
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::deploy::Deploy;
use crate::request::DeploymentRequest;

#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(short, long)]
    rpc: String,

    #[clap(long)]
    sk: String,

    /// Active network name, interpolated into the token metadata base URL
    #[clap(short, long)]
    network: String,

    /// Directory holding the compiled contract artifacts
    #[clap(short, long, default_value = "artifacts")]
    artifacts: PathBuf,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let deploy = Deploy::new(&self.rpc, &self.sk, self.artifacts).await?;
        let request = DeploymentRequest::erc721(&self.network);
        deploy.run(&request).await
    }
}

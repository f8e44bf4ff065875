use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ethers::abi::Token;
use ethers::contract::ContractFactory;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::H160;
use ethers::utils::hex;

use crate::contracts::{initializer_calldata, Artifact};
use crate::request::DeploymentRequest;

pub struct Deploy {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    deployer: H160,
    artifacts: PathBuf,
}

impl Deploy {
    pub async fn new(rpc: &str, sk: &str, artifacts: PathBuf) -> Result<Self> {
        let wallet = LocalWallet::from_bytes(&hex::decode(sk.strip_prefix("0x").unwrap_or(sk))?)?;
        let provider = Provider::<Http>::try_from(rpc)?;

        let wallet = wallet.with_chain_id(provider.get_chainid().await?.as_u64());
        let deployer = wallet.address();
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        Ok(Self {
            client,
            deployer,
            artifacts,
        })
    }

    /// The proxy constructor runs the initializer exactly once; the deployer
    /// owns the proxy admin.
    pub async fn run(&self, request: &DeploymentRequest) -> Result<()> {
        let artifact = Artifact::load(&self.artifacts, &request.contract_name)?;
        let calldata = initializer_calldata(&artifact.abi, &request.initializer)?;

        log::info!(
            "deploying {} from {:?}",
            request.contract_name,
            self.deployer
        );
        let implementation = self.deploy_contract(&artifact).await?;
        println!(
            "{} implementation address:{:?}",
            request.contract_name, implementation
        );

        let proxy = self.deploy_proxy(request, implementation, calldata).await?;
        println!("{} proxy address:{:?}", request.contract_name, proxy);

        Ok(())
    }

    async fn deploy_contract(&self, artifact: &Artifact) -> Result<H160> {
        let contract = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        )
        .deploy(())?
        .legacy()
        .send()
        .await?;

        Ok(contract.address())
    }

    async fn deploy_proxy(
        &self,
        request: &DeploymentRequest,
        implementation: H160,
        calldata: Vec<u8>,
    ) -> Result<H160> {
        let artifact = Artifact::load(&self.artifacts, &request.proxy_contract)?;

        let proxy = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        )
        .deploy(vec![
            Token::Address(implementation),
            Token::Address(self.deployer),
            Token::Bytes(calldata),
        ])?
        .legacy()
        .send()
        .await?;

        Ok(proxy.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPLOYER_SK: &str =
        "0x0101010101010101010101010101010101010101010101010101010101010101";

    #[tokio::test]
    async fn new_rejects_malformed_rpc_url() {
        let Err(err) = Deploy::new("not a url", DEPLOYER_SK, PathBuf::from("artifacts")).await
        else {
            panic!("client setup accepted a malformed rpc url");
        };
        assert!(err.to_string().contains("relative URL without a base"));
    }

    #[tokio::test]
    async fn new_rejects_malformed_deployer_key() {
        let Err(err) = Deploy::new(
            "http://127.0.0.1:8545",
            "0xnot-hex",
            PathBuf::from("artifacts"),
        )
        .await
        else {
            panic!("client setup accepted a malformed deployer key");
        };
        assert!(!err.to_string().is_empty());
    }
}

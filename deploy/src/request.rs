pub const CONTRACT_NAME: &str = "GhostMarketERC721";
pub const TOKEN_NAME: &str = "GhostMarket ERC721";
pub const TOKEN_SYMBOL: &str = "GHOST";
pub const PROXY_CONTRACT: &str = "OpenZeppelinTransparentProxy";

const INITIALIZER_METHOD: &str = "initialize";

// Pinned to the mainnet API host regardless of the target network.
const IS_MAINNET: bool = true;

#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub proxy_contract: String,
    pub initializer: Initializer,
}

#[derive(Debug, Clone)]
pub struct Initializer {
    pub method_name: String,
    pub args: Vec<String>,
}

impl DeploymentRequest {
    pub fn erc721(network: &str) -> Self {
        Self {
            contract_name: CONTRACT_NAME.to_string(),
            proxy_contract: PROXY_CONTRACT.to_string(),
            initializer: Initializer {
                method_name: INITIALIZER_METHOD.to_string(),
                args: vec![
                    TOKEN_NAME.to_string(),
                    TOKEN_SYMBOL.to_string(),
                    metadata_base_url(network),
                ],
            },
        }
    }
}

/// The network name is interpolated verbatim, without validation.
pub fn metadata_base_url(network: &str) -> String {
    let api_path = if IS_MAINNET { "api" } else { "api-testnet" };
    format!("https://{api_path}.ghostmarket.io/metadata/{network}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_url_always_uses_mainnet_host() {
        assert_eq!(
            metadata_base_url("rinkeby"),
            "https://api.ghostmarket.io/metadata/rinkeby"
        );
        assert_eq!(
            metadata_base_url("bsc"),
            "https://api.ghostmarket.io/metadata/bsc"
        );
    }

    #[test]
    fn network_name_is_interpolated_verbatim() {
        assert_eq!(
            metadata_base_url("bad network"),
            "https://api.ghostmarket.io/metadata/bad network"
        );
    }

    #[test]
    fn erc721_request_pins_token_constants() {
        let request = DeploymentRequest::erc721("rinkeby");

        assert_eq!(request.contract_name, "GhostMarketERC721");
        assert_eq!(request.proxy_contract, "OpenZeppelinTransparentProxy");
        assert_eq!(request.initializer.method_name, "initialize");
        assert_eq!(
            request.initializer.args,
            vec![
                "GhostMarket ERC721",
                "GHOST",
                "https://api.ghostmarket.io/metadata/rinkeby",
            ]
        );
    }
}

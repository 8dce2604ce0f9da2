use crate::error::{ContractClientError, ContractClientResult};
use eat_the_pie_core::Config;
use ethers::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Local dev chains mine instantly, so pending transactions are polled faster there.
pub const LOCAL_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub type HttpWalletSigner = SignerMiddleware<NonceManagerMiddleware<Arc<Provider<Http>>>, LocalWallet>;

pub fn build_http_provider(provider_endpoint: &str) -> ContractClientResult<Arc<Provider<Http>>> {
    let provider = Provider::<Http>::try_from(provider_endpoint).map_err(|e| {
        ContractClientError::InvalidProviderEndpoint(provider_endpoint.to_string(), e.to_string())
    })?;

    let provider = if is_local_endpoint(provider_endpoint) {
        provider.interval(LOCAL_POLL_INTERVAL)
    } else {
        provider
    };

    Ok(Arc::new(provider))
}

fn is_local_endpoint(provider_endpoint: &str) -> bool {
    ["://localhost", "://127.0.0.1"]
        .iter()
        .any(|host| provider_endpoint.contains(host))
}

/// Wallet from the configured account, wrapped with nonce management and signing.
pub fn build_http_signer(config: &Config) -> ContractClientResult<Arc<HttpWalletSigner>> {
    let wallet = config.wallet()?;

    let provider = build_http_provider(&config.provider_endpoint)?;

    let nonce_manager = NonceManagerMiddleware::new(provider, wallet.address());

    Ok(Arc::new(SignerMiddleware::new(nonce_manager, wallet)))
}

#[cfg(test)]
pub mod provider_tests {
    use super::*;
    use eat_the_pie_core::Network;

    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_build_signer_from_config() {
        let config = Config::new(
            Network::Anvil,
            Network::Anvil.default_contract_address().to_string(),
            "http://127.0.0.1:8545".to_string(),
            ANVIL_KEY.to_string(),
        );
        let signer = build_http_signer(&config).unwrap();
        assert_eq!(
            signer.address(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(signer.signer().chain_id(), 31337);
    }

    #[test]
    fn test_local_endpoint_poll_interval() {
        let provider = build_http_provider("http://127.0.0.1:8545").unwrap();
        assert_eq!(provider.get_interval(), LOCAL_POLL_INTERVAL);

        let provider = build_http_provider("https://rpc2.sepolia.org").unwrap();
        assert!(provider.get_interval() > LOCAL_POLL_INTERVAL);
    }

    #[test]
    fn test_reject_bad_endpoint() {
        assert!(matches!(
            build_http_provider("not a url"),
            Err(ContractClientError::InvalidProviderEndpoint(..))
        ));
    }
}

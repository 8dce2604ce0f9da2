use crate::ethers::provider::HttpWalletSigner;
use eat_the_pie_core::ConfigError;
use ethers::prelude::{ContractError, ProviderError};
use ethers::types::H256;
use thiserror::Error;

pub type ContractClientResult<A> = Result<A, ContractClientError>;

/// Nodes that don't return revert data still put this in the error message.
pub const EXECUTION_REVERTED: &str = "execution reverted";

#[derive(Debug, Error)]
pub enum ContractClientError {
    #[error(transparent)]
    ChainProviderError(#[from] ProviderError),
    #[error(transparent)]
    HttpContractError(#[from] ContractError<HttpWalletSigner>),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error("invalid provider endpoint {0}: {1}")]
    InvalidProviderEndpoint(String, String),
    #[error("can't fetch the receipt of transaction {0:?}")]
    NoTransactionReceipt(H256),
    #[error("Transaction {0:?} failed with status equal to 0x0")]
    TransactionFailed(H256),
}

impl ContractClientError {
    /// Whether the node rejected the call because the contract reverted.
    pub fn is_revert(&self) -> bool {
        match self {
            ContractClientError::HttpContractError(e) if e.is_revert() => true,
            ContractClientError::HttpContractError(_)
            | ContractClientError::ChainProviderError(_) => {
                self.to_string().contains(EXECUTION_REVERTED)
            }
            _ => false,
        }
    }

    /// The `Error(string)` message of a reverted call, if the node returned one.
    pub fn revert_reason(&self) -> Option<String> {
        match self {
            ContractClientError::HttpContractError(e) => e.decode_revert::<String>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_contract_errors_have_no_revert_reason() {
        let e = ContractClientError::TransactionFailed(H256::zero());
        assert!(!e.is_revert());
        assert!(e.revert_reason().is_none());

        let e = ContractClientError::NoTransactionReceipt(H256::repeat_byte(0x11));
        assert!(!e.is_revert());
        assert!(e.to_string().contains("0x1111"));

        let e = ContractClientError::InvalidProviderEndpoint(
            "not a url".to_string(),
            "relative URL without a base".to_string(),
        );
        assert_eq!(
            e.to_string(),
            "invalid provider endpoint not a url: relative URL without a base"
        );
    }

    #[test]
    fn test_decode_revert_string() {
        // Error(string) with "No prize to claim"
        let data = ethers::types::Bytes::from(
            ethers::utils::hex::decode(
                "08c379a0\
                 0000000000000000000000000000000000000000000000000000000000000020\
                 0000000000000000000000000000000000000000000000000000000000000011\
                 4e6f207072697a6520746f20636c61696d000000000000000000000000000000",
            )
            .unwrap(),
        );
        let e = ContractClientError::HttpContractError(ContractError::Revert(data));
        assert!(e.is_revert());
        assert_eq!(e.revert_reason().as_deref(), Some("No prize to claim"));
    }

    #[test]
    fn test_revert_only_in_error_message() {
        let e = ContractClientError::ChainProviderError(ProviderError::CustomError(
            "(code: 3, message: execution reverted: Time interval not passed, data: None)"
                .to_string(),
        ));
        assert!(e.is_revert());
        assert!(e.revert_reason().is_none());

        let e = ContractClientError::HttpContractError(ContractError::ProviderError {
            e: ProviderError::CustomError(
                "execution reverted: Insufficient prize pool".to_string(),
            ),
        });
        assert!(e.is_revert());

        let e = ContractClientError::ChainProviderError(ProviderError::CustomError(
            "connection refused".to_string(),
        ));
        assert!(!e.is_revert());
    }
}

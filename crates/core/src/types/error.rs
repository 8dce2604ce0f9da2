use ethers_signers::WalletError;
use rustc_hex::FromHexError;
use std::env::VarError;
use thiserror::Error;

pub type ConfigResult<A> = Result<A, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found at {0}. Please run 'setup' first.")]
    NotFound(String),
    #[error("please provide at least a hdwallet, keystore or plain private key(not recommended)")]
    LackOfAccount,
    #[error(transparent)]
    BadFormat(#[from] serde_yaml::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    EnvVarNotExisted(#[from] VarError),
    #[error(transparent)]
    BuildingAccountError(#[from] WalletError),
    #[error("invalid contract address: {0}")]
    InvalidAddress(#[from] FromHexError),
    #[error("unsupported network: {0}")]
    UnsupportedNetwork(String),
}

#[derive(Debug, Error)]
pub enum ProofError {
    #[error("proof file not found: {0}")]
    FileNotFound(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    BadFormat(#[from] serde_json::Error),
    #[error("invalid hex value {0}: {1}")]
    InvalidHex(String, hex::FromHexError),
    #[error("bit length {0} exceeds the maximum of {1}")]
    BitlenTooLarge(u64, u64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("expected 4 numbers (3 numbers and the Etherball), got {0}")]
    WrongCount(usize),
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("numbers must be between 1 and {max}, got {value}")]
    NumberOutOfRange { value: u64, max: u64 },
    #[error("Etherball must be between 1 and {max}, got {value}")]
    EtherballOutOfRange { value: u64, max: u64 },
}

use crate::{ConfigError, ConfigResult};
use ethers_core::{k256::ecdsa::SigningKey, types::Address};
use ethers_signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer, Wallet};
use log::debug;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::{self, read_to_string};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CONTRACT_TRANSACTION_RETRY_BASE: u64 = 2;
pub const DEFAULT_CONTRACT_TRANSACTION_RETRY_FACTOR: u64 = 1000;
pub const DEFAULT_CONTRACT_TRANSACTION_RETRY_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_CONTRACT_TRANSACTION_RETRY_USE_JITTER: bool = true;

pub const DEFAULT_CONTRACT_VIEW_RETRY_BASE: u64 = 2;
pub const DEFAULT_CONTRACT_VIEW_RETRY_FACTOR: u64 = 500;
pub const DEFAULT_CONTRACT_VIEW_RETRY_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_CONTRACT_VIEW_RETRY_USE_JITTER: bool = true;

pub const MASKED_KEY_PREFIX_LEN: usize = 6;
pub const MASKED_KEY_SUFFIX_LEN: usize = 4;

pub fn jitter(duration: Duration) -> Duration {
    duration.mul_f64(thread_rng().gen_range(0.5..=1.0))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentialBackoffRetryDescriptor {
    pub base: u64,
    pub factor: u64,
    pub max_attempts: usize,
    pub use_jitter: bool,
}

impl ExponentialBackoffRetryDescriptor {
    pub fn contract_transaction() -> Self {
        ExponentialBackoffRetryDescriptor {
            base: DEFAULT_CONTRACT_TRANSACTION_RETRY_BASE,
            factor: DEFAULT_CONTRACT_TRANSACTION_RETRY_FACTOR,
            max_attempts: DEFAULT_CONTRACT_TRANSACTION_RETRY_MAX_ATTEMPTS,
            use_jitter: DEFAULT_CONTRACT_TRANSACTION_RETRY_USE_JITTER,
        }
    }

    pub fn contract_view() -> Self {
        ExponentialBackoffRetryDescriptor {
            base: DEFAULT_CONTRACT_VIEW_RETRY_BASE,
            factor: DEFAULT_CONTRACT_VIEW_RETRY_FACTOR,
            max_attempts: DEFAULT_CONTRACT_VIEW_RETRY_MAX_ATTEMPTS,
            use_jitter: DEFAULT_CONTRACT_VIEW_RETRY_USE_JITTER,
        }
    }
}

/// Networks the lottery is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
    Anvil,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Sepolia, Network::Anvil];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Anvil => "anvil",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11155111,
            Network::Anvil => 31337,
        }
    }

    pub fn default_provider_endpoint(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://cloudflare-eth.com",
            Network::Sepolia => "https://rpc2.sepolia.org",
            Network::Anvil => "http://127.0.0.1:8545",
        }
    }

    /// Anvil forks usually redeploy the sepolia build, so it shares that address.
    pub fn default_contract_address(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x043c9ae2764B5a7c2d685bc0262F8cF2f6D86008",
            Network::Sepolia | Network::Anvil => "0x44B340051a31D216f83428B447DBa2C102DFF373",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnsupportedNetwork(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: Network,
    pub contract_address: String,
    pub provider_endpoint: String,
    pub account: Account,
    /// Lower bound for event queries when the game start block can't be read.
    #[serde(default)]
    pub deployed_block_height: u64,
    #[serde(default = "ExponentialBackoffRetryDescriptor::contract_transaction")]
    pub contract_transaction_retry_descriptor: ExponentialBackoffRetryDescriptor,
    #[serde(default = "ExponentialBackoffRetryDescriptor::contract_view")]
    pub contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor,
}

impl Config {
    pub fn new(
        network: Network,
        contract_address: String,
        provider_endpoint: String,
        private_key: String,
    ) -> Self {
        Config {
            network,
            contract_address,
            provider_endpoint,
            account: Account {
                private_key: Some(private_key),
                ..Default::default()
            },
            deployed_block_height: 0,
            contract_transaction_retry_descriptor:
                ExponentialBackoffRetryDescriptor::contract_transaction(),
            contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor::contract_view(),
        }
    }

    pub fn load(config_path: &Path) -> ConfigResult<Config> {
        let config_str = read_to_string(config_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(config_path.display().to_string()),
            _ => ConfigError::IoError(e),
        })?;

        let config: Config = serde_yaml::from_str(&config_str)?;
        debug!(
            "loaded {} config from {}",
            config.network,
            config_path.display()
        );

        Ok(config)
    }

    pub fn save(&self, config_path: &Path) -> ConfigResult<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(config_path, serde_yaml::to_string(self)?)?;

        // the file may carry a plain private key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(config_path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    pub fn chain_id(&self) -> u64 {
        self.network.chain_id()
    }

    pub fn contract_address(&self) -> ConfigResult<Address> {
        Ok(self.contract_address.trim().parse()?)
    }

    pub fn wallet(&self) -> ConfigResult<LocalWallet> {
        Ok(build_wallet_from_config(&self.account)?.with_chain_id(self.chain_id()))
    }
}

#[derive(Default, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdwallet: Option<HDWallet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore: Option<Keystore>,
    // not recommended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("hdwallet", &self.hdwallet.as_ref().map(|_| "<hidden>"))
            .field("keystore", &self.keystore.as_ref().map(|k| &k.path))
            .field(
                "private_key",
                &self.private_key.as_deref().map(mask_private_key),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keystore {
    pub path: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct HDWallet {
    pub mnemonic: String,
    pub path: Option<String>,
    pub index: u32,
    pub passphrase: Option<String>,
}

/// Values starting with `$` name an environment variable holding the secret.
fn resolve_secret(value: &str) -> ConfigResult<String> {
    match value.strip_prefix('$') {
        Some(var) => Ok(env::var(var)?),
        None => Ok(value.to_string()),
    }
}

pub fn build_wallet_from_config(account: &Account) -> ConfigResult<Wallet<SigningKey>> {
    if let Some(hd) = &account.hdwallet {
        let mnemonic = resolve_secret(&hd.mnemonic)?;
        let mut wallet = MnemonicBuilder::<English>::default().phrase(mnemonic.as_str());

        if let Some(path) = &hd.path {
            wallet = wallet.derivation_path(path)?;
        }
        if let Some(passphrase) = &hd.passphrase {
            wallet = wallet.password(passphrase.as_str());
        }
        return Ok(wallet.index(hd.index)?.build()?);
    }

    if let Some(keystore) = &account.keystore {
        let password = resolve_secret(&keystore.password)?;
        return Ok(LocalWallet::decrypt_keystore(&keystore.path, password)?);
    }

    if let Some(private_key) = &account.private_key {
        let private_key = resolve_secret(private_key)?;
        return Ok(private_key.trim().parse::<Wallet<SigningKey>>()?);
    }

    Err(ConfigError::LackOfAccount)
}

fn is_hex_with_prefix(input: &str, digits: usize) -> bool {
    match input.strip_prefix("0x") {
        Some(hex) => hex.len() == digits && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn is_valid_address(input: &str) -> bool {
    is_hex_with_prefix(input, 40)
}

pub fn is_valid_private_key(input: &str) -> bool {
    is_hex_with_prefix(input, 64)
}

pub fn is_valid_rpc_url(input: &str) -> bool {
    input.starts_with("http")
}

pub fn mask_private_key(private_key: &str) -> String {
    if private_key.is_empty() {
        return "Not set".to_string();
    }
    if private_key.len() <= MASKED_KEY_PREFIX_LEN + MASKED_KEY_SUFFIX_LEN
        || !private_key.is_ascii()
    {
        return "*".repeat(private_key.chars().count());
    }

    format!(
        "{}...{}",
        &private_key[..MASKED_KEY_PREFIX_LEN],
        &private_key[private_key.len() - MASKED_KEY_SUFFIX_LEN..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // anvil's first default account
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn temp_config_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("eat-the-pie-core-{}-{}", name, std::process::id()))
            .join("config.yml")
    }

    #[test]
    fn test_network_defaults() {
        assert_eq!(Network::Mainnet.chain_id(), 1);
        assert_eq!(Network::Sepolia.chain_id(), 11155111);
        assert_eq!(Network::Anvil.chain_id(), 31337);
        for network in Network::ALL {
            assert!(is_valid_address(network.default_contract_address()));
            assert!(is_valid_rpc_url(network.default_provider_endpoint()));
            assert_eq!(network.name().parse::<Network>().unwrap(), network);
        }
        assert!("worldchain".parse::<Network>().is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let path = temp_config_path("roundtrip");
        let config = Config::new(
            Network::Sepolia,
            Network::Sepolia.default_contract_address().to_string(),
            Network::Sepolia.default_provider_endpoint().to_string(),
            TEST_PRIVATE_KEY.to_string(),
        );
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.network, Network::Sepolia);
        assert_eq!(loaded.contract_address, config.contract_address);
        assert_eq!(loaded.provider_endpoint, config.provider_endpoint);
        assert_eq!(loaded.account.private_key.as_deref(), Some(TEST_PRIVATE_KEY));
        assert_eq!(
            loaded.contract_view_retry_descriptor,
            ExponentialBackoffRetryDescriptor::contract_view()
        );

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_load_missing_config() {
        let path = temp_config_path("missing");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("Please run 'setup' first."));
    }

    #[test]
    fn test_retry_descriptors_default_when_absent() {
        let yaml = format!(
            "network: anvil\ncontract_address: \"{}\"\nprovider_endpoint: \"http://127.0.0.1:8545\"\naccount:\n  private_key: \"{}\"\n",
            Network::Anvil.default_contract_address(),
            TEST_PRIVATE_KEY
        );
        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.deployed_block_height, 0);
        assert_eq!(
            config.contract_transaction_retry_descriptor,
            ExponentialBackoffRetryDescriptor::contract_transaction()
        );
        assert_eq!(config.chain_id(), 31337);
        assert!(config.contract_address().is_ok());
    }

    #[test]
    fn test_build_wallet_from_private_key() {
        let config = Config::new(
            Network::Anvil,
            Network::Anvil.default_contract_address().to_string(),
            Network::Anvil.default_provider_endpoint().to_string(),
            TEST_PRIVATE_KEY.to_string(),
        );
        let wallet = config.wallet().unwrap();
        assert_eq!(wallet.address(), TEST_ADDRESS.parse::<Address>().unwrap());
        assert_eq!(wallet.chain_id(), 31337);
    }

    #[test]
    fn test_build_wallet_from_env_var() {
        env::set_var("EAT_THE_PIE_TEST_PRIVATE_KEY", TEST_PRIVATE_KEY);
        let account = Account {
            private_key: Some("$EAT_THE_PIE_TEST_PRIVATE_KEY".to_string()),
            ..Default::default()
        };
        let wallet = build_wallet_from_config(&account).unwrap();
        assert_eq!(wallet.address(), TEST_ADDRESS.parse::<Address>().unwrap());

        let account = Account {
            private_key: Some("$EAT_THE_PIE_UNSET_VARIABLE".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_wallet_from_config(&account),
            Err(ConfigError::EnvVarNotExisted(_))
        ));
    }

    #[test]
    fn test_lack_of_account() {
        assert!(matches!(
            build_wallet_from_config(&Account::default()),
            Err(ConfigError::LackOfAccount)
        ));
    }

    #[test]
    fn test_invalid_contract_address() {
        let mut config = Config::new(
            Network::Mainnet,
            "0x1".to_string(),
            Network::Mainnet.default_provider_endpoint().to_string(),
            TEST_PRIVATE_KEY.to_string(),
        );
        assert!(config.contract_address().is_err());
        config.contract_address = Network::Mainnet.default_contract_address().to_string();
        assert!(config.contract_address().is_ok());
    }

    #[test]
    fn test_input_validation() {
        assert!(is_valid_address(TEST_ADDRESS));
        assert!(!is_valid_address("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(!is_valid_address("0xzz9fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(is_valid_private_key(TEST_PRIVATE_KEY));
        assert!(!is_valid_private_key(TEST_ADDRESS));
        assert!(is_valid_rpc_url("https://rpc2.sepolia.org"));
        assert!(!is_valid_rpc_url("ws://127.0.0.1:8546"));
    }

    #[test]
    fn test_mask_private_key() {
        assert_eq!(mask_private_key(TEST_PRIVATE_KEY), "0xac09...ff80");
        assert_eq!(mask_private_key(""), "Not set");
        assert_eq!(mask_private_key("0x1234"), "******");
    }

    #[test]
    fn test_account_debug_hides_secrets() {
        let account = Account {
            private_key: Some(TEST_PRIVATE_KEY.to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", account);
        assert!(!debug.contains(TEST_PRIVATE_KEY));
        assert!(debug.contains("0xac09...ff80"));
    }

    #[test]
    fn test_jitter() {
        for _ in 0..100 {
            let jitter = jitter(Duration::from_millis(1000));
            assert!(500 <= jitter.as_millis() && jitter.as_millis() <= 1000);
        }
    }
}

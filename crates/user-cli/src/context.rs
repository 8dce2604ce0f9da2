use eat_the_pie_contract_client::ethers::lottery::LotteryClient;
use eat_the_pie_contract_client::lottery::LotteryClientBuilder;
use eat_the_pie_core::Config;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub history_file_path: PathBuf,
}

impl Context {
    pub fn new(config_path: PathBuf, history_file_path: PathBuf) -> Self {
        Context {
            config_path,
            history_file_path,
        }
    }

    /// Configuration is re-read on every command so that `setup` takes effect immediately.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        Ok(Config::load(&self.config_path)?)
    }

    pub fn lottery_client(&self) -> anyhow::Result<LotteryClient> {
        Ok(self.load_config()?.build_lottery_client()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eat_the_pie_core::{ConfigError, Network};
    use std::env;
    use std::fs;

    #[test]
    fn test_missing_config_asks_for_setup() {
        let context = Context::new(
            env::temp_dir().join("eat_the_pie_no_such_dir/config.yml"),
            PathBuf::from("eat-the-pie.history"),
        );
        let err = context.lottery_client().err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
        assert!(err.to_string().contains("Please run 'setup' first."));
    }

    #[test]
    fn test_client_from_saved_config() {
        let dir = env::temp_dir().join("eat_the_pie_context_test");
        let config_path = dir.join("config.yml");
        Config::new(
            Network::Sepolia,
            Network::Sepolia.default_contract_address().to_string(),
            Network::Sepolia.default_provider_endpoint().to_string(),
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        )
        .save(&config_path)
        .unwrap();

        let context = Context::new(config_path, dir.join("history"));
        let client = context.lottery_client().unwrap();
        assert_eq!(
            client.lottery_address(),
            Network::Sepolia
                .default_contract_address()
                .parse::<ethers::types::Address>()
                .unwrap()
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use eat_the_pie_core::{
    address_to_string, is_valid_address, is_valid_private_key, is_valid_rpc_url, DifficultyLimits,
    Network, Ticket, MAX_TICKETS_PER_PURCHASE, MIN_TICKETS_PER_PURCHASE,
};
use ethers::types::{Address, U256};
use std::path::PathBuf;

pub const INVALID_GAME_NUMBER: &str = "Please enter a valid game number";
pub const INVALID_ADDRESS: &str = "Please enter a valid Ethereum address";
pub const INVALID_PRIVATE_KEY: &str =
    "Please enter a valid private key (66 characters long, starting with 0x)";
pub const INVALID_RPC_URL: &str = "Please enter a valid URL";
pub const INVALID_FILE_PATH: &str = "Please enter a valid file path";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSource {
    Manual,
    Random,
}

pub fn validate_game_number(input: &u64) -> Result<(), &'static str> {
    if *input > 0 {
        Ok(())
    } else {
        Err(INVALID_GAME_NUMBER)
    }
}

pub fn validate_ticket_count(input: &u64) -> Result<(), String> {
    if (MIN_TICKETS_PER_PURCHASE..=MAX_TICKETS_PER_PURCHASE).contains(input) {
        Ok(())
    } else {
        Err(format!(
            "Please enter a number between {} and {}",
            MIN_TICKETS_PER_PURCHASE, MAX_TICKETS_PER_PURCHASE
        ))
    }
}

pub fn validate_existing_file(input: &String) -> Result<(), &'static str> {
    if PathBuf::from(input.trim()).is_file() {
        Ok(())
    } else {
        Err(INVALID_FILE_PATH)
    }
}

pub fn game_number(prompt: &str) -> anyhow::Result<U256> {
    let game_number: u64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(validate_game_number)
        .interact_text()?;

    Ok(U256::from(game_number))
}

pub fn ticket_count() -> anyhow::Result<u64> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "How many tickets do you want to buy? ({}-{})",
            MIN_TICKETS_PER_PURCHASE, MAX_TICKETS_PER_PURCHASE
        ))
        .validate_with(validate_ticket_count)
        .interact_text()?)
}

pub fn ticket_source() -> anyhow::Result<TicketSource> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to provide your own numbers or auto-generate?")
        .items(&["Provide own", "Auto-generate"])
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        TicketSource::Manual
    } else {
        TicketSource::Random
    })
}

pub fn ticket(index: usize, limits: DifficultyLimits) -> anyhow::Result<Ticket> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Enter 4 numbers for ticket {} (comma-separated, last is Etherball)",
            index
        ))
        .validate_with(|input: &String| -> Result<(), String> {
            Ticket::parse(input, limits)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(Ticket::parse(&input, limits)?)
}

pub fn wallet_address(default: Address) -> anyhow::Result<Address> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter wallet address")
        .default(address_to_string(default))
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_address(input.trim()) {
                Ok(())
            } else {
                Err(INVALID_ADDRESS)
            }
        })
        .interact_text()?;

    Ok(input.trim().parse()?)
}

pub fn existing_file(prompt: &str) -> anyhow::Result<PathBuf> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(validate_existing_file)
        .interact_text()?;

    Ok(PathBuf::from(input.trim()))
}

pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn network() -> anyhow::Result<Network> {
    let names = Network::ALL.iter().map(|n| n.name()).collect::<Vec<_>>();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which network would you like to use?")
        .items(&names[..])
        .default(0)
        .interact()?;

    Ok(Network::ALL[choice])
}

pub fn contract_address(network: Network) -> anyhow::Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the EatThePie contract address")
        .default(network.default_contract_address().to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_address(input.trim()) {
                Ok(())
            } else {
                Err(INVALID_ADDRESS)
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

pub fn rpc_url(network: Network) -> anyhow::Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the RPC URL (see chainlist.org for a list of public nodes)")
        .default(network.default_provider_endpoint().to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_rpc_url(input.trim()) {
                Ok(())
            } else {
                Err(INVALID_RPC_URL)
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

pub fn private_key() -> anyhow::Result<String> {
    let input = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your wallet private key")
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_private_key(input.trim()) {
                Ok(())
            } else {
                Err(INVALID_PRIVATE_KEY)
            }
        })
        .interact()?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_validate_game_number() {
        assert!(validate_game_number(&1).is_ok());
        assert_eq!(validate_game_number(&0), Err(INVALID_GAME_NUMBER));
    }

    #[test]
    fn test_validate_ticket_count() {
        assert!(validate_ticket_count(&1).is_ok());
        assert!(validate_ticket_count(&100).is_ok());
        assert!(validate_ticket_count(&0).is_err());
        assert!(validate_ticket_count(&101).is_err());
    }

    #[test]
    fn test_validate_existing_file() {
        let dir = env::temp_dir().join("eat_the_pie_prompt_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("proof.json");
        fs::write(&path, "{}").unwrap();

        assert!(validate_existing_file(&path.display().to_string()).is_ok());
        // directories are not proof files
        assert_eq!(
            validate_existing_file(&dir.display().to_string()),
            Err(INVALID_FILE_PATH)
        );
        assert_eq!(
            validate_existing_file(&dir.join("missing.json").display().to_string()),
            Err(INVALID_FILE_PATH)
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}

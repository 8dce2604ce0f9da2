use crate::context::Context;
use crate::display::{print_banner, print_info, print_success};
use crate::prompt;
use eat_the_pie_core::Config;
use log::info;

pub(super) fn setup(context: &Context) -> anyhow::Result<()> {
    print_banner();
    print_info("🥧 Welcome to Eat The Pie! Let's set up your configuration 🚀\n");

    let network = prompt::network()?;
    let contract_address = prompt::contract_address(network)?;
    let provider_endpoint = prompt::rpc_url(network)?;
    let private_key = prompt::private_key()?;

    let mut config = Config::new(network, contract_address, provider_endpoint, private_key);

    // keep hand-tuned settings of an existing file
    if let Ok(previous) = context.load_config() {
        config.deployed_block_height = previous.deployed_block_height;
        config.contract_transaction_retry_descriptor =
            previous.contract_transaction_retry_descriptor;
        config.contract_view_retry_descriptor = previous.contract_view_retry_descriptor;
    }

    config.save(&context.config_path)?;
    info!(
        "saved {} configuration to {}",
        network,
        context.config_path.display()
    );

    print_success("\n✨ Configuration saved successfully! You're ready to go! 🎉");
    Ok(())
}

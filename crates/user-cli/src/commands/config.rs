use crate::context::Context;
use crate::display::{print_field, print_notice, print_title};
use crate::prompt;
use eat_the_pie_core::mask_private_key;

pub(super) fn show_config(context: &Context) -> anyhow::Result<()> {
    let config = context.load_config()?;
    let private_key = config.account.private_key.clone().unwrap_or_default();

    print_title("\nCurrent Configuration:");
    print_field("Network", config.network);
    print_field("Contract Address", &config.contract_address);
    print_field("RPC URL", &config.provider_endpoint);
    print_field("Private Key", mask_private_key(&private_key));
    println!();

    if !private_key.is_empty()
        && prompt::confirm("Would you like to view the full private key?", false)?
    {
        print_field("Full Private Key", &private_key);
        print_notice("\nWarning: Never share your private key with anyone!");
    }

    Ok(())
}

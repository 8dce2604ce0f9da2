use crate::context::Context;
use crate::display::{print_info, print_notice, print_payouts, print_receipt, print_success};
use crate::prompt;
use crate::revert::{
    is_revert_with, KnownRevert, BUFFER_PERIOD_NOT_PASSED, DRAW_ALREADY_INITIATED,
    DRAW_NOT_INITIATED, INSUFFICIENT_PRIZE_POOL, PAYOUTS_ALREADY_CALCULATED, RANDOM_ALREADY_SET,
    TIME_INTERVAL_NOT_PASSED, VDF_NOT_VALIDATED,
};
use eat_the_pie_contract_client::lottery::{LotteryTransactions, LotteryViews};
use log::{info, warn};

pub(super) const INITIATE_DRAW_REVERTS: &[KnownRevert] = &[
    KnownRevert::new(DRAW_ALREADY_INITIATED, "🔄 Draw already initiated."),
    KnownRevert::new(
        TIME_INTERVAL_NOT_PASSED,
        "⏳ Cannot initiate draw, time interval not yet reached.",
    ),
    KnownRevert::new(
        INSUFFICIENT_PRIZE_POOL,
        "💰 Cannot initiate draw, prize pool threshold not yet reached.",
    ),
];

pub(super) const SET_RANDAO_REVERTS: &[KnownRevert] = &[
    KnownRevert::new(
        BUFFER_PERIOD_NOT_PASSED,
        "⏳ Buffer period (128 blocks) not yet passed.",
    ),
    KnownRevert::new(
        DRAW_NOT_INITIATED,
        "🎲 Draw has not yet been initiated for this game.",
    ),
    KnownRevert::new(
        RANDOM_ALREADY_SET,
        "✅ RANDAO has already been set for this game.",
    ),
];

pub(super) const CALCULATE_PAYOUTS_REVERTS: &[KnownRevert] = &[KnownRevert::new(
    VDF_NOT_VALIDATED,
    "You can only calculate payouts once the VDF proof of the game has been submitted.",
)];

pub(super) async fn initiate_draw(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;

    info!("initiating draw");
    let receipt = client.initiate_draw().await?;

    print_success("\n🎉 Draw initiated successfully! 🎲");
    print_receipt(&receipt);
    Ok(())
}

pub(super) async fn set_randao(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to set the RANDAO value for:")?;

    info!("setting RANDAO value of game {}", game_number);
    let receipt = client.set_random(game_number).await?;

    print_success("\n🎲 RANDAO value set successfully!");
    print_receipt(&receipt);
    Ok(())
}

pub(super) async fn calculate_payouts(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to calculate payouts for:")?;

    print_info("\nCalculating payouts...");
    info!("calculating payouts of game {}", game_number);
    match client.calculate_payouts(game_number).await {
        Ok(receipt) => {
            print_success("Payouts calculation submitted!");
            print_receipt(&receipt);
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            if !is_revert_with(&e, PAYOUTS_ALREADY_CALCULATED) {
                return Err(e);
            }
            warn!("payouts of game {} were already calculated", game_number);
            print_notice("Payouts were already calculated for this game.");
        }
    }

    let payouts = client.game_payouts(game_number).await?;
    print_payouts(game_number, &payouts);
    Ok(())
}

use crate::context::Context;
use crate::display::{print_receipt, print_success};
use crate::prompt;
use crate::revert::{KnownRevert, NO_PRIZE_TO_CLAIM};
use eat_the_pie_contract_client::lottery::LotteryTransactions;
use log::info;

pub(super) const CLAIM_PRIZE_REVERTS: &[KnownRevert] = &[KnownRevert::new(
    NO_PRIZE_TO_CLAIM,
    "No prize to claim for this game.",
)];

pub(super) async fn claim_prize(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to claim your prize:")?;

    info!("claiming prize of game {}", game_number);
    let receipt = client.claim_prize(game_number).await?;

    print_success("\nPrize claimed successfully!");
    print_receipt(&receipt);
    Ok(())
}

pub(super) async fn mint_nft(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to mint your winning NFT:")?;

    info!("minting winning NFT of game {}", game_number);
    let receipt = client.mint_winning_nft(game_number).await?;

    print_success("\nWinning NFT minted successfully!");
    print_receipt(&receipt);
    Ok(())
}

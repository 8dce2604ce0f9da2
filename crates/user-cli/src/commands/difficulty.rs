use crate::context::Context;
use crate::display::{print_field, print_info, print_notice, print_receipt, print_success, print_title};
use crate::revert::{KnownRevert, NOT_ENOUGH_GAMES, TOO_SOON_TO_CHANGE};
use eat_the_pie_contract_client::lottery::{LotteryTransactions, LotteryViews};
use eat_the_pie_core::{format_difficulty, Difficulty, DifficultyLimits};
use log::info;

const CANNOT_CHANGE_YET: &str =
    "Cannot change difficulty yet. Not enough games played or too soon since last change.";

pub(super) const CHANGE_DIFFICULTY_REVERTS: &[KnownRevert] = &[
    KnownRevert::new(NOT_ENOUGH_GAMES, CANNOT_CHANGE_YET),
    KnownRevert::new(TOO_SOON_TO_CHANGE, CANNOT_CHANGE_YET),
];

pub(super) async fn difficulty_info(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game = client.current_game_info().await?;
    let consecutive = client.consecutive_games_info().await?;
    let limits = DifficultyLimits::for_raw_difficulty(game.difficulty);

    print_title("\n🎯 Current Difficulty:");
    println!("{}", format_difficulty(game.difficulty));
    print_info(&format!("🔢 Number Range: 1 to {}", limits.max));
    print_info(&format!("🌟 Etherball Range: 1 to {}", limits.etherball_max));

    print_title("\n📊 Consecutive Statistics:");
    print_field(
        "🏆 Consecutive Games With Jackpot",
        consecutive.consecutive_jackpot_games,
    );
    print_field(
        "💫 Consecutive Games Without Jackpot",
        consecutive.consecutive_non_jackpot_games,
    );

    // the contract may report a level this client doesn't know yet
    if let Some(current) = Difficulty::from_u8(game.difficulty) {
        let outlook = consecutive.difficulty_outlook(current);
        if !outlook.is_empty() {
            print_title("\n⚖️ Difficulty Change Potential:");
            for line in outlook {
                println!("  {}", line);
            }
        }
    }

    print_notice("\n📝 When buying tickets, choose numbers within these ranges.");
    Ok(())
}

pub(super) async fn change_difficulty(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;

    info!("requesting difficulty change");
    let receipt = client.change_difficulty().await?;

    print_receipt(&receipt);
    print_notice(
        "\nNote: If the conditions for a difficulty change are met, \
         the change will take effect in the next game.",
    );
    print_success("Difficulty change initiated successfully!");
    Ok(())
}

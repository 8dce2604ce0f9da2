use crate::context::Context;
use crate::display::{
    format_eth, format_game_blocks, format_game_payouts, format_winners, format_winning_numbers,
    print_field, print_highlight, print_info, print_notice, print_success, print_title, yes_no,
};
use crate::prompt;
use crate::revert::{
    KnownRevert, GAME_DRAW_NOT_COMPLETED, GAME_ID_EXCEEDS_CURRENT, INVALID_GAME_NUMBER,
};
use eat_the_pie_contract_client::lottery::{LotteryLogs, LotteryViews};
use eat_the_pie_core::{
    format_difficulty, format_time_until_draw, format_timestamp, u256_to_u64_saturating,
    UserGameWinnings,
};

pub(super) const GAME_INFO_REVERTS: &[KnownRevert] = &[KnownRevert::new(
    GAME_ID_EXCEEDS_CURRENT,
    "Game number you entered exceeds the current active game.",
)];

pub(super) const DID_I_WIN_REVERTS: &[KnownRevert] = &[
    KnownRevert::new(GAME_DRAW_NOT_COMPLETED, "⏳ Game draw not completed yet"),
    KnownRevert::new(INVALID_GAME_NUMBER, "❌ Invalid game number"),
];

pub(super) async fn status(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game = client.current_game_info().await?;

    print_title("\nStatus:");
    print_highlight("Current Game Round", game.game_number);
    print_highlight("Difficulty", format_difficulty(game.difficulty));
    print_highlight("Prize Pool", format_eth(game.prize_pool));
    print_highlight(
        "Next Possible Draw Time",
        format_timestamp(u256_to_u64_saturating(game.draw_time)),
    );
    print_highlight(
        "Time Until Draw",
        format_time_until_draw(u256_to_u64_saturating(game.time_until_draw)),
    );
    Ok(())
}

pub(super) async fn game_info(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the past game number you want to view:")?;
    let info = client.detailed_game_info(game_number).await?;

    print_title(&format!("\nGame {} Information:", game_number));
    print_field(
        "Status",
        info.status()
            .map_or_else(|| info.status.to_string(), |s| s.to_string()),
    );
    print_field("Prize Pool", format_eth(info.prize_pool));
    print_field("Difficulty", format_difficulty(info.difficulty));
    for (label, value) in format_game_blocks(&info) {
        print_field(label, value);
    }
    print_field("Winning Numbers", format_winning_numbers(&info));
    print_field("Number of Winners", format_winners(&info));
    print_field("Payouts", format_game_payouts(&info));
    Ok(())
}

pub(super) async fn did_i_win(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number you want to check:")?;
    let player = prompt::wallet_address(client.signer_address())?;

    print_info("\n🔍 Checking your game results...");
    let winnings = client.user_game_winnings(game_number, player).await?;
    print_winnings(&winnings);
    Ok(())
}

fn print_winnings(winnings: &UserGameWinnings) {
    if !winnings.has_won() {
        print_notice("\n😔 Sorry, you didn't win in this game. Better luck next time! 🍀");
        return;
    }

    print_success("\n🎉 Congratulations, you won! 🎊");
    for (tier, won) in winnings.tiers() {
        print_field(tier.label(), yes_no(won));
    }
    print_highlight("Total Prize", format_eth(winnings.total_prize));
    print_field("Claimed", yes_no(winnings.claimed));

    if !winnings.claimed {
        print_notice("\n💫 Don't forget to claim your prize! 💰");
    }
}

pub(super) async fn ticket_history(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to view your tickets:")?;
    let tickets = client
        .ticket_history(game_number, client.signer_address())
        .await?;

    if tickets.is_empty() {
        print_notice("\nYou did not purchase any tickets for this game.");
        return Ok(());
    }

    print_title(&format!("\nTicket History for Game {}:", game_number));
    for (i, ticket) in tickets.iter().enumerate() {
        print_field(&format!("Ticket {}", i + 1), ticket);
    }
    Ok(())
}

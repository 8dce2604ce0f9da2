use crate::context::Context;
use crate::display::{format_eth, print_field, print_notice, print_receipt, print_success, print_title};
use crate::prompt::{self, TicketSource};
use eat_the_pie_contract_client::lottery::{LotteryTransactions, LotteryViews};
use eat_the_pie_core::{format_difficulty, DifficultyLimits, Ticket};
use ethers::types::U256;
use log::info;
use rand::thread_rng;

pub(super) async fn buy(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;

    let ticket_price = client.ticket_price().await?;
    let game = client.current_game_info().await?;
    let limits = DifficultyLimits::for_raw_difficulty(game.difficulty);

    print_field("Current ticket price", format_eth(ticket_price));
    print_field("Current difficulty", format_difficulty(game.difficulty));
    print_field(
        "Valid number range",
        format!("1-{}, Etherball: 1-{}", limits.max, limits.etherball_max),
    );
    println!();

    let count = prompt::ticket_count()?;
    let tickets = match prompt::ticket_source()? {
        TicketSource::Manual => (1..=count as usize)
            .map(|i| prompt::ticket(i, limits))
            .collect::<anyhow::Result<Vec<_>>>()?,
        TicketSource::Random => generate_tickets(count, limits),
    };
    let total_cost = ticket_price * U256::from(count);

    print_title("\nTickets to purchase:");
    for (i, ticket) in tickets.iter().enumerate() {
        print_field(&format!("Ticket {}", i + 1), ticket);
    }
    print_field("\nTotal cost", format_eth(total_cost));
    println!();

    if !prompt::confirm("Do you want to proceed with the purchase?", true)? {
        print_notice("Purchase cancelled.");
        return Ok(());
    }

    info!(
        "buying {} tickets for game {} at {} wei",
        tickets.len(),
        game.game_number,
        total_cost
    );
    let receipt = client.buy_tickets(&tickets, total_cost).await?;

    print_success("\nTickets purchased successfully!");
    print_receipt(&receipt);
    Ok(())
}

fn generate_tickets(count: u64, limits: DifficultyLimits) -> Vec<Ticket> {
    let mut rng = thread_rng();
    (0..count).map(|_| Ticket::random(limits, &mut rng)).collect()
}

use crossterm::style::Stylize;
use eat_the_pie_core::{
    format_eth_fixed, format_ether, DetailedGameInfo, GameStatus, PrizeTier,
};
use ethers::types::{TransactionReceipt, U256};
use std::fmt::Display;

pub const NOT_AVAILABLE: &str = "-";

pub const SETTINGS_HINT: &str =
    "Make sure your settings are correct.\nRun 'config' to view them and 'setup' to reset them.";

const BANNER: &str = r#"
 ███████╗ █████╗ ████████╗    ████████╗██╗  ██╗███████╗    ██████╗ ██╗███████╗
 ██╔════╝██╔══██╗╚══██╔══╝    ╚══██╔══╝██║  ██║██╔════╝    ██╔══██╗██║██╔════╝
 █████╗  ███████║   ██║          ██║   ███████║█████╗      ██████╔╝██║█████╗
 ██╔══╝  ██╔══██║   ██║          ██║   ██╔══██║██╔══╝      ██╔═══╝ ██║██╔══╝
 ███████╗██║  ██║   ██║          ██║   ██║  ██║███████╗    ██║     ██║███████╗
 ╚══════╝╚═╝  ╚═╝   ╚═╝          ╚═╝   ╚═╝  ╚═╝╚══════╝    ╚═╝     ╚═╝╚══════╝
"#;

pub fn print_banner() {
    println!("{}", BANNER.yellow());
    println!("{}", "♦♦♦ THE WORLD LOTTERY ON ETHEREUM ♦♦♦ \n".cyan());
    println!(
        "{}",
        "NOTICE: Eat The Pie is a fully decentralized lottery running autonomously on Ethereum - \
         all operations are irreversible and governed by immutable smart contracts. \
         Participate at your own risk.\n"
            .yellow()
    );
}

pub fn print_field(label: &str, value: impl Display) {
    println!("{} {}", format!("{}:", label).cyan(), value);
}

pub fn print_highlight(label: &str, value: impl Display) {
    println!("{} {}", format!("{}:", label).yellow(), value);
}

pub fn print_title(text: &str) {
    println!("{}", text.yellow());
}

pub fn print_info(text: &str) {
    println!("{}", text.cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_notice(text: &str) {
    println!("{}", text.yellow());
}

pub fn print_error(description: &str) {
    eprintln!("\n{} {}", "Error:".red(), description);
    eprintln!("\n{}", SETTINGS_HINT.red());
}

pub fn print_receipt(receipt: &TransactionReceipt) {
    print_highlight("Transaction Hash", format!("{:?}", receipt.transaction_hash));
    if let Some(block_number) = receipt.block_number {
        print_field("Block Number", block_number);
    }
}

pub fn format_eth(wei: U256) -> String {
    format!("{} ETH", format_ether(wei))
}

pub fn format_payout(wei: U256) -> String {
    if wei.is_zero() {
        "no winners".to_string()
    } else {
        format!("{} ETH", format_eth_fixed(wei))
    }
}

pub fn format_numbers(numbers: &[U256]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Block fields of a game, hidden while it is still in play.
pub fn format_game_blocks(info: &DetailedGameInfo) -> [(&'static str, String); 3] {
    let in_play = info.status() == Some(GameStatus::InPlay);
    let or_dash = |hidden: bool, value: U256| {
        if hidden {
            NOT_AVAILABLE.to_string()
        } else {
            value.to_string()
        }
    };
    [
        (
            "Draw Initiated Block",
            or_dash(in_play, info.draw_initiated_block),
        ),
        ("RANDAO Block", or_dash(in_play, info.randao_block)),
        (
            "RANDAO Value",
            or_dash(in_play || info.randao_value.is_zero(), info.randao_value),
        ),
    ]
}

pub fn format_winning_numbers(info: &DetailedGameInfo) -> String {
    if info.is_vdf_submitted() {
        format_numbers(&info.winning_numbers)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub fn format_winners(info: &DetailedGameInfo) -> String {
    if !info.is_vdf_submitted() {
        return NOT_AVAILABLE.to_string();
    }
    format!(
        "{} ({}: {}, {}: {}, {}: {})",
        info.number_of_winners,
        PrizeTier::Jackpot.label(),
        info.gold_winners,
        PrizeTier::ThreeInARow.label(),
        info.silver_winners,
        PrizeTier::TwoInARow.label(),
        info.bronze_winners
    )
}

pub fn format_game_payouts(info: &DetailedGameInfo) -> String {
    if info.status() != Some(GameStatus::Completed) {
        return NOT_AVAILABLE.to_string();
    }
    PrizeTier::ALL
        .iter()
        .map(|tier| {
            format!(
                "{}: {}",
                tier.label(),
                format_eth(info.payouts[tier.index() as usize])
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_payouts(game_number: U256, payouts: &[U256; 3]) {
    print_title(&format!("\nGame {} Payouts:", game_number));
    for tier in PrizeTier::ALL {
        println!(
            "{} {}",
            format!("{:<12}", format!("{}:", tier.label())).cyan(),
            format_payout(payouts[tier.index() as usize])
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::utils::parse_ether;

    fn game(status: u8) -> DetailedGameInfo {
        DetailedGameInfo {
            game_id: U256::from(3),
            status,
            prize_pool: parse_ether("1").unwrap(),
            number_of_winners: U256::from(3),
            gold_winners: U256::from(1),
            silver_winners: U256::from(0),
            bronze_winners: U256::from(2),
            winning_numbers: [
                U256::from(4),
                U256::from(8),
                U256::from(15),
                U256::from(6),
            ],
            difficulty: 0,
            draw_initiated_block: U256::from(100),
            randao_block: U256::from(228),
            randao_value: U256::from(777),
            payouts: [
                parse_ether("0.5").unwrap(),
                U256::zero(),
                parse_ether("0.01").unwrap(),
            ],
        }
    }

    #[test]
    fn test_format_payout() {
        assert_eq!(format_payout(U256::zero()), "no winners");
        assert_eq!(
            format_payout(parse_ether("0.123456").unwrap()),
            "0.1235 ETH"
        );
    }

    #[test]
    fn test_completed_game_fields() {
        let info = game(2);
        assert_eq!(format_winning_numbers(&info), "4, 8, 15, 6");
        assert_eq!(
            format_winners(&info),
            "3 (Jackpot: 1, 3 in-a-row: 0, 2 in-a-row: 2)"
        );
        assert_eq!(
            format_game_payouts(&info),
            "Jackpot: 0.5 ETH, 3 in-a-row: 0 ETH, 2 in-a-row: 0.01 ETH"
        );
        assert_eq!(format_game_blocks(&info)[2].1, "777");
    }

    #[test]
    fn test_in_play_game_hides_fields() {
        let mut info = game(0);
        info.winning_numbers = [U256::zero(); 4];

        assert!(format_game_blocks(&info)
            .iter()
            .all(|(_, value)| value == NOT_AVAILABLE));
        assert_eq!(format_winning_numbers(&info), NOT_AVAILABLE);
        assert_eq!(format_winners(&info), NOT_AVAILABLE);
        assert_eq!(format_game_payouts(&info), NOT_AVAILABLE);
    }

    #[test]
    fn test_drawing_game_without_randao() {
        let mut info = game(1);
        info.randao_value = U256::zero();
        let blocks = format_game_blocks(&info);

        assert_eq!(blocks[0].1, "100");
        assert_eq!(blocks[1].1, "228");
        assert_eq!(blocks[2].1, NOT_AVAILABLE);
        assert_eq!(format_game_payouts(&info), NOT_AVAILABLE);
    }
}

use crate::TicketError;
use ethers_core::types::{Address, U256};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_TICKETS_PER_PURCHASE: u64 = 1;
pub const MAX_TICKETS_PER_PURCHASE: u64 = 100;

/// Consecutive games (with or without a jackpot) that allow a difficulty change.
pub const CONSECUTIVE_GAMES_THRESHOLD: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_u8(raw: u8) -> Option<Difficulty> {
        match raw {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn limits(&self) -> DifficultyLimits {
        match self {
            Difficulty::Easy => DifficultyLimits::new(25, 10),
            Difficulty::Medium => DifficultyLimits::new(50, 10),
            Difficulty::Hard => DifficultyLimits::new(75, 10),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

pub fn format_difficulty(raw: u8) -> String {
    Difficulty::from_u8(raw)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyLimits {
    pub max: u64,
    pub etherball_max: u64,
}

impl DifficultyLimits {
    pub fn new(max: u64, etherball_max: u64) -> Self {
        DifficultyLimits { max, etherball_max }
    }

    /// Unknown difficulties fall back to the easiest ranges.
    pub fn for_raw_difficulty(raw: u8) -> Self {
        Difficulty::from_u8(raw)
            .unwrap_or(Difficulty::Easy)
            .limits()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Drawing,
    Completed,
}

impl GameStatus {
    pub fn from_u8(raw: u8) -> Option<GameStatus> {
        match raw {
            0 => Some(GameStatus::InPlay),
            1 => Some(GameStatus::Drawing),
            2 => Some(GameStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InPlay => write!(f, "InPlay"),
            GameStatus::Drawing => write!(f, "Drawing"),
            GameStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Prize tiers in the order the contract indexes its payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    /// gold
    Jackpot,
    /// silver
    ThreeInARow,
    /// bronze
    TwoInARow,
}

impl PrizeTier {
    pub const ALL: [PrizeTier; 3] = [
        PrizeTier::Jackpot,
        PrizeTier::ThreeInARow,
        PrizeTier::TwoInARow,
    ];

    pub fn index(&self) -> u64 {
        *self as u64
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeTier::Jackpot => "Jackpot",
            PrizeTier::ThreeInARow => "3 in-a-row",
            PrizeTier::TwoInARow => "2 in-a-row",
        }
    }
}

/// Three regular numbers plus the Etherball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub numbers: [u64; 3],
    pub etherball: u64,
}

impl Ticket {
    pub fn new(numbers: [u64; 3], etherball: u64) -> Self {
        Ticket { numbers, etherball }
    }

    /// Parses `"a, b, c, etherball"` and checks every number against `limits`.
    pub fn parse(input: &str, limits: DifficultyLimits) -> Result<Ticket, TicketError> {
        let values = input
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u64>()
                    .map_err(|_| TicketError::NotANumber(part.to_string()))
            })
            .collect::<Result<Vec<u64>, _>>()?;

        if values.len() != 4 {
            return Err(TicketError::WrongCount(values.len()));
        }

        let ticket = Ticket::new([values[0], values[1], values[2]], values[3]);
        ticket.validate(limits)?;
        Ok(ticket)
    }

    pub fn validate(&self, limits: DifficultyLimits) -> Result<(), TicketError> {
        if let Some(&value) = self
            .numbers
            .iter()
            .find(|&&n| n < 1 || n > limits.max)
        {
            return Err(TicketError::NumberOutOfRange {
                value,
                max: limits.max,
            });
        }
        if self.etherball < 1 || self.etherball > limits.etherball_max {
            return Err(TicketError::EtherballOutOfRange {
                value: self.etherball,
                max: limits.etherball_max,
            });
        }
        Ok(())
    }

    pub fn random<R: Rng + ?Sized>(limits: DifficultyLimits, rng: &mut R) -> Ticket {
        Ticket::new(
            [
                rng.gen_range(1..=limits.max),
                rng.gen_range(1..=limits.max),
                rng.gen_range(1..=limits.max),
            ],
            rng.gen_range(1..=limits.etherball_max),
        )
    }

    /// The `uint256[4]` layout `buyTickets` expects.
    pub fn to_words(&self) -> [U256; 4] {
        [
            U256::from(self.numbers[0]),
            U256::from(self.numbers[1]),
            U256::from(self.numbers[2]),
            U256::from(self.etherball),
        ]
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.numbers[0], self.numbers[1], self.numbers[2], self.etherball
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentGameInfo {
    pub game_number: U256,
    pub difficulty: u8,
    pub prize_pool: U256,
    pub draw_time: U256,
    pub time_until_draw: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedGameInfo {
    pub game_id: U256,
    pub status: u8,
    pub prize_pool: U256,
    pub number_of_winners: U256,
    pub gold_winners: U256,
    pub silver_winners: U256,
    pub bronze_winners: U256,
    pub winning_numbers: [U256; 4],
    pub difficulty: u8,
    pub draw_initiated_block: U256,
    pub randao_block: U256,
    pub randao_value: U256,
    pub payouts: [U256; 3],
}

impl DetailedGameInfo {
    pub fn status(&self) -> Option<GameStatus> {
        GameStatus::from_u8(self.status)
    }

    /// Winning numbers stay zeroed until a valid VDF proof lands.
    pub fn is_vdf_submitted(&self) -> bool {
        !self.winning_numbers[0].is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGameWinnings {
    pub gold_win: bool,
    pub silver_win: bool,
    pub bronze_win: bool,
    pub total_prize: U256,
    pub claimed: bool,
}

impl UserGameWinnings {
    pub fn has_won(&self) -> bool {
        self.gold_win || self.silver_win || self.bronze_win
    }

    pub fn tiers(&self) -> [(PrizeTier, bool); 3] {
        [
            (PrizeTier::Jackpot, self.gold_win),
            (PrizeTier::ThreeInARow, self.silver_win),
            (PrizeTier::TwoInARow, self.bronze_win),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyOutlook {
    IncreaseNeeds(u64),
    DecreaseNeeds(u64),
    IncreasePossible,
    MaximumReached,
    DecreasePossible,
    MinimumReached,
}

impl fmt::Display for DifficultyOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyOutlook::IncreaseNeeds(n) => write!(
                f,
                "{} more consecutive jackpot{} needed to increase difficulty",
                n,
                if *n == 1 { "" } else { "s" }
            ),
            DifficultyOutlook::DecreaseNeeds(n) => write!(
                f,
                "{} more game{} without jackpot needed to decrease difficulty",
                n,
                if *n == 1 { "" } else { "s" }
            ),
            DifficultyOutlook::IncreasePossible => write!(f, "Difficulty increase is now possible!"),
            DifficultyOutlook::MaximumReached => write!(f, "Maximum difficulty level reached"),
            DifficultyOutlook::DecreasePossible => write!(f, "Difficulty decrease is now possible!"),
            DifficultyOutlook::MinimumReached => write!(f, "Minimum difficulty level reached"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsecutiveGamesInfo {
    pub consecutive_jackpot_games: u64,
    pub consecutive_non_jackpot_games: u64,
}

impl ConsecutiveGamesInfo {
    pub fn difficulty_outlook(&self, current: Difficulty) -> Vec<DifficultyOutlook> {
        let jackpot_games = self.consecutive_jackpot_games;
        let non_jackpot_games = self.consecutive_non_jackpot_games;
        let remaining_for_increase = CONSECUTIVE_GAMES_THRESHOLD.saturating_sub(jackpot_games);
        let remaining_for_decrease = CONSECUTIVE_GAMES_THRESHOLD.saturating_sub(non_jackpot_games);

        let mut outlook = vec![];

        if jackpot_games > 0 && current < Difficulty::Hard && remaining_for_increase > 0 {
            outlook.push(DifficultyOutlook::IncreaseNeeds(remaining_for_increase));
        }
        if non_jackpot_games > 0 && current > Difficulty::Easy && remaining_for_decrease > 0 {
            outlook.push(DifficultyOutlook::DecreaseNeeds(remaining_for_decrease));
        }
        if jackpot_games >= CONSECUTIVE_GAMES_THRESHOLD {
            outlook.push(if current < Difficulty::Hard {
                DifficultyOutlook::IncreasePossible
            } else {
                DifficultyOutlook::MaximumReached
            });
        }
        if non_jackpot_games >= CONSECUTIVE_GAMES_THRESHOLD {
            outlook.push(if current > Difficulty::Easy {
                DifficultyOutlook::DecreasePossible
            } else {
                DifficultyOutlook::MinimumReached
            });
        }

        outlook
    }
}

/// A `TicketPurchased` log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasedTicket {
    pub player: Address,
    pub game_number: U256,
    pub numbers: [U256; 3],
    pub etherball: U256,
    pub block_number: Option<u64>,
}

impl fmt::Display for PurchasedTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.numbers[0], self.numbers[1], self.numbers[2], self.etherball
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_difficulty_labels_and_limits() {
        assert_eq!(format_difficulty(0), "Easy");
        assert_eq!(format_difficulty(1), "Medium");
        assert_eq!(format_difficulty(2), "Hard");
        assert_eq!(format_difficulty(7), "Unknown");

        assert_eq!(Difficulty::Easy.limits(), DifficultyLimits::new(25, 10));
        assert_eq!(Difficulty::Medium.limits(), DifficultyLimits::new(50, 10));
        assert_eq!(Difficulty::Hard.limits(), DifficultyLimits::new(75, 10));
        assert_eq!(
            DifficultyLimits::for_raw_difficulty(9),
            Difficulty::Easy.limits()
        );
    }

    #[test]
    fn test_parse_ticket() {
        let limits = Difficulty::Medium.limits();
        assert_eq!(
            Ticket::parse("1, 50,25,10", limits),
            Ok(Ticket::new([1, 50, 25], 10))
        );
        assert_eq!(
            Ticket::parse("1,2,3", limits),
            Err(TicketError::WrongCount(3))
        );
        assert_eq!(
            Ticket::parse("1,2,x,4", limits),
            Err(TicketError::NotANumber("x".to_string()))
        );
        assert_eq!(
            Ticket::parse("0,2,3,4", limits),
            Err(TicketError::NumberOutOfRange { value: 0, max: 50 })
        );
        assert_eq!(
            Ticket::parse("1,51,3,4", limits),
            Err(TicketError::NumberOutOfRange { value: 51, max: 50 })
        );
        assert_eq!(
            Ticket::parse("1,2,3,11", limits),
            Err(TicketError::EtherballOutOfRange { value: 11, max: 10 })
        );
    }

    #[test]
    fn test_random_ticket_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let limits = difficulty.limits();
            for _ in 0..200 {
                let ticket = Ticket::random(limits, &mut rng);
                assert!(ticket.validate(limits).is_ok(), "{:?}", ticket);
            }
        }
    }

    #[test]
    fn test_ticket_words_and_display() {
        let ticket = Ticket::new([3, 14, 15], 9);
        assert_eq!(
            ticket.to_words(),
            [
                U256::from(3),
                U256::from(14),
                U256::from(15),
                U256::from(9)
            ]
        );
        assert_eq!(ticket.to_string(), "3, 14, 15, 9");
    }

    #[test]
    fn test_vdf_submitted_and_status() {
        let mut info = DetailedGameInfo {
            game_id: U256::from(4),
            status: 1,
            prize_pool: U256::zero(),
            number_of_winners: U256::zero(),
            gold_winners: U256::zero(),
            silver_winners: U256::zero(),
            bronze_winners: U256::zero(),
            winning_numbers: [U256::zero(); 4],
            difficulty: 0,
            draw_initiated_block: U256::from(100),
            randao_block: U256::from(228),
            randao_value: U256::zero(),
            payouts: [U256::zero(); 3],
        };
        assert_eq!(info.status(), Some(GameStatus::Drawing));
        assert!(!info.is_vdf_submitted());

        info.winning_numbers[0] = U256::from(12);
        assert!(info.is_vdf_submitted());
        info.status = 5;
        assert_eq!(info.status(), None);
    }

    #[test]
    fn test_has_won() {
        let mut winnings = UserGameWinnings {
            gold_win: false,
            silver_win: false,
            bronze_win: false,
            total_prize: U256::zero(),
            claimed: false,
        };
        assert!(!winnings.has_won());
        winnings.bronze_win = true;
        assert!(winnings.has_won());
        assert_eq!(winnings.tiers()[2], (PrizeTier::TwoInARow, true));
    }

    #[test]
    fn test_difficulty_outlook() {
        let info = ConsecutiveGamesInfo {
            consecutive_jackpot_games: 1,
            consecutive_non_jackpot_games: 0,
        };
        assert_eq!(
            info.difficulty_outlook(Difficulty::Easy),
            vec![DifficultyOutlook::IncreaseNeeds(2)]
        );
        assert!(info.difficulty_outlook(Difficulty::Hard).is_empty());

        let info = ConsecutiveGamesInfo {
            consecutive_jackpot_games: 0,
            consecutive_non_jackpot_games: 3,
        };
        assert_eq!(
            info.difficulty_outlook(Difficulty::Medium),
            vec![DifficultyOutlook::DecreasePossible]
        );
        assert_eq!(
            info.difficulty_outlook(Difficulty::Easy),
            vec![DifficultyOutlook::MinimumReached]
        );

        let info = ConsecutiveGamesInfo {
            consecutive_jackpot_games: 4,
            consecutive_non_jackpot_games: 0,
        };
        assert_eq!(
            info.difficulty_outlook(Difficulty::Hard),
            vec![DifficultyOutlook::MaximumReached]
        );
    }

    #[test]
    fn test_outlook_messages() {
        assert_eq!(
            DifficultyOutlook::IncreaseNeeds(1).to_string(),
            "1 more consecutive jackpot needed to increase difficulty"
        );
        assert_eq!(
            DifficultyOutlook::DecreaseNeeds(2).to_string(),
            "2 more games without jackpot needed to decrease difficulty"
        );
    }
}

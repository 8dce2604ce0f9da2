use crate::context::Context;
use crate::display::{print_error, print_notice};
use crate::revert::{describe_error, match_known_revert, KnownRevert};
use log::error;
use structopt::StructOpt;

mod buy;
mod config;
mod difficulty;
mod draw;
mod game;
mod prize;
mod setup;
mod vdf;

/// Every lottery command, usable both from the command line and from the shell.
#[derive(StructOpt, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryCommand {
    /// Setup your network, wallet and contract settings
    Setup,
    /// Display your network, wallet and contract settings
    Config,
    /// Buy tickets
    Buy,
    /// Get the status of the current game
    #[structopt(alias = "info")]
    Status,
    /// Get information about a past game
    #[structopt(alias = "past-game")]
    GameInfo,
    /// Check if a wallet won a game
    #[structopt(alias = "did-wallet-win")]
    DidIWin,
    /// Get your ticket history for a specific game
    TicketHistory,
    /// Claim your prize for a specific game
    ClaimPrize,
    /// Mint the winning NFT for a specific game
    MintNft,
    /// Initiate the draw of the current game
    InitiateDraw,
    /// Set the RANDAO value of a game whose draw was initiated
    #[structopt(alias = "set-random")]
    SetRandao,
    /// Submit the VDF proof for a specific game
    SubmitVdfProof,
    /// Verify a VDF proof for a past game
    VerifyVdf,
    /// Calculate payouts of a game
    CalculatePayouts,
    /// Get difficulty information
    DifficultyInfo,
    /// Change the difficulty of the game
    ChangeDifficulty,
    /// Start an interactive shell with all of the above
    Shell,
}

impl LotteryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LotteryCommand::Setup => "setup",
            LotteryCommand::Config => "config",
            LotteryCommand::Buy => "buy",
            LotteryCommand::Status => "status",
            LotteryCommand::GameInfo => "game-info",
            LotteryCommand::DidIWin => "did-i-win",
            LotteryCommand::TicketHistory => "ticket-history",
            LotteryCommand::ClaimPrize => "claim-prize",
            LotteryCommand::MintNft => "mint-nft",
            LotteryCommand::InitiateDraw => "initiate-draw",
            LotteryCommand::SetRandao => "set-randao",
            LotteryCommand::SubmitVdfProof => "submit-vdf-proof",
            LotteryCommand::VerifyVdf => "verify-vdf",
            LotteryCommand::CalculatePayouts => "calculate-payouts",
            LotteryCommand::DifficultyInfo => "difficulty-info",
            LotteryCommand::ChangeDifficulty => "change-difficulty",
            LotteryCommand::Shell => "shell",
        }
    }

    /// Reverts this command expects and reports as a notice rather than a failure.
    pub fn known_reverts(&self) -> &'static [KnownRevert] {
        match self {
            LotteryCommand::GameInfo => game::GAME_INFO_REVERTS,
            LotteryCommand::DidIWin => game::DID_I_WIN_REVERTS,
            LotteryCommand::ClaimPrize => prize::CLAIM_PRIZE_REVERTS,
            LotteryCommand::InitiateDraw => draw::INITIATE_DRAW_REVERTS,
            LotteryCommand::SetRandao => draw::SET_RANDAO_REVERTS,
            LotteryCommand::CalculatePayouts => draw::CALCULATE_PAYOUTS_REVERTS,
            LotteryCommand::ChangeDifficulty => difficulty::CHANGE_DIFFICULTY_REVERTS,
            _ => &[],
        }
    }

    async fn run(&self, context: &Context) -> anyhow::Result<()> {
        match self {
            LotteryCommand::Setup => setup::setup(context),
            LotteryCommand::Config => config::show_config(context),
            LotteryCommand::Buy => buy::buy(context).await,
            LotteryCommand::Status => game::status(context).await,
            LotteryCommand::GameInfo => game::game_info(context).await,
            LotteryCommand::DidIWin => game::did_i_win(context).await,
            LotteryCommand::TicketHistory => game::ticket_history(context).await,
            LotteryCommand::ClaimPrize => prize::claim_prize(context).await,
            LotteryCommand::MintNft => prize::mint_nft(context).await,
            LotteryCommand::InitiateDraw => draw::initiate_draw(context).await,
            LotteryCommand::SetRandao => draw::set_randao(context).await,
            LotteryCommand::SubmitVdfProof => vdf::submit_vdf_proof(context).await,
            LotteryCommand::VerifyVdf => vdf::verify_vdf(context).await,
            LotteryCommand::CalculatePayouts => draw::calculate_payouts(context).await,
            LotteryCommand::DifficultyInfo => difficulty::difficulty_info(context).await,
            LotteryCommand::ChangeDifficulty => difficulty::change_difficulty(context).await,
            LotteryCommand::Shell => Err(anyhow::anyhow!("the shell is already running")),
        }
    }

    /// Runs the command and reports its outcome on the console. `Shell` is started by
    /// the binary itself.
    ///
    /// Returns `false` when the command failed with an error that isn't one of its
    /// known reverts.
    pub async fn execute(&self, context: &Context) -> bool {
        match self.run(context).await {
            Ok(()) => true,
            Err(e) => match match_known_revert(&e, self.known_reverts()) {
                Some(message) => {
                    print_notice(&format!("\n{}", message));
                    true
                }
                None => {
                    error!("Command {} failed: {:?}", self.name(), e);
                    print_error(&describe_error(&e));
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_match_cli() {
        for (args, expected) in [
            (vec!["eat-the-pie", "did-i-win"], LotteryCommand::DidIWin),
            (vec!["eat-the-pie", "did-wallet-win"], LotteryCommand::DidIWin),
            (vec!["eat-the-pie", "info"], LotteryCommand::Status),
            (vec!["eat-the-pie", "past-game"], LotteryCommand::GameInfo),
            (vec!["eat-the-pie", "set-random"], LotteryCommand::SetRandao),
            (vec!["eat-the-pie", "mint-nft"], LotteryCommand::MintNft),
            (vec!["eat-the-pie", "submit-vdf-proof"], LotteryCommand::SubmitVdfProof),
            (vec!["eat-the-pie", "verify-vdf"], LotteryCommand::VerifyVdf),
        ] {
            let command = LotteryCommand::from_iter_safe(args).unwrap();
            assert_eq!(command, expected);
        }
    }

    #[test]
    fn test_name_round_trips_through_cli() {
        for command in [
            LotteryCommand::Setup,
            LotteryCommand::Config,
            LotteryCommand::Buy,
            LotteryCommand::Status,
            LotteryCommand::GameInfo,
            LotteryCommand::DidIWin,
            LotteryCommand::TicketHistory,
            LotteryCommand::ClaimPrize,
            LotteryCommand::MintNft,
            LotteryCommand::InitiateDraw,
            LotteryCommand::SetRandao,
            LotteryCommand::SubmitVdfProof,
            LotteryCommand::VerifyVdf,
            LotteryCommand::CalculatePayouts,
            LotteryCommand::DifficultyInfo,
            LotteryCommand::ChangeDifficulty,
            LotteryCommand::Shell,
        ] {
            let parsed = LotteryCommand::from_iter_safe(["eat-the-pie", command.name()]).unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn test_known_reverts() {
        let err = anyhow::anyhow!("execution reverted: No prize to claim");
        assert!(match_known_revert(&err, LotteryCommand::ClaimPrize.known_reverts()).is_some());
        assert!(match_known_revert(&err, LotteryCommand::Buy.known_reverts()).is_none());

        let err = anyhow::anyhow!("execution reverted: Too soon to change difficulty");
        assert!(
            match_known_revert(&err, LotteryCommand::ChangeDifficulty.known_reverts()).is_some()
        );
    }
}

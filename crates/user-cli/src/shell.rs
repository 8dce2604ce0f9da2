use crate::commands::LotteryCommand;
use crate::context::Context;
use reedline_repl_rs::clap::{ArgMatches, Command};
use reedline_repl_rs::Repl;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const MAX_HISTORY_CAPACITY: usize = 1000;
pub const DEFAULT_PROMPT: &str = "eat-the-pie";

fn command(cmd: LotteryCommand, about: &'static str) -> Command {
    Command::new(cmd.name()).about(about)
}

async fn run_in_shell(
    cmd: LotteryCommand,
    context: &mut Context,
) -> anyhow::Result<Option<String>> {
    // failures are already reported, the shell keeps going
    cmd.execute(context).await;
    Ok(None)
}

fn history(_args: ArgMatches, context: &mut Context) -> anyhow::Result<Option<String>> {
    Ok(Some(read_file_line_by_line(&context.history_file_path)?))
}

async fn update_prompt(context: &mut Context) -> anyhow::Result<Option<String>> {
    Ok(Some(prompt_for(context)))
}

fn prompt_for(context: &Context) -> String {
    match context.load_config() {
        Ok(config) => format!("{} ({})", DEFAULT_PROMPT, config.network),
        Err(_) => DEFAULT_PROMPT.to_owned(),
    }
}

fn read_file_line_by_line(filepath: &Path) -> anyhow::Result<String> {
    let mut res = String::new();
    let reader = BufReader::new(File::open(filepath)?);

    for (number, line) in reader.lines().enumerate() {
        res += &format!("{}    {}\n", number + 1, line?);
    }

    Ok(res)
}

pub async fn run_shell(context: &Context) -> anyhow::Result<()> {
    let prompt = prompt_for(context);

    let mut repl = Repl::new(context.clone())
        .with_name("Eat The Pie")
        .with_history(context.history_file_path.clone(), MAX_HISTORY_CAPACITY)
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_description("Eat The Pie is a command line client for the world lottery on Ethereum.")
        .with_banner("Welcome, Tip: Search history with CTRL+R, clear input with CTRL+C, exit repl with CTRL+D")
        .with_prompt(&prompt)
        .with_command(Command::new("history").about("Show command history"), history)
        .with_command_async(
            command(LotteryCommand::Setup, "Setup your network, wallet and contract settings"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::Setup, c)),
        )
        .with_command_async(
            command(LotteryCommand::Config, "Display your network, wallet and contract settings"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::Config, c)),
        )
        .with_command_async(
            command(LotteryCommand::Buy, "Buy tickets"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::Buy, c)),
        )
        .with_command_async(
            command(LotteryCommand::Status, "Get the status of the current game")
                .visible_alias("info"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::Status, c)),
        )
        .with_command_async(
            command(LotteryCommand::GameInfo, "Get information about a past game")
                .visible_alias("past-game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::GameInfo, c)),
        )
        .with_command_async(
            command(LotteryCommand::DidIWin, "Check if a wallet won a game")
                .visible_alias("did-wallet-win"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::DidIWin, c)),
        )
        .with_command_async(
            command(LotteryCommand::TicketHistory, "Get your ticket history for a specific game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::TicketHistory, c)),
        )
        .with_command_async(
            command(LotteryCommand::ClaimPrize, "Claim your prize for a specific game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::ClaimPrize, c)),
        )
        .with_command_async(
            command(LotteryCommand::MintNft, "Mint the winning NFT for a specific game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::MintNft, c)),
        )
        .with_command_async(
            command(LotteryCommand::InitiateDraw, "Initiate the draw of the current game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::InitiateDraw, c)),
        )
        .with_command_async(
            command(LotteryCommand::SetRandao, "Set the RANDAO value of a game")
                .visible_alias("set-random"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::SetRandao, c)),
        )
        .with_command_async(
            command(LotteryCommand::SubmitVdfProof, "Submit the VDF proof for a specific game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::SubmitVdfProof, c)),
        )
        .with_command_async(
            command(LotteryCommand::VerifyVdf, "Verify a VDF proof for a past game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::VerifyVdf, c)),
        )
        .with_command_async(
            command(LotteryCommand::CalculatePayouts, "Calculate payouts of a game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::CalculatePayouts, c)),
        )
        .with_command_async(
            command(LotteryCommand::DifficultyInfo, "Get difficulty information"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::DifficultyInfo, c)),
        )
        .with_command_async(
            command(LotteryCommand::ChangeDifficulty, "Change the difficulty of the game"),
            |_, c| Box::pin(run_in_shell(LotteryCommand::ChangeDifficulty, c)),
        )
        .with_on_after_command_async(|c| Box::pin(update_prompt(c)));

    repl.run_async().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_read_history() {
        let dir = env::temp_dir().join("eat_the_pie_shell_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("history");
        fs::write(&path, "status\nbuy\n").unwrap();

        assert_eq!(
            read_file_line_by_line(&path).unwrap(),
            "1    status\n2    buy\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prompt_without_config() {
        let context = Context::new(
            env::temp_dir().join("eat_the_pie_no_such_dir/config.yml"),
            PathBuf::from("eat-the-pie.history"),
        );
        assert_eq!(prompt_for(&context), DEFAULT_PROMPT);
    }
}

use crate::context::Context;
use crate::display::{format_numbers, print_info, print_receipt, print_success};
use crate::prompt;
use crossterm::style::Stylize;
use eat_the_pie_contract_client::lottery::{LotteryTransactions, LotteryViews};
use eat_the_pie_core::VdfProof;
use log::info;

const PROOF_FILE_PROMPT: &str = "Enter the path to the proof file (proof.json):";

fn read_proof() -> anyhow::Result<VdfProof> {
    let path = prompt::existing_file(PROOF_FILE_PROMPT)?;
    let proof = VdfProof::from_file(&path)?;
    info!(
        "loaded VDF proof with {} intermediate values from {}",
        proof.v.len(),
        path.display()
    );
    Ok(proof)
}

pub(super) async fn submit_vdf_proof(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the game number to submit the VDF proof for:")?;
    let proof = read_proof()?;

    print_info("\nSubmitting VDF proof...");
    let receipt = client.submit_vdf_proof(game_number, &proof).await?;

    print_success("VDF proof submitted successfully!");
    print_receipt(&receipt);
    Ok(())
}

pub(super) async fn verify_vdf(context: &Context) -> anyhow::Result<()> {
    let client = context.lottery_client()?;
    let game_number = prompt::game_number("Enter the past game number to verify:")?;
    let proof = read_proof()?;

    print_info("\nVerifying VDF proof...");
    let verification = client.verify_past_game_vdf(game_number, &proof).await?;

    if verification.is_valid {
        print_success("VDF proof verified successfully!");
        println!(
            "{} {}",
            "Calculated Numbers:".cyan(),
            format_numbers(&verification.calculated_numbers)
        );
    } else {
        println!("{}", "VDF proof verification failed.".red());
    }
    Ok(())
}

use eat_the_pie_contract_client::error::ContractClientError;

/// A contract revert reason and what to tell the user about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownRevert {
    pub reason: &'static str,
    pub message: &'static str,
}

impl KnownRevert {
    pub const fn new(reason: &'static str, message: &'static str) -> Self {
        KnownRevert { reason, message }
    }
}

pub const GAME_ID_EXCEEDS_CURRENT: &str = "Game ID exceeds current game";
pub const GAME_DRAW_NOT_COMPLETED: &str = "Game draw not completed yet";
pub const INVALID_GAME_NUMBER: &str = "Invalid game number";
pub const NO_PRIZE_TO_CLAIM: &str = "No prize to claim";
pub const DRAW_ALREADY_INITIATED: &str = "Draw already initiated for current game";
pub const TIME_INTERVAL_NOT_PASSED: &str = "Time interval not passed";
pub const INSUFFICIENT_PRIZE_POOL: &str = "Insufficient prize pool";
pub const BUFFER_PERIOD_NOT_PASSED: &str = "Buffer period not yet passed";
pub const DRAW_NOT_INITIATED: &str = "Draw not initiated for this game";
pub const RANDOM_ALREADY_SET: &str = "Random has already been set";
pub const PAYOUTS_ALREADY_CALCULATED: &str = "Payouts already calculated for this game";
pub const VDF_NOT_VALIDATED: &str = "VDF proof not yet validated for this game";
pub const NOT_ENOUGH_GAMES: &str = "Not enough games played";
pub const TOO_SOON_TO_CHANGE: &str = "Too soon to change difficulty";

/// Revert reason of the first contract error in the chain, if any.
pub fn revert_reason(err: &anyhow::Error) -> Option<String> {
    err.chain()
        .filter_map(|e| e.downcast_ref::<ContractClientError>())
        .find_map(ContractClientError::revert_reason)
}

/// Whether `reason` shows up in the decoded revert reason or anywhere in the error text.
pub fn is_revert_with(err: &anyhow::Error, reason: &str) -> bool {
    revert_reason(err).map_or(false, |r| r.contains(reason))
        || format!("{:#}", err).contains(reason)
}

pub fn match_known_revert(err: &anyhow::Error, known: &[KnownRevert]) -> Option<&'static str> {
    known
        .iter()
        .find(|k| is_revert_with(err, k.reason))
        .map(|k| k.message)
}

/// The revert reason when the node returned one, otherwise the whole error chain.
pub fn describe_error(err: &anyhow::Error) -> String {
    revert_reason(err).unwrap_or_else(|| format!("{:#}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::prelude::ContractError;
    use ethers::types::{Bytes, H256};

    // Error(string) payload
    fn revert_error(reason: &str) -> anyhow::Error {
        let mut data = vec![0x08, 0xc3, 0x79, 0xa0];
        data.extend(ethers::abi::encode(&[ethers::abi::Token::String(
            reason.to_string(),
        )]));
        anyhow::Error::new(ContractClientError::HttpContractError(ContractError::Revert(
            Bytes::from(data),
        )))
    }

    const KNOWN: [KnownRevert; 2] = [
        KnownRevert::new(NOT_ENOUGH_GAMES, "not yet"),
        KnownRevert::new(TOO_SOON_TO_CHANGE, "too soon"),
    ];

    #[test]
    fn test_decoded_revert_is_matched() {
        let err = revert_error(TOO_SOON_TO_CHANGE);
        assert_eq!(revert_reason(&err).as_deref(), Some(TOO_SOON_TO_CHANGE));
        assert_eq!(match_known_revert(&err, &KNOWN), Some("too soon"));
        assert_eq!(describe_error(&err), TOO_SOON_TO_CHANGE);
    }

    #[test]
    fn test_revert_is_matched_through_context() {
        let err = revert_error(NOT_ENOUGH_GAMES).context("changing difficulty");
        assert_eq!(match_known_revert(&err, &KNOWN), Some("not yet"));
    }

    #[test]
    fn test_revert_is_matched_in_error_text() {
        let err = anyhow::anyhow!("execution reverted: {}", NO_PRIZE_TO_CLAIM);
        assert!(is_revert_with(&err, NO_PRIZE_TO_CLAIM));
        assert!(revert_reason(&err).is_none());
    }

    #[test]
    fn test_unknown_errors_are_not_matched() {
        let err = revert_error("Ownable: caller is not the owner");
        assert_eq!(match_known_revert(&err, &KNOWN), None);

        let err = anyhow::Error::new(ContractClientError::TransactionFailed(H256::zero()));
        assert_eq!(match_known_revert(&err, &KNOWN), None);
        assert!(describe_error(&err).starts_with("Transaction 0x"));
    }
}

use crate::error::ContractClientError;
use ::ethers::abi::Detokenize;
use ::ethers::prelude::builders::ContractCall;
use ::ethers::prelude::ContractError;
use ::ethers::providers::Middleware;
use ::ethers::types::{TransactionReceipt, U64};
use async_trait::async_trait;
use eat_the_pie_core::{jitter, ExponentialBackoffRetryDescriptor};
use error::ContractClientResult;
use log::{error, info, warn};
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::{Retry, RetryIf};

pub mod contract_stub;
pub mod error;
pub mod ethers;

#[async_trait]
pub trait ServiceClient<C> {
    async fn prepare_service_client(&self) -> ContractClientResult<C>;
}

fn retry_strategy(
    descriptor: ExponentialBackoffRetryDescriptor,
) -> impl Iterator<Item = std::time::Duration> {
    ExponentialBackoff::from_millis(descriptor.base)
        .factor(descriptor.factor)
        .map(move |e| {
            if descriptor.use_jitter {
                jitter(e)
            } else {
                e
            }
        })
        .take(descriptor.max_attempts)
}

#[async_trait]
pub trait TransactionCaller {
    /// Sends the call and waits for its receipt.
    ///
    /// Only a failed `send` is retried, and never when the node reports a revert.
    /// Once the node has accepted the transaction it is waited for, never sent again.
    /// A mined transaction with status 0 is sent anew only when
    /// `retry_on_transaction_fail` is set.
    async fn call_contract_transaction<
        M: Middleware,
        D: Detokenize + std::fmt::Debug + Send + Sync + 'static,
    >(
        chain_id: u64,
        info: &str,
        call: ContractCall<M, D>,
        contract_transaction_retry_descriptor: ExponentialBackoffRetryDescriptor,
        retry_on_transaction_fail: bool,
    ) -> ContractClientResult<TransactionReceipt>
    where
        M::Provider: Clone,
        ContractClientError: From<ContractError<M>>,
    {
        let receipt = RetryIf::spawn(
            retry_strategy(contract_transaction_retry_descriptor),
            || async {
                let receipt = Self::send_and_wait(
                    chain_id,
                    info,
                    &call,
                    contract_transaction_retry_descriptor,
                )
                .await?;

                if receipt.status == Some(U64::from(0)) {
                    error!(
                        "Transaction failed({}) with chain_id({}), receipt: {:?}",
                        info, chain_id, receipt
                    );
                    return Err(ContractClientError::TransactionFailed(
                        receipt.transaction_hash,
                    ));
                }

                info!(
                    "Transaction successful({}) with chain_id({}), receipt: {:?}",
                    info, chain_id, receipt
                );

                Ok(receipt)
            },
            |e: &ContractClientError| match e {
                ContractClientError::TransactionFailed(_) => retry_on_transaction_fail,
                _ => false,
            },
        )
        .await?;

        Ok(receipt)
    }

    async fn send_and_wait<M: Middleware, D: Detokenize + Send + Sync + 'static>(
        chain_id: u64,
        info: &str,
        call: &ContractCall<M, D>,
        contract_transaction_retry_descriptor: ExponentialBackoffRetryDescriptor,
    ) -> ContractClientResult<TransactionReceipt>
    where
        M::Provider: Clone,
        ContractClientError: From<ContractError<M>>,
    {
        let pending_tx = RetryIf::spawn(
            retry_strategy(contract_transaction_retry_descriptor),
            || async {
                call.send().await.map_err(|e| {
                    let e: ContractClientError = e.into();
                    e
                })
            },
            |e: &ContractClientError| !e.is_revert(),
        )
        .await?;

        let tx_hash = pending_tx.tx_hash();
        let provider = pending_tx.provider();

        info!(
            "Calling contract transaction {} with chain_id({}): {:?}",
            info, chain_id, tx_hash
        );

        match pending_tx.await {
            Ok(Some(receipt)) => return Ok(receipt),
            Ok(None) => warn!(
                "Transaction {:?}({}) is not known to the node, polling its receipt",
                tx_hash, info
            ),
            Err(e) => warn!(
                "Waiting for transaction {:?}({}) failed: {}, polling its receipt",
                tx_hash, info, e
            ),
        }

        Retry::spawn(
            retry_strategy(contract_transaction_retry_descriptor),
            || async {
                provider
                    .get_transaction_receipt(tx_hash)
                    .await?
                    .ok_or(ContractClientError::NoTransactionReceipt(tx_hash))
            },
        )
        .await
        .map_err(|e| {
            error!(
                "No receipt for transaction {:?}({}) with chain_id({}): {}",
                tx_hash, info, chain_id, e
            );
            ContractClientError::NoTransactionReceipt(tx_hash)
        })
    }
}

#[async_trait]
pub trait ViewCaller {
    async fn call_contract_view<
        M: Middleware,
        D: Detokenize + std::fmt::Debug + Send + Sync + 'static,
    >(
        chain_id: u64,
        info: &str,
        call: ContractCall<M, D>,
        contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor,
    ) -> ContractClientResult<D>
    where
        ContractClientError: From<ContractError<M>>,
    {
        let res = RetryIf::spawn(
            retry_strategy(contract_view_retry_descriptor),
            || async {
                let result = call.call().await.map_err(|e| {
                    let e: ContractClientError = e.into();
                    e
                })?;

                info!(
                    "Calling contract view {} with chain_id({}), calldata: {:?}, result: {:?}",
                    info,
                    chain_id,
                    call.calldata(),
                    result
                );

                Result::<D, ContractClientError>::Ok(result)
            },
            |e: &ContractClientError| !e.is_revert(),
        )
        .await?;

        Ok(res)
    }

    async fn call_contract_view_without_log<M: Middleware, D: Detokenize + Send + Sync + 'static>(
        call: ContractCall<M, D>,
        contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor,
    ) -> ContractClientResult<D>
    where
        ContractClientError: From<ContractError<M>>,
    {
        let res = RetryIf::spawn(
            retry_strategy(contract_view_retry_descriptor),
            || async {
                call.call().await.map_err(|e| {
                    let e: ContractClientError = e.into();
                    e
                })
            },
            |e: &ContractClientError| !e.is_revert(),
        )
        .await?;

        Ok(res)
    }
}

pub mod lottery {
    use crate::error::ContractClientResult;
    use async_trait::async_trait;
    use eat_the_pie_core::{
        ConsecutiveGamesInfo, CurrentGameInfo, DetailedGameInfo, PurchasedTicket, Ticket,
        UserGameWinnings, VdfProof, VdfVerification,
    };
    use ethers::types::{Address, TransactionReceipt, U256};

    #[async_trait]
    pub trait LotteryViews {
        async fn ticket_price(&self) -> ContractClientResult<U256>;

        async fn current_game_info(&self) -> ContractClientResult<CurrentGameInfo>;

        async fn detailed_game_info(&self, game_number: U256)
            -> ContractClientResult<DetailedGameInfo>;

        async fn user_game_winnings(
            &self,
            game_number: U256,
            player: Address,
        ) -> ContractClientResult<UserGameWinnings>;

        /// Payouts per winner, indexed by prize tier.
        async fn game_payouts(&self, game_number: U256) -> ContractClientResult<[U256; 3]>;

        async fn consecutive_games_info(&self) -> ContractClientResult<ConsecutiveGamesInfo>;

        async fn game_start_block(&self, game_number: U256) -> ContractClientResult<U256>;

        async fn verify_past_game_vdf(
            &self,
            game_number: U256,
            proof: &VdfProof,
        ) -> ContractClientResult<VdfVerification>;
    }

    #[async_trait]
    pub trait LotteryTransactions {
        async fn buy_tickets(
            &self,
            tickets: &[Ticket],
            total_cost: U256,
        ) -> ContractClientResult<TransactionReceipt>;

        async fn claim_prize(&self, game_number: U256) -> ContractClientResult<TransactionReceipt>;

        async fn mint_winning_nft(
            &self,
            game_number: U256,
        ) -> ContractClientResult<TransactionReceipt>;

        async fn initiate_draw(&self) -> ContractClientResult<TransactionReceipt>;

        async fn set_random(&self, game_number: U256) -> ContractClientResult<TransactionReceipt>;

        async fn submit_vdf_proof(
            &self,
            game_number: U256,
            proof: &VdfProof,
        ) -> ContractClientResult<TransactionReceipt>;

        async fn calculate_payouts(
            &self,
            game_number: U256,
        ) -> ContractClientResult<TransactionReceipt>;

        async fn change_difficulty(&self) -> ContractClientResult<TransactionReceipt>;
    }

    #[async_trait]
    pub trait LotteryLogs {
        /// Tickets `player` bought for `game_number`, oldest first.
        async fn ticket_history(
            &self,
            game_number: U256,
            player: Address,
        ) -> ContractClientResult<Vec<PurchasedTicket>>;
    }

    pub trait LotteryClientBuilder {
        type LotteryService: LotteryViews + LotteryTransactions + LotteryLogs + Send + Sync;

        fn build_lottery_client(&self) -> ContractClientResult<Self::LotteryService>;
    }
}

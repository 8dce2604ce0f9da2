use crate::{
    contract_stub::eat_the_pie::{BigNumber, EatThePie, GameInfo, TicketPurchasedFilter},
    error::ContractClientResult,
    ethers::provider::{build_http_signer, HttpWalletSigner},
    lottery::{LotteryClientBuilder, LotteryLogs, LotteryTransactions, LotteryViews},
    ServiceClient, TransactionCaller, ViewCaller,
};
use async_trait::async_trait;
use eat_the_pie_core::{
    u256_to_u64_saturating, Config, ConsecutiveGamesInfo, CurrentGameInfo, DetailedGameInfo,
    ExponentialBackoffRetryDescriptor, PreparedBigNumber, PrizeTier, PurchasedTicket, Ticket,
    UserGameWinnings, VdfProof, VdfVerification,
};
use ethers::prelude::*;
use log::info;
use std::sync::Arc;

pub struct LotteryClient {
    chain_id: u64,
    lottery_address: Address,
    deployed_block_height: u64,
    signer: Arc<HttpWalletSigner>,
    contract_transaction_retry_descriptor: ExponentialBackoffRetryDescriptor,
    contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor,
}

impl LotteryClient {
    pub fn new(
        chain_id: u64,
        lottery_address: Address,
        deployed_block_height: u64,
        signer: Arc<HttpWalletSigner>,
        contract_transaction_retry_descriptor: ExponentialBackoffRetryDescriptor,
        contract_view_retry_descriptor: ExponentialBackoffRetryDescriptor,
    ) -> Self {
        LotteryClient {
            chain_id,
            lottery_address,
            deployed_block_height,
            signer,
            contract_transaction_retry_descriptor,
            contract_view_retry_descriptor,
        }
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    pub fn lottery_address(&self) -> Address {
        self.lottery_address
    }
}

impl LotteryClientBuilder for Config {
    type LotteryService = LotteryClient;

    fn build_lottery_client(&self) -> ContractClientResult<LotteryClient> {
        Ok(LotteryClient::new(
            self.chain_id(),
            self.contract_address()?,
            self.deployed_block_height,
            build_http_signer(self)?,
            self.contract_transaction_retry_descriptor,
            self.contract_view_retry_descriptor,
        ))
    }
}

type LotteryContract = EatThePie<HttpWalletSigner>;

#[async_trait]
impl ServiceClient<LotteryContract> for LotteryClient {
    async fn prepare_service_client(&self) -> ContractClientResult<LotteryContract> {
        let lottery_contract = EatThePie::new(self.lottery_address, self.signer.clone());

        Ok(lottery_contract)
    }
}

#[async_trait]
impl TransactionCaller for LotteryClient {}

#[async_trait]
impl ViewCaller for LotteryClient {}

fn to_contract_big_number(n: &PreparedBigNumber) -> BigNumber {
    BigNumber {
        val: Bytes::from(n.val.clone()),
        bitlen: U256::from(n.bitlen),
    }
}

fn to_contract_proof(proof: &VdfProof) -> (Vec<BigNumber>, BigNumber) {
    (
        proof.v.iter().map(to_contract_big_number).collect(),
        to_contract_big_number(&proof.y),
    )
}

impl From<GameInfo> for DetailedGameInfo {
    fn from(info: GameInfo) -> Self {
        DetailedGameInfo {
            game_id: info.game_id,
            status: info.status,
            prize_pool: info.prize_pool,
            number_of_winners: info.number_of_winners,
            gold_winners: info.gold_winners,
            silver_winners: info.silver_winners,
            bronze_winners: info.bronze_winners,
            winning_numbers: info.winning_numbers,
            difficulty: info.difficulty,
            draw_initiated_block: info.draw_initiated_block,
            randao_block: info.randao_block,
            randao_value: info.randao_value,
            payouts: info.payouts,
        }
    }
}

#[async_trait]
impl LotteryViews for LotteryClient {
    async fn ticket_price(&self) -> ContractClientResult<U256> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_view(
            self.chain_id,
            "ticket_price",
            lottery_contract.ticket_price(),
            self.contract_view_retry_descriptor,
        )
        .await
    }

    async fn current_game_info(&self) -> ContractClientResult<CurrentGameInfo> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let (game_number, difficulty, prize_pool, draw_time, time_until_draw) =
            LotteryClient::call_contract_view(
                self.chain_id,
                "get_current_game_info",
                lottery_contract.get_current_game_info(),
                self.contract_view_retry_descriptor,
            )
            .await?;

        Ok(CurrentGameInfo {
            game_number,
            difficulty,
            prize_pool,
            draw_time,
            time_until_draw,
        })
    }

    async fn detailed_game_info(
        &self,
        game_number: U256,
    ) -> ContractClientResult<DetailedGameInfo> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_view(
            self.chain_id,
            "get_detailed_game_info",
            lottery_contract.get_detailed_game_info(game_number),
            self.contract_view_retry_descriptor,
        )
        .await
        .map(DetailedGameInfo::from)
    }

    async fn user_game_winnings(
        &self,
        game_number: U256,
        player: Address,
    ) -> ContractClientResult<UserGameWinnings> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let (gold_win, silver_win, bronze_win, total_prize, claimed) =
            LotteryClient::call_contract_view(
                self.chain_id,
                "get_user_game_winnings",
                lottery_contract.get_user_game_winnings(game_number, player),
                self.contract_view_retry_descriptor,
            )
            .await?;

        Ok(UserGameWinnings {
            gold_win,
            silver_win,
            bronze_win,
            total_prize,
            claimed,
        })
    }

    async fn game_payouts(&self, game_number: U256) -> ContractClientResult<[U256; 3]> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let mut payouts = [U256::zero(); 3];
        for tier in PrizeTier::ALL {
            payouts[tier.index() as usize] = LotteryClient::call_contract_view(
                self.chain_id,
                "game_payouts",
                lottery_contract.game_payouts(game_number, U256::from(tier.index())),
                self.contract_view_retry_descriptor,
            )
            .await?;
        }

        Ok(payouts)
    }

    async fn consecutive_games_info(&self) -> ContractClientResult<ConsecutiveGamesInfo> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let consecutive_jackpot_games = LotteryClient::call_contract_view(
            self.chain_id,
            "consecutive_jackpot_games",
            lottery_contract.consecutive_jackpot_games(),
            self.contract_view_retry_descriptor,
        )
        .await?;

        let consecutive_non_jackpot_games = LotteryClient::call_contract_view(
            self.chain_id,
            "consecutive_non_jackpot_games",
            lottery_contract.consecutive_non_jackpot_games(),
            self.contract_view_retry_descriptor,
        )
        .await?;

        Ok(ConsecutiveGamesInfo {
            consecutive_jackpot_games: u256_to_u64_saturating(consecutive_jackpot_games),
            consecutive_non_jackpot_games: u256_to_u64_saturating(consecutive_non_jackpot_games),
        })
    }

    async fn game_start_block(&self, game_number: U256) -> ContractClientResult<U256> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_view(
            self.chain_id,
            "game_start_block",
            lottery_contract.game_start_block(game_number),
            self.contract_view_retry_descriptor,
        )
        .await
    }

    async fn verify_past_game_vdf(
        &self,
        game_number: U256,
        proof: &VdfProof,
    ) -> ContractClientResult<VdfVerification> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let (v, y) = to_contract_proof(proof);

        let (calculated_numbers, is_valid) = LotteryClient::call_contract_view(
            self.chain_id,
            "verify_past_game_vdf",
            lottery_contract.verify_past_game_vdf(game_number, v, y),
            self.contract_view_retry_descriptor,
        )
        .await?;

        Ok(VdfVerification {
            calculated_numbers,
            is_valid,
        })
    }
}

#[async_trait]
impl LotteryTransactions for LotteryClient {
    async fn buy_tickets(
        &self,
        tickets: &[Ticket],
        total_cost: U256,
    ) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let words = tickets.iter().map(Ticket::to_words).collect::<Vec<_>>();

        info!(
            "Buying {} ticket(s) for {} wei with chain_id({})",
            tickets.len(),
            total_cost,
            self.chain_id
        );

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "buy_tickets",
            lottery_contract.buy_tickets(words).value(total_cost),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn claim_prize(&self, game_number: U256) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "claim_prize",
            lottery_contract.claim_prize(game_number),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn mint_winning_nft(
        &self,
        game_number: U256,
    ) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "mint_winning_nft",
            lottery_contract.mint_winning_nft(game_number),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn initiate_draw(&self) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "initiate_draw",
            lottery_contract.initiate_draw(),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn set_random(&self, game_number: U256) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "set_random",
            lottery_contract.set_random(game_number),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn submit_vdf_proof(
        &self,
        game_number: U256,
        proof: &VdfProof,
    ) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let (v, y) = to_contract_proof(proof);

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "submit_vdf_proof",
            lottery_contract.submit_vdf_proof(game_number, v, y),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn calculate_payouts(
        &self,
        game_number: U256,
    ) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "calculate_payouts",
            lottery_contract.calculate_payouts(game_number),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }

    async fn change_difficulty(&self) -> ContractClientResult<TransactionReceipt> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        LotteryClient::call_contract_transaction(
            self.chain_id,
            "change_difficulty",
            lottery_contract.change_difficulty(),
            self.contract_transaction_retry_descriptor,
            false,
        )
        .await
    }
}

#[async_trait]
impl LotteryLogs for LotteryClient {
    async fn ticket_history(
        &self,
        game_number: U256,
        player: Address,
    ) -> ContractClientResult<Vec<PurchasedTicket>> {
        let lottery_contract =
            ServiceClient::<LotteryContract>::prepare_service_client(self).await?;

        let start_block = self.game_start_block(game_number).await?;

        let next_start_block = LotteryClient::call_contract_view_without_log(
            lottery_contract.game_start_block(game_number + U256::one()),
            self.contract_view_retry_descriptor,
        )
        .await
        .ok();

        let (from_block, to_block) =
            ticket_history_range(start_block, next_start_block, self.deployed_block_height);

        let filter = lottery_contract
            .ticket_purchased_filter()
            .topic1(H256::from(player))
            .from_block(from_block)
            .to_block(to_block);

        let logs = filter.query_with_meta().await?;

        info!(
            "Found {} TicketPurchased log(s) for {:?} since block {} with chain_id({})",
            logs.len(),
            player,
            from_block,
            self.chain_id
        );

        Ok(tickets_of_game(logs, game_number))
    }
}

/// Block range holding the purchases of a game.
///
/// A zero start block means the contract didn't record one, so the search starts at the
/// deployment. The next game hasn't started yet when its start block is zero or unreadable.
fn ticket_history_range(
    start_block: U256,
    next_start_block: Option<U256>,
    deployed_block_height: u64,
) -> (u64, BlockNumber) {
    let from_block = if start_block.is_zero() {
        deployed_block_height
    } else {
        u256_to_u64_saturating(start_block)
    };

    let to_block = match next_start_block {
        Some(block) if !block.is_zero() => BlockNumber::from(u256_to_u64_saturating(block)),
        _ => BlockNumber::Latest,
    };

    (from_block, to_block)
}

fn tickets_of_game(
    logs: Vec<(TicketPurchasedFilter, LogMeta)>,
    game_number: U256,
) -> Vec<PurchasedTicket> {
    logs.into_iter()
        .filter(|(log, _)| log.game_number == game_number)
        .map(|(log, meta)| PurchasedTicket {
            player: log.player,
            game_number: log.game_number,
            numbers: log.numbers,
            etherball: log.etherball,
            block_number: Some(meta.block_number.as_u64()),
        })
        .collect()
}

#[cfg(test)]
pub mod lottery_client_tests {
    use super::*;
    use crate::error::ContractClientError;
    use eat_the_pie_core::{prepare_big_number, Network};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn anvil_config() -> Config {
        Config::new(
            Network::Anvil,
            Network::Anvil.default_contract_address().to_string(),
            "http://127.0.0.1:8545".to_string(),
            ANVIL_KEY.to_string(),
        )
    }

    #[test]
    fn test_build_lottery_client() {
        let mut config = anvil_config();
        config.deployed_block_height = 7;
        let client = config.build_lottery_client().unwrap();

        assert_eq!(client.chain_id, 31337);
        assert_eq!(client.deployed_block_height, 7);
        assert_eq!(
            client.lottery_address(),
            Network::Anvil
                .default_contract_address()
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(
            client.signer_address(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_build_lottery_client_with_bad_address() {
        let mut config = anvil_config();
        config.contract_address = "0x1234".to_string();
        assert!(config.build_lottery_client().is_err());
    }

    #[test]
    fn test_proof_conversion() {
        let proof = VdfProof {
            v: vec![prepare_big_number("0x01", 16).unwrap()],
            y: prepare_big_number("0xff", 8).unwrap(),
        };
        let (v, y) = to_contract_proof(&proof);

        assert_eq!(v.len(), 1);
        assert_eq!(v[0].val.to_vec(), vec![0x01, 0x00]);
        assert_eq!(v[0].bitlen, U256::from(16));
        assert_eq!(y.val.to_vec(), vec![0xff]);
        assert_eq!(y.bitlen, U256::from(8));
    }

    fn purchase(game_number: u64, block_number: u64) -> (TicketPurchasedFilter, LogMeta) {
        (
            TicketPurchasedFilter {
                player: Address::repeat_byte(0xaa),
                game_number: U256::from(game_number),
                numbers: [U256::from(1), U256::from(2), U256::from(3)],
                etherball: U256::from(4),
            },
            LogMeta {
                address: Address::zero(),
                block_number: U64::from(block_number),
                block_hash: H256::zero(),
                transaction_hash: H256::zero(),
                transaction_index: U64::zero(),
                log_index: U256::zero(),
            },
        )
    }

    #[test]
    fn test_ticket_history_range() {
        let (from, to) =
            ticket_history_range(U256::from(120), Some(U256::from(180)), 100);
        assert_eq!(from, 120);
        assert_eq!(to, BlockNumber::Number(U64::from(180)));

        // no recorded start block
        let (from, _) = ticket_history_range(U256::zero(), Some(U256::from(180)), 100);
        assert_eq!(from, 100);

        // next game not started, or its start block unreadable
        let (_, to) = ticket_history_range(U256::from(120), Some(U256::zero()), 100);
        assert_eq!(to, BlockNumber::Latest);
        let (_, to) = ticket_history_range(U256::from(120), None, 100);
        assert_eq!(to, BlockNumber::Latest);
    }

    #[test]
    fn test_tickets_of_game_drops_other_games() {
        let tickets = tickets_of_game(
            vec![purchase(3, 10), purchase(4, 11), purchase(3, 12)],
            U256::from(3),
        );

        assert_eq!(tickets.len(), 2);
        assert!(tickets.iter().all(|t| t.game_number == U256::from(3)));
        assert_eq!(tickets[0].block_number, Some(10));
        assert_eq!(tickets[1].block_number, Some(12));
        assert_eq!(tickets[1].etherball, U256::from(4));
        assert!(tickets_of_game(vec![purchase(4, 11)], U256::from(3)).is_empty());
    }

    const STUB_TX_HASH: &str =
        "0x1111111111111111111111111111111111111111111111111111111111111111";

    fn stub_result(method: &str) -> serde_json::Value {
        use serde_json::json;

        match method {
            "eth_chainId" => json!("0x7a69"),
            "eth_blockNumber" => json!("0x1"),
            "eth_getTransactionCount" => json!("0x0"),
            "eth_estimateGas" => json!("0x30d40"),
            "eth_gasPrice" | "eth_maxPriorityFeePerGas" => json!("0x3b9aca00"),
            "eth_feeHistory" => json!({
                "oldestBlock": "0x1",
                "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
                "gasUsedRatio": [0.5],
                "reward": [["0x3b9aca00"]],
            }),
            "eth_getBlockByNumber" => json!({
                "hash": format!("0x{}", "22".repeat(32)),
                "parentHash": format!("0x{}", "00".repeat(32)),
                "sha3Uncles": format!("0x{}", "00".repeat(32)),
                "miner": format!("0x{}", "00".repeat(20)),
                "stateRoot": format!("0x{}", "00".repeat(32)),
                "transactionsRoot": format!("0x{}", "00".repeat(32)),
                "receiptsRoot": format!("0x{}", "00".repeat(32)),
                "logsBloom": format!("0x{}", "00".repeat(256)),
                "difficulty": "0x0",
                "totalDifficulty": "0x0",
                "number": "0x1",
                "gasLimit": "0x1c9c380",
                "gasUsed": "0x0",
                "timestamp": "0x1",
                "extraData": "0x",
                "mixHash": format!("0x{}", "00".repeat(32)),
                "nonce": "0x0000000000000000",
                "baseFeePerGas": "0x3b9aca00",
                "size": "0x0",
                "uncles": [],
                "transactions": [],
            }),
            "eth_sendRawTransaction" => json!(STUB_TX_HASH),
            // a dropped transaction that never gets a receipt
            _ => serde_json::Value::Null,
        }
    }

    /// Serves JSON-RPC over keep-alive HTTP and counts `eth_sendRawTransaction` calls.
    async fn spawn_stub_node(sends: Arc<AtomicUsize>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                let sends = sends.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 4096];
                    loop {
                        let header_end = loop {
                            if let Some(i) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                                break i + 4;
                            }
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                            }
                        };
                        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                        let content_length = headers
                            .lines()
                            .find_map(|l| l.strip_prefix("content-length:"))
                            .and_then(|v| v.trim().parse::<usize>().ok())
                            .unwrap_or(0);
                        while buf.len() < header_end + content_length {
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                            }
                        }

                        let request: serde_json::Value =
                            serde_json::from_slice(&buf[header_end..header_end + content_length])
                                .unwrap();
                        buf.drain(..header_end + content_length);

                        let method = request["method"].as_str().unwrap_or_default();
                        if method == "eth_sendRawTransaction" {
                            sends.fetch_add(1, Ordering::SeqCst);
                        }
                        let body = serde_json::json!({
                            "jsonrpc": "2.0",
                            "id": request["id"],
                            "result": stub_result(method),
                        })
                        .to_string();
                        let response = format!(
                            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        if socket.write_all(response.as_bytes()).await.is_err() {
                            return;
                        }
                    }
                });
            }
        });

        endpoint
    }

    #[tokio::test]
    async fn test_broadcast_transaction_is_never_sent_twice() {
        let sends = Arc::new(AtomicUsize::new(0));
        let mut config = anvil_config();
        config.provider_endpoint = spawn_stub_node(sends.clone()).await;
        config.contract_transaction_retry_descriptor = ExponentialBackoffRetryDescriptor {
            base: 2,
            factor: 1,
            max_attempts: 3,
            use_jitter: false,
        };
        let client = config.build_lottery_client().unwrap();

        let err = client
            .buy_tickets(
                &[Ticket::new([1, 2, 3], 4)],
                ethers::utils::parse_ether("0.01").unwrap(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ContractClientError::NoTransactionReceipt(hash)
                if hash == STUB_TX_HASH.parse::<H256>().unwrap()
        ));
        assert_eq!(sends.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_view_against_unreachable_node_fails() {
        let mut config = anvil_config();
        // nothing listens on port 9
        config.provider_endpoint = "http://127.0.0.1:9".to_string();
        config.contract_view_retry_descriptor = ExponentialBackoffRetryDescriptor {
            base: 1,
            factor: 1,
            max_attempts: 1,
            use_jitter: false,
        };
        let client = config.build_lottery_client().unwrap();

        let err = client.ticket_price().await.unwrap_err();
        assert!(!err.is_revert());
        assert!(err.revert_reason().is_none());
    }
}

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, VersionedTransaction};
use std::str::FromStr;
use typed_builder::TypedBuilder;

use crate::application::effects::derive_effect;
use crate::application::simulation::classify_simulation;
use crate::domain::errors::{RpcError, SimulationError};
use crate::domain::models::{
    AccountInfo, Blockhash, Cluster, EpochInfo, Health, SignatureRecord, SimulationOutcome,
    TokenAccountBalance, TransactionEffect,
};

use super::envelope::{RpcEnvelope, RpcRequest};
use super::http_transport::HttpTransport;
use super::transport::Transport;
use super::wire::{
    AccountInfoValue, EpochInfoResult, IdentityResult, LatestBlockhashValue, SignatureInfo,
    SignaturesForAddressConfig, SimulationValue, TransactionConfig, TransactionRecord,
    UiTokenAmount, WithContext,
};

/// A transaction that can render itself in the binary wire format the node expects.
pub trait WireTransaction {
    fn serialize_wire(&self) -> Result<Vec<u8>, bincode::Error>;
}

impl WireTransaction for Transaction {
    fn serialize_wire(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

impl WireTransaction for VersionedTransaction {
    fn serialize_wire(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

/// A client for the Solana JSON-RPC API.
///
/// Each operation is one blocking round trip through the transport. The client keeps no
/// state between calls.
#[derive(Clone, TypedBuilder)]
pub struct SolanaRpcClient<T> {
    transport: T,
    #[builder(setter(into))]
    url: String,
    /// Commitment used when an operation is not given one explicitly
    #[builder(default = CommitmentConfig::finalized())]
    commitment: CommitmentConfig,
}

impl SolanaRpcClient<HttpTransport> {
    /// Creates a new `SolanaRpcClient` talking HTTP to `rpc_url` with finalized commitment.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - The URL of the Solana RPC endpoint.
    pub fn from_url(rpc_url: &str) -> Self {
        Self::builder()
            .transport(HttpTransport::new())
            .url(rpc_url)
            .build()
    }

    pub fn from_cluster(cluster: Cluster) -> Self {
        Self::from_url(cluster.url())
    }
}

impl<T: Transport> SolanaRpcClient<T> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    /// Performs one call and returns the body together with its success payload.
    fn call(&self, method: &str, params: Vec<Value>) -> Result<(Value, String), RpcError> {
        let request = RpcRequest::new(method, params);
        tracing::debug!("Calling {} on {}", method, self.url);

        let body = self
            .transport
            .post_json(&self.url, request.encode())
            .map_err(|source| RpcError::Transport {
                method: method.to_string(),
                source,
            })?;

        let result = RpcEnvelope::decode(method, &body)
            .and_then(|envelope| envelope.into_result(method))
            .inspect_err(|e| tracing::warn!("Rpc call {} failed: {}", method, e))?;
        Ok((result, body))
    }

    /// Performs one call and projects its payload into `R`.
    ///
    /// Unknown fields are ignored, missing required ones fail with `RpcError::Decode`.
    /// An `Option` target turns a null payload into `None`.
    fn call_for<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<R, RpcError> {
        let (result, body) = self.call(method, params)?;
        project(method, result, &body)
    }

    fn commitment_param(commitment: CommitmentConfig) -> Value {
        json!({ "commitment": commitment.commitment })
    }

    fn encode_transaction(transaction: &impl WireTransaction) -> Result<String, RpcError> {
        Ok(STANDARD.encode(transaction.serialize_wire()?))
    }

    /// Retrieves the lamport balance of an account.
    pub fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError> {
        let balance: WithContext<u64> = self.call_for(
            "getBalance",
            vec![
                json!(address.to_string()),
                Self::commitment_param(self.commitment),
            ],
        )?;
        Ok(balance.value)
    }

    /// Retrieves the balance of an SPL token account.
    pub fn get_token_account_balance(
        &self,
        address: &Pubkey,
        commitment: Option<CommitmentConfig>,
    ) -> Result<TokenAccountBalance, RpcError> {
        const METHOD: &str = "getTokenAccountBalance";
        let (result, body) = self.call(
            METHOD,
            vec![
                json!(address.to_string()),
                Self::commitment_param(commitment.unwrap_or(self.commitment)),
            ],
        )?;
        let balance: WithContext<UiTokenAmount> = project(METHOD, result, &body)?;
        let amount = balance
            .value
            .amount
            .parse::<u64>()
            .map_err(|e| decode_error(METHOD, format!("invalid token amount: {e}"), &body))?;
        Ok(TokenAccountBalance {
            amount,
            decimals: balance.value.decimals,
            ui_amount: balance.value.ui_amount_string,
        })
    }

    pub fn get_latest_blockhash(
        &self,
        commitment: Option<CommitmentConfig>,
    ) -> Result<String, RpcError> {
        Ok(self.get_latest_blockhash_extended(commitment)?.blockhash)
    }

    /// Retrieves the latest blockhash with the slot it was read at and its expiry height.
    pub fn get_latest_blockhash_extended(
        &self,
        commitment: Option<CommitmentConfig>,
    ) -> Result<Blockhash, RpcError> {
        let result: WithContext<LatestBlockhashValue> = self.call_for(
            "getLatestBlockhash",
            vec![Self::commitment_param(
                commitment.unwrap_or(self.commitment),
            )],
        )?;
        Ok(Blockhash {
            blockhash: result.value.blockhash,
            slot: result.context.slot,
            last_valid_block_height: result.value.last_valid_block_height,
        })
    }

    pub fn is_blockhash_valid(
        &self,
        blockhash: &str,
        commitment: Option<CommitmentConfig>,
    ) -> Result<bool, RpcError> {
        let result: WithContext<bool> = self.call_for(
            "isBlockhashValid",
            vec![
                json!(blockhash),
                Self::commitment_param(commitment.unwrap_or(self.commitment)),
            ],
        )?;
        Ok(result.value)
    }

    /// Anything other than `"ok"` is reported as `Health::Error`. An unhealthy node usually
    /// answers with an error envelope instead, which surfaces as `RpcError::Protocol`.
    pub fn get_health(&self) -> Result<Health, RpcError> {
        let result: String = self.call_for("getHealth", vec![])?;
        Ok(if result == "ok" {
            Health::Ok
        } else {
            Health::Error
        })
    }

    pub fn get_epoch_info(&self) -> Result<EpochInfo, RpcError> {
        let result: EpochInfoResult = self.call_for("getEpochInfo", vec![])?;
        Ok(EpochInfo {
            absolute_slot: result.absolute_slot,
            block_height: result.block_height,
            epoch: result.epoch,
            slot_index: result.slot_index,
            slots_in_epoch: result.slots_in_epoch,
            transaction_count: result.transaction_count,
        })
    }

    /// Retrieves the identity public key of the node.
    pub fn get_identity(&self) -> Result<Pubkey, RpcError> {
        const METHOD: &str = "getIdentity";
        let (result, body) = self.call(METHOD, vec![])?;
        let IdentityResult { identity } = project(METHOD, result, &body)?;
        Pubkey::from_str(&identity)
            .map_err(|e| decode_error(METHOD, format!("invalid identity {identity}: {e}"), &body))
    }

    pub fn get_transaction_count(&self) -> Result<u64, RpcError> {
        self.call_for("getTransactionCount", vec![])
    }

    /// Retrieves an account, or `None` if it does not exist.
    pub fn get_account_info(&self, address: &Pubkey) -> Result<Option<AccountInfo>, RpcError> {
        const METHOD: &str = "getAccountInfo";
        let (result, body) = self.call(
            METHOD,
            vec![
                json!(address.to_string()),
                json!({ "encoding": "base64" }),
            ],
        )?;
        let account: WithContext<Option<AccountInfoValue>> = project(METHOD, result, &body)?;

        let Some(value) = account.value else {
            return Ok(None);
        };
        let (encoded, _encoding) = &value.data;
        let data = STANDARD
            .decode(encoded)
            .map_err(|e| decode_error(METHOD, format!("invalid account data: {e}"), &body))?;
        Pubkey::from_str(&value.owner).map_err(|e| {
            decode_error(METHOD, format!("invalid owner {}: {e}", value.owner), &body)
        })?;

        Ok(Some(AccountInfo {
            space: value.space.unwrap_or(data.len() as u64),
            data,
            executable: value.executable,
            lamports: value.lamports,
            owner: value.owner,
            rent_epoch: value.rent_epoch,
        }))
    }

    /// Requests an airdrop and returns the signature of the funding transaction.
    pub fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> Result<String, RpcError> {
        self.call_for(
            "requestAirdrop",
            vec![json!(address.to_string()), json!(lamports)],
        )
    }

    /// Submits a signed transaction and returns its signature.
    pub fn send_transaction(&self, transaction: &impl WireTransaction) -> Result<String, RpcError> {
        let encoded = Self::encode_transaction(transaction)?;
        self.call_for(
            "sendTransaction",
            vec![json!(encoded), json!({ "encoding": "base64" })],
        )
    }

    /// Dry-runs a transaction without committing it.
    pub fn simulate_transaction(
        &self,
        transaction: &impl WireTransaction,
    ) -> Result<SimulationOutcome, RpcError> {
        const METHOD: &str = "simulateTransaction";
        let encoded = Self::encode_transaction(transaction)?;
        let (result, body) = self.call(
            METHOD,
            vec![json!(encoded), json!({ "encoding": "base64" })],
        )?;
        let simulation: WithContext<SimulationValue> = project(METHOD, result, &body)?;

        classify_simulation(simulation.value).map_err(|e| match e {
            SimulationError::Unparseable => RpcError::UnparseableSimulation { raw_body: body },
            SimulationError::UnsupportedErrorShape(_) => decode_error(METHOD, e.to_string(), &body),
        })
    }

    /// Lists signatures of transactions touching `address`, newest first, with memos
    /// normalized.
    pub fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        config: SignaturesForAddressConfig,
    ) -> Result<Vec<SignatureRecord>, RpcError> {
        let infos: Vec<SignatureInfo> = self.call_for(
            "getSignaturesForAddress",
            vec![json!(address.to_string()), json!(config)],
        )?;
        Ok(infos.into_iter().map(SignatureRecord::from).collect())
    }

    /// Retrieves a confirmed transaction and derives its balance effect, or `None` if the
    /// node does not know the signature.
    ///
    /// # Arguments
    ///
    /// * `signature` - The transaction signature.
    /// * `max_supported_transaction_version` - Highest transaction version to accept; when
    ///   unset only legacy transactions are returned.
    pub fn get_transaction(
        &self,
        signature: &Signature,
        max_supported_transaction_version: Option<u8>,
    ) -> Result<Option<TransactionEffect>, RpcError> {
        let record: Option<TransactionRecord> = self.call_for(
            "getTransaction",
            vec![
                json!(signature.to_string()),
                json!(TransactionConfig {
                    encoding: "json",
                    max_supported_transaction_version,
                }),
            ],
        )?;

        record
            .map(|record| derive_effect(&record).map_err(RpcError::from))
            .transpose()
    }
}

fn project<R: DeserializeOwned>(method: &str, result: Value, body: &str) -> Result<R, RpcError> {
    serde_json::from_value(result).map_err(|e| decode_error(method, e.to_string(), body))
}

fn decode_error(method: &str, reason: String, body: &str) -> RpcError {
    RpcError::Decode {
        method: method.to_string(),
        reason,
        raw_body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::TransportError;
    use crate::infrastructure::transport::MockTransport;

    const URL: &str = "http://localhost:8899";
    const ADDRESS: &str = "DxPv2QMA5cWR5Xfg7tXr5YtJ1EEStg5Kiag9HhkY1mSx";

    fn client_answering(expected_request: Value, response: Value) -> SolanaRpcClient<MockTransport> {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .withf(move |url, body| {
                url == URL && serde_json::from_str::<Value>(body).ok() == Some(expected_request.clone())
            })
            .times(1)
            .returning(move |_, _| Ok(response.to_string()));
        SolanaRpcClient::builder().transport(transport).url(URL).build()
    }

    fn client_returning(body: &str) -> SolanaRpcClient<MockTransport> {
        let body = body.to_string();
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .withf(|url, _| url == URL)
            .times(1)
            .returning(move |_, _| Ok(body.clone()));
        SolanaRpcClient::builder().transport(transport).url(URL).build()
    }

    fn request(method: &str, params: Value) -> Value {
        json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params})
    }

    fn success(result: Value) -> Value {
        json!({"jsonrpc": "2.0", "result": result, "id": 1})
    }

    fn address() -> Pubkey {
        Pubkey::from_str(ADDRESS).unwrap()
    }

    #[test]
    fn get_balance_sends_address_and_commitment() {
        let client = client_answering(
            request("getBalance", json!([ADDRESS, {"commitment": "finalized"}])),
            success(json!({"context": {"slot": 1}, "value": 2_000_000})),
        );

        assert_eq!(client.get_balance(&address()).unwrap(), 2_000_000);
    }

    #[test]
    fn explicit_commitment_overrides_default() {
        let client = client_answering(
            request("getLatestBlockhash", json!([{"commitment": "confirmed"}])),
            success(json!({
                "context": {"slot": 2792},
                "value": {"blockhash": "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N", "lastValidBlockHeight": 3090}
            })),
        );

        let blockhash = client
            .get_latest_blockhash_extended(Some(CommitmentConfig::confirmed()))
            .unwrap();

        assert_eq!(
            blockhash,
            Blockhash {
                blockhash: "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N".to_string(),
                slot: 2792,
                last_valid_block_height: 3090,
            }
        );
    }

    #[test]
    fn token_account_balance_parses_raw_amount() {
        let client = client_answering(
            request(
                "getTokenAccountBalance",
                json!([ADDRESS, {"commitment": "finalized"}]),
            ),
            success(json!({
                "context": {"slot": 1},
                "value": {"amount": "123", "decimals": 6, "uiAmount": 0.000123, "uiAmountString": "0.000123"}
            })),
        );

        let balance = client.get_token_account_balance(&address(), None).unwrap();

        assert_eq!(
            balance,
            TokenAccountBalance {
                amount: 123,
                decimals: 6,
                ui_amount: "0.000123".to_string(),
            }
        );
    }

    #[test]
    fn protocol_error_exposes_code_and_message() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#;
        let client = client_returning(body);

        let err = client.get_balance(&address()).unwrap_err();

        match err {
            RpcError::Protocol {
                method,
                code,
                message,
                raw_body,
            } => {
                assert_eq!(method, "getBalance");
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid param: WrongSize");
                assert_eq!(raw_body, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn transport_failure_is_surfaced() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().times(1).returning(|url, _| {
            let source = reqwest::blocking::Client::new()
                .get("not a url")
                .build()
                .unwrap_err();
            Err(TransportError::FailedToSendRequest {
                url: url.to_string(),
                source,
            })
        });
        let client = SolanaRpcClient::builder().transport(transport).url(URL).build();

        let err = client.get_transaction_count().unwrap_err();

        assert!(matches!(err, RpcError::Transport { ref method, .. } if method == "getTransactionCount"));
    }

    #[test]
    fn missing_required_field_names_field_and_method() {
        let body = success(json!({"context": {"slot": 1}, "value": {"lastValidBlockHeight": 3090}}));
        let client = client_returning(&body.to_string());

        let err = client.get_latest_blockhash(None).unwrap_err();

        match err {
            RpcError::Decode {
                method,
                reason,
                raw_body,
            } => {
                assert_eq!(method, "getLatestBlockhash");
                assert!(reason.contains("blockhash"), "{reason}");
                assert_eq!(raw_body, body.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn account_not_found_is_none() {
        let client = client_answering(
            request("getAccountInfo", json!([ADDRESS, {"encoding": "base64"}])),
            success(json!({"context": {"slot": 1}, "value": null})),
        );

        assert_eq!(client.get_account_info(&address()).unwrap(), None);
    }

    #[test]
    fn account_info_decodes_data() {
        let client = client_returning(
            &success(json!({
                "context": {"slot": 1},
                "value": {
                    "data": ["AQID", "base64"],
                    "executable": false,
                    "lamports": 1_461_600,
                    "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                    "rentEpoch": 18_446_744_073_709_551_615u64,
                }
            }))
            .to_string(),
        );

        let account = client.get_account_info(&address()).unwrap().unwrap();

        assert_eq!(account.data, vec![1, 2, 3]);
        assert_eq!(account.space, 3);
        assert_eq!(account.lamports, 1_461_600);
        assert_eq!(account.owner, "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    }

    #[test]
    fn health_ok() {
        let client = client_answering(request("getHealth", json!([])), success(json!("ok")));

        assert_eq!(client.get_health().unwrap(), Health::Ok);
    }

    #[test]
    fn identity_is_parsed_as_pubkey() {
        let client = client_answering(
            request("getIdentity", json!([])),
            success(json!({"identity": ADDRESS})),
        );

        assert_eq!(client.get_identity().unwrap(), address());
    }

    #[test]
    fn simulation_error_is_classified() {
        let tx = Transaction::default();
        let encoded = STANDARD.encode(bincode::serialize(&tx).unwrap());
        let client = client_answering(
            request("simulateTransaction", json!([encoded, {"encoding": "base64"}])),
            success(json!({
                "context": {"slot": 1},
                "value": {"err": "AccountNotFound", "logs": null, "accounts": null}
            })),
        );

        assert_eq!(
            client.simulate_transaction(&tx).unwrap(),
            SimulationOutcome::Error {
                error: "AccountNotFound".to_string()
            }
        );
    }

    #[test]
    fn unrecognized_simulation_carries_body() {
        let body = success(json!({"context": {"slot": 1}, "value": {"unitsConsumed": 0}})).to_string();
        let client = client_returning(&body);

        let err = client.simulate_transaction(&Transaction::default()).unwrap_err();

        assert!(matches!(err, RpcError::UnparseableSimulation { ref raw_body } if *raw_body == body));
    }

    #[test]
    fn signatures_config_omits_unset_options() {
        let client = client_answering(
            request("getSignaturesForAddress", json!([ADDRESS, {"limit": 2}])),
            success(json!([
                {"signature": "sig-a", "slot": 10, "err": null, "memo": "[12] hello world!", "blockTime": null, "confirmationStatus": "finalized"},
                {"signature": "sig-b", "slot": 9, "err": {"InstructionError": [0, "Custom"]}, "memo": null}
            ])),
        );

        let records = client
            .get_signatures_for_address(
                &address(),
                SignaturesForAddressConfig::builder().limit(2).build(),
            )
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].memo.as_deref(), Some("hello world!"));
        assert_eq!(records[1].memo, None);
        assert!(records[1].err.is_some());
    }

    #[test]
    fn unknown_transaction_is_none() {
        let signature = Signature::default();
        let client = client_answering(
            request(
                "getTransaction",
                json!([signature.to_string(), {"encoding": "json", "maxSupportedTransactionVersion": 0}]),
            ),
            success(Value::Null),
        );

        assert_eq!(client.get_transaction(&signature, Some(0)).unwrap(), None);
    }

    #[test]
    fn inconsistent_transaction_record_is_rejected() {
        let client = client_returning(
            &success(json!({
                "slot": 5,
                "transaction": {
                    "signatures": ["sig"],
                    "message": {"accountKeys": ["A", "B"], "recentBlockhash": "hash", "instructions": []}
                },
                "meta": {"fee": 5000, "preBalances": [1, 2], "postBalances": [1], "preTokenBalances": [], "postTokenBalances": []}
            }))
            .to_string(),
        );

        let err = client.get_transaction(&Signature::default(), None).unwrap_err();

        assert!(matches!(err, RpcError::MalformedTransactionRecord(_)));
    }

    #[test]
    fn blockhash_validity_sends_hash_and_commitment() {
        let client = client_answering(
            request(
                "isBlockhashValid",
                json!(["J7rBdM6AecPDEZp8aPq5iPSNKVkU5Q76F3oAV4eW5wsW", {"commitment": "processed"}]),
            ),
            success(json!({"context": {"slot": 2483}, "value": false})),
        );

        let valid = client
            .is_blockhash_valid(
                "J7rBdM6AecPDEZp8aPq5iPSNKVkU5Q76F3oAV4eW5wsW",
                Some(CommitmentConfig::processed()),
            )
            .unwrap();

        assert!(!valid);
    }

    #[test]
    fn airdrop_sends_address_and_lamports() {
        let client = client_answering(
            request("requestAirdrop", json!([ADDRESS, 1_000_000_000u64])),
            success(json!("5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW")),
        );

        let signature = client.request_airdrop(&address(), 1_000_000_000).unwrap();

        assert_eq!(
            signature,
            "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW"
        );
    }

    #[test]
    fn send_transaction_sends_base64_wire_bytes() {
        let tx = Transaction::default();
        let encoded = STANDARD.encode(bincode::serialize(&tx).unwrap());
        let client = client_answering(
            request("sendTransaction", json!([encoded, {"encoding": "base64"}])),
            success(json!("sig")),
        );

        assert_eq!(client.send_transaction(&tx).unwrap(), "sig");
    }

    #[test]
    fn epoch_info_with_and_without_transaction_count() {
        let epoch = json!({
            "absoluteSlot": 166_598,
            "blockHeight": 166_500,
            "epoch": 27,
            "slotIndex": 2_790,
            "slotsInEpoch": 8_192,
        });
        let mut counted = epoch.clone();
        counted["transactionCount"] = json!(22_661_093);

        let without = client_answering(request("getEpochInfo", json!([])), success(epoch))
            .get_epoch_info()
            .unwrap();
        let with = client_answering(request("getEpochInfo", json!([])), success(counted))
            .get_epoch_info()
            .unwrap();

        assert_eq!(
            without,
            EpochInfo {
                absolute_slot: 166_598,
                block_height: 166_500,
                epoch: 27,
                slot_index: 2_790,
                slots_in_epoch: 8_192,
                transaction_count: None,
            }
        );
        assert_eq!(with.transaction_count, Some(22_661_093));
    }

    #[test]
    fn transaction_without_max_version_leaves_it_out() {
        let signature = Signature::default();
        let client = client_answering(
            request(
                "getTransaction",
                json!([signature.to_string(), {"encoding": "json"}]),
            ),
            success(Value::Null),
        );

        assert_eq!(client.get_transaction(&signature, None).unwrap(), None);
    }

    fn account_value(data: &str, owner: &str) -> String {
        success(json!({
            "context": {"slot": 1},
            "value": {
                "data": [data, "base64"],
                "executable": false,
                "lamports": 1,
                "owner": owner,
                "rentEpoch": 0,
                "space": 0,
            }
        }))
        .to_string()
    }

    #[test]
    fn account_with_invalid_data_is_decode_error() {
        let body = account_value("not base64!", "11111111111111111111111111111111");
        let client = client_returning(&body);

        let err = client.get_account_info(&address()).unwrap_err();

        assert!(matches!(
            err,
            RpcError::Decode { ref method, ref raw_body, .. }
                if method == "getAccountInfo" && *raw_body == body
        ));
    }

    #[test]
    fn account_with_invalid_owner_is_decode_error() {
        let client = client_returning(&account_value("", "not-a-pubkey"));

        let err = client.get_account_info(&address()).unwrap_err();

        assert!(matches!(
            err,
            RpcError::Decode { ref reason, .. } if reason.contains("not-a-pubkey")
        ));
    }
}

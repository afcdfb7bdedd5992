//! Result shapes of the RPC methods, as the node sends them.
//!
//! Only the fields this client reads are declared; anything else the node adds is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_transaction_status::TransactionConfirmationStatus;
use typed_builder::TypedBuilder;

#[derive(Deserialize, Debug)]
pub struct ContextWithSlot {
    pub slot: u64,
}

/// Results wrapped as `{context, value}`.
#[derive(Deserialize, Debug)]
pub struct WithContext<T> {
    pub context: ContextWithSlot,
    pub value: T,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhashValue {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    pub amount: String,
    pub decimals: u8,
    pub ui_amount_string: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EpochInfoResult {
    pub absolute_slot: u64,
    pub block_height: u64,
    pub epoch: u64,
    pub slot_index: u64,
    pub slots_in_epoch: u64,
    pub transaction_count: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct IdentityResult {
    pub identity: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoValue {
    /// `[data, encoding]`
    pub data: (String, String),
    pub executable: bool,
    pub lamports: u64,
    pub owner: String,
    pub rent_epoch: u64,
    pub space: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct SimulationValue {
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub logs: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    pub signature: String,
    pub slot: u64,
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub confirmation_status: Option<TransactionConfirmationStatus>,
}

/// Options of `getSignaturesForAddress`. Unset options are left out of the request.
#[derive(Serialize, Debug, Clone, Default, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SignaturesForAddressConfig {
    /// Maximum number of signatures, 1 to 1000
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Search backwards starting from this signature
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Stop at this signature
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfig {
    pub encoding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
}

/// A confirmed transaction as returned by `getTransaction` with `json` encoding.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub slot: u64,
    pub transaction: TransactionBody,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TransactionBody {
    pub signatures: Vec<String>,
    pub message: TransactionMessage,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
    pub account_keys: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub err: Option<Value>,
    pub fee: u64,
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
    #[serde(default)]
    pub pre_token_balances: Option<Vec<TokenBalance>>,
    #[serde(default)]
    pub post_token_balances: Option<Vec<TokenBalance>>,
    #[serde(default)]
    pub loaded_addresses: Option<LoadedAddresses>,
}

/// Accounts pulled in through address lookup tables by versioned transactions.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LoadedAddresses {
    #[serde(default)]
    pub writable: Vec<String>,
    #[serde(default)]
    pub readonly: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub account_index: u16,
    pub mint: String,
    /// Unset when the token account did not exist yet
    #[serde(default)]
    pub owner: Option<String>,
    pub ui_token_amount: UiTokenAmount,
}

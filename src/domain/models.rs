use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_transaction_status::TransactionConfirmationStatus;

/// Well-known public Solana clusters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub fn url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }
}

/// Node health as reported by `getHealth`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Health {
    Ok,
    Error,
}

/// A recent blockhash together with the slot it was observed at.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Blockhash {
    pub blockhash: String,
    pub slot: u64,
    pub last_valid_block_height: u64,
}

/// Balance of an SPL token account.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TokenAccountBalance {
    /// Raw amount in base units
    pub amount: u64,
    pub decimals: u8,
    /// Amount formatted with `decimals`
    pub ui_amount: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct EpochInfo {
    pub absolute_slot: u64,
    pub block_height: u64,
    pub epoch: u64,
    pub slot_index: u64,
    pub slots_in_epoch: u64,
    pub transaction_count: Option<u64>,
}

/// An account as stored on the ledger.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    /// Account data, already base64-decoded
    pub data: Vec<u8>,
    pub executable: bool,
    pub lamports: u64,
    /// Base58 address of the owning program
    pub owner: String,
    pub rent_epoch: u64,
    /// Size of the data; falls back to the decoded data length
    pub space: u64,
}

/// A transaction signature that touched an address.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SignatureRecord {
    pub signature: String,
    pub slot: u64,
    /// Error payload if the transaction failed
    pub err: Option<Value>,
    /// Memo text with the byte-length marker removed
    pub memo: Option<String>,
    pub block_time: Option<i64>,
    pub confirmation_status: Option<TransactionConfirmationStatus>,
}

/// Lamport change of one account.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct BalanceChange {
    pub address: String,
    pub delta: i64,
}

/// UI-amount change of one token balance.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenBalanceChange {
    pub owner: Option<String>,
    pub mint: String,
    pub delta: f64,
}

/// Compact view of what a confirmed transaction did to balances.
///
/// Only accounts and token balances that actually changed are listed.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TransactionEffect {
    pub signature: Option<String>,
    pub slot: u64,
    pub block_time: Option<i64>,
    /// Fee charged to `fee_payer`, 0 when the node returned no metadata
    pub fee: u64,
    pub fee_payer: String,
    /// Execution error if the transaction failed on chain
    pub err: Option<Value>,
    pub balance_changes: Vec<BalanceChange>,
    pub token_balance_changes: Vec<TokenBalanceChange>,
}

impl TransactionEffect {
    pub fn block_time_utc(&self) -> Option<DateTime<Utc>> {
        self.block_time
            .and_then(|timestamp| DateTime::<Utc>::from_timestamp(timestamp, 0))
    }
}

/// Result of a dry run of a transaction.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum SimulationOutcome {
    Success { logs: Vec<String> },
    Error { error: String },
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sol_rpc_client::domain::models::Cluster;
use sol_rpc_client::infrastructure::http_transport::HttpTransport;
use sol_rpc_client::{SignaturesForAddressConfig, SolanaRpcClient};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "Typed Solana JSON-RPC client")]
struct RpcProgram {
    /// RPC endpoint, overrides --cluster
    #[arg(short, long)]
    rpc_url: Option<String>,

    /// Well-known cluster to talk to
    #[arg(long, value_enum, default_value_t = ClusterArg::Devnet)]
    cluster: ClusterArg,

    /// Default commitment level
    #[arg(short, long, value_enum, default_value_t = CommitmentArg::Finalized)]
    commitment: CommitmentArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lamport balance of an account
    Balance { address: Pubkey },
    /// Balance of an SPL token account
    TokenBalance { address: Pubkey },
    /// Latest blockhash with its slot and expiry height
    Blockhash,
    /// Whether a blockhash is still valid
    BlockhashValid { blockhash: String },
    /// Node health
    Health,
    /// Current epoch
    EpochInfo,
    /// Node identity
    Identity,
    /// Number of transactions processed by the ledger
    TransactionCount,
    /// Account data and owner
    Account { address: Pubkey },
    /// Request an airdrop of lamports
    Airdrop { address: Pubkey, lamports: u64 },
    /// Signatures of transactions touching an address
    Signatures {
        address: Pubkey,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        #[arg(short, long)]
        before: Option<Signature>,
    },
    /// Balance changes made by a transaction
    Transaction {
        signature: Signature,
        #[arg(short, long)]
        max_version: Option<u8>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ClusterArg {
    Devnet,
    Testnet,
    MainnetBeta,
}

impl From<ClusterArg> for Cluster {
    fn from(cluster: ClusterArg) -> Self {
        match cluster {
            ClusterArg::Devnet => Cluster::Devnet,
            ClusterArg::Testnet => Cluster::Testnet,
            ClusterArg::MainnetBeta => Cluster::MainnetBeta,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CommitmentArg {
    Processed,
    Confirmed,
    Finalized,
}

impl From<CommitmentArg> for CommitmentConfig {
    fn from(commitment: CommitmentArg) -> Self {
        match commitment {
            CommitmentArg::Processed => CommitmentConfig::processed(),
            CommitmentArg::Confirmed => CommitmentConfig::confirmed(),
            CommitmentArg::Finalized => CommitmentConfig::finalized(),
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr, results to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = RpcProgram::parse();

    let url = args
        .rpc_url
        .unwrap_or_else(|| Cluster::from(args.cluster).url().to_string());
    let client = SolanaRpcClient::builder()
        .transport(HttpTransport::new())
        .url(url)
        .commitment(args.commitment.into())
        .build();
    tracing::info!("Using rpc endpoint {}", client.url());

    match args.command {
        Command::Balance { address } => print_json(&client.get_balance(&address)?),
        Command::TokenBalance { address } => {
            print_json(&client.get_token_account_balance(&address, None)?)
        }
        Command::Blockhash => print_json(&client.get_latest_blockhash_extended(None)?),
        Command::BlockhashValid { blockhash } => {
            print_json(&client.is_blockhash_valid(&blockhash, None)?)
        }
        Command::Health => print_json(&client.get_health()?),
        Command::EpochInfo => print_json(&client.get_epoch_info()?),
        Command::Identity => print_json(&client.get_identity()?.to_string()),
        Command::TransactionCount => print_json(&client.get_transaction_count()?),
        Command::Account { address } => match client.get_account_info(&address)? {
            Some(account) => print_json(&account),
            None => {
                tracing::warn!("Account {} not found", address);
                print_json(&Option::<()>::None)
            }
        },
        Command::Airdrop { address, lamports } => {
            print_json(&client.request_airdrop(&address, lamports)?)
        }
        Command::Signatures {
            address,
            limit,
            before,
        } => {
            let config = match before {
                Some(before) => SignaturesForAddressConfig::builder()
                    .limit(limit)
                    .before(before.to_string())
                    .build(),
                None => SignaturesForAddressConfig::builder().limit(limit).build(),
            };
            print_json(&client.get_signatures_for_address(&address, config)?)
        }
        Command::Transaction {
            signature,
            max_version,
        } => match client.get_transaction(&signature, max_version)? {
            Some(effect) => {
                if let Some(time) = effect.block_time_utc() {
                    tracing::info!("Transaction {} confirmed at {}", signature, time);
                }
                print_json(&effect)
            }
            None => {
                tracing::warn!("Transaction {} not found", signature);
                print_json(&Option::<()>::None)
            }
        },
    }
}

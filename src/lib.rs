pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::errors::RpcError;
pub use infrastructure::solana_client::{SolanaRpcClient, WireTransaction};
pub use infrastructure::wire::SignaturesForAddressConfig;

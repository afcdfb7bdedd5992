pub mod envelope;
pub mod http_transport;
pub mod solana_client;
pub mod transport;
pub mod wire;

use thiserror::Error;

/// Errors raised by every RPC operation of the client.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Failed to reach the rpc endpoint while calling {method}")]
    Transport {
        method: String,
        #[source]
        source: TransportError,
    },
    #[error("Rpc call {method} failed with code {code}: {message}")]
    Protocol {
        method: String,
        code: i64,
        message: String,
        raw_body: String,
    },
    #[error("Malformed response to {method}: {raw_body}")]
    MalformedResponse { method: String, raw_body: String },
    #[error("Failed to decode {method} result: {reason}")]
    Decode {
        method: String,
        reason: String,
        raw_body: String,
    },
    #[error("Malformed transaction record")]
    MalformedTransactionRecord(#[from] TransactionRecordError),
    #[error("Simulation response is neither a success nor an error: {raw_body}")]
    UnparseableSimulation { raw_body: String },
    #[error("Failed to serialize transaction")]
    TransactionEncoding(#[from] bincode::Error),
}

impl RpcError {
    /// The numeric code of a protocol error, if this is one.
    pub fn code(&self) -> Option<i64> {
        match self {
            RpcError::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The untouched response body, when the failure happened after a response was read.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            RpcError::Protocol { raw_body, .. }
            | RpcError::MalformedResponse { raw_body, .. }
            | RpcError::Decode { raw_body, .. }
            | RpcError::UnparseableSimulation { raw_body } => Some(raw_body),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build http client")]
    FailedToBuildClient(#[source] reqwest::Error),
    #[error("Failed to send request to {url}")]
    FailedToSendRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from {url}")]
    FailedToReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransactionRecordError {
    #[error("Transaction has no account keys")]
    MissingFeePayer,
    #[error("Pre balances ({pre}) and post balances ({post}) differ in length")]
    BalanceLengthMismatch { pre: usize, post: usize },
    #[error("No account key at index {0}")]
    MissingAccountKey(usize),
    #[error("Lamport delta of account {0} overflows")]
    DeltaOverflow(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Simulation error is not a primitive value: {0}")]
    UnsupportedErrorShape(String),
    #[error("Simulation carries neither an error nor logs")]
    Unparseable,
}

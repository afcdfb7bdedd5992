use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::errors::RpcError;

const JSON_RPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;

/// A JSON-RPC request. Parameters are positional and keep call-site order.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            id: REQUEST_ID,
            method: method.to_string(),
            params,
        }
    }

    /// Renders the request as the JSON body sent over the wire.
    pub fn encode(&self) -> String {
        json!({
            "jsonrpc": self.jsonrpc,
            "id": self.id,
            "method": self.method,
            "params": self.params,
        })
        .to_string()
    }
}

/// A decoded response, told apart by which of `result` or `error` it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcEnvelope {
    Success {
        result: Value,
    },
    Failure {
        code: i64,
        message: String,
        raw_body: String,
    },
}

#[derive(Deserialize)]
struct SuccessEnvelope {
    result: Value,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

impl RpcEnvelope {
    /// Decodes a response body. A body matching neither envelope shape is a
    /// `MalformedResponse` carrying the body.
    pub fn decode(method: &str, body: &str) -> Result<Self, RpcError> {
        if let Ok(SuccessEnvelope { result }) = serde_json::from_str::<SuccessEnvelope>(body) {
            return Ok(RpcEnvelope::Success { result });
        }

        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => Ok(RpcEnvelope::Failure {
                code: error.code,
                message: error.message,
                raw_body: body.to_string(),
            }),
            Err(_) => Err(RpcError::MalformedResponse {
                method: method.to_string(),
                raw_body: body.to_string(),
            }),
        }
    }

    /// Unwraps the success payload, turning a failure envelope into a `Protocol` error.
    pub fn into_result(self, method: &str) -> Result<Value, RpcError> {
        match self {
            RpcEnvelope::Success { result } => Ok(result),
            RpcEnvelope::Failure {
                code,
                message,
                raw_body,
            } => Err(RpcError::Protocol {
                method: method.to_string(),
                code,
                message,
                raw_body,
            }),
        }
    }
}

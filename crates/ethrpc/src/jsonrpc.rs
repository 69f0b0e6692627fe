//! JSON-RPC 2.0 request and response envelopes.

use {
    crate::Error,
    serde::{Deserialize, Serialize},
    serde_json::Value,
    std::fmt::{self, Display, Formatter},
};

pub const VERSION: &str = "2.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl Request {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: VERSION.to_owned(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// A response envelope. Exactly one of `result` and `error` is expected;
/// an envelope carrying neither fails to deserialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Echo of the request id. Not checked for single calls.
    #[serde(default)]
    pub id: Value,
    #[serde(flatten)]
    pub payload: Payload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Result(Value),
    Error(ErrorObject),
}

impl Response {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: Some(VERSION.to_owned()),
            id: id.into(),
            payload: Payload::Result(result),
        }
    }

    pub fn failure(id: u64, error: ErrorObject) -> Self {
        Self {
            jsonrpc: Some(VERSION.to_owned()),
            id: id.into(),
            payload: Payload::Error(error),
        }
    }

    /// Turns an error object sent by the node into [`Error::Rpc`].
    pub fn into_result(self) -> Result<Value, Error> {
        match self.payload {
            Payload::Result(value) => Ok(value),
            Payload::Error(error) => Err(Error::Rpc(error)),
        }
    }
}

/// Error reported by the node itself, as opposed to a failure to reach it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    pub const INVALID_PARAMS: i64 = -32602;
    pub const METHOD_NOT_FOUND: i64 = -32601;

    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl Display for ErrorObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)?;
        if let Some(data) = &self.data {
            write!(f, ", data: {data}")?;
        }
        Ok(())
    }
}

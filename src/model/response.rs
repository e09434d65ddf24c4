use serde::{Deserialize, Serialize};
use std::fmt;

/// Response codes carried in every envelope.
///
/// Serialized as the bare integer so clients can compare numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ResponseCode {
    Success,
    InvalidParams,
    RepoNotExist,
    QueryFailed,
}

impl ResponseCode {
    pub fn as_i32(self) -> i32 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::InvalidParams => 180001,
            ResponseCode::RepoNotExist => 180002,
            ResponseCode::QueryFailed => 180003,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }
}

impl From<ResponseCode> for i32 {
    fn from(code: ResponseCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for ResponseCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResponseCode::Success),
            180001 => Ok(ResponseCode::InvalidParams),
            180002 => Ok(ResponseCode::RepoNotExist),
            180003 => Ok(ResponseCode::QueryFailed),
            other => Err(format!("Unknown response code: {}", other)),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

pub const SUCCESS_MSG: &str = "Success";

/// Code and message of a failed request, repeated inside the envelope's `Result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    #[serde(rename = "Code")]
    pub code: ResponseCode,
    #[serde(rename = "Msg")]
    pub msg: String,
}

/// Uniform wire wrapper for every response, success or failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(rename = "Code")]
    pub code: ResponseCode,
    #[serde(rename = "Msg")]
    pub msg: String,
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "Result")]
    pub result: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            code: ResponseCode::Success,
            msg: SUCCESS_MSG.to_string(),
            success: true,
            result,
        }
    }
}

impl ResponseEnvelope<FailureDetail> {
    pub fn failure(detail: FailureDetail) -> Self {
        Self {
            code: detail.code,
            msg: detail.msg.clone(),
            success: detail.code.is_success(),
            result: detail,
        }
    }
}

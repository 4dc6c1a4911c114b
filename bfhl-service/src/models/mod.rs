//! Request parsing and response envelopes for the multiplex endpoint.

use crate::error::RequestError;
use serde::Serialize;
use serde_json::Value;

/// Uniform success envelope. `data` is omitted for the health endpoint.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    pub fn ok(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
        }
    }

    pub fn with_data(official_email: &str, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
        }
    }
}

/// The five recognized operations, each with its validated payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fibonacci(u64),
    Prime(Vec<Value>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

impl Operation {
    /// Parse a request body into an operation, failing fast on shape errors.
    ///
    /// Validation order: non-null object, exactly one key, recognized key,
    /// then the per-operation payload check with its fixed message.
    pub fn from_body(body: &Value) -> Result<Self, RequestError> {
        let map = body.as_object().ok_or(RequestError::MissingBody)?;
        if map.len() != 1 {
            return Err(RequestError::KeyCount);
        }
        let (key, value) = match map.iter().next() {
            Some(entry) => entry,
            None => return Err(RequestError::KeyCount),
        };

        match key.as_str() {
            "fibonacci" => value
                .as_u64()
                .map(Operation::Fibonacci)
                .ok_or(RequestError::InvalidPayload("Invalid fibonacci input")),
            "prime" => value
                .as_array()
                .cloned()
                .map(Operation::Prime)
                .ok_or(RequestError::InvalidPayload("Prime expects an array")),
            "lcm" => non_empty_int_array(value)
                .map(Operation::Lcm)
                .ok_or(RequestError::InvalidPayload("LCM expects a non-empty array")),
            "hcf" => non_empty_int_array(value)
                .map(Operation::Hcf)
                .ok_or(RequestError::InvalidPayload("HCF expects a non-empty array")),
            "AI" => value
                .as_str()
                .map(|s| Operation::Ai(s.to_string()))
                .ok_or(RequestError::InvalidPayload("AI expects a string")),
            _ => Err(RequestError::InvalidKey),
        }
    }
}

fn non_empty_int_array(value: &Value) -> Option<Vec<i64>> {
    let array = value.as_array()?;
    if array.is_empty() {
        return None;
    }
    array.iter().map(Value::as_i64).collect()
}

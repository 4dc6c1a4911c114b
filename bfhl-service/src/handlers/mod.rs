//! HTTP handlers for the bfhl service.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::RequestError;
use crate::models::{Operation, ResponseEnvelope};
use crate::services::numeric;
use crate::startup::AppState;

/// Liveness endpoint: always 200 with the bare success envelope.
pub async fn health_check(State(state): State<AppState>) -> Json<ResponseEnvelope> {
    Json(ResponseEnvelope::ok(&state.config.official_email))
}

/// The multiplex operation endpoint.
///
/// An unparsable or absent body extracts as `None` and takes the same path
/// as a non-object body.
pub async fn bfhl(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<ResponseEnvelope>, RequestError> {
    let Json(body) = body.ok_or(RequestError::MissingBody)?;
    let operation = Operation::from_body(&body)?;
    let data = execute(&state, operation).await?;
    Ok(Json(ResponseEnvelope::with_data(
        &state.config.official_email,
        data,
    )))
}

/// Integer value of a JSON number, whether encoded as an integer or as a
/// float with no fractional part (`2` and `2.0` are both integral).
fn as_integer(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    v.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

async fn execute(state: &AppState, operation: Operation) -> Result<Value, RequestError> {
    match operation {
        Operation::Fibonacci(n) => {
            let seq = numeric::fibonacci(n)
                .ok_or_else(|| RequestError::Computation("Fibonacci value out of range".into()))?;
            Ok(Value::from(seq))
        }
        Operation::Prime(values) => {
            let primes: Vec<Value> = values
                .iter()
                .filter_map(as_integer)
                .filter(|&n| numeric::is_prime(n))
                .map(Value::from)
                .collect();
            Ok(Value::Array(primes))
        }
        Operation::Lcm(values) => {
            let mut iter = values.into_iter().map(i64::unsigned_abs);
            let first = iter.next().ok_or(RequestError::InvalidPayload(
                "LCM expects a non-empty array",
            ))?;
            let result = iter.try_fold(first, numeric::lcm).ok_or_else(|| {
                RequestError::Computation("LCM value out of range".into())
            })?;
            Ok(Value::from(result))
        }
        Operation::Hcf(values) => {
            let mut iter = values.into_iter().map(i64::unsigned_abs);
            let first = iter.next().ok_or(RequestError::InvalidPayload(
                "HCF expects a non-empty array",
            ))?;
            Ok(Value::from(iter.fold(first, numeric::gcd)))
        }
        Operation::Ai(prompt) => {
            let text = state.text_provider.generate(&prompt).await?;
            // First whitespace-delimited word of the candidate text, or the
            // literal "Unknown" when the response had no usable text.
            let word = text
                .as_deref()
                .and_then(|t| t.split_whitespace().next())
                .unwrap_or("Unknown");
            Ok(Value::String(word.to_string()))
        }
    }
}

//! Thin JSON gateway to the game server. Normalizes transport trouble,
//! non-2xx statuses, and undecodable bodies into [`GatewayError`]; retry
//! policy belongs to callers.

use choreclash_core::RoundState;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compile-time override for the server base URL; same-origin by default.
const API_BASE: &str = match option_env!("CHORECLASH_API_BASE") {
    Some(base) => base,
    None => "",
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Decode(String),
}

/// Envelope shared by every endpoint. A rejection (`ok: false`) may carry an
/// `error` message; only successful replies are expected to carry `state`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub state: Option<RoundState>,
}

#[derive(Serialize)]
struct StartRoundBody<'a> {
    task: &'a str,
    order: &'a [String],
}

#[derive(Serialize)]
struct BidBody {
    amount: u32,
}

/// Fetch the authoritative round snapshot.
///
/// # Errors
/// Returns a [`GatewayError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_state() -> Result<ApiReply, GatewayError> {
    let response = Request::get(&endpoint("/api/state"))
        .send()
        .await
        .map_err(|err| GatewayError::Transport(err.to_string()))?;
    decode(response).await
}

/// Submit a round start for `task` with the given turn order.
///
/// # Errors
/// Returns a [`GatewayError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn start_round(task: &str, order: &[String]) -> Result<ApiReply, GatewayError> {
    post("/api/start_round", &StartRoundBody { task, order }).await
}

/// Submit the active participant's bid.
///
/// # Errors
/// Returns a [`GatewayError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn submit_bid(amount: u32) -> Result<ApiReply, GatewayError> {
    post("/api/bid", &BidBody { amount }).await
}

async fn post<B: Serialize>(path: &str, body: &B) -> Result<ApiReply, GatewayError> {
    let request = Request::post(&endpoint(path))
        .json(body)
        .map_err(|err| GatewayError::Transport(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| GatewayError::Transport(err.to_string()))?;
    decode(response).await
}

async fn decode(response: Response) -> Result<ApiReply, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::Status(response.status()));
    }
    response
        .json::<ApiReply>()
        .await
        .map_err(|err| GatewayError::Decode(err.to_string()))
}

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_envelope_decodes_both_shapes() {
        let accepted: ApiReply = serde_json::from_str(
            r#"{"ok":true,"state":{"phase":"handover","active_user":"Ann","seconds_left":3}}"#,
        )
        .unwrap();
        assert!(accepted.ok);
        assert_eq!(accepted.state.unwrap().seconds_left, 3);

        let rejected: ApiReply = serde_json::from_str(r#"{"ok":false,"error":"Already bid."}"#).unwrap();
        assert!(!rejected.ok);
        assert_eq!(rejected.error.as_deref(), Some("Already bid."));
        assert!(rejected.state.is_none());
    }

    #[test]
    fn rejections_carrying_state_still_decode() {
        // The bid endpoint attaches a snapshot to rejections; it is ignored
        // by callers but must not break decoding.
        let reply: ApiReply = serde_json::from_str(
            r#"{"ok":false,"error":"Not in bid phase.","state":{"phase":"results"}}"#,
        )
        .unwrap();
        assert!(!reply.ok);
        assert!(reply.state.is_some());
    }
}

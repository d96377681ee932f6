use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stage of a round as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    Idle,
    Handover,
    Bid,
    Results,
}

impl RoundPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Handover => "handover",
            Self::Bid => "bid",
            Self::Results => "results",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "idle" => Some(Self::Idle),
            "handover" => Some(Self::Handover),
            "bid" => Some(Self::Bid),
            "results" => Some(Self::Results),
            _ => None,
        }
    }

    /// Terminal phases end the poll loop until the next round is started.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Idle | Self::Results)
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted bid as echoed back in the results payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRow {
    pub name: String,
    pub amount: u32,
}

/// Per-participant ledger row from the server's authoritative accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLedger {
    pub name: String,
    pub points: i64,
    #[serde(default)]
    pub assigned_tasks: Vec<String>,
}

/// Authoritative round snapshot. Fetched, never stored: the server owns it.
///
/// Decoding is deliberately lenient. An unrecognized `phase` string becomes
/// `None` rather than a decode failure, a missing `seconds_left` is `0`, and
/// fields the server adds beyond this contract are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundState {
    #[serde(default, deserialize_with = "lenient_phase")]
    pub phase: Option<RoundPhase>,
    #[serde(default)]
    pub active_user: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub seconds_left: u32,
    #[serde(default)]
    pub assigned: Option<String>,
    #[serde(default)]
    pub bids: Vec<BidRow>,
    #[serde(default)]
    pub users: Vec<UserLedger>,
}

fn lenient_phase<'de, D>(deserializer: D) -> Result<Option<RoundPhase>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(RoundPhase::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_round_trips_through_wire_names() {
        for phase in [
            RoundPhase::Idle,
            RoundPhase::Handover,
            RoundPhase::Bid,
            RoundPhase::Results,
        ] {
            assert_eq!(RoundPhase::parse(phase.as_str()), Some(phase));
        }
        assert_eq!(RoundPhase::parse("paused"), None);
    }

    #[test]
    fn unknown_phase_decodes_to_none() {
        let state: RoundState =
            serde_json::from_str(r#"{"phase":"intermission","seconds_left":4}"#).unwrap();
        assert_eq!(state.phase, None);
        assert_eq!(state.seconds_left, 4);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state: RoundState = serde_json::from_str(r#"{"phase":"bid"}"#).unwrap();
        assert_eq!(state.phase, Some(RoundPhase::Bid));
        assert_eq!(state.seconds_left, 0);
        assert!(state.active_user.is_none());
        assert!(state.bids.is_empty());
        assert!(state.users.is_empty());
    }

    #[test]
    fn extra_server_fields_are_ignored() {
        let state: RoundState = serde_json::from_str(
            r#"{"phase":"handover","active_user":"Ann","order":["Ann","Bo"],"index":0}"#,
        )
        .unwrap();
        assert_eq!(state.phase, Some(RoundPhase::Handover));
        assert_eq!(state.active_user.as_deref(), Some("Ann"));
    }
}

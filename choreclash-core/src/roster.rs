use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::ValidationError;
use crate::round::UserLedger;

/// Points every participant holds until the server's ledger says otherwise.
pub const STARTING_POINTS: i64 = 100;

/// A roster entry. `points` stays `None` until the server has published an
/// authoritative ledger for this participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub points: Option<i64>,
    pub task_count: usize,
}

impl Participant {
    #[must_use]
    pub fn display_points(&self) -> i64 {
        self.points.unwrap_or(STARTING_POINTS)
    }
}

/// Pre-round draft state: who plays, and which tasks are queued for auction.
///
/// Tasks leave the front of the queue when a round starts and come back to
/// the front only if the start request fails. Once results arrive the
/// participant list is replaced wholesale by the server's ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRoster {
    participants: Vec<Participant>,
    tasks: VecDeque<String>,
}

impl DraftRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant by raw input. Input is trimmed; empty and
    /// case-insensitive duplicate names are rejected.
    ///
    /// # Errors
    /// Returns the validation failure to surface inline.
    pub fn add_participant(&mut self, raw: &str) -> Result<(), ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self
            .participants
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name))
        {
            return Err(ValidationError::DuplicateName);
        }
        self.participants.push(Participant {
            name: name.to_string(),
            points: None,
            task_count: 0,
        });
        Ok(())
    }

    /// Queue a task for auction. Input is trimmed; empty tasks are rejected.
    ///
    /// # Errors
    /// Returns the validation failure to surface inline.
    pub fn add_task(&mut self, raw: &str) -> Result<(), ValidationError> {
        let task = raw.trim();
        if task.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        self.tasks.push_back(task.to_string());
        Ok(())
    }

    /// Dequeue the next task to auction.
    pub fn next_task(&mut self) -> Option<String> {
        self.tasks.pop_front()
    }

    /// Put a task back at the front of the queue after a failed round start.
    pub fn restore_front(&mut self, task: String) {
        self.tasks.push_front(task);
    }

    /// Replace the participant list with the server's authoritative ledger.
    pub fn adopt_ledger(&mut self, users: &[UserLedger]) {
        self.participants = users
            .iter()
            .map(|user| Participant {
                name: user.name.clone(),
                points: Some(user.points),
                task_count: user.assigned_tasks.len(),
            })
            .collect();
    }

    /// Turn order submitted with a round start.
    #[must_use]
    pub fn order(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// A round can start once there is someone to bid and something to bid on.
    #[must_use]
    pub fn can_start(&self) -> bool {
        !self.participants.is_empty() && !self.tasks.is_empty()
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn tasks(&self) -> &VecDeque<String> {
        &self.tasks
    }
}

/// Parse a raw bid entry. Anything that is not a base-10 integer ≥ 0 is a
/// validation failure; nothing is sent to the server for invalid input.
///
/// # Errors
/// Returns [`ValidationError::InvalidBid`] for non-numeric or negative input.
pub fn parse_bid(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|amount| *amount >= 0)
        .and_then(|amount| u32::try_from(amount).ok())
        .ok_or(ValidationError::InvalidBid)
}

use crate::round::{BidRow, RoundState};

/// Shown as the assignee when nobody bid and the task went unassigned.
pub const UNASSIGNED_LABEL: &str = "No one";

/// One row of the post-round point ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerRow {
    pub name: String,
    pub points: i64,
    pub task_count: usize,
}

/// View-model for the results screen and the exported summary. A pure
/// projection of a results-phase [`RoundState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsSummary {
    pub task: String,
    pub assignee: String,
    pub bids: Vec<BidRow>,
    pub ledger: Vec<LedgerRow>,
}

/// Project a results payload into what the results screen renders.
#[must_use]
pub fn results_summary(state: &RoundState) -> ResultsSummary {
    ResultsSummary {
        task: state.task.clone().unwrap_or_default(),
        assignee: state
            .assigned
            .clone()
            .unwrap_or_else(|| UNASSIGNED_LABEL.to_string()),
        bids: state.bids.clone(),
        ledger: state
            .users
            .iter()
            .map(|user| LedgerRow {
                name: user.name.clone(),
                points: user.points,
                task_count: user.assigned_tasks.len(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{RoundPhase, UserLedger};

    #[test]
    fn summary_projects_every_section() {
        let state = RoundState {
            phase: Some(RoundPhase::Results),
            task: Some("Dishes".into()),
            assigned: Some("Bo".into()),
            bids: vec![
                BidRow {
                    name: "Ann".into(),
                    amount: 5,
                },
                BidRow {
                    name: "Bo".into(),
                    amount: 3,
                },
            ],
            users: vec![
                UserLedger {
                    name: "Ann".into(),
                    points: 95,
                    assigned_tasks: vec![],
                },
                UserLedger {
                    name: "Bo".into(),
                    points: 97,
                    assigned_tasks: vec!["Dishes".into()],
                },
            ],
            ..RoundState::default()
        };
        let summary = results_summary(&state);
        assert_eq!(summary.task, "Dishes");
        assert_eq!(summary.assignee, "Bo");
        assert_eq!(summary.bids.len(), 2);
        assert_eq!(summary.ledger.len(), 2);
        assert_eq!(summary.ledger[1].task_count, 1);
    }

    #[test]
    fn nobody_assigned_renders_the_fallback_label() {
        let state = RoundState {
            phase: Some(RoundPhase::Results),
            task: Some("Dishes".into()),
            ..RoundState::default()
        };
        assert_eq!(results_summary(&state).assignee, UNASSIGNED_LABEL);
    }
}

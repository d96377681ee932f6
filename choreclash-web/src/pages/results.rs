use choreclash_core::ResultsSummary;
use yew::prelude::*;

use super::{inline_error, on_click};

#[derive(Properties, Clone, PartialEq)]
pub struct ResultsPageProps {
    pub summary: ResultsSummary,
    pub can_continue: bool,
    pub export_error: Option<AttrValue>,
    pub on_next_round: Callback<()>,
    pub on_home: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(ResultsPage)]
pub fn results_page(props: &ResultsPageProps) -> Html {
    let summary = &props.summary;

    html! {
        <section id="results-section" class="page page-results">
            <h1>{ "Round results" }</h1>
            <p class="result-task">{ summary.task.clone() }</p>

            <div class="assignment decision-pop">
                <span class="assignment-label">{ "Assigned to" }</span>
                <span class="assignee-name">{ summary.assignee.clone() }</span>
            </div>

            <table class="bids-table">
                <thead>
                    <tr><th>{ "Participant" }</th><th>{ "Bid" }</th></tr>
                </thead>
                <tbody>
                    { for summary.bids.iter().map(|bid| html! {
                        <tr>
                            <td>{ bid.name.clone() }</td>
                            <td>{ bid.amount }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <div class="panel ledger-panel">
                <h2>{ "Points" }</h2>
                <ul class="list ledger-list">
                    { for summary.ledger.iter().map(|row| html! {
                        <li class="list-item">
                            <span class="participant-name">{ row.name.clone() }</span>
                            <span class="participant-tasks">
                                { format!("Tasks: {}", row.task_count) }
                            </span>
                            <span class="participant-points">{ format!("{} pts", row.points) }</span>
                        </li>
                    }) }
                </ul>
            </div>

            { inline_error(props.export_error.as_ref()) }
            <div class="button-row">
                <button
                    class="btn btn-primary"
                    disabled={!props.can_continue}
                    onclick={on_click(&props.on_next_round)}
                >
                    { "Next round" }
                </button>
                <button class="btn btn-secondary" onclick={on_click(&props.on_home)}>
                    { "Back to home" }
                </button>
                <button class="btn" onclick={on_click(&props.on_export)}>
                    { "Export summary" }
                </button>
            </div>
        </section>
    }
}

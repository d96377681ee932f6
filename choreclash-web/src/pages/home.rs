use choreclash_core::DraftRoster;
use yew::prelude::*;

use super::{inline_error, on_click, on_enter};

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub roster: DraftRoster,
    pub name_entry: AttrValue,
    pub task_entry: AttrValue,
    pub name_error: Option<AttrValue>,
    pub task_error: Option<AttrValue>,
    pub start_error: Option<AttrValue>,
    pub on_name_input: Callback<InputEvent>,
    pub on_task_input: Callback<InputEvent>,
    pub on_add_user: Callback<()>,
    pub on_add_task: Callback<()>,
    pub on_start: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let can_start = props.roster.can_start();

    html! {
        <section class="page page-home">
            <h1>{ "Choreclash" }</h1>
            <p class="tagline">{ "Bid your points, dodge your chores" }</p>

            <div class="panel roster-panel">
                <h2>{ "Participants" }</h2>
                <div class="entry-row">
                    <input
                        id="participant-entry"
                        placeholder="Add a participant"
                        value={props.name_entry.clone()}
                        oninput={props.on_name_input.clone()}
                        onkeydown={on_enter(&props.on_add_user)}
                    />
                    <button class="btn" onclick={on_click(&props.on_add_user)}>{ "Add" }</button>
                </div>
                { inline_error(props.name_error.as_ref()) }
                { participant_list(&props.roster) }
            </div>

            <div class="panel queue-panel">
                <h2>{ "Task queue" }</h2>
                <div class="entry-row">
                    <input
                        id="task-entry"
                        placeholder="Add a task"
                        value={props.task_entry.clone()}
                        oninput={props.on_task_input.clone()}
                        onkeydown={on_enter(&props.on_add_task)}
                    />
                    <button class="btn" onclick={on_click(&props.on_add_task)}>{ "Add" }</button>
                </div>
                { inline_error(props.task_error.as_ref()) }
                { task_list(&props.roster) }
            </div>

            { inline_error(props.start_error.as_ref()) }
            <button
                class="btn btn-primary start-round"
                disabled={!can_start}
                onclick={on_click(&props.on_start)}
            >
                { "Start round" }
            </button>
        </section>
    }
}

fn participant_list(roster: &DraftRoster) -> Html {
    if roster.participants().is_empty() {
        return html! { <div class="empty-state">{ "No users yet" }</div> };
    }
    html! {
        <ul class="list participant-list">
            { for roster.participants().iter().map(|participant| html! {
                <li class="list-item">
                    <span class="participant-name">{ participant.name.clone() }</span>
                    <span class="participant-points">
                        { format!("{} pts", participant.display_points()) }
                    </span>
                </li>
            }) }
        </ul>
    }
}

fn task_list(roster: &DraftRoster) -> Html {
    if roster.tasks().is_empty() {
        return html! { <div class="empty-state">{ "No tasks yet" }</div> };
    }
    html! {
        <ul class="list task-list">
            { for roster.tasks().iter().map(|task| html! {
                <li class="list-item">{ task.clone() }</li>
            }) }
        </ul>
    }
}

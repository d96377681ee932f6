use choreclash_core::{BidRow, DraftRoster, LedgerRow, ResultsSummary};
use choreclash_web::components::countdown_ring::{CountdownRing, CountdownRingProps};
use choreclash_web::countdown::CountdownView;
use choreclash_web::pages::{
    bid::{BidPage, BidPageProps},
    handover::{HandoverPage, HandoverPageProps},
    home::{HomePage, HomePageProps},
    results::{ResultsPage, ResultsPageProps},
};
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn seeded_roster() -> DraftRoster {
    let mut roster = DraftRoster::new();
    roster.add_participant("Ann").unwrap();
    roster.add_participant("Bo").unwrap();
    roster.add_task("Dishes").unwrap();
    roster
}

fn home_props(roster: DraftRoster) -> HomePageProps {
    HomePageProps {
        roster,
        name_entry: AttrValue::default(),
        task_entry: AttrValue::default(),
        name_error: None,
        task_error: None,
        start_error: None,
        on_name_input: Callback::noop(),
        on_task_input: Callback::noop(),
        on_add_user: Callback::noop(),
        on_add_task: Callback::noop(),
        on_start: Callback::noop(),
    }
}

#[test]
fn home_page_shows_empty_states_and_gates_start() {
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(home_props(DraftRoster::new())).render());
    assert!(html.contains("No users yet"));
    assert!(html.contains("No tasks yet"));
    assert!(html.contains("disabled"));
}

#[test]
fn home_page_lists_roster_with_starting_points() {
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(home_props(seeded_roster())).render());
    assert!(html.contains("Ann"));
    assert!(html.contains("Bo"));
    assert!(html.contains("100 pts"));
    assert!(html.contains("Dishes"));
    assert!(!html.contains("No users yet"));
}

#[test]
fn home_page_surfaces_inline_errors() {
    let mut props = home_props(seeded_roster());
    props.name_error = Some(AttrValue::from("User already exists"));
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("User already exists"));
}

#[test]
fn handover_page_names_the_recipient_and_counts_down() {
    let props = HandoverPageProps {
        active_user: AttrValue::from("Ann"),
        countdown: CountdownView {
            seconds_left: 3,
            total: 6,
            pulse: false,
            running: true,
        },
    };
    let html = block_on(LocalServerRenderer::<HandoverPage>::with_props(props).render());
    assert!(html.contains("Pass the device"));
    assert!(html.contains("Ann"));
    assert!(html.contains("3 seconds left"));
}

#[test]
fn bid_page_shows_task_subtitle_and_error() {
    let props = BidPageProps {
        task: AttrValue::from("Dishes"),
        active_user: AttrValue::from("Bo"),
        countdown: CountdownView {
            seconds_left: 11,
            total: 11,
            pulse: false,
            running: true,
        },
        bid_entry: AttrValue::from("-1"),
        bid_error: Some(AttrValue::from("Amount must be ≥ 0")),
        on_bid_input: Callback::noop(),
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BidPage>::with_props(props).render());
    assert!(html.contains("Dishes"));
    assert!(html.contains("Bo, place your bid"));
    assert!(html.contains("Amount must be ≥ 0"));
}

#[test]
fn bid_page_falls_back_to_a_generic_bidder_label() {
    let props = BidPageProps {
        task: AttrValue::from("Dishes"),
        active_user: AttrValue::default(),
        countdown: CountdownView::default(),
        bid_entry: AttrValue::default(),
        bid_error: None,
        on_bid_input: Callback::noop(),
        on_submit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BidPage>::with_props(props).render());
    assert!(html.contains("Player, place your bid"));
}

#[test]
fn results_page_renders_assignee_bids_and_ledger() {
    let props = ResultsPageProps {
        summary: ResultsSummary {
            task: "Dishes".into(),
            assignee: "Bo".into(),
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
            ledger: vec![
                LedgerRow {
                    name: "Ann".into(),
                    points: 95,
                    task_count: 0,
                },
                LedgerRow {
                    name: "Bo".into(),
                    points: 97,
                    task_count: 1,
                },
            ],
        },
        can_continue: false,
        export_error: None,
        on_next_round: Callback::noop(),
        on_home: Callback::noop(),
        on_export: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultsPage>::with_props(props).render());
    assert!(html.contains("results-section"));
    assert!(html.contains("Bo"));
    assert_eq!(html.matches("<tr>").count(), 3); // header + two bid rows
    assert!(html.contains("Tasks: 1"));
    assert!(html.contains("95 pts"));
    assert!(html.contains("97 pts"));
    // No queued task left, so the next round stays gated.
    assert!(html.contains("disabled"));
}

#[test]
fn countdown_ring_marks_urgency_and_stops() {
    let urgent = CountdownRingProps {
        view: CountdownView {
            seconds_left: 2,
            total: 11,
            pulse: true,
            running: true,
        },
    };
    let html = block_on(LocalServerRenderer::<CountdownRing>::with_props(urgent).render());
    assert!(html.contains("urgent"));
    assert!(html.contains("pulse"));

    let stopped = CountdownRingProps {
        view: CountdownView::default(),
    };
    let html = block_on(LocalServerRenderer::<CountdownRing>::with_props(stopped).render());
    assert!(html.contains("stopped"));
    assert!(!html.contains("urgent"));
}

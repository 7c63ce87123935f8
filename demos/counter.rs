//! Counter Editing Session
//!
//! Walks a counter document through provisional edits, checkpoints,
//! undo/redo, a history reset and a checkpoint/resume cycle.
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example counter

use rewind::checkpoint::HistoryCheckpoint;
use rewind::core::{Action, HistoryAction, HistoryState, Snapshot};
use rewind::enhancer::{enhance, HistoryStore};
use rewind::options::HistoryOptions;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Counter {
    count: i64,
}

#[derive(Clone, Debug, Default)]
enum CounterAction {
    #[default]
    Init,
    Increment,
    Load(i64),
}

impl Action for CounterAction {
    fn action_type(&self) -> &str {
        match self {
            Self::Init => "INIT",
            Self::Increment => "INCREMENT",
            Self::Load(_) => "LOAD",
        }
    }
}

fn counter(state: Option<&Snapshot<Counter>>, action: &CounterAction) -> Snapshot<Counter> {
    match (state, action) {
        (None, _) => Snapshot::new(Counter { count: 0 }),
        (Some(state), CounterAction::Increment) => Snapshot::new(Counter {
            count: state.count + 1,
        }),
        (Some(state), CounterAction::Load(count)) if state.count != *count => {
            Snapshot::new(Counter { count: *count })
        }
        (Some(state), _) => state.clone(),
    }
}

fn describe(label: &str, state: &HistoryState<Counter>) {
    let past: Vec<i64> = state.past().iter().map(|s| s.count).collect();
    let future: Vec<i64> = state.future().iter().map(|s| s.count).collect();
    println!(
        "{label:<28} past={past:?} present={} future={future:?} pending={}",
        state.present().count,
        state.has_pending_edit()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = HistoryOptions::from_json(r#"{ "resetTypes": ["LOAD"] }"#)?;
    let mut store = HistoryStore::new(enhance::<Counter, CounterAction, _>(counter, options));
    describe("init", store.state());

    store.dispatch(CounterAction::Increment);
    describe("increment", store.state());

    store.dispatch(HistoryAction::CreateUndoLevel);
    describe("checkpoint", store.state());

    let changed = store.create_undo_level();
    println!("{:<28} changed={changed}", "checkpoint again");

    store.dispatch(CounterAction::Increment);
    describe("increment (provisional)", store.state());

    store.undo();
    describe("undo (discards provisional)", store.state());

    store.undo();
    describe("undo", store.state());

    store.redo();
    describe("redo", store.state());

    let checkpoint = store.checkpoint();
    let bytes = checkpoint.to_binary()?;
    println!("{:<28} {} bytes, id {}", "saved checkpoint", bytes.len(), checkpoint.id);

    store.dispatch(CounterAction::Load(10));
    describe("load (reset)", store.state());

    let saved = HistoryCheckpoint::<Counter>::from_binary(&bytes)?;
    let options = store.reducer().options().clone();
    let reducer = enhance::<Counter, CounterAction, _>(counter, options);
    let resumed = HistoryStore::restore(reducer, saved)?;
    describe("resumed", resumed.state());

    Ok(())
}

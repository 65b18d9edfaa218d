//! Non-interactive replay of intents.

use anyhow::{Context, Result};
use rewind_tictactoe::{EngineError, GameEngine, Intent};
use tracing::{info, instrument};

/// Parses every input as an [`Intent`], failing on the first bad one.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn parse_intents<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Intent>, EngineError> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Replays `inputs` on a fresh game and renders the final view.
///
/// Output is the plain-text view, or pretty JSON when `json` is set.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn run_replay<S: AsRef<str>>(inputs: &[S], json: bool) -> Result<String> {
    let intents = parse_intents(inputs)?;
    let engine = GameEngine::replay(intents.iter().copied())
        .context("Replay stopped on an invalid jump")?;

    info!(
        history_len = engine.history_len(),
        step = engine.current_step(),
        "Replay finished"
    );

    let view = engine.view();
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(view.to_string())
    }
}

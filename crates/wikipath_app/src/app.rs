use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context};
use wikipath_core::{update, AppState, Msg};
use wikipath_engine::SearchConfig;

use crate::cli::Cli;
use crate::effects::EffectRunner;
use crate::render;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SearchConfig::default();
    if !cli.endpoints.is_empty() {
        config.endpoints = cli.endpoints.clone();
    }
    let runner = EffectRunner::new(config).map_err(|err| anyhow!("engine start failed: {err}"))?;

    if cli.check {
        return run_check(&runner);
    }

    match (cli.start, cli.end) {
        (Some(start), Some(end)) => run_once(&runner, start, end),
        _ => run_interactive(&runner),
    }
}

fn run_check(runner: &EffectRunner) -> anyhow::Result<()> {
    let statuses = runner.probe();
    render::endpoint_health(&statuses);
    if statuses.iter().any(|status| status.healthy) {
        Ok(())
    } else {
        bail!("no configured endpoint is reachable")
    }
}

/// One-shot mode: both topics came from the command line.
fn run_once(runner: &EffectRunner, start: String, end: String) -> anyhow::Result<()> {
    let state = AppState::new();
    let (state, _) = update(state, Msg::StartTopicChanged(start));
    let (state, _) = update(state, Msg::EndTopicChanged(end));
    if !state.can_submit() {
        bail!("both a starting and a target topic are required");
    }
    let state = submit_and_wait(runner, state);
    render::results(&state.view());
    Ok(())
}

/// Interactive mode: prompt for topic pairs until end of input.
fn run_interactive(runner: &EffectRunner) -> anyhow::Result<()> {
    render::banner();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = AppState::new();

    loop {
        let Some(start) = prompt(&mut lines, "Starting article topic")? else {
            return Ok(());
        };
        let Some(end) = prompt(&mut lines, "Target article topic")? else {
            return Ok(());
        };

        let (next, _) = update(state, Msg::StartTopicChanged(start));
        let (next, _) = update(next, Msg::EndTopicChanged(end));
        if !next.can_submit() {
            println!("Both topics are required.");
            state = next;
            continue;
        }

        state = submit_and_wait(runner, next);
        render::results(&state.view());
        println!();
    }
}

/// Drives one search to settlement. The submit is a no-op if the state
/// refuses it, in which case no effect is run and nothing is awaited.
fn submit_and_wait(runner: &EffectRunner, state: AppState) -> AppState {
    let (state, effects) = update(state, Msg::SubmitClicked);
    if effects.is_empty() {
        return state;
    }
    runner.run(effects);
    render::in_flight();
    let msg = runner.wait_for_settlement();
    let (state, _) = update(state, msg);
    state
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("flush prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("read topic input")?)),
        None => Ok(None),
    }
}

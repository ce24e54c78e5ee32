//! Offline decision tool
//!
//! Reads `{"seat": 1, "turn": {...}}` from a JSON file and prints the try the agent
//! would send, as a JSON line.

use kriegspiel_agent::context::TurnSnapshot;
use kriegspiel_agent::core::PlayerId;
use kriegspiel_agent::player::{AgentConfig, KriegspielAgent};
use serde::Deserialize;
use std::env;
use std::fs::File;

#[derive(Deserialize)]
struct TurnRequest {
    seat: PlayerId,
    turn: TurnSnapshot,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: choose_move <request.json>");
        std::process::exit(1);
    }

    let file = File::open(&args[1])?;
    let request: TurnRequest = serde_json::from_reader(file)?;

    let mut agent = KriegspielAgent::from_config(&AgentConfig::load_or_default());
    agent.init(request.seat);
    let decision = agent.select_action(&request.turn)?;

    let output = serde_json::json!({
        "seat": request.seat,
        "kind": decision.kind,
        "move": decision.action,
    });
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}

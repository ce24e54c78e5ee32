pub mod config;
pub mod kriegspiel;

pub use config::AgentConfig;
pub use kriegspiel::{Decision, KriegspielAgent, TurnKind};

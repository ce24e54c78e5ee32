pub mod ai;
pub mod controller;

pub use ai::{AgentConfig, Decision, KriegspielAgent, TurnKind};
pub use controller::PlayerController;

use crate::core::{Action, Move, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the host engine exposes to an agent on its turn.
pub trait GameContext {
    type Action: Action + Clone;

    /// Pseudo-legal tries for the side to move.
    fn moves(&self) -> Vec<Self::Action>;
    /// Referee notes addressed to `seat`.
    fn notes(&self, seat: PlayerId) -> Vec<String>;
    /// Turn-scoped counter for `seat` (pawn tries available).
    fn score(&self, seat: PlayerId) -> i32;
}

/// 一手分の局面情報 (what the referee sends for one decision)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub moves: Vec<Move>,
    #[serde(default, with = "crate::core::serialization")]
    pub notes: HashMap<PlayerId, Vec<String>>,
    #[serde(default, with = "crate::core::serialization")]
    pub scores: HashMap<PlayerId, i32>,
}

impl TurnSnapshot {
    pub fn new(moves: Vec<Move>) -> Self {
        TurnSnapshot {
            moves,
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, seat: PlayerId, notes: &[&str]) -> Self {
        self.notes
            .insert(seat, notes.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_score(mut self, seat: PlayerId, score: i32) -> Self {
        self.scores.insert(seat, score);
        self
    }
}

impl GameContext for TurnSnapshot {
    type Action = Move;

    fn moves(&self) -> Vec<Move> {
        self.moves.clone()
    }

    fn notes(&self, seat: PlayerId) -> Vec<String> {
        self.notes.get(&seat).cloned().unwrap_or_default()
    }

    fn score(&self, seat: PlayerId) -> i32 {
        self.scores.get(&seat).copied().unwrap_or(0)
    }
}

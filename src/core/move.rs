use super::piece::PieceKind;
use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PROMOTE: &str = "Promote";
pub const MOVE: &str = "Move";

/// A candidate try as the referee's engine hands it out.
pub trait Action {
    /// Short action label; promotion-only turns are recognised by `"Promote"`.
    fn description_short(&self) -> &str;
    /// Piece type encoded by a promotion action.
    fn what(&self) -> Option<PieceKind>;
    fn from(&self) -> Option<Position>;
    fn to(&self) -> Position;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Normal { from: Position, to: Position },
    /// 成り (the pawn already stands on `at`; only the piece type is chosen)
    Promote { at: Position, kind: PieceKind },
}

impl Action for Move {
    fn description_short(&self) -> &str {
        match self {
            Move::Normal { .. } => MOVE,
            Move::Promote { .. } => PROMOTE,
        }
    }

    fn what(&self) -> Option<PieceKind> {
        match self {
            Move::Normal { .. } => None,
            Move::Promote { kind, .. } => Some(*kind),
        }
    }

    fn from(&self) -> Option<Position> {
        match self {
            Move::Normal { from, .. } => Some(*from),
            Move::Promote { .. } => None,
        }
    }

    fn to(&self) -> Position {
        match self {
            Move::Normal { to, .. } => *to,
            Move::Promote { at, .. } => *at,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Normal { from, to } => write!(f, "{} -> {}", from, to),
            Move::Promote { at, kind } => write!(f, "{}={}", at, kind.display_char()),
        }
    }
}

//! Referee announcements as they arrive in a seat's note list.
//!
//! After a rejected try the only note is [`ILLEGAL_MOVE`]. After a legal move the notes
//! describe captures (square, pawn or piece) and the type of check given, if any.

use crate::core::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ILLEGAL_MOVE: &str = "Illegal move";

/// True when the previous try was rejected by the referee.
pub fn is_illegal_move(notes: &[String]) -> bool {
    notes.first().is_some_and(|n| n == ILLEGAL_MOVE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    Rank,
    File,
    LongDiagonal,
    ShortDiagonal,
    Knight,
}

impl CheckKind {
    fn label(&self) -> &'static str {
        match self {
            CheckKind::Rank => "Rank",
            CheckKind::File => "File",
            CheckKind::LongDiagonal => "Long diagonal",
            CheckKind::ShortDiagonal => "Short diagonal",
            CheckKind::Knight => "Knight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefereeNote {
    IllegalMove,
    Capture { at: Position, pawn: bool },
    Check(CheckKind),
    Other(String),
}

impl RefereeNote {
    /// Unrecognised wording is kept verbatim as `Other`.
    pub fn parse(note: &str) -> RefereeNote {
        let note = note.trim();
        if note == ILLEGAL_MOVE {
            return RefereeNote::IllegalMove;
        }

        for (prefix, pawn) in [("Pawn captured at ", true), ("Piece captured at ", false)] {
            if let Some(square) = note.strip_prefix(prefix) {
                if let Ok(at) = square.parse::<Position>() {
                    return RefereeNote::Capture { at, pawn };
                }
            }
        }

        if let Some(kind) = note.strip_suffix(" check") {
            let kind = match kind {
                "Rank" => Some(CheckKind::Rank),
                "File" => Some(CheckKind::File),
                "Long diagonal" => Some(CheckKind::LongDiagonal),
                "Short diagonal" => Some(CheckKind::ShortDiagonal),
                "Knight" => Some(CheckKind::Knight),
                _ => None,
            };
            if let Some(kind) = kind {
                return RefereeNote::Check(kind);
            }
        }

        RefereeNote::Other(note.to_string())
    }

    pub fn parse_all(notes: &[String]) -> Vec<RefereeNote> {
        notes.iter().map(|n| RefereeNote::parse(n)).collect()
    }
}

impl fmt::Display for RefereeNote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RefereeNote::IllegalMove => write!(f, "{}", ILLEGAL_MOVE),
            RefereeNote::Capture { at, pawn: true } => write!(f, "Pawn captured at {}", at),
            RefereeNote::Capture { at, pawn: false } => write!(f, "Piece captured at {}", at),
            RefereeNote::Check(kind) => write!(f, "{} check", kind.label()),
            RefereeNote::Other(s) => write!(f, "{}", s),
        }
    }
}

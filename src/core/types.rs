use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 対局人数 (Kriegspiel is strictly two-seat)
pub const PLAYERS: u8 = 2;

/// 盤面サイズ
pub const BOARD_SIZE: usize = 8;

/// プレイヤーID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    Player1, // 白
    Player2, // 黒
}

impl PlayerId {
    pub fn from_index(index: u8) -> Option<PlayerId> {
        match index {
            1 => Some(PlayerId::Player1),
            2 => Some(PlayerId::Player2),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    /// Complement seat: `PLAYERS - seat + 1`.
    pub fn opponent(self) -> PlayerId {
        match PlayerId::from_index(PLAYERS - self.index() + 1) {
            Some(p) => p,
            None => unreachable!("seat complement stays within 1..=PLAYERS"),
        }
    }

    pub fn is_white(self) -> bool {
        self == PlayerId::Player1
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        PlayerId::from_index(index).ok_or_else(|| format!("invalid seat {}", index))
    }
}

impl From<PlayerId> for u8 {
    fn from(p: PlayerId) -> u8 {
        p.index()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.index())
    }
}

/// 盤面座標 (0-indexed, x = file a..h, y = rank 1..8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Wire shape of a square before the board bounds are checked.
#[derive(Deserialize)]
struct RawPosition {
    x: usize,
    y: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let pos = Position::new(raw.x, raw.y);
        if pos.on_board() {
            Ok(pos)
        } else {
            Err(format!("square off the board: {}", pos))
        }
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn on_board(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.on_board() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let file = (b'a' + self.x as u8) as char;
        write!(f, "{}{}", file, self.y + 1)
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            anyhow::bail!("bad square: {:?}", s);
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..b'a' + BOARD_SIZE as u8).contains(&file)
            || !(b'1'..b'1' + BOARD_SIZE as u8).contains(&rank)
        {
            anyhow::bail!("square off the board: {:?}", s);
        }
        Ok(Position::new((file - b'a') as usize, (rank - b'1') as usize))
    }
}

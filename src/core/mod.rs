pub mod r#move;
pub mod piece;
pub mod serialization;
pub mod types;

pub use piece::PieceKind;
pub use r#move::{Action, Move};
pub use types::{PlayerId, Position, PLAYERS};

use crate::core::{Move, PlayerId};
use crate::player::TurnKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One try sent to the referee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryRecord {
    /// 1-based; illegal-move retries count as separate tries.
    pub try_no: usize,
    pub kind: TurnKind,
    /// Notes addressed to us when the try was chosen.
    pub notes: Vec<String>,
    pub mv: Move,
}

/// 棋譜 (the game as seen from our seat; no board, only what we were told and what we tried)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub agent_name: String,
    pub seat: Option<PlayerId>,
    pub started_at: String,
    pub tries: Vec<TryRecord>,
    pub winner: Option<PlayerId>,
    pub reason: Option<String>,
}

impl GameRecord {
    pub fn new(agent_name: &str) -> Self {
        GameRecord {
            agent_name: agent_name.to_string(),
            seat: None,
            started_at: chrono::Local::now().to_rfc3339(),
            tries: Vec::new(),
            winner: None,
            reason: None,
        }
    }

    pub fn push(&mut self, kind: TurnKind, notes: Vec<String>, mv: Move) {
        self.tries.push(TryRecord {
            try_no: self.tries.len() + 1,
            kind,
            notes,
            mv,
        });
    }

    pub fn finish(&mut self, winner: Option<PlayerId>, reason: &str) {
        self.winner = winner;
        self.reason = Some(reason.to_string());
    }

    /// Writes `<dir>/game_<timestamp>_p<seat>.json` (with a `_<n>` suffix if that
    /// name is taken) and returns its path.
    pub fn save(&self, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let stem = format!(
            "game_{}{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            self.seat
                .map(|s| format!("_p{}", s.index()))
                .unwrap_or_default()
        );
        let mut filename = dir.join(format!("{}.json", stem));
        let mut n = 1;
        while filename.exists() {
            n += 1;
            filename = dir.join(format!("{}_{}.json", stem, n));
        }

        let file = std::fs::File::create(&filename)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(filename)
    }

    /// Like [`save`](Self::save), but a failure is only logged.
    pub fn save_or_log(&self, dir: impl AsRef<Path>) -> Option<PathBuf> {
        match self.save(dir) {
            Ok(path) => {
                log::info!("Saved record to {}", path.display());
                Some(path)
            }
            Err(e) => {
                log::error!("Failed to save record: {:#}", e);
                None
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let record = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn tries_are_numbered_from_one() {
        let mut record = GameRecord::new("Agent");
        let mv = Move::Normal {
            from: Position::new(6, 0),
            to: Position::new(5, 2),
        };
        record.push(TurnKind::Regular, vec![], mv.clone());
        record.push(
            TurnKind::RetryAfterIllegal,
            vec!["Illegal move".to_string()],
            mv,
        );
        assert_eq!(record.tries[0].try_no, 1);
        assert_eq!(record.tries[1].try_no, 2);
        assert_eq!(record.tries[1].kind, TurnKind::RetryAfterIllegal);
    }

    #[test]
    fn saved_record_can_be_read_back() {
        let dir = std::env::temp_dir().join(format!("kriegspiel-kifu-{}", std::process::id()));
        let mut record = GameRecord::new("Agent");
        record.seat = Some(PlayerId::Player2);
        record.push(
            TurnKind::Promotion,
            vec![],
            Move::Promote {
                at: Position::new(0, 0),
                kind: crate::core::PieceKind::Queen,
            },
        );
        record.finish(Some(PlayerId::Player1), "Checkmate");

        let path = record.save(&dir).unwrap();
        let loaded = GameRecord::load(&path).unwrap();
        assert_eq!(loaded.seat, Some(PlayerId::Player2));
        assert_eq!(loaded.tries.len(), 1);
        assert_eq!(loaded.winner, Some(PlayerId::Player1));
        assert_eq!(loaded.reason.as_deref(), Some("Checkmate"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn records_saved_in_the_same_second_do_not_overwrite() {
        let dir = std::env::temp_dir().join(format!("kriegspiel-kifu-dup-{}", std::process::id()));
        let mut record = GameRecord::new("Agent");
        record.seat = Some(PlayerId::Player1);

        let first = record.save(&dir).unwrap();
        let second = record.save(&dir).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
        assert!(first
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains("_p1")));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failed_save_is_reported_not_raised() {
        // a plain file where the record directory should be
        let blocker = std::env::temp_dir().join(format!("kriegspiel-kifu-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let record = GameRecord::new("Agent");
        assert!(record.save(&blocker).is_err());
        assert_eq!(record.save_or_log(&blocker), None);

        std::fs::remove_file(&blocker).ok();
    }
}

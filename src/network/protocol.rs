use crate::context::TurnSnapshot;
use crate::core::{Move, PlayerId};
use serde::{Deserialize, Serialize};

/// One JSON object per line in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NetMessage {
    // Agent -> Referee
    Join {
        name: String,
    },
    MakeMove {
        mv: Move,
    },

    // Referee -> Agent
    Welcome {
        seat: PlayerId,
    },
    Turn {
        turn: TurnSnapshot,
    },
    GameOver {
        winner: Option<PlayerId>,
        reason: String,
    },
    Error {
        message: String,
    },
}

impl NetMessage {
    pub fn to_line(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)? + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referee_messages_parse() {
        let msg: NetMessage = serde_json::from_str(r#"{"Welcome": {"seat": 2}}"#).unwrap();
        assert!(matches!(
            msg,
            NetMessage::Welcome {
                seat: PlayerId::Player2
            }
        ));

        let msg: NetMessage =
            serde_json::from_str(r#"{"GameOver": {"winner": null, "reason": "Stalemate"}}"#)
                .unwrap();
        assert!(matches!(msg, NetMessage::GameOver { winner: None, .. }));
    }

    #[test]
    fn lines_are_newline_terminated() {
        let line = NetMessage::Join {
            name: "A".to_string(),
        }
        .to_line()
        .unwrap();
        assert_eq!(line, "{\"Join\":{\"name\":\"A\"}}\n");
    }
}

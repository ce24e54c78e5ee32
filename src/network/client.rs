use crate::context::GameContext;
use crate::core::{Move, PlayerId};
use crate::game::GameRecord;
use crate::network::protocol::NetMessage;
use crate::player::{PlayerController, TurnKind};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

pub struct NetworkClient<R, W> {
    lines: Lines<BufReader<R>>,
    writer: W,
}

impl NetworkClient<OwnedReadHalf, OwnedWriteHalf> {
    pub async fn connect(addr: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        let (reader, writer) = stream.into_split();
        Ok(Self::new(reader, writer))
    }
}

impl<R, W> NetworkClient<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    async fn send(&mut self, msg: &NetMessage) -> anyhow::Result<()> {
        self.writer.write_all(msg.to_line()?.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Plays one game: join, answer every `Turn` with exactly one `MakeMove`,
    /// return the winner announced by `GameOver`.
    pub async fn run(
        &mut self,
        agent: &mut dyn PlayerController<Move>,
        mut record: Option<&mut GameRecord>,
    ) -> anyhow::Result<Option<PlayerId>> {
        // 1. Join
        let join = NetMessage::Join {
            name: agent.name().to_string(),
        };
        self.send(&join).await?;

        // 2. Message loop
        let mut seat = None;
        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let msg: NetMessage = serde_json::from_str(&line)?;
            match msg {
                NetMessage::Welcome { seat: s } => {
                    log::info!("{} seated as {} (opponent {})", agent.name(), s, s.opponent());
                    agent.init(s);
                    seat = Some(s);
                    if let Some(r) = record.as_deref_mut() {
                        r.seat = Some(s);
                    }
                }
                NetMessage::Turn { turn } => {
                    let mv = agent.choose_move(&turn)?;
                    log::debug!("trying {}", mv);
                    if let (Some(r), Some(s)) = (record.as_deref_mut(), seat) {
                        let notes = turn.notes(s);
                        r.push(TurnKind::classify(&turn.moves, &notes), notes, mv.clone());
                    }
                    self.send(&NetMessage::MakeMove { mv }).await?;
                }
                NetMessage::GameOver { winner, reason } => {
                    match winner {
                        Some(w) => log::info!("Game over: {} wins ({})", w, reason),
                        None => log::info!("Game over: draw ({})", reason),
                    }
                    if let Some(r) = record.as_deref_mut() {
                        r.finish(winner, &reason);
                    }
                    return Ok(winner);
                }
                NetMessage::Error { message } => {
                    log::warn!("Referee error: {}", message);
                }
                NetMessage::Join { .. } | NetMessage::MakeMove { .. } => {
                    log::warn!("ignoring agent-side message from referee: {}", line);
                }
            }
        }

        anyhow::bail!("referee closed the connection before the game ended")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TurnSnapshot;
    use crate::core::Position;
    use crate::player::KriegspielAgent;
    use tokio::io::{duplex, split};

    fn mv(fx: usize, fy: usize, tx: usize, ty: usize) -> Move {
        Move::Normal {
            from: Position::new(fx, fy),
            to: Position::new(tx, ty),
        }
    }

    async fn write_all(w: &mut (impl AsyncWrite + Unpin), msgs: &[NetMessage]) {
        for msg in msgs {
            w.write_all(msg.to_line().unwrap().as_bytes()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn plays_one_session() {
        let (agent_io, referee_io) = duplex(64 * 1024);
        let (reader, writer) = split(agent_io);
        let (ref_reader, mut ref_writer) = split(referee_io);

        let candidates = vec![mv(4, 6, 4, 4), mv(6, 7, 5, 5)];
        let turn = TurnSnapshot::new(candidates.clone())
            .with_notes(PlayerId::Player2, &["Illegal move"])
            .with_score(PlayerId::Player1, 1);
        write_all(
            &mut ref_writer,
            &[
                NetMessage::Welcome {
                    seat: PlayerId::Player2,
                },
                NetMessage::Error {
                    message: "slow down".to_string(),
                },
                NetMessage::Turn { turn },
                NetMessage::GameOver {
                    winner: Some(PlayerId::Player2),
                    reason: "Checkmate".to_string(),
                },
            ],
        )
        .await;

        let mut client = NetworkClient::new(reader, writer);
        let mut agent = KriegspielAgent::with_seed("Agent", 3);
        let mut record = GameRecord::new("Agent");
        let winner = client.run(&mut agent, Some(&mut record)).await.unwrap();

        assert_eq!(winner, Some(PlayerId::Player2));
        assert_eq!(agent.opponent(), Some(PlayerId::Player1));
        assert_eq!(record.seat, Some(PlayerId::Player2));
        assert_eq!(record.tries.len(), 1);
        assert_eq!(record.tries[0].kind, TurnKind::RetryAfterIllegal);

        let mut lines = BufReader::new(ref_reader).lines();
        let join: NetMessage = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert!(matches!(join, NetMessage::Join { ref name } if name == "Agent"));
        let reply: NetMessage = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        match reply {
            NetMessage::MakeMove { mv } => {
                assert!(candidates.contains(&mv));
                assert_eq!(mv, record.tries[0].mv);
            }
            other => panic!("expected MakeMove, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn turn_before_welcome_fails() {
        let (agent_io, referee_io) = duplex(64 * 1024);
        let (reader, writer) = split(agent_io);
        let (_ref_reader, mut ref_writer) = split(referee_io);

        write_all(
            &mut ref_writer,
            &[NetMessage::Turn {
                turn: TurnSnapshot::new(vec![mv(0, 1, 0, 2)]),
            }],
        )
        .await;

        let mut client = NetworkClient::new(reader, writer);
        let mut agent = KriegspielAgent::with_seed("Agent", 3);
        let err = client.run(&mut agent, None).await.unwrap_err();
        assert!(err.to_string().contains("not initialised"));
    }

    #[tokio::test]
    async fn empty_turn_fails() {
        let (agent_io, referee_io) = duplex(64 * 1024);
        let (reader, writer) = split(agent_io);
        let (_ref_reader, mut ref_writer) = split(referee_io);

        write_all(
            &mut ref_writer,
            &[
                NetMessage::Welcome {
                    seat: PlayerId::Player1,
                },
                NetMessage::Turn {
                    turn: TurnSnapshot::new(vec![]),
                },
            ],
        )
        .await;

        let mut client = NetworkClient::new(reader, writer);
        let mut agent = KriegspielAgent::with_seed("Agent", 3);
        assert!(client.run(&mut agent, None).await.is_err());
    }
}

use super::config::AgentConfig;
use crate::context::GameContext;
use crate::core::r#move::PROMOTE;
use crate::core::{Action, PlayerId};
use crate::player::PlayerController;
use crate::referee::{is_illegal_move, RefereeNote};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Which situation a decision was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    /// The referee rejected the previous try.
    RetryAfterIllegal,
    /// Only promotion variants are on offer.
    Promotion,
    Regular,
}

impl TurnKind {
    pub fn classify<A: Action>(moves: &[A], own_notes: &[String]) -> TurnKind {
        if is_illegal_move(own_notes) {
            TurnKind::RetryAfterIllegal
        } else if moves
            .first()
            .is_some_and(|mv| mv.description_short() == PROMOTE)
        {
            TurnKind::Promotion
        } else {
            TurnKind::Regular
        }
    }
}

#[derive(Debug, Clone)]
pub struct Decision<A> {
    pub action: A,
    pub kind: TurnKind,
}

/// Plays a uniformly random pseudo-legal try every turn.
pub struct KriegspielAgent {
    pub name: String,
    /// (自分, 相手)
    seats: Option<(PlayerId, PlayerId)>,
    rng: StdRng,
}

impl KriegspielAgent {
    pub fn new(name: &str) -> Self {
        KriegspielAgent {
            name: name.to_string(),
            seats: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(name: &str, seed: u64) -> Self {
        KriegspielAgent {
            name: name.to_string(),
            seats: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(&config.name, seed),
            None => Self::new(&config.name),
        }
    }

    pub fn init(&mut self, seat: PlayerId) {
        self.seats = Some((seat, seat.opponent()));
    }

    pub fn player(&self) -> Option<PlayerId> {
        self.seats.map(|(me, _)| me)
    }

    pub fn opponent(&self) -> Option<PlayerId> {
        self.seats.map(|(_, them)| them)
    }

    pub fn plays_white(&self) -> bool {
        self.player().is_some_and(PlayerId::is_white)
    }

    fn seats(&self) -> anyhow::Result<(PlayerId, PlayerId)> {
        self.seats
            .ok_or_else(|| anyhow::anyhow!("agent not initialised: no seat assigned"))
    }

    fn choose_random<A: Clone>(&mut self, moves: &[A]) -> anyhow::Result<A> {
        moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no pseudo-legal moves to choose from"))
    }

    /// Pick one of `moves`. Opponent notes and both scores are read but do not
    /// influence the pick.
    pub fn decide<A: Action + Clone>(
        &mut self,
        moves: &[A],
        own_notes: &[String],
        opponent_notes: &[String],
        own_score: i32,
        opponent_score: i32,
    ) -> anyhow::Result<Decision<A>> {
        if moves.is_empty() {
            anyhow::bail!("no pseudo-legal moves to choose from");
        }

        let kind = TurnKind::classify(moves, own_notes);
        if kind == TurnKind::Regular {
            log::debug!(
                "{}: referee says {:?}, pawn tries {} (opponent {})",
                self.name,
                RefereeNote::parse_all(opponent_notes),
                own_score,
                opponent_score
            );
        }

        let action = self.choose_random(moves)?;
        log::debug!(
            "{}: {:?} turn, picked 1 of {} tries",
            self.name,
            kind,
            moves.len()
        );
        Ok(Decision { action, kind })
    }

    pub fn select_action<A: Action + Clone>(
        &mut self,
        ctx: &dyn GameContext<Action = A>,
    ) -> anyhow::Result<Decision<A>> {
        let (me, them) = self.seats()?;
        let moves = ctx.moves();
        let own_notes = ctx.notes(me);
        let opponent_notes = ctx.notes(them);
        self.decide(
            &moves,
            &own_notes,
            &opponent_notes,
            ctx.score(me),
            ctx.score(them),
        )
    }
}

impl<A: Action + Clone> PlayerController<A> for KriegspielAgent {
    fn init(&mut self, seat: PlayerId) {
        KriegspielAgent::init(self, seat);
    }

    fn choose_move(&mut self, ctx: &dyn GameContext<Action = A>) -> anyhow::Result<A> {
        self.select_action(ctx).map(|d| d.action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

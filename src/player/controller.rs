use crate::context::GameContext;
use crate::core::{Action, PlayerId};

/// プレイヤー操作のtrait
pub trait PlayerController<A: Action + Clone> {
    /// Called once per game before the first decision.
    fn init(&mut self, seat: PlayerId);
    fn choose_move(&mut self, ctx: &dyn GameContext<Action = A>) -> anyhow::Result<A>;
    fn name(&self) -> &str;
}

use crate::prelude::*;

pub mod decision;
pub mod evaluators;
pub mod ply;
pub mod policy;
pub mod scalars;
pub mod search;
pub mod searchargs;

pub use decision::*;
pub use evaluators::{Registry, Scorer};
pub use ply::*;
pub use policy::SearchAgent;
pub use scalars::*;
pub use search::{AlphaBeta, Expectimax, Minimax, Reflex, Search};
pub use searchargs::*;

/// A trait representing a policy by which we can score a position at a search cutoff.
///
/// Evaluators must be pure functions of the position: they may not depend on the depth or the agent to move.
pub trait Evaluator<P: Position>
{
    /// Returns the desirability of the position for the maximizing agent.
    fn evaluate(&self, position: &P) -> Score;
}

impl<P, F> Evaluator<P> for F
where
    P: Position,
    F: Fn(&P) -> Score,
{
    fn evaluate(&self, position: &P) -> Score
    {
        self(position)
    }
}

use std::time::Duration;

use crate::prelude::*;

mod alphabeta;
mod expectimax;
mod minimax;
mod reflex;

pub use alphabeta::AlphaBeta;
pub use expectimax::Expectimax;
pub use minimax::Minimax;
pub use reflex::Reflex;

/// A policy that picks the maximizing agent's action in a position.
pub trait Search<P: Position>
{
    /// Searches the position and returns the best action for the maximizing agent along with its backed-up value.
    fn decide(&mut self, position: &P) -> Result<Decision<P::Action>>;

    /// Counters from the most recent call to [`Search::decide`].
    fn statistics(&self) -> Statistics;
}

/// Checks that a position can be searched to the given depth, and returns the maximizing agent's actions.
pub(crate) fn root_actions<P: Position>(position: &P, depth: Depth) -> Result<Vec<P::Action>>
{
    let num_agents = position.num_agents();
    let frames = (depth.rounds() as usize).checked_mul(num_agents);
    if frames.map_or(true, |frames| frames > MAXIMUM_FRAMES)
    {
        return Err(Error::new(
            Kind::DepthLimit,
            format!(
                "Searching {} rounds with {} agents needs more than the ceiling of {} frames.",
                depth, num_agents, MAXIMUM_FRAMES
            ),
        ));
    }

    maximizer_actions(position)
}

/// Checks that a position has agents at all, and returns the maximizing agent's actions.
pub(crate) fn maximizer_actions<P: Position>(position: &P) -> Result<Vec<P::Action>>
{
    if position.num_agents() == 0
    {
        return Err(Error::new(Kind::InvalidState, "Position reports no agents.".into()));
    }

    let actions = position.legal_actions(MAXIMIZER);
    if actions.is_empty()
    {
        return Err(Error::empty(Kind::NoLegalActions));
    }

    Ok(actions)
}

/// Scores a cutoff position, refusing anything that is not a finite real.
pub(crate) fn evaluate<P, E>(evaluator: &E, position: &P, statistics: &mut Statistics) -> Result<Score>
where
    P: Position,
    E: Evaluator<P>,
{
    statistics.leaves += 1;
    ensure_finite(evaluator.evaluate(position))
}

/// Keeps the first action that strictly improves on the best so far.
pub(crate) fn keep_first_best<A>(best: &mut Option<Decision<A>>, action: A, score: Score)
{
    if best.as_ref().map_or(true, |b| score > b.score)
    {
        *best = Some(Decision { action, score });
    }
}

/// Logs the outcome of a search.
pub(crate) fn report<A: std::fmt::Display>(name: &str, decision: &Decision<A>, statistics: &Statistics)
{
    let secs = statistics.elapsed.max(Duration::from_micros(1)).as_secs_f64();

    log::debug!("{} found {: ^8}: scored {: >10.3}", name, decision.action, decision.score);
    log::debug!("took {: >6.3}ms", secs * 1e3);
    log::debug!("visited {:09}  stems ({: >9} N/s)", statistics.stems, (statistics.stems as f64 / secs).floor() as u64);
    log::debug!("visited {:09} leaves ({: >9} N/s)", statistics.leaves, (statistics.leaves as f64 / secs).floor() as u64);
}

use std::{marker::PhantomData, time::Instant};

use super::{evaluate, keep_first_best, report, root_actions};
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The bounds threaded through an alpha-beta search.
struct Window
{
    /// The value the maximizer can already guarantee on the current path.
    a: Score,
    /// The value the minimizers can already guarantee on the current path.
    b: Score,
}

impl Default for Window
{
    /// Returns the unbounded window.
    fn default() -> Self
    {
        Window { a: WORST, b: BEST }
    }
}

/// Minimax with branch-and-bound pruning. It backs up the same values as [`Minimax`], visiting fewer positions.
pub struct AlphaBeta<P, E>
{
    evaluator:  E,
    depth:      Depth,
    statistics: Statistics,
    _marker:    PhantomData<fn(&P)>,
}

impl<P: Position, E: Evaluator<P>> AlphaBeta<P, E>
{
    pub fn new(evaluator: E, depth: Depth) -> Self
    {
        AlphaBeta {
            evaluator,
            depth,
            statistics: Statistics::default(),
            _marker: PhantomData,
        }
    }

    fn value(&mut self, position: &P, ply: Ply, window: Window) -> Result<Score>
    {
        let actions = position.legal_actions(ply.agent);
        if ply.is_cutoff(self.depth, actions.len())
        {
            return evaluate(&self.evaluator, position, &mut self.statistics);
        }

        self.statistics.stems += 1;
        match ply.node()
        {
            | Node::Max => self.max_value(position, ply, actions, window),
            | Node::Min => self.min_value(position, ply, actions, window),
        }
    }

    fn max_value(&mut self, position: &P, ply: Ply, actions: Vec<P::Action>, mut window: Window) -> Result<Score>
    {
        let next = ply.next(position.num_agents());
        let mut v = WORST;
        for action in actions
        {
            v = v.max(self.value(&position.successor(ply.agent, action)?, next, window)?);

            // The minimizers above will never allow this line.
            if v > window.b
            {
                return Ok(v);
            }
            window.a = window.a.max(v);
        }
        Ok(v)
    }

    fn min_value(&mut self, position: &P, ply: Ply, actions: Vec<P::Action>, mut window: Window) -> Result<Score>
    {
        let next = ply.next(position.num_agents());
        let mut v = BEST;
        for action in actions
        {
            v = v.min(self.value(&position.successor(ply.agent, action)?, next, window)?);

            // The maximizer above already has something better.
            if v < window.a
            {
                return Ok(v);
            }
            window.b = window.b.min(v);
        }
        Ok(v)
    }
}

impl<P: Position, E: Evaluator<P>> Search<P> for AlphaBeta<P, E>
{
    fn decide(&mut self, position: &P) -> Result<Decision<P::Action>>
    {
        let start = Instant::now();
        self.statistics = Statistics::default();

        let actions = root_actions(position, self.depth)?;
        let next = Ply::ROOT.next(position.num_agents());
        self.statistics.stems += 1;

        // The root is a max node whose beta is unbounded, so it never prunes; each child is searched with the best
        // value found so far as its alpha, and only a strictly better value can replace the incumbent.
        let mut window = Window::default();
        let mut best = None;
        for action in actions
        {
            let score = self.value(&position.successor(MAXIMIZER, action)?, next, window)?;
            log::trace!("alphabeta root {}: {}", action, score);
            keep_first_best(&mut best, action, score);
            window.a = window.a.max(score);
        }

        self.statistics.elapsed = start.elapsed();
        let decision = best.ok_or_else(|| Error::empty(Kind::NoLegalActions))?;
        report("alphabeta", &decision, &self.statistics);
        Ok(decision)
    }

    fn statistics(&self) -> Statistics
    {
        self.statistics
    }
}

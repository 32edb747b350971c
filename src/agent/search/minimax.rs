use std::{marker::PhantomData, time::Instant};

use super::{evaluate, keep_first_best, report, root_actions};
use crate::prelude::*;

/// Worst-case search: every agent but the maximizer is assumed to play its most damaging reply.
pub struct Minimax<P, E>
{
    evaluator:  E,
    depth:      Depth,
    statistics: Statistics,
    _marker:    PhantomData<fn(&P)>,
}

impl<P: Position, E: Evaluator<P>> Minimax<P, E>
{
    pub fn new(evaluator: E, depth: Depth) -> Self
    {
        Minimax {
            evaluator,
            depth,
            statistics: Statistics::default(),
            _marker: PhantomData,
        }
    }

    /// The minimax value of a position, with `ply` saying whose turn it is.
    fn value(&mut self, position: &P, ply: Ply) -> Result<Score>
    {
        let actions = position.legal_actions(ply.agent);
        if ply.is_cutoff(self.depth, actions.len())
        {
            return evaluate(&self.evaluator, position, &mut self.statistics);
        }

        self.statistics.stems += 1;
        match ply.node()
        {
            | Node::Max => self.max_value(position, ply, actions),
            | Node::Min => self.min_value(position, ply, actions),
        }
    }

    fn max_value(&mut self, position: &P, ply: Ply, actions: Vec<P::Action>) -> Result<Score>
    {
        let next = ply.next(position.num_agents());
        let mut v = WORST;
        for action in actions
        {
            v = v.max(self.value(&position.successor(ply.agent, action)?, next)?);
        }
        Ok(v)
    }

    fn min_value(&mut self, position: &P, ply: Ply, actions: Vec<P::Action>) -> Result<Score>
    {
        let next = ply.next(position.num_agents());
        let mut v = BEST;
        for action in actions
        {
            v = v.min(self.value(&position.successor(ply.agent, action)?, next)?);
        }
        Ok(v)
    }
}

impl<P: Position, E: Evaluator<P>> Search<P> for Minimax<P, E>
{
    fn decide(&mut self, position: &P) -> Result<Decision<P::Action>>
    {
        let start = Instant::now();
        self.statistics = Statistics::default();

        let actions = root_actions(position, self.depth)?;
        let next = Ply::ROOT.next(position.num_agents());
        self.statistics.stems += 1;

        let mut best = None;
        for action in actions
        {
            let score = self.value(&position.successor(MAXIMIZER, action)?, next)?;
            log::trace!("minimax root {}: {}", action, score);
            keep_first_best(&mut best, action, score);
        }

        self.statistics.elapsed = start.elapsed();
        let decision = best.ok_or_else(|| Error::empty(Kind::NoLegalActions))?;
        report("minimax", &decision, &self.statistics);
        Ok(decision)
    }

    fn statistics(&self) -> Statistics
    {
        self.statistics
    }
}

use std::{marker::PhantomData, time::Instant};

use super::{evaluate, keep_first_best, report, root_actions};
use crate::prelude::*;

/// Expected-value search: every agent but the maximizer picks uniformly at random among its legal actions.
pub struct Expectimax<P, E>
{
    evaluator:  E,
    depth:      Depth,
    statistics: Statistics,
    _marker:    PhantomData<fn(&P)>,
}

impl<P: Position, E: Evaluator<P>> Expectimax<P, E>
{
    pub fn new(evaluator: E, depth: Depth) -> Self
    {
        Expectimax {
            evaluator,
            depth,
            statistics: Statistics::default(),
            _marker: PhantomData,
        }
    }

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
            | Node::Min => self.chance_value(position, ply, actions),
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

    /// The mean value over every legal action, each weighted equally. `actions` is never empty here.
    fn chance_value(&mut self, position: &P, ply: Ply, actions: Vec<P::Action>) -> Result<Score>
    {
        let next = ply.next(position.num_agents());
        let probability = 1.0 / actions.len() as f64;
        let mut expected = 0.0;
        for action in actions
        {
            expected += probability * self.value(&position.successor(ply.agent, action)?, next)?;
        }
        Ok(expected)
    }
}

impl<P: Position, E: Evaluator<P>> Search<P> for Expectimax<P, E>
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
            log::trace!("expectimax root {}: {}", action, score);
            keep_first_best(&mut best, action, score);
        }

        self.statistics.elapsed = start.elapsed();
        let decision = best.ok_or_else(|| Error::empty(Kind::NoLegalActions))?;
        report("expectimax", &decision, &self.statistics);
        Ok(decision)
    }

    fn statistics(&self) -> Statistics
    {
        self.statistics
    }
}

use std::{marker::PhantomData, time::Instant};

use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::{evaluate, maximizer_actions, report};
use crate::prelude::*;

/// A one-step policy: score every immediate successor and pick at random among the best.
///
/// This is the only policy that breaks ties at random; the tree searches always keep the first best action.
pub struct Reflex<P, E>
{
    evaluator:  E,
    rng:        StdRng,
    statistics: Statistics,
    _marker:    PhantomData<fn(&P)>,
}

impl<P: Position, E: Evaluator<P>> Reflex<P, E>
{
    /// Creates a reflex policy whose tie-breaks are seeded from entropy.
    pub fn new(evaluator: E) -> Self
    {
        Self::with_rng(evaluator, StdRng::from_entropy())
    }

    /// Creates a reflex policy with reproducible tie-breaks.
    pub fn seeded(evaluator: E, seed: u64) -> Self
    {
        Self::with_rng(evaluator, StdRng::seed_from_u64(seed))
    }

    fn with_rng(evaluator: E, rng: StdRng) -> Self
    {
        Reflex {
            evaluator,
            rng,
            statistics: Statistics::default(),
            _marker: PhantomData,
        }
    }
}

impl<P: Position, E: Evaluator<P>> Search<P> for Reflex<P, E>
{
    fn decide(&mut self, position: &P) -> Result<Decision<P::Action>>
    {
        let start = Instant::now();
        self.statistics = Statistics::default();

        let actions = maximizer_actions(position)?;
        self.statistics.stems += 1;

        let mut scored = Vec::with_capacity(actions.len());
        for action in actions
        {
            let successor = position.successor(MAXIMIZER, action)?;
            scored.push((action, evaluate(&self.evaluator, &successor, &mut self.statistics)?));
        }

        let tied = scored.into_iter().max_set_by(|(_, a), (_, b)| a.total_cmp(b));
        log::trace!("reflex found {} tied actions", tied.len());

        let (action, score) = *tied.choose(&mut self.rng).ok_or_else(|| Error::empty(Kind::NoLegalActions))?;

        self.statistics.elapsed = start.elapsed();
        let decision = Decision { action, score };
        report("reflex", &decision, &self.statistics);
        Ok(decision)
    }

    fn statistics(&self) -> Statistics
    {
        self.statistics
    }
}

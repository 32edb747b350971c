use std::time::Duration;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The action a search settled on at the root, and the value it backed up for it.
pub struct Decision<A>
{
    pub action: A,
    pub score:  Score,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters from the most recent search.
pub struct Statistics
{
    /// Positions expanded, root included.
    pub stems:   u64,
    /// Positions handed to the evaluator.
    pub leaves:  u64,
    pub elapsed: Duration,
}

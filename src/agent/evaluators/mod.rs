use std::collections::HashMap;

use crate::prelude::*;

mod basic;
mod better;
mod reflex;

pub use basic::score;
pub use better::better;
pub use reflex::reflex;

/// A plain scoring function, which is what the registry hands out.
pub type Scorer<P> = fn(&P) -> Score;

/// A named collection of evaluators, resolved once when an agent is configured.
pub struct Registry<P>
{
    scorers: HashMap<String, Scorer<P>>,
}

impl<P: Position> Default for Registry<P>
{
    fn default() -> Self
    {
        Registry::new()
    }
}

impl<P: Position> Registry<P>
{
    /// Creates an empty registry.
    pub fn new() -> Self
    {
        Registry {
            scorers: HashMap::new(),
        }
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str>
    {
        let mut names = self.scorers.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Adds an evaluator under the given name, replacing any previous one.
    pub fn register(&mut self, name: &str, scorer: Scorer<P>) -> &mut Self
    {
        if self.scorers.insert(name.to_owned(), scorer).is_some()
        {
            log::trace!("replaced evaluator '{}'", name);
        }
        self
    }

    /// Looks up an evaluator by name. There is no fallback for unknown names.
    pub fn resolve(&self, name: &str) -> Result<Scorer<P>>
    {
        self.scorers.get(name).copied().ok_or_else(|| {
            Error::new(
                Kind::UnknownEvaluator,
                format!("No evaluator named '{}' (known: {}).", name, self.names().join(", ")),
            )
        })
    }
}

impl<P: Arena> Registry<P>
{
    /// The registry of built-in evaluators for positions that expose a playing field.
    pub fn standard() -> Self
    {
        let mut registry = Registry::new();
        registry.register("score", score).register("better", better).register("reflex", reflex);
        registry
    }
}

/// The distance to the closest of the given cells, if there are any.
fn nearest(from: Cell, cells: impl IntoIterator<Item = Cell>) -> Option<u32>
{
    cells.into_iter().map(|cell| from.manhattan(cell)).min()
}

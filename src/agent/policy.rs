use crate::prelude::*;

/// The searcher an agent was configured with.
enum Searcher<P: Position>
{
    Reflex(Reflex<P, Scorer<P>>),
    Minimax(Minimax<P, Scorer<P>>),
    AlphaBeta(AlphaBeta<P, Scorer<P>>),
    Expectimax(Expectimax<P, Scorer<P>>),
}

/// The maximizing agent as seen by a host game loop: configured once, then asked for an action every turn.
pub struct SearchAgent<P: Position>
{
    args:     SearchArgs,
    searcher: Searcher<P>,
}

impl<P: Position> SearchAgent<P>
{
    /// Creates an agent, resolving its evaluator and validating its depth up front.
    pub fn new(args: SearchArgs, registry: &Registry<P>) -> Result<Self>
    {
        let scorer = registry.resolve(&args.evaluator)?;
        let depth = args.depth.validated()?;

        let searcher = match args.mode
        {
            | Mode::Reflex => Searcher::Reflex(match args.seed
            {
                | Some(seed) => Reflex::seeded(scorer, seed),
                | None => Reflex::new(scorer),
            }),
            | Mode::Minimax => Searcher::Minimax(Minimax::new(scorer, depth)),
            | Mode::AlphaBeta => Searcher::AlphaBeta(AlphaBeta::new(scorer, depth)),
            | Mode::Expectimax => Searcher::Expectimax(Expectimax::new(scorer, depth)),
        };

        log::debug!("configured {} agent with evaluator '{}' to depth {}", args.mode, args.evaluator, depth);
        Ok(SearchAgent { args, searcher })
    }

    /// The arguments this agent was configured with.
    pub fn args(&self) -> &SearchArgs
    {
        &self.args
    }

    /// Returns the chosen action in the current position.
    pub fn choose_action(&mut self, position: &P) -> Result<P::Action>
    {
        self.decide(position).map(|decision| decision.action)
    }

    /// Returns the chosen action in the current position, along with the value the search backed up for it.
    pub fn decide(&mut self, position: &P) -> Result<Decision<P::Action>>
    {
        self.search().decide(position)
    }

    /// Counters from the most recent decision.
    pub fn statistics(&self) -> Statistics
    {
        match &self.searcher
        {
            | Searcher::Reflex(s) => s.statistics(),
            | Searcher::Minimax(s) => s.statistics(),
            | Searcher::AlphaBeta(s) => s.statistics(),
            | Searcher::Expectimax(s) => s.statistics(),
        }
    }

    fn search(&mut self) -> &mut dyn Search<P>
    {
        match &mut self.searcher
        {
            | Searcher::Reflex(s) => s,
            | Searcher::Minimax(s) => s,
            | Searcher::AlphaBeta(s) => s,
            | Searcher::Expectimax(s) => s,
        }
    }
}

use crate::prelude::*;

/// The index of an agent in a position. Agent 0 maximizes; every other agent minimizes (or plays at random).
pub type AgentIndex = usize;

/// The index of the maximizing agent.
pub const MAXIMIZER: AgentIndex = 0;

/// The capability contract a game must provide to be searched.
///
/// Positions are immutable snapshots: `successor` never touches `self` and always produces a fresh position.
pub trait Position: Sized
{
    type Action: Copy + std::fmt::Debug + std::fmt::Display + PartialEq;

    /// Returns the legal actions for the given agent, in a stable order. An empty list marks a terminal position.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// Returns the position reached after the agent takes the action.
    ///
    /// Fails with [`Kind::IllegalAction`] if the action is not currently legal for that agent.
    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Result<Self>;

    /// The number of agents taking turns in this position.
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;
}

/// A read-only view of a playing field, which is what the standard evaluators consume.
pub trait Arena: Position
{
    /// The current score of the game.
    fn score(&self) -> Score;

    /// Where the maximizing agent stands.
    fn hero(&self) -> Cell;

    /// Every cell still holding food.
    fn food(&self) -> Vec<Cell>;

    /// Every adversary and how long it remains harmless.
    fn adversaries(&self) -> Vec<Adversary>;

    /// Every cell still holding a power-up.
    fn power_ups(&self) -> Vec<Cell>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A cell on a grid, with y growing downwards.
pub struct Cell
{
    pub x: i32,
    pub y: i32,
}

impl Cell
{
    pub const fn new(x: i32, y: i32) -> Cell
    {
        Cell { x, y }
    }

    /// The taxicab distance between two cells.
    pub fn manhattan(&self, other: Cell) -> u32
    {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An adversary as seen by an evaluator.
pub struct Adversary
{
    pub cell:   Cell,
    /// The number of adversary moves for which this adversary is harmless.
    pub scared: u32,
}

impl Adversary
{
    pub fn dangerous(&self) -> bool
    {
        self.scared == 0
    }
}

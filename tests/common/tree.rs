use std::rc::Rc;

use pacmind::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug)]
/// An explicit game tree. Every agent shares the same children; `value` is what the evaluator sees.
pub struct Tree
{
    pub value:    f64,
    pub children: Vec<Rc<Tree>>,
}

/// A terminal node.
pub fn leaf(value: f64) -> Tree
{
    node(value, Vec::new())
}

/// An interior node with a static value for when the search is cut off at it.
pub fn node(value: f64, children: Vec<Tree>) -> Tree
{
    Tree {
        value,
        children: children.into_iter().map(Rc::new).collect(),
    }
}

/// A node whose children are all terminal.
pub fn leaves(values: &[f64]) -> Tree
{
    node(0.0, values.iter().map(|&v| leaf(v)).collect())
}

#[derive(Clone, Debug)]
/// A synthetic position walking an explicit tree.
pub struct TreePosition
{
    node:   Rc<Tree>,
    agents: usize,
}

impl TreePosition
{
    pub fn new(tree: Tree, agents: usize) -> Self
    {
        TreePosition {
            node: Rc::new(tree),
            agents,
        }
    }

    /// A seeded random tree with integral values, `levels` deep, and up to `branching` children per node.
    ///
    /// Interior nodes may have no children at all, so terminal positions show up at every level.
    pub fn random(seed: u64, agents: usize, levels: u32, branching: usize) -> Self
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let root_width = rng.gen_range(1..=branching);
        let children = (0..root_width).map(|_| random_tree(&mut rng, levels - 1, branching)).collect();
        TreePosition::new(node(0.0, children), agents)
    }

    pub fn value(&self) -> f64
    {
        self.node.value
    }
}

fn random_tree(rng: &mut StdRng, levels: u32, branching: usize) -> Tree
{
    let value = rng.gen_range(-50..=50) as f64;
    if levels == 0
    {
        return leaf(value);
    }

    let width = rng.gen_range(0..=branching);
    node(value, (0..width).map(|_| random_tree(rng, levels - 1, branching)).collect())
}

impl Position for TreePosition
{
    type Action = usize;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<usize>
    {
        (0..self.node.children.len()).collect()
    }

    fn successor(&self, agent: AgentIndex, action: usize) -> Result<Self>
    {
        let Some(child) = self.node.children.get(action)
        else
        {
            return Err(Error::new(Kind::IllegalAction, format!("{} is not legal for agent {}.", action, agent)));
        };

        Ok(TreePosition {
            node:   child.clone(),
            agents: self.agents,
        })
    }

    fn num_agents(&self) -> usize
    {
        self.agents
    }

    fn is_win(&self) -> bool
    {
        false
    }

    fn is_lose(&self) -> bool
    {
        false
    }
}

/// The evaluator for tree positions.
pub fn value(position: &TreePosition) -> Score
{
    position.value()
}

pub fn registry() -> Registry<TreePosition>
{
    let mut registry = Registry::<TreePosition>::new();
    registry.register("value", value);
    registry
}

pub fn minimax(depth: u32) -> Minimax<TreePosition, Scorer<TreePosition>>
{
    Minimax::new(value as Scorer<TreePosition>, Depth::new(depth))
}

pub fn alphabeta(depth: u32) -> AlphaBeta<TreePosition, Scorer<TreePosition>>
{
    AlphaBeta::new(value as Scorer<TreePosition>, Depth::new(depth))
}

pub fn expectimax(depth: u32) -> Expectimax<TreePosition, Scorer<TreePosition>>
{
    Expectimax::new(value as Scorer<TreePosition>, Depth::new(depth))
}

/// The textbook two-agent tree: three maximizer moves, each answered by three replies.
pub fn textbook() -> TreePosition
{
    let tree = node(0.0, vec![leaves(&[3.0, 12.0, 8.0]), leaves(&[2.0, 4.0, 6.0]), leaves(&[14.0, 5.0, 2.0])]);
    TreePosition::new(tree, 2)
}

/// A reflex policy over tree positions, seeded from entropy unless a seed is given.
pub fn reflex(seed: Option<u64>) -> Reflex<TreePosition, Scorer<TreePosition>>
{
    match seed
    {
        | Some(seed) => Reflex::seeded(value as Scorer<TreePosition>, seed),
        | None => Reflex::new(value as Scorer<TreePosition>),
    }
}

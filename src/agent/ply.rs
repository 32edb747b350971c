use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The kind of node a search is standing on.
pub enum Node
{
    /// The maximizing agent is to move.
    Max,
    /// Some other agent is to move; it minimizes in adversarial search, and plays at random in expectimax.
    Min,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whose turn it is in a search, and how many full rounds lie above it.
pub struct Ply
{
    pub agent:  AgentIndex,
    pub rounds: Depth,
}

impl Ply
{
    /// The root of every search: the maximizing agent, before any round has completed.
    pub const ROOT: Ply = Ply {
        agent:  MAXIMIZER,
        rounds: Depth::NIL,
    };

    /// The kind of node this ply is.
    pub fn node(&self) -> Node
    {
        match self.agent
        {
            | MAXIMIZER => Node::Max,
            | _ => Node::Min,
        }
    }

    /// Hands the turn to the next agent.
    ///
    /// The round counter only advances when the last agent hands control back to the maximizer.
    pub fn next(&self, num_agents: usize) -> Ply
    {
        if self.agent + 1 >= num_agents
        {
            Ply {
                agent:  MAXIMIZER,
                rounds: self.rounds + 1,
            }
        }
        else
        {
            Ply {
                agent:  self.agent + 1,
                rounds: self.rounds,
            }
        }
    }

    /// Whether a search configured to the given depth stops at this ply.
    ///
    /// Max nodes stop on an exhausted depth or on no legal actions; any other node only stops on no legal actions.
    pub fn is_cutoff(&self, depth: Depth, num_actions: usize) -> bool
    {
        match self.node()
        {
            | Node::Max => num_actions == 0 || self.rounds == depth,
            | Node::Min => num_actions == 0,
        }
    }
}

use std::ops::Add;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A round-representation of search depth.
///
/// A round is one move by the maximizing agent followed by one move from every other agent, in index order.
pub struct Depth(u32);

impl FromStr for Depth
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Ok(rounds) = s.trim().parse::<u32>()
        else
        {
            let err = Error::for_parse::<Depth>(s.into());
            return Err(err.chain(Error::new(Kind::InvalidDepth, "Depth must be a positive integer.".into())));
        };
        Depth::new(rounds).validated()
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl Depth
{
    /// No rounds at all; the root of every search.
    pub const NIL: Depth = Depth::new(0);

    /// A single round.
    pub const ROUND: Depth = Depth::new(1);

    /// The depth an agent searches to when it is not told otherwise.
    pub const DEFAULT: Depth = Depth::new(2);

    /// The max search depth is 64 rounds.
    pub const MAX: Depth = Depth::new(64);

    /// Constructs a new depth.
    pub const fn new(rounds: u32) -> Depth
    {
        Depth(rounds)
    }

    /// The number of rounds.
    pub const fn rounds(&self) -> u32
    {
        self.0
    }

    /// Whether or not this is a valid configured depth; that is, at least a round and at most the maximum.
    pub const fn valid(&self) -> bool
    {
        Self::NIL.0 < self.0 && self.0 <= Self::MAX.0
    }

    /// Returns this depth if it is valid as a configured search depth.
    pub fn validated(self) -> Result<Depth>
    {
        match self.valid()
        {
            | true => Ok(self),
            | false => Err(Error::new(
                Kind::InvalidDepth,
                format!("Depth must be between {} and {} rounds, not {}.", Self::ROUND, Self::MAX, self),
            )),
        }
    }
}

impl Add<u32> for Depth
{
    type Output = Self;
    fn add(self, rhs: u32) -> Self::Output
    {
        Depth(self.0 + rhs)
    }
}

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The moves available in a maze.
pub enum Direction
{
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction
{
    /// Every direction that actually goes somewhere, in generation order.
    pub const MOVING: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Applies this direction to a cell.
    pub fn apply(&self, cell: Cell) -> Cell
    {
        let (dx, dy) = match self
        {
            | Self::North => (0, -1),
            | Self::South => (0, 1),
            | Self::East => (1, 0),
            | Self::West => (-1, 0),
            | Self::Stop => (0, 0),
        };
        Cell::new(cell.x + dx, cell.y + dy)
    }

    /// Gets the opposite direction.
    pub fn reverse(&self) -> Self
    {
        match self
        {
            | Self::North => Self::South,
            | Self::South => Self::North,
            | Self::East => Self::West,
            | Self::West => Self::East,
            | Self::Stop => Self::Stop,
        }
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::North => "North",
            | Self::South => "South",
            | Self::East => "East",
            | Self::West => "West",
            | Self::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Direction
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "North" | "n" => Ok(Self::North),
            | "South" | "s" => Ok(Self::South),
            | "East" | "e" => Ok(Self::East),
            | "West" | "w" => Ok(Self::West),
            | "Stop" | "x" => Ok(Self::Stop),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

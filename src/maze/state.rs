use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::prelude::*;

pub mod consts
{
    /// Points lost for every move the hero makes.
    pub const TIME_PENALTY: i32 = 1;
    pub const FOOD_REWARD: i32 = 10;
    /// Points for clearing the last food.
    pub const WIN_REWARD: i32 = 500;
    /// Points lost for walking into a dangerous adversary.
    pub const LOSE_PENALTY: i32 = 500;
    /// Points for catching a harmless adversary.
    pub const GHOST_REWARD: i32 = 200;
    /// How many of its own moves an adversary stays harmless after a capsule is eaten.
    pub const SCARED_TIME: u32 = 40;
}

use consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a game of maze.
pub enum Outcome
{
    InProgress,
    Won,
    Lost,
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::InProgress => "InProgress",
            | Self::Won => "Won",
            | Self::Lost => "Lost",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An adversary roaming the maze.
pub struct Ghost
{
    /// Where this ghost respawns after being caught.
    pub start:   Cell,
    pub cell:    Cell,
    /// The last direction this ghost moved in.
    pub heading: Direction,
    pub scared:  u32,
}

#[derive(Clone, Debug, PartialEq)]
/// An immutable snapshot of a maze game. Agent 0 is the hero; agent `i` is the `i`th ghost.
pub struct Maze
{
    layout:    Arc<Layout>,
    /// Food flags, indexed like the layout's walls.
    food:      Vec<bool>,
    food_left: usize,
    capsules:  Vec<Cell>,
    hero:      Cell,
    ghosts:    Vec<Ghost>,
    score:     i32,
    outcome:   Outcome,
    turn:      u32,
}

impl Default for Maze
{
    fn default() -> Self
    {
        Maze::new(Layout::default())
    }
}

impl From<Layout> for Maze
{
    fn from(layout: Layout) -> Self
    {
        Maze::new(layout)
    }
}

impl FromStr for Maze
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        Ok(Maze::new(s.parse::<Layout>()?))
    }
}

impl Maze
{
    /// Sets up a fresh game on the given layout.
    pub fn new(layout: Layout) -> Maze
    {
        let mut food = vec![false; layout.walls.len()];
        for cell in &layout.food
        {
            if let Some(i) = layout.index(*cell)
            {
                food[i] = true;
            }
        }

        let ghosts = layout
            .ghosts
            .iter()
            .map(|&cell| Ghost {
                start: cell,
                cell,
                heading: Direction::Stop,
                scared: 0,
            })
            .collect();

        // A layout without food is already cleared.
        let food_left = layout.food.len();
        let outcome = if food_left == 0 { Outcome::Won } else { Outcome::InProgress };

        Maze {
            food,
            food_left,
            capsules: layout.capsules.clone(),
            hero: layout.hero,
            ghosts,
            score: 0,
            outcome,
            turn: 0,
            layout: Arc::new(layout),
        }
    }

    pub fn ghosts(&self) -> &[Ghost]
    {
        &self.ghosts
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool
    {
        self.outcome != Outcome::InProgress
    }

    pub fn layout(&self) -> &Layout
    {
        &self.layout
    }

    pub fn outcome(&self) -> Outcome
    {
        self.outcome
    }

    /// The raw game score.
    pub fn points(&self) -> i32
    {
        self.score
    }

    /// The number of moves the hero has made.
    pub fn turn(&self) -> u32
    {
        self.turn
    }

    /// Whether there is food at a cell.
    pub fn has_food(&self, cell: Cell) -> bool
    {
        self.layout.index(cell).is_some_and(|i| self.food[i])
    }

    /// The directions that lead out of a cell without hitting a wall.
    fn open_directions(&self, cell: Cell) -> ArrayVec<Direction, 4>
    {
        Direction::MOVING.into_iter().filter(|d| !self.layout.is_wall(d.apply(cell))).collect()
    }

    fn move_hero(&mut self, direction: Direction)
    {
        self.hero = direction.apply(self.hero);
        self.score -= TIME_PENALTY;
        self.turn += 1;

        if let Some(i) = self.layout.index(self.hero).filter(|&i| self.food[i])
        {
            self.food[i] = false;
            self.food_left -= 1;
            self.score += FOOD_REWARD;

            if self.food_left == 0
            {
                self.score += WIN_REWARD;
                self.outcome = Outcome::Won;
            }
        }

        if let Some(i) = self.capsules.iter().position(|&c| c == self.hero)
        {
            self.capsules.remove(i);
            for ghost in self.ghosts.iter_mut()
            {
                ghost.scared = SCARED_TIME;
            }
        }

        for index in 0..self.ghosts.len()
        {
            self.collide(index);
        }
    }

    fn move_ghost(&mut self, index: usize, direction: Direction)
    {
        let ghost = &mut self.ghosts[index];
        ghost.cell = direction.apply(ghost.cell);
        ghost.heading = direction;
        ghost.scared = ghost.scared.saturating_sub(1);

        self.collide(index);
    }

    /// Resolves the hero meeting the given ghost, if they share a cell.
    fn collide(&mut self, index: usize)
    {
        let ghost = &mut self.ghosts[index];
        if ghost.cell != self.hero
        {
            return;
        }

        if ghost.scared > 0
        {
            self.score += GHOST_REWARD;
            ghost.cell = ghost.start;
            ghost.heading = Direction::Stop;
            ghost.scared = 0;
        }
        else if self.outcome != Outcome::Won
        {
            self.score -= LOSE_PENALTY;
            self.outcome = Outcome::Lost;
        }
    }
}

impl Position for Maze
{
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction>
    {
        if self.is_over()
        {
            return Vec::new();
        }

        if agent == MAXIMIZER
        {
            let mut actions: Vec<Direction> = self.open_directions(self.hero).into_iter().collect();
            actions.push(Direction::Stop);
            return actions;
        }

        let Some(ghost) = self.ghosts.get(agent - 1)
        else
        {
            return Vec::new();
        };

        // Ghosts never stop, and only turn back when cornered.
        let open = self.open_directions(ghost.cell);
        let forward: Vec<Direction> = open.iter().copied().filter(|d| *d != ghost.heading.reverse()).collect();
        if forward.is_empty()
        {
            open.into_iter().collect()
        }
        else
        {
            forward
        }
    }

    fn successor(&self, agent: AgentIndex, action: Direction) -> Result<Maze>
    {
        if !self.legal_actions(agent).contains(&action)
        {
            return Err(Error::new(Kind::IllegalAction, format!("{} is not legal for agent {}.", action, agent)));
        }

        let mut next = self.clone();
        match agent
        {
            | MAXIMIZER => next.move_hero(action),
            | _ => next.move_ghost(agent - 1, action),
        }
        Ok(next)
    }

    fn num_agents(&self) -> usize
    {
        1 + self.ghosts.len()
    }

    fn is_win(&self) -> bool
    {
        self.outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool
    {
        self.outcome == Outcome::Lost
    }
}

impl Arena for Maze
{
    fn score(&self) -> Score
    {
        self.score as Score
    }

    fn hero(&self) -> Cell
    {
        self.hero
    }

    fn food(&self) -> Vec<Cell>
    {
        self.layout.food.iter().copied().filter(|&cell| self.has_food(cell)).collect()
    }

    fn adversaries(&self) -> Vec<Adversary>
    {
        self.ghosts
            .iter()
            .map(|ghost| Adversary {
                cell:   ghost.cell,
                scared: ghost.scared,
            })
            .collect()
    }

    fn power_ups(&self) -> Vec<Cell>
    {
        self.capsules.clone()
    }
}

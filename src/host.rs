use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct HostOptions
{
    #[arg(short, long, value_enum, default_value_t = Mode::Minimax)]
    /// policy for the hero
    pub mode: Mode,

    #[arg(short, long, default_value = "score")]
    /// evaluator applied at search cutoffs
    pub evaluator: String,

    #[arg(short, long, default_value_t = 2)]
    /// search depth, in rounds
    pub depth: u32,

    #[arg(short, long)]
    /// comma-separated agent arguments (e.g. depth=3,evaluator=better) overriding the flags above
    pub agent_args: Option<String>,

    #[arg(long)]
    /// maze layout file; the small classic maze is used when absent
    pub layout: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 1)]
    /// number of games to play
    pub games: usize,

    #[arg(long)]
    /// seed for the ghosts (and reflex tie-breaks)
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 1000)]
    /// maximum number of hero moves before a game is abandoned
    pub max_turns: u32,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = false)]
    /// whether to skip drawing the maze every round
    pub quiet: bool,
}

impl HostOptions
{
    /// Folds the flags and the agent argument string into the agent's search arguments.
    pub fn search_args(&self) -> Result<SearchArgs>
    {
        let mut args = SearchArgs {
            mode:      self.mode,
            evaluator: self.evaluator.clone(),
            depth:     Depth::new(self.depth),
            seed:      self.seed,
        };

        if let Some(overrides) = self.agent_args.as_deref()
        {
            args.apply(overrides)?;
        }

        Ok(args)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Results over every game a host played.
pub struct Summary
{
    pub games:     usize,
    pub wins:      usize,
    pub losses:    usize,
    pub abandoned: usize,
    pub average:   f64,
}

/// A host game loop: the hero asks its search agent for a move, ghosts wander at random.
pub struct Host
{
    options: HostOptions,
    layout:  Layout,
    agent:   SearchAgent<Maze>,
    rng:     StdRng,
}

impl Host
{
    /// Creates a new host, loading its layout and configuring its agent.
    pub fn new(options: HostOptions) -> Result<Self>
    {
        let layout = match options.layout.as_deref()
        {
            | Some(path) => Layout::load(path)?,
            | None => Layout::default(),
        };

        let agent = SearchAgent::new(options.search_args()?, &Registry::standard())?;
        let rng = match options.seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };

        Ok(Host {
            options,
            layout,
            agent,
            rng,
        })
    }

    /// Plays every configured game.
    pub fn run(&mut self) -> Result<Summary>
    {
        let mut summary = Summary::default();
        let mut total = 0.0;

        for game in 1..=self.options.games
        {
            let maze = self.play()?;
            match maze.outcome()
            {
                | Outcome::Won => summary.wins += 1,
                | Outcome::Lost => summary.losses += 1,
                | Outcome::InProgress => summary.abandoned += 1,
            }

            log::info!("game {}: {} with score {} after {} turns", game, maze.outcome(), maze.points(), maze.turn());
            summary.games += 1;
            total += maze.points() as f64;
        }

        if summary.games > 0
        {
            summary.average = total / summary.games as f64;
        }

        log::info!(
            "won {}/{} games ({} lost, {} abandoned), average score {:.1}",
            summary.wins,
            summary.games,
            summary.losses,
            summary.abandoned,
            summary.average
        );
        Ok(summary)
    }

    /// Plays a single game to completion, or until the turn limit.
    pub fn play(&mut self) -> Result<Maze>
    {
        let mut maze = Maze::new(self.layout.clone());

        while !maze.is_over() && maze.turn() < self.options.max_turns
        {
            for agent in 0..maze.num_agents()
            {
                if maze.is_over()
                {
                    break;
                }

                let action = match agent
                {
                    | MAXIMIZER => self.agent.choose_action(&maze)?,
                    | _ =>
                    {
                        let actions = maze.legal_actions(agent);
                        // A boxed-in ghost just waits for its next turn.
                        let Some(&action) = actions.choose(&mut self.rng)
                        else
                        {
                            continue;
                        };
                        action
                    }
                };

                maze = maze.successor(agent, action)?;
            }

            if !self.options.quiet
            {
                println!("{}\n", maze);
            }
        }

        Ok(maze)
    }
}

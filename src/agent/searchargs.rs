use clap::ValueEnum;
use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// The policy an agent uses to pick its action.
pub enum Mode
{
    /// Scores each immediate successor and breaks ties at random.
    Reflex,
    #[default]
    /// Assumes every adversary plays its worst-case reply.
    Minimax,
    #[value(name = "alphabeta")]
    /// Minimax with branch-and-bound pruning.
    AlphaBeta,
    /// Assumes every adversary picks uniformly at random.
    Expectimax,
}

impl std::fmt::Display for Mode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Reflex => "reflex",
            | Self::Minimax => "minimax",
            | Self::AlphaBeta => "alphabeta",
            | Self::Expectimax => "expectimax",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Mode
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s.to_ascii_lowercase().as_str()
        {
            | "reflex" => Ok(Self::Reflex),
            | "minimax" => Ok(Self::Minimax),
            | "alphabeta" | "alpha-beta" => Ok(Self::AlphaBeta),
            | "expectimax" => Ok(Self::Expectimax),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Options with which the user can control an agent's search.
pub struct SearchArgs
{
    pub mode:      Mode,
    /// The registry name of the evaluator to plug in at cutoffs.
    pub evaluator: String,
    pub depth:     Depth,
    /// Seeds the reflex tie-break; entropy is used when absent.
    pub seed:      Option<u64>,
}

impl Default for SearchArgs
{
    fn default() -> Self
    {
        SearchArgs {
            mode:      Mode::default(),
            evaluator: "score".into(),
            depth:     Depth::DEFAULT,
            seed:      None,
        }
    }
}

impl SearchArgs
{
    /// Tries to parse a comma-separated list of `key=value` pairs on top of the defaults.
    ///
    /// Recognized keys are `mode`, `evaluator`, `depth` and `seed`.
    pub fn parse(args: &str) -> Result<SearchArgs>
    {
        let mut parsed = SearchArgs::default();
        parsed.apply(args)?;
        Ok(parsed)
    }

    /// Overrides these arguments with a comma-separated list of `key=value` pairs.
    pub fn apply(&mut self, args: &str) -> Result<()>
    {
        let base = Error::for_parse::<Self>(args.to_owned());
        let re = Regex::new(r"^\s*(?<key>[A-Za-z_]+)\s*=\s*(?<value>[^,=\s]+)\s*$").unwrap();

        for pair in args.split(',').filter(|s| !s.trim().is_empty())
        {
            let Some(caps) = re.captures(pair)
            else
            {
                let err = Error::new(Kind::ParseError, format!("Expected 'key=value', found '{}'.", pair.trim()));
                return Err(err.chain(base));
            };

            let value = &caps["value"];
            match &caps["key"]
            {
                | "mode" => self.mode = value.parse::<Mode>().map_err(|e| e.chain(base.clone()))?,
                | "evaluator" => self.evaluator = value.to_owned(),
                | "depth" => self.depth = value.parse::<Depth>()?,
                | "seed" =>
                {
                    let Ok(seed) = value.parse::<u64>()
                    else
                    {
                        return Err(Error::for_parse::<u64>(value.to_owned()).chain(base));
                    };
                    self.seed = Some(seed);
                }
                | key => return Err(Error::new(Kind::InvalidOption, format!("Unrecognized agent argument '{}'.", key))),
            }
        }

        Ok(())
    }
}

use crate::prelude::*;

/// A desirability score; higher is better for the maximizing agent.
pub type Score = f64;

pub mod consts
{
    use super::Score;

    /// The identity of maximization.
    pub const WORST: Score = Score::NEG_INFINITY;

    /// The identity of minimization.
    pub const BEST: Score = Score::INFINITY;
}

pub use consts::*;

/// Rejects scores that are not finite reals, since they poison every comparison above them.
pub fn ensure_finite(score: Score) -> Result<Score>
{
    match score.is_finite()
    {
        | true => Ok(score),
        | false => Err(Error::new(Kind::InvalidScore, format!("Evaluator produced the non-finite score {}.", score))),
    }
}

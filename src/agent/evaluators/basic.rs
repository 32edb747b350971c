use crate::prelude::*;

/// The default evaluator, which trusts the game's own score.
pub fn score<P: Arena>(position: &P) -> Score
{
    position.score()
}

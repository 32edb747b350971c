use super::nearest;
use crate::prelude::*;

const DANGER_RADIUS: u32 = 2;
const DANGER_PENALTY: f64 = 100.0;

/// A one-step evaluator for the reflex agent: stay close to food and away from adversaries.
pub fn reflex<P: Arena>(position: &P) -> Score
{
    let score = position.score();
    let hero = position.hero();

    let ghost = nearest(hero, position.adversaries().iter().filter(|a| a.dangerous()).map(|a| a.cell));
    if position.is_lose() || ghost.is_some_and(|d| d < DANGER_RADIUS)
    {
        return score - DANGER_PENALTY;
    }

    match (ghost, nearest(hero, position.food()))
    {
        | (Some(ghost), Some(food)) => score + ghost as f64 / (10.0 * food.max(1) as f64),
        | (None, Some(food)) => score + 1.0 / food.max(1) as f64,
        | _ => score,
    }
}

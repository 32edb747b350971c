use super::nearest;
use crate::prelude::*;

/// Adversaries closer than this are an immediate threat.
const DANGER_RADIUS: u32 = 2;

/// Beyond this distance an adversary is no longer worth running from.
const GHOST_HORIZON: u32 = 8;

const DANGER_PENALTY: f64 = 1000.0;

const K_CAPSULE: f64 = 20.0;
const K_CAPSULES_LEFT: f64 = 40.0;
const K_FOOD: f64 = 10.0;
const K_FOOD_LEFT: f64 = 100.0;
const K_GHOST: f64 = 1.0;
const K_HUNT: f64 = 50.0;

/// An evaluator that chases food and power-ups, keeps its distance from adversaries, and hunts harmless ones.
pub fn better<P: Arena>(position: &P) -> Score
{
    let score = position.score();
    if position.is_lose()
    {
        return score - DANGER_PENALTY;
    }

    let hero = position.hero();
    let adversaries = position.adversaries();

    let dangerous = nearest(hero, adversaries.iter().filter(|a| a.dangerous()).map(|a| a.cell));
    if dangerous.is_some_and(|d| d < DANGER_RADIUS)
    {
        return score - DANGER_PENALTY;
    }

    let food = position.food();
    let mut evaluation = score + K_FOOD_LEFT / (food.len() as f64 + 1.0);

    if let Some(d) = nearest(hero, food)
    {
        evaluation += K_FOOD / d.max(1) as f64;
    }

    // Without any dangerous adversary around, there is nothing to keep away from.
    evaluation += K_GHOST * dangerous.unwrap_or(GHOST_HORIZON).min(GHOST_HORIZON) as f64;

    // A harmless adversary is only worth chasing if it stays harmless long enough to be caught.
    for adversary in adversaries.iter().filter(|a| !a.dangerous())
    {
        let d = hero.manhattan(adversary.cell);
        if d < adversary.scared
        {
            evaluation += K_HUNT / d.max(1) as f64;
        }
    }

    let capsules = position.power_ups();
    if let Some(d) = nearest(hero, capsules.iter().copied())
    {
        evaluation += K_CAPSULE / d.max(1) as f64 - K_CAPSULES_LEFT * capsules.len() as f64;
    }

    evaluation
}

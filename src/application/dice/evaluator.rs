//! Roll evaluator

use crate::domain::entities::{ParsedRoll, RollResult};
use crate::domain::traits::RandomSource;

/// Roll every die of `roll`, adding the modifier to each one.
///
/// Values are kept in draw order. A roll with `count == 0` gives an empty result.
pub fn evaluate<R>(roll: &ParsedRoll, notation: &str, rng: &mut R) -> RollResult
where
    R: RandomSource + ?Sized,
{
    let mut values = Vec::with_capacity(roll.count as usize);
    for _ in 0..roll.count {
        let die = if roll.sides > 0 { rng.roll_die(roll.sides) } else { 0 };
        values.push(i64::from(die).saturating_add(roll.modifier));
    }

    RollResult {
        notation: notation.to_string(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dice::testing::ScriptedRandom;
    use crate::infrastructure::random::OsRandom;

    #[test]
    fn test_values_follow_draw_order() {
        let mut rng = ScriptedRandom::new(vec![5, 1, 3]);
        let result = evaluate(&ParsedRoll::new(3, 6, 0), "3d6", &mut rng);
        assert_eq!(result.notation, "3d6");
        assert_eq!(result.values, vec![5, 1, 3]);
    }

    #[test]
    fn test_modifier_applies_to_every_die() {
        let mut rng = ScriptedRandom::new(vec![1, 6]);
        let result = evaluate(&ParsedRoll::new(4, 6, -2), "4d6-2", &mut rng);
        assert_eq!(result.values, vec![-1, 4, -1, 4]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = ScriptedRandom::new(vec![1]);
        let result = evaluate(&ParsedRoll::new(0, 6, 0), "0d6", &mut rng);
        assert!(result.values.is_empty());
    }

    #[test]
    fn test_values_within_bounds() {
        let mut rng = OsRandom;
        let roll = ParsedRoll::new(500, 12, 3);
        let result = evaluate(&roll, "500d12+3", &mut rng);
        assert_eq!(result.values.len(), 500);
        assert!(result.values.iter().all(|v| (4..=15).contains(v)));
    }

    #[test]
    fn test_d6_distribution_covers_all_faces() {
        let mut rng = OsRandom;
        let roll = ParsedRoll::new(1, 6, 0);
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let result = evaluate(&roll, "1d6", &mut rng);
            assert_eq!(result.values.len(), 1);
            let value = result.values[0];
            assert!((1..=6).contains(&value), "out of range: {}", value);
            seen[(value - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "faces seen: {:?}", seen);
    }
}

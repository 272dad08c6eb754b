/// Source of die rolls.
///
/// Implementations must return a uniformly distributed value in `1..=sides`.
/// The evaluator never calls this with `sides == 0`.
pub trait RandomSource {
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

//! Dice pipeline - notation parsing, roll evaluation and reply composition

pub mod composer;
pub mod evaluator;
pub mod notation;

pub use composer::RollComposer;
pub use evaluator::evaluate;
pub use notation::{parse, parse_notation, validate, Notation};

#[cfg(test)]
pub(crate) mod testing {
    use crate::domain::traits::RandomSource;

    /// Replays a fixed script of rolls, wrapping each into `1..=sides`
    pub struct ScriptedRandom {
        script: Vec<u32>,
        cursor: usize,
    }

    impl ScriptedRandom {
        pub fn new(script: Vec<u32>) -> Self {
            Self { script, cursor: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn roll_die(&mut self, sides: u32) -> u32 {
            let value = self.script[self.cursor % self.script.len()];
            self.cursor += 1;
            (value - 1) % sides + 1
        }
    }
}

use std::fmt;

/// Bounds applied to every roll command, read-only once the bot has started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceLimits {
    /// Tokens beyond this count are dropped with a warning
    pub max_dice_args: usize,
    pub max_dice_count: u32,
    pub max_dice_sides: u32,
    /// Longest reply body, in characters, the transport accepts
    pub max_message_length: usize,
}

impl Default for DiceLimits {
    fn default() -> Self {
        Self {
            max_dice_args: 10,
            max_dice_count: 1000,
            max_dice_sides: 1000,
            max_message_length: 2000,
        }
    }
}

/// A validated dice notation token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRoll {
    pub count: u32,
    pub sides: u32,
    /// Added to every individual die
    pub modifier: i64,
}

impl ParsedRoll {
    pub const fn new(count: u32, sides: u32, modifier: i64) -> Self {
        Self { count, sides, modifier }
    }
}

impl fmt::Display for ParsedRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// The individual dice of one evaluated token, in draw order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub notation: String,
    pub values: Vec<i64>,
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.notation)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_display() {
        let result = RollResult {
            notation: "3d6+1".to_string(),
            values: vec![2, 7, 4],
        };
        assert_eq!(result.to_string(), "3d6+1: 2 7 4");
    }

    #[test]
    fn test_empty_result_display() {
        let result = RollResult {
            notation: "0d6".to_string(),
            values: Vec::new(),
        };
        assert_eq!(result.to_string(), "0d6:");
    }

    #[test]
    fn test_parsed_roll_display() {
        assert_eq!(ParsedRoll::new(2, 20, 0).to_string(), "2d20");
        assert_eq!(ParsedRoll::new(1, 8, -3).to_string(), "1d8-3");
        assert_eq!(ParsedRoll::new(4, 6, 2).to_string(), "4d6+2");
    }
}

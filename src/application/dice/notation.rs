//! Dice notation parser
//!
//! Accepts exactly `<count>d<sides>[(+|-)<modifier>]` with ASCII digits and no
//! whitespace. Parsing happens in two stages: [`parse_notation`] checks the
//! syntax, [`validate`] applies the configured bounds.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::application::errors::RollError;
use crate::domain::entities::{DiceLimits, ParsedRoll};

static NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)d(\d+)([+-]\d+)?$").expect("dice notation pattern must compile")
});

/// The captured groups of a syntactically valid token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation<'a> {
    pub token: &'a str,
    pub count: &'a str,
    pub sides: &'a str,
    pub modifier: Option<&'a str>,
}

/// Check a token against the notation grammar.
pub fn parse_notation(token: &str) -> Result<Notation<'_>, RollError> {
    let caps = NOTATION
        .captures(token)
        .ok_or_else(|| RollError::Format(token.to_string()))?;

    // Groups 1 and 2 are mandatory in the pattern
    let (Some(count), Some(sides)) = (caps.get(1), caps.get(2)) else {
        return Err(RollError::Format(token.to_string()));
    };

    Ok(Notation {
        token,
        count: count.as_str(),
        sides: sides.as_str(),
        modifier: caps.get(3).map(|m| m.as_str()),
    })
}

/// Turn captured groups into a [`ParsedRoll`], enforcing the configured bounds.
pub fn validate(notation: Notation<'_>, limits: &DiceLimits) -> Result<ParsedRoll, RollError> {
    let out_of_range = || RollError::Value {
        token: notation.token.to_string(),
        max_count: limits.max_dice_count,
        max_sides: limits.max_dice_sides,
    };

    // Digit runs too long for u32 are necessarily above any bound
    let count: u32 = notation.count.parse().map_err(|_| out_of_range())?;
    let sides: u32 = notation.sides.parse().map_err(|_| out_of_range())?;
    let modifier: i64 = match notation.modifier {
        Some(m) => m.parse().map_err(|_| out_of_range())?,
        None => 0,
    };

    if count == 0 || count > limits.max_dice_count {
        return Err(out_of_range());
    }
    if sides == 0 || sides > limits.max_dice_sides {
        return Err(out_of_range());
    }
    if i64::from(sides).checked_add(modifier).is_none() {
        return Err(out_of_range());
    }

    Ok(ParsedRoll::new(count, sides, modifier))
}

/// Parse and validate a single dice notation token.
pub fn parse(token: &str, limits: &DiceLimits) -> Result<ParsedRoll, RollError> {
    validate(parse_notation(token)?, limits)
}

//! Response composer - turns a roll command into the replies to send

use crate::application::errors::RollError;
use crate::domain::entities::{CommandRequest, Composition, DiceLimits, ParsedRoll, Reply, RollResult};
use crate::domain::traits::RandomSource;
use super::{evaluate, notation};

/// Rolled when the command carries no dice at all
const QUICK_ROLL: ParsedRoll = ParsedRoll::new(1, 20, 0);
const QUICK_ROLL_NOTATION: &str = "1d20";

/// Composes roll replies under a fixed set of limits
#[derive(Debug, Clone, Copy, Default)]
pub struct RollComposer {
    limits: DiceLimits,
}

impl RollComposer {
    pub fn new(limits: DiceLimits) -> Self {
        Self { limits }
    }

    /// Roll every token of the request and build the reply.
    ///
    /// Never fails: parse errors and oversized results come back as
    /// [`Reply::Error`]. A `TooManyArgs` advisory is attached when tokens had
    /// to be dropped.
    pub fn compose<R>(&self, request: &CommandRequest, rng: &mut R) -> Composition
    where
        R: RandomSource + ?Sized,
    {
        if request.tokens.is_empty() {
            tracing::debug!("[{}] quick roll", request.author);
            let result = evaluate(&QUICK_ROLL, QUICK_ROLL_NOTATION, rng);
            return Composition::new(self.assemble(&[result]));
        }

        let (tokens, advisory) = self.bound_tokens(&request.tokens);

        let reply = match self.roll_all(tokens, rng) {
            Ok(results) => self.assemble(&results),
            Err(e) => {
                tracing::debug!("[{}] rejected dice: {}", request.author, e);
                Reply::from(e)
            }
        };

        Composition::new(reply).with_advisory(advisory)
    }

    /// Drop tokens past the configured maximum
    fn bound_tokens<'a>(&self, tokens: &'a [String]) -> (&'a [String], Option<Reply>) {
        let max = self.limits.max_dice_args;
        if tokens.len() > max {
            tracing::debug!("truncating {} dice arguments to {}", tokens.len(), max);
            (&tokens[..max], Some(Reply::too_many_args(tokens.len(), max)))
        } else {
            (tokens, None)
        }
    }

    /// Parse and roll each token; the first bad token aborts the batch
    fn roll_all<R>(&self, tokens: &[String], rng: &mut R) -> Result<Vec<RollResult>, RollError>
    where
        R: RandomSource + ?Sized,
    {
        let mut results = Vec::with_capacity(tokens.len());
        for token in tokens {
            let roll = notation::parse(token, &self.limits)?;
            results.push(evaluate(&roll, token, rng));
        }
        Ok(results)
    }

    fn assemble(&self, results: &[RollResult]) -> Reply {
        let body = results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        let length = body.chars().count();
        if length > self.limits.max_message_length {
            tracing::debug!("reply body of {} characters discarded", length);
            return Reply::message_too_long(length, self.limits.max_message_length);
        }

        Reply::success(body)
    }
}

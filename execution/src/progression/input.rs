//! Parse-with-fallback layer between raw player input and typed configuration.
//!
//! Parsing never fails. Unusable input degrades to a fallback value and the
//! result records that it did, so callers can tell the two apart.

use doubleup_types::progression::FALLBACK_PROBABILITY_PERCENT;
use serde::Serialize;

/// Finite number from trimmed text, or `None`.
///
/// Blank input reads as zero. `NaN` and infinities are unparseable.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BetInput {
    pub bet: f64,
    pub fallback: bool,
}

/// Parse a bet, keeping `previous` when the text is not a number.
pub fn parse_bet(raw: &str, previous: f64) -> BetInput {
    match parse_number(raw) {
        Some(bet) => BetInput {
            bet,
            fallback: false,
        },
        None => BetInput {
            bet: previous,
            fallback: true,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbabilityAdjustment {
    /// Input was not a number; the fallback percentage was used.
    Fallback,
    /// Input was outside `[0, 100]` percent and was clamped.
    Clamped { requested: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProbabilityInput {
    /// Fraction in `[0, 1]`.
    pub probability: f64,
    pub adjustment: Option<ProbabilityAdjustment>,
}

/// Parse a percentage such as `"50%"` into a fraction.
///
/// Only the text before the first `%` is read. Values outside `[0, 100]` are
/// clamped.
pub fn parse_probability(raw: &str) -> ProbabilityInput {
    let prefix = raw.split('%').next().unwrap_or_default();
    let (percent, adjustment) = match parse_number(prefix) {
        Some(requested) if !(0.0..=100.0).contains(&requested) => (
            requested.clamp(0.0, 100.0),
            Some(ProbabilityAdjustment::Clamped { requested }),
        ),
        Some(percent) => (percent, None),
        None => (
            FALLBACK_PROBABILITY_PERCENT,
            Some(ProbabilityAdjustment::Fallback),
        ),
    };
    ProbabilityInput {
        probability: percent / 100.0,
        adjustment,
    }
}

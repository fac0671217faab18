/// Number of rungs on the ladder (levels 0 through 9)
pub const MAX_LEVEL: u8 = 10;

/// Highest level a gamble can reach
pub const TOP_LEVEL: u8 = MAX_LEVEL - 1;

/// Win chance used by a fresh session
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Percentage used when a probability input cannot be parsed
pub const FALLBACK_PROBABILITY_PERCENT: f64 = 50.0;

/// Fixed recharge denominations offered to the player
pub const RECHARGE_DENOMINATIONS: [f64; 4] = [10.0, 20.0, 30.0, 40.0];

/// Amount credited by the quick-recharge shortcut
pub const QUICK_RECHARGE: f64 = 40.0;

/// Raw bet submitted by the quick-bet shortcut
pub const QUICK_BET: &str = "10";

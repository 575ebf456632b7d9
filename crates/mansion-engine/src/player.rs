//! Player state management.

use std::fmt;

/// Lowest possible luck.
pub const LUCK_MIN: i32 = 0;
/// Highest possible luck.
pub const LUCK_MAX: i32 = 100;
/// Luck at the start of a session unless configured otherwise.
pub const DEFAULT_LUCK: i32 = 50;

/// The player's state: a single luck value kept within
/// [`LUCK_MIN`]..=[`LUCK_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    luck: i32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self { luck: DEFAULT_LUCK }
    }
}

impl PlayerState {
    /// Create a player state with the default luck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player state with the given luck (clamped).
    pub fn with_luck(luck: i32) -> Self {
        Self {
            luck: luck.clamp(LUCK_MIN, LUCK_MAX),
        }
    }

    /// Add `delta` to luck, clamp, and return the new value.
    pub fn apply(&mut self, delta: i32) -> i32 {
        self.luck = self.luck.saturating_add(delta).clamp(LUCK_MIN, LUCK_MAX);
        self.luck
    }

    /// Current luck.
    pub fn current(&self) -> i32 {
        self.luck
    }

    /// Display tier of the current luck.
    pub fn tier(&self) -> LuckTier {
        LuckTier::from_luck(self.luck)
    }
}

/// Coarse band of luck used when displaying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckTier {
    /// Below 40.
    Low,
    /// 40 to 69.
    Medium,
    /// 70 and above.
    High,
}

impl LuckTier {
    /// Classify a luck value.
    pub fn from_luck(luck: i32) -> Self {
        if luck >= 70 {
            Self::High
        } else if luck >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get the display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for LuckTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

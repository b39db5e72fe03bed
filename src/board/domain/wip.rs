//! Work-in-progress limit policy.

use super::{BoardDomainError, Column};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default share of the WIP limit at which a column counts as approaching.
pub const DEFAULT_APPROACHING_PERCENT: u8 = 80;

/// How full a column is relative to its WIP limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillLevel {
    /// Below the approaching threshold, or unlimited.
    Normal,
    /// At or above the approaching threshold but below the limit.
    Approaching,
    /// At or above the limit.
    AtLimit,
}

impl FillLevel {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Approaching => "approaching",
            Self::AtLimit => "at_limit",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// WIP limit evaluation settings.
///
/// # Examples
///
/// ```
/// use kanban_core::board::domain::WipPolicy;
///
/// let policy = WipPolicy::default();
/// assert_eq!(policy.approaching_percent(), 80);
///
/// assert!(WipPolicy::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WipPolicyConfig", into = "WipPolicyConfig")]
pub struct WipPolicy {
    approaching_percent: u8,
}

impl WipPolicy {
    /// Creates a policy with a custom approaching threshold.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidApproachingPercent`] when the
    /// percentage exceeds 100.
    pub const fn new(approaching_percent: u8) -> Result<Self, BoardDomainError> {
        if approaching_percent > 100 {
            return Err(BoardDomainError::InvalidApproachingPercent(
                approaching_percent,
            ));
        }
        Ok(Self {
            approaching_percent,
        })
    }

    /// Returns the approaching threshold as a percentage of the limit.
    #[must_use]
    pub const fn approaching_percent(self) -> u8 {
        self.approaching_percent
    }

    /// Returns `true` when the column can take one more task.
    ///
    /// A limit of zero never accepts.
    #[must_use]
    pub fn can_accept(self, column: &Column) -> bool {
        column
            .max_tasks()
            .is_none_or(|max_tasks| column.task_count() < max_tasks)
    }

    /// Classifies how full the column is.
    ///
    /// The threshold comparison is done on integers
    /// (`count * 100 >= max * percent`) so it is never rounded.
    #[must_use]
    pub fn fill_level(self, column: &Column) -> FillLevel {
        let Some(max_tasks) = column.max_tasks() else {
            return FillLevel::Normal;
        };
        let count = column.task_count();
        if count >= max_tasks {
            return FillLevel::AtLimit;
        }
        let scaled_count = count.saturating_mul(100);
        let threshold = max_tasks.saturating_mul(usize::from(self.approaching_percent));
        if scaled_count >= threshold {
            FillLevel::Approaching
        } else {
            FillLevel::Normal
        }
    }

    /// Returns how many more tasks fit, or `None` for unlimited columns.
    #[must_use]
    pub fn remaining_capacity(self, column: &Column) -> Option<usize> {
        column
            .max_tasks()
            .map(|max_tasks| max_tasks.saturating_sub(column.task_count()))
    }
}

impl Default for WipPolicy {
    fn default() -> Self {
        Self {
            approaching_percent: DEFAULT_APPROACHING_PERCENT,
        }
    }
}

/// Serialized form of [`WipPolicy`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WipPolicyConfig {
    #[serde(default = "default_approaching_percent")]
    approaching_percent: u8,
}

const fn default_approaching_percent() -> u8 {
    DEFAULT_APPROACHING_PERCENT
}

impl TryFrom<WipPolicyConfig> for WipPolicy {
    type Error = BoardDomainError;

    fn try_from(value: WipPolicyConfig) -> Result<Self, Self::Error> {
        Self::new(value.approaching_percent)
    }
}

impl From<WipPolicy> for WipPolicyConfig {
    fn from(value: WipPolicy) -> Self {
        Self {
            approaching_percent: value.approaching_percent,
        }
    }
}

/// Returns `true` when the column can take one more task under the default
/// policy.
#[must_use]
pub fn can_accept(column: &Column) -> bool {
    WipPolicy::default().can_accept(column)
}

/// Classifies the column under the default policy.
#[must_use]
pub fn fill_level(column: &Column) -> FillLevel {
    WipPolicy::default().fill_level(column)
}

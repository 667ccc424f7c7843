//! Skip/limit pagination value object.

use serde::{Deserialize, Serialize};

/// Page size used when the caller supplies none, or one out of bounds.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page a list operation will ever return.
pub const MAX_LIMIT: u32 = 100;

/// Normalized pagination window.
///
/// Always satisfies `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    skip: u32,
    limit: u32,
}

impl PageRequest {
    /// Strict window: a limit that is not in `1..=MAX_LIMIT` falls back to
    /// `DEFAULT_LIMIT`.
    pub fn bounded(skip: i64, limit: i64) -> Self {
        let limit = if limit <= 0 || limit > i64::from(MAX_LIMIT) {
            DEFAULT_LIMIT
        } else {
            limit as u32
        };
        Self {
            skip: clamp_skip(skip),
            limit,
        }
    }

    /// Lenient window: only a missing (zero or negative) limit falls back to
    /// `DEFAULT_LIMIT`; larger limits are kept, capped at `MAX_LIMIT`.
    pub fn defaulted(skip: i64, limit: i64) -> Self {
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(i64::from(MAX_LIMIT)) as u32
        };
        Self {
            skip: clamp_skip(skip),
            limit,
        }
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Applies the window to an already ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn clamp_skip(skip: i64) -> u32 {
    skip.clamp(0, i64::from(u32::MAX)) as u32
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::CategoryId;

/// Rounded percentage `round(100 * part / whole)`, 0 when `whole` is 0.
///
/// Halves round up, matching how the stored percentages were always computed.
#[must_use]
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part);
    let whole = u64::from(whole);
    u32::try_from((200 * part + whole) / (2 * whole)).unwrap_or(u32::MAX)
}

/// Outcome of one completed quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    #[must_use]
    pub fn percent(self) -> u32 {
        percent(self.correct, self.total)
    }
}

/// Coarse rating used to color percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Ok,
    Warn,
    Bad,
}

impl ScoreTone {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            Self::Ok
        } else if percent >= 60 {
            Self::Warn
        } else {
            Self::Bad
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTone::Ok => "ok",
            ScoreTone::Warn => "warn",
            ScoreTone::Bad => "bad",
        }
    }
}

/// Latest completed attempt for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub score: u32,
    pub total: u32,
    #[serde(rename = "pct", default)]
    pub percent: u32,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_score(score: Score, at: DateTime<Utc>) -> Self {
        Self {
            score: score.correct,
            total: score.total,
            percent: score.percent(),
            last_updated: Some(at),
        }
    }
}

/// Everything persisted about the learner, keyed by category id.
///
/// Replaced wholesale on every save; two writers race with last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStore {
    #[serde(default)]
    pub scores: BTreeMap<CategoryId, ProgressRecord>,
    #[serde(default)]
    pub attempts: BTreeMap<CategoryId, u32>,
    #[serde(rename = "lastSeen", default)]
    pub last_seen: BTreeMap<CategoryId, DateTime<Utc>>,
}

impl ProgressStore {
    #[must_use]
    pub fn record(&self, category: &CategoryId) -> Option<&ProgressRecord> {
        self.scores.get(category)
    }

    #[must_use]
    pub fn attempts(&self, category: &CategoryId) -> u32 {
        self.attempts.get(category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn last_seen(&self, category: &CategoryId) -> Option<DateTime<Utc>> {
        self.last_seen.get(category).copied()
    }

    /// Overwrite the category's record with this attempt and bump its counter.
    pub fn record_attempt(&mut self, category: &CategoryId, score: Score, at: DateTime<Utc>) {
        self.scores
            .insert(category.clone(), ProgressRecord::from_score(score, at));
        let attempts = self.attempts.entry(category.clone()).or_insert(0);
        *attempts = attempts.saturating_add(1);
        self.last_seen.insert(category.clone(), at);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty() && self.attempts.is_empty() && self.last_seen.is_empty()
    }
}

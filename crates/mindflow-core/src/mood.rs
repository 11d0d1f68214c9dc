//! Mood time series built from a user's journal entries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::journal::JournalEntry;

/// Number of scored entries kept in a trend.
pub const TREND_WINDOW: usize = 30;

/// Score reported when there is nothing to average.
const NEUTRAL_SCORE: i32 = 50;

/// Coarse label for a mood score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBand {
    Great,
    Okay,
    Difficult,
}

impl MoodBand {
    #[must_use]
    pub fn for_score(score: i32) -> Self {
        if score >= 70 {
            Self::Great
        } else if score >= 40 {
            Self::Okay
        } else {
            Self::Difficult
        }
    }
}

impl std::fmt::Display for MoodBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodBand::Great => write!(f, "Great"),
            MoodBand::Okay => write!(f, "Okay"),
            MoodBand::Difficult => write!(f, "Difficult"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodPoint {
    pub date: DateTime<Utc>,
    pub mood: i32,
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodTrend {
    /// Oldest first.
    pub points: Vec<MoodPoint>,
    pub average: i32,
    pub band: MoodBand,
}

/// Build the chart series from entries ordered newest first.
///
/// Unscored entries are skipped, the newest [`TREND_WINDOW`] scored entries
/// are kept, and the series is returned oldest first. The average is the
/// mean rounded half up, or 50 when no entry carries a score.
#[must_use]
pub fn build_mood_trend(entries_newest_first: &[JournalEntry]) -> MoodTrend {
    let mut points: Vec<MoodPoint> = entries_newest_first
        .iter()
        .filter_map(|entry| {
            entry.mood_score.map(|mood| MoodPoint {
                date: entry.created_at,
                mood,
                emotion: entry.primary_emotion.clone(),
            })
        })
        .take(TREND_WINDOW)
        .collect();
    points.reverse();

    let average = rounded_mean(points.iter().map(|p| i64::from(p.mood)), points.len());

    MoodTrend {
        band: MoodBand::for_score(average),
        points,
        average,
    }
}

fn rounded_mean(values: impl Iterator<Item = i64>, count: usize) -> i32 {
    let Ok(n) = i64::try_from(count) else {
        return NEUTRAL_SCORE;
    };
    if n == 0 {
        return NEUTRAL_SCORE;
    }
    let sum: i64 = values.sum();
    // Scores are non-negative, so floor((sum + n/2) / n) rounds half up.
    i32::try_from((sum + n / 2) / n).unwrap_or(NEUTRAL_SCORE)
}

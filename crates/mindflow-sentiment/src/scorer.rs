//! Maps a sentiment distribution onto a mood score.

use crate::types::{Emotion, LabelClass, LabelMap, Prediction, SentimentResult, NEUTRAL_MOOD_SCORE};

/// Pick the most confident prediction.
///
/// Scans in order with a strict `>` so the first of several equal maxima wins.
#[must_use]
pub fn top_prediction(predictions: &[Prediction]) -> Option<&Prediction> {
    let mut iter = predictions.iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if candidate.score > best.score {
            best = candidate;
        }
    }
    Some(best)
}

/// Turn a distribution into a [`SentimentResult`].
///
/// Positive labels score `50 + confidence * 50`, negative labels
/// `50 - confidence * 50`, anything else 50. Returns `None` for an empty
/// distribution.
#[must_use]
pub fn score_predictions(predictions: &[Prediction], labels: &LabelMap) -> Option<SentimentResult> {
    let top = top_prediction(predictions)?;

    let class = labels.class_of(&top.label).unwrap_or_else(|| {
        tracing::debug!(label = %top.label, "unmapped sentiment label, treating as neutral");
        LabelClass::Neutral
    });

    let (primary_emotion, mood_score) = match class {
        LabelClass::Positive => (Emotion::Happy, round_score(50.0 + top.score * 50.0)),
        LabelClass::Negative => (Emotion::Sad, round_score(50.0 - top.score * 50.0)),
        LabelClass::Neutral => (Emotion::Neutral, NEUTRAL_MOOD_SCORE),
    };

    let confidence = percent(top.score);
    Some(SentimentResult {
        mood_score: mood_score.clamp(0, 100),
        primary_emotion,
        analysis: format!("AI detected {primary_emotion} sentiment with {confidence}% confidence."),
    })
}

// `as` saturates on out-of-range floats; the caller clamps afterwards.
#[allow(clippy::cast_possible_truncation)]
fn round_score(value: f64) -> i32 {
    value.round() as i32
}

#[allow(clippy::cast_possible_truncation)]
fn percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

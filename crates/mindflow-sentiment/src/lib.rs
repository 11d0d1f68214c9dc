//! Mood scoring for journal entries.
//!
//! Sends entry text to a hosted three-class sentiment model, picks the most
//! confident class, and turns it into a 0..=100 mood score plus a coarse
//! emotion. Every failure degrades to a neutral result so that saving an
//! entry never depends on the classifier being reachable.

pub mod client;
pub mod error;
pub mod scorer;
pub mod types;

pub use client::SentimentClassifier;
pub use error::ClassifierError;
pub use scorer::{score_predictions, top_prediction};
pub use types::{Emotion, LabelClass, LabelMap, Prediction, SentimentConfig, SentimentResult};

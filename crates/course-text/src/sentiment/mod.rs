//! Lexicon-based sentiment analysis.
//!
//! Text is lowercased and split into word tokens. Each token found in the
//! lexicon contributes its polarity and subjectivity, scaled by a preceding
//! intensifier ("very good") and with polarity reversed and halved after a
//! negation ("not good"). Modifiers only reach the word right after them,
//! possibly through other modifiers ("not very good"). The final scores are
//! the mean over contributing tokens.

mod lexicon;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("Invalid token regex"));

const NEGATION_FACTOR: f64 = -0.5;

/// Overall reading of a polarity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    /// Polarity above zero.
    Positive,
    /// Polarity below zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl Assessment {
    /// Classify a polarity score.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Sentiment of a text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1 (negative) to 1 (positive), two decimals.
    pub polarity: f64,
    /// 0 (objective) to 1 (subjective), two decimals.
    pub subjectivity: f64,
    /// Classification of the unrounded polarity.
    pub assessment: Assessment,
}

/// Analyze the sentiment of `text`.
pub fn analyze(text: &str) -> Sentiment {
    let (polarity, subjectivity) = raw_scores(text);
    Sentiment {
        polarity: round2(polarity),
        subjectivity: round2(subjectivity),
        assessment: Assessment::from_polarity(polarity),
    }
}

fn raw_scores(text: &str) -> (f64, f64) {
    let lowered = text.to_lowercase();

    let mut entries = Vec::new();
    let mut pending_intensity: Option<f64> = None;
    let mut negated = false;

    for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
        if lexicon::is_negation(token) {
            negated = true;
            continue;
        }
        if let Some(intensity) = lexicon::intensity(token) {
            pending_intensity = Some(pending_intensity.unwrap_or(1.0) * intensity);
            continue;
        }
        let Some((mut polarity, mut subjectivity)) = lexicon::score(token) else {
            pending_intensity = None;
            negated = false;
            continue;
        };

        if let Some(intensity) = pending_intensity.take() {
            polarity *= intensity;
            subjectivity *= intensity;
        }
        if std::mem::take(&mut negated) {
            polarity *= NEGATION_FACTOR;
        }
        entries.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
    }

    if entries.is_empty() {
        return (0.0, 0.0);
    }

    let n = entries.len() as f64;
    let polarity = entries.iter().map(|(p, _)| p).sum::<f64>() / n;
    let subjectivity = entries.iter().map(|(_, s)| s).sum::<f64>() / n;
    (polarity, subjectivity)
}

fn round2(value: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0.
    (value * 100.0).round() / 100.0 + 0.0
}

//! Engine score values — centipawns or a mate distance, tagged at the boundary.

use serde::{Deserialize, Serialize};

/// Wire shape of a suggestion score. The backend sends either a bare number
/// (centipawns) or a string; strings carrying the `Mate` marker (`"Mate3"`,
/// `"Mate-2"`) are mate announcements, anything else is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScoreWire", into = "ScoreWire")]
pub enum Score {
    Centipawns(f64),
    Mate(String),
    Text(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ScoreWire {
    Number(f64),
    Text(String),
}

impl From<ScoreWire> for Score {
    fn from(wire: ScoreWire) -> Self {
        match wire {
            ScoreWire::Number(n) => Score::Centipawns(n),
            ScoreWire::Text(s) if s.contains("Mate") => Score::Mate(s),
            ScoreWire::Text(s) => Score::Text(s),
        }
    }
}

impl From<Score> for ScoreWire {
    fn from(score: Score) -> Self {
        match score {
            Score::Centipawns(n) => ScoreWire::Number(n),
            Score::Mate(s) | Score::Text(s) => ScoreWire::Text(s),
        }
    }
}

impl Score {
    /// Human-readable form: `"Mate3"` → `"Mate in 3"`, positive centipawns get
    /// an explicit `+`, everything else renders unmodified.
    pub fn format(&self) -> String {
        match self {
            Score::Mate(raw) => raw.replacen("Mate", "Mate in ", 1),
            Score::Centipawns(n) if *n > 0.0 => format!("+{}", fmt_num(*n)),
            Score::Centipawns(n) => fmt_num(*n),
            Score::Text(raw) => raw.clone(),
        }
    }

    /// CSS class pair for the score badge. Pure function of the variant.
    pub fn color_class(&self) -> &'static str {
        match self {
            Score::Mate(_) => "score-mate",
            Score::Centipawns(n) if *n > 0.0 => "score-positive",
            Score::Centipawns(n) if *n < 0.0 => "score-negative",
            Score::Centipawns(_) | Score::Text(_) => "score-neutral",
        }
    }
}

/// Integral centipawn values print without a trailing `.0`.
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_scores_format_with_prefix() {
        let score: Score = serde_json::from_str("\"Mate3\"").unwrap();
        assert_eq!(score, Score::Mate("Mate3".to_string()));
        assert_eq!(score.format(), "Mate in 3");
        assert_eq!(score.color_class(), "score-mate");

        let score: Score = serde_json::from_str("\"Mate-2\"").unwrap();
        assert_eq!(score.format(), "Mate in -2");
    }

    #[test]
    fn test_positive_scores_get_explicit_sign() {
        let score: Score = serde_json::from_str("142").unwrap();
        assert_eq!(score.format(), "+142");
        assert_eq!(score.color_class(), "score-positive");
    }

    #[test]
    fn test_negative_scores_unmodified() {
        let score: Score = serde_json::from_str("-57").unwrap();
        assert_eq!(score.format(), "-57");
        assert_eq!(score.color_class(), "score-negative");
    }

    #[test]
    fn test_zero_and_text_are_neutral() {
        let zero: Score = serde_json::from_str("0").unwrap();
        assert_eq!(zero.format(), "0");
        assert_eq!(zero.color_class(), "score-neutral");

        let text: Score = serde_json::from_str("\"unclear\"").unwrap();
        assert_eq!(text, Score::Text("unclear".to_string()));
        assert_eq!(text.format(), "unclear");
        assert_eq!(text.color_class(), "score-neutral");
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mate: Score = serde_json::from_str("\"Mate1\"").unwrap();
        assert_eq!(serde_json::to_string(&mate).unwrap(), "\"Mate1\"");

        let cp: Score = serde_json::from_str("-310").unwrap();
        assert_eq!(serde_json::to_string(&cp).unwrap(), "-310.0");
    }
}

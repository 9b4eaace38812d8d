//! Move explanations arrive in two shapes: a bare string, or a structured
//! object with optional sections. Both normalize to [`ParsedExplanation`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Explanation {
    Plain(String),
    Structured {
        #[serde(default)]
        best_move_explanation: Option<String>,
        #[serde(default)]
        strategic_idea: Option<String>,
        #[serde(default)]
        tactical_motif: Option<String>,
    },
}

/// Canonical explanation shape used at every render site: exactly three
/// string fields, missing sections defaulted to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedExplanation {
    pub best_move_explanation: String,
    pub strategic_idea: String,
    pub tactical_motif: String,
}

impl Explanation {
    pub fn normalize(&self) -> ParsedExplanation {
        match self {
            Explanation::Plain(text) => ParsedExplanation {
                best_move_explanation: text.clone(),
                strategic_idea: String::new(),
                tactical_motif: String::new(),
            },
            Explanation::Structured {
                best_move_explanation,
                strategic_idea,
                tactical_motif,
            } => ParsedExplanation {
                best_move_explanation: best_move_explanation.clone().unwrap_or_default(),
                strategic_idea: strategic_idea.clone().unwrap_or_default(),
                tactical_motif: tactical_motif.clone().unwrap_or_default(),
            },
        }
    }
}

impl ParsedExplanation {
    /// True when no section has content; the view falls back to a
    /// "no analysis available" card instead of rendering nothing.
    pub fn is_empty(&self) -> bool {
        self.best_move_explanation.is_empty()
            && self.strategic_idea.is_empty()
            && self.tactical_motif.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_becomes_best_move_explanation() {
        let expl: Explanation = serde_json::from_str("\"Controls the center.\"").unwrap();
        let parsed = expl.normalize();
        assert_eq!(parsed.best_move_explanation, "Controls the center.");
        assert_eq!(parsed.strategic_idea, "");
        assert_eq!(parsed.tactical_motif, "");
    }

    #[test]
    fn test_partial_object_defaults_missing_fields() {
        let expl: Explanation =
            serde_json::from_str(r#"{"strategic_idea": "Open the e-file."}"#).unwrap();
        let parsed = expl.normalize();
        assert_eq!(parsed.best_move_explanation, "");
        assert_eq!(parsed.strategic_idea, "Open the e-file.");
        assert_eq!(parsed.tactical_motif, "");
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_full_object_passes_through() {
        let expl: Explanation = serde_json::from_str(
            r#"{
                "best_move_explanation": "Wins a pawn.",
                "strategic_idea": "Queenside pressure.",
                "tactical_motif": "Fork"
            }"#,
        )
        .unwrap();
        let parsed = expl.normalize();
        assert_eq!(parsed.best_move_explanation, "Wins a pawn.");
        assert_eq!(parsed.strategic_idea, "Queenside pressure.");
        assert_eq!(parsed.tactical_motif, "Fork");
    }

    #[test]
    fn test_empty_object_is_empty() {
        let expl: Explanation = serde_json::from_str("{}").unwrap();
        assert!(expl.normalize().is_empty());
    }
}

//! The analysis payload as the backend sends it, and its assembly into
//! per-move display records.
//!
//! On the wire, `explanations[i]`, `suggestions[i]` and `rendered_images[i]`
//! are three parallel arrays correlated only by index. They are zipped into
//! [`MoveCard`] records once at ingestion so the views never index them
//! independently.

use serde::{Deserialize, Serialize};

use crate::explanation::{Explanation, ParsedExplanation};
use crate::score::Score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub fen: String,
    #[serde(default)]
    pub rendered_images: Vec<String>,
    /// `[uci, explanation]` pairs, explanation being string or object.
    #[serde(default)]
    pub explanations: Vec<(String, Explanation)>,
    /// `[uci, pv_line, score]` triples.
    #[serde(default)]
    pub suggestions: Vec<(String, String, Score)>,
    #[serde(default)]
    pub advanced_analysis: Option<AdvancedAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedAnalysis {
    pub best_move: AdvancedMoveData,
    #[serde(default)]
    pub all_moves: Vec<AdvancedMoveData>,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedMoveData {
    #[serde(rename = "move")]
    pub mv: String,
    #[serde(default)]
    pub engine_eval: f64,
    #[serde(default)]
    pub pv_length: f64,
    #[serde(default)]
    pub tactical_complexity: f64,
    #[serde(default)]
    pub king_safety: f64,
    #[serde(default)]
    pub positional_score: f64,
    #[serde(default)]
    pub norm_engine_eval: f64,
    #[serde(default)]
    pub norm_pv_length: f64,
    #[serde(default)]
    pub norm_tactical_complexity: f64,
    #[serde(default)]
    pub norm_king_safety: f64,
    #[serde(default)]
    pub norm_positional_score: f64,
    #[serde(default)]
    pub total_score: f64,
}

/// One suggestion, assembled from the three parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCard {
    /// 0-based position in the suggestion list.
    pub index: usize,
    pub uci: String,
    pub explanation: ParsedExplanation,
    pub variation: String,
    pub score: Score,
    pub board_image: Option<String>,
}

impl AnalysisResult {
    /// Transport success is not enough: the upload controller refuses to
    /// navigate unless the position and both lists actually arrived.
    pub fn validate(&self) -> Result<(), String> {
        if self.fen.trim().is_empty() || self.suggestions.is_empty() || self.explanations.is_empty()
        {
            return Err("Invalid response from server - missing required data".to_string());
        }
        Ok(())
    }

    /// Zip the parallel arrays into one record per move, in input order.
    /// Card count follows the explanation list; a short image or suggestion
    /// array degrades to a placeholder slot rather than a panic.
    pub fn move_cards(&self) -> Vec<MoveCard> {
        self.explanations
            .iter()
            .enumerate()
            .map(|(index, (uci, explanation))| {
                let suggestion = self.suggestions.get(index);
                MoveCard {
                    index,
                    uci: uci.clone(),
                    explanation: explanation.normalize(),
                    variation: suggestion.map(|s| s.1.clone()).unwrap_or_default(),
                    score: suggestion
                        .map(|s| s.2.clone())
                        .unwrap_or(Score::Text(String::new())),
                    board_image: self.rendered_images.get(index).cloned(),
                }
            })
            .collect()
    }
}

/// Bucket a normalized 0..=1 engine metric into a bar color.
pub fn metric_color(value: f64) -> &'static str {
    if value >= 0.8 {
        "metric-green"
    } else if value >= 0.6 {
        "metric-yellow"
    } else if value >= 0.4 {
        "metric-orange"
    } else {
        "metric-red"
    }
}

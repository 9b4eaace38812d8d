//! The typed hand-off between the upload flow and the results view.
//!
//! The browser persists three session-scoped strings; [`AnalysisSession`]
//! converts between them and one explicit transfer object so the results view
//! never touches loosely-keyed storage directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::AnalysisResult;

pub const RESULTS_KEY: &str = "chessAnalysisResults";
pub const FILE_KEY: &str = "chessAnalysisFile";
pub const TURN_KEY: &str = "chessAnalysisTurn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    White,
    Black,
}

impl Turn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Turn::White => "White",
            Turn::Black => "Black",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Turn {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "White" => Ok(Turn::White),
            "Black" => Ok(Turn::Black),
            other => Err(SessionError::InvalidTurn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub result: AnalysisResult,
    pub file_name: String,
    pub turn: Turn,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No analysis data found. Please upload an image first.")]
    Missing(&'static str),

    #[error("Failed to parse analysis results.")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown turn selection: {0}")]
    InvalidTurn(String),
}

impl AnalysisSession {
    /// Rebuild the session from the three stored strings. Any missing key or
    /// an unparsable result blob is terminal for the results view.
    pub fn from_parts(
        result_json: Option<String>,
        file_name: Option<String>,
        turn: Option<String>,
    ) -> Result<Self, SessionError> {
        let result_json = result_json.ok_or(SessionError::Missing(RESULTS_KEY))?;
        let file_name = file_name.ok_or(SessionError::Missing(FILE_KEY))?;
        let turn = turn.ok_or(SessionError::Missing(TURN_KEY))?;

        Ok(Self {
            result: serde_json::from_str(&result_json)?,
            file_name,
            turn: turn.parse()?,
        })
    }

    /// The three strings to persist, in key order
    /// (`RESULTS_KEY`, `FILE_KEY`, `TURN_KEY`).
    pub fn to_parts(&self) -> Result<(String, String, String), serde_json::Error> {
        Ok((
            serde_json::to_string(&self.result)?,
            self.file_name.clone(),
            self.turn.as_str().to_string(),
        ))
    }
}

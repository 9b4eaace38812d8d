//! Display-model types and flow logic for the Chess Vision presentation layer.
//!
//! Everything in this crate is pure and wasm-safe: the backend payload is
//! decoded into tagged types here, normalized once, and both the proxy server
//! and the browser frontend consume the same definitions.

pub mod analysis;
pub mod explanation;
pub mod score;
pub mod sequence;
pub mod session;
pub mod upload;
pub mod variation;

pub use analysis::{AdvancedAnalysis, AdvancedMoveData, AnalysisResult, MoveCard};
pub use explanation::{Explanation, ParsedExplanation};
pub use score::Score;
pub use sequence::{SequenceBrowser, SequenceData};
pub use session::{AnalysisSession, SessionError, Turn};
pub use upload::{UploadError, UploadFlow, UploadState};

//! Upload flow state machine.
//!
//! States: idle → file-selected → submitting → {navigated-away | failed}.
//! A failure keeps the selected file so the user can retry without
//! re-choosing it; successful completion hands back the typed session object
//! and the caller performs the navigation.

use crate::analysis::AnalysisResult;
use crate::session::{AnalysisSession, Turn};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    FileSelected { file_name: String },
    Submitting { file_name: String },
    Failed { file_name: String, message: String },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UploadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("No submission in flight")]
    NotSubmitting,

    #[error("{0}")]
    InvalidPayload(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFlow {
    state: UploadState,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn file_name(&self) -> Option<&str> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::FileSelected { file_name }
            | UploadState::Submitting { file_name }
            | UploadState::Failed { file_name, .. } => Some(file_name),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UploadState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, UploadState::Submitting { .. })
    }

    /// Submission is only available with a file chosen and nothing in flight.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            UploadState::FileSelected { .. } | UploadState::Failed { .. }
        )
    }

    /// Choosing a file never auto-submits; it is ignored while a submission
    /// is in flight.
    pub fn select_file(&mut self, file_name: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.state = UploadState::FileSelected {
            file_name: file_name.into(),
        };
        true
    }

    /// Explicit user action moves file-selected into submitting. At most one
    /// submission is in flight at a time.
    pub fn begin_submit(&mut self) -> Result<(), UploadError> {
        match &self.state {
            UploadState::FileSelected { file_name }
            | UploadState::Failed { file_name, .. } => {
                self.state = UploadState::Submitting {
                    file_name: file_name.clone(),
                };
                Ok(())
            }
            UploadState::Submitting { .. } => Err(UploadError::SubmissionInFlight),
            UploadState::Idle => Err(UploadError::NoFileSelected),
        }
    }

    /// Any forwarder-side failure (connectivity, backend error, bad gateway)
    /// resolves here; the file selection is preserved for retry. A failure
    /// with no file on record is dropped: nothing was ever submittable, so
    /// the flow stays idle rather than entering a retryable state.
    pub fn fail(&mut self, message: impl Into<String>) {
        let Some(file_name) = self.file_name().map(str::to_string) else {
            return;
        };
        self.state = UploadState::Failed {
            file_name,
            message: message.into(),
        };
    }

    /// Validate the payload and produce the session object. A payload missing
    /// the position or either list fails validation even though the transport
    /// succeeded, and the flow stays on the upload view with the file intact.
    pub fn complete(
        &mut self,
        result: AnalysisResult,
        turn: Turn,
    ) -> Result<AnalysisSession, UploadError> {
        let file_name = match &self.state {
            UploadState::Submitting { file_name } => file_name.clone(),
            _ => return Err(UploadError::NotSubmitting),
        };

        if let Err(message) = result.validate() {
            self.fail(message.clone());
            return Err(UploadError::InvalidPayload(message));
        }

        self.state = UploadState::Idle;
        Ok(AnalysisSession {
            result,
            file_name,
            turn,
        })
    }
}

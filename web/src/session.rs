//! Session-storage persistence of the analysis hand-off.

use vision_core::session::{AnalysisSession, SessionError, FILE_KEY, RESULTS_KEY, TURN_KEY};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn save(session: &AnalysisSession) -> Result<(), String> {
    let storage = storage().ok_or_else(|| "Session storage is unavailable".to_string())?;
    let (blob, file, turn) = session
        .to_parts()
        .map_err(|e| format!("Failed to serialize analysis results: {e}"))?;

    for (key, value) in [(RESULTS_KEY, &blob), (FILE_KEY, &file), (TURN_KEY, &turn)] {
        storage
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {key}"))?;
    }
    Ok(())
}

pub fn load() -> Result<AnalysisSession, SessionError> {
    let storage = storage().ok_or(SessionError::Missing(RESULTS_KEY))?;
    AnalysisSession::from_parts(
        storage.get_item(RESULTS_KEY).ok().flatten(),
        storage.get_item(FILE_KEY).ok().flatten(),
        storage.get_item(TURN_KEY).ok().flatten(),
    )
}

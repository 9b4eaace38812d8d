//! On-demand move-sequence browsing: per-move image sequences fetched lazily,
//! with last-selection-wins commit and bounded step paging.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceData {
    pub move_id: u32,
    pub move_uci: String,
    #[serde(default)]
    pub sequence_images: Vec<String>,
    #[serde(default)]
    pub folder_name: String,
}

impl SequenceData {
    pub fn image_url(&self, artifacts_base: &str, step: usize) -> Option<String> {
        self.sequence_images
            .get(step)
            .map(|image| format!("{artifacts_base}/sequences/{}/{image}", self.folder_name))
    }
}

/// Local browsing state for the currently explored move.
///
/// Selections are keyed by the move's 1-based position in the suggestion
/// list. Fetches are not serialized at the transport level; instead a
/// resolving fetch is committed only if its target still matches the current
/// selection, so the most recent selection always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceBrowser {
    selected: Option<u32>,
    loading: bool,
    data: Option<SequenceData>,
    step: usize,
}

impl SequenceBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&SequenceData> {
        self.data.as_ref()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.data
            .as_ref()
            .map(|d| d.sequence_images.len())
            .unwrap_or(0)
    }

    /// Record a new authoritative selection and start loading it.
    pub fn select(&mut self, move_id: u32) {
        self.selected = Some(move_id);
        self.loading = true;
        self.step = 0;
    }

    /// Commit a resolved fetch. Stale responses — those whose requested move
    /// no longer matches the current selection — are discarded wholesale.
    pub fn commit(&mut self, requested: u32, data: SequenceData) -> bool {
        if self.selected != Some(requested) {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        self.step = 0;
        true
    }

    /// A failed fetch clears the loading placeholder, but only for the move
    /// that is still selected.
    pub fn fail(&mut self, requested: u32) {
        if self.selected == Some(requested) {
            self.loading = false;
            self.data = None;
        }
    }

    /// Advance one step; a no-op at the last image.
    pub fn next_step(&mut self) {
        let count = self.step_count();
        if count > 0 && self.step < count - 1 {
            self.step += 1;
        }
    }

    /// Retreat one step; a no-op at the first image.
    pub fn prev_step(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    pub fn current_image_url(&self, artifacts_base: &str) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|d| d.image_url(artifacts_base, self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(move_id: u32, images: &[&str]) -> SequenceData {
        SequenceData {
            move_id,
            move_uci: "e2e4".to_string(),
            sequence_images: images.iter().map(|s| s.to_string()).collect(),
            folder_name: format!("move_{move_id}"),
        }
    }

    #[test]
    fn test_last_selection_wins_under_out_of_order_resolution() {
        let mut browser = SequenceBrowser::new();

        browser.select(2);
        browser.select(1);

        // The fetch for move 2 resolves after move 1 was selected: dropped.
        assert!(!browser.commit(2, sequence(2, &["a.png"])));
        assert!(browser.data().is_none());
        assert!(browser.is_loading());

        // The fetch for move 1 lands.
        assert!(browser.commit(1, sequence(1, &["b.png", "c.png"])));
        assert_eq!(browser.data().unwrap().move_id, 1);
        assert!(!browser.is_loading());
    }

    #[test]
    fn test_step_paging_is_bounded() {
        let mut browser = SequenceBrowser::new();
        browser.select(1);
        browser.commit(1, sequence(1, &["0.png", "1.png", "2.png"]));

        browser.prev_step();
        assert_eq!(browser.step(), 0, "retreat from step 0 is a no-op");

        browser.next_step();
        browser.next_step();
        assert_eq!(browser.step(), 2);
        browser.next_step();
        assert_eq!(browser.step(), 2, "advance past the last step is a no-op");
    }

    #[test]
    fn test_new_selection_resets_step_and_replaces_data() {
        let mut browser = SequenceBrowser::new();
        browser.select(1);
        browser.commit(1, sequence(1, &["0.png", "1.png"]));
        browser.next_step();
        assert_eq!(browser.step(), 1);

        browser.select(3);
        assert_eq!(browser.step(), 0);
        assert!(browser.is_loading());

        browser.commit(3, sequence(3, &["x.png"]));
        assert_eq!(browser.data().unwrap().move_id, 3);
        assert_eq!(browser.step_count(), 1);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut browser = SequenceBrowser::new();
        browser.select(2);
        browser.select(1);

        browser.fail(2);
        assert!(browser.is_loading(), "failure of a stale fetch must not clear the spinner");

        browser.fail(1);
        assert!(!browser.is_loading());
    }

    #[test]
    fn test_image_urls() {
        let data = sequence(4, &["step_0.png"]);
        assert_eq!(
            data.image_url("http://localhost:5000/static/artifacts", 0).unwrap(),
            "http://localhost:5000/static/artifacts/sequences/move_4/step_0.png"
        );
        assert_eq!(data.image_url("base", 5), None);
    }

    #[test]
    fn test_empty_browser_paging_is_safe() {
        let mut browser = SequenceBrowser::new();
        browser.next_step();
        browser.prev_step();
        assert_eq!(browser.step(), 0);
        assert_eq!(browser.step_count(), 0);
        assert!(browser.current_image_url("base").is_none());
    }
}

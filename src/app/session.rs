//! Dialog session state
//!
//! Everything the upload dialog remembers between frames, minus the GPU
//! texture for the preview (which needs an egui context and lives on `App`).

use crate::types::{PredictionResult, SelectedFile};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Everything a background task needs to run one prediction
pub struct PredictTicket {
    pub generation: u64,
    pub file: SelectedFile,
    pub token: CancellationToken,
}

/// A finished prediction waiting to be applied on the UI thread
#[derive(Debug)]
pub struct Outcome {
    pub generation: u64,
    pub result: PredictionResult,
}

#[derive(Default)]
pub struct Session {
    pub is_open: bool,
    pub selected_file: Option<SelectedFile>,
    pub is_loading: bool,
    pub is_zoomed: bool,
    pub result: Option<PredictionResult>,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl Session {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_zoom(&mut self) {
        self.is_zoomed = !self.is_zoomed;
    }

    /// Replace the current selection. Any in-flight request is cancelled and
    /// its outcome will be ignored.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.cancel_in_flight();
        self.selected_file = Some(file);
        self.result = None;
    }

    /// Start a prediction if a file is selected and nothing is pending
    pub fn begin_predict(&mut self) -> Option<PredictTicket> {
        if self.is_loading {
            return None;
        }
        let file = self.selected_file.clone()?;

        self.generation += 1;
        self.is_loading = true;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        Some(PredictTicket {
            generation: self.generation,
            file,
            token,
        })
    }

    /// Apply a finished prediction. Returns false if it belonged to a
    /// superseded request and was dropped.
    pub fn finish_predict(&mut self, outcome: Outcome) -> bool {
        if !self.is_loading || outcome.generation != self.generation {
            debug!(generation = outcome.generation, "Discarding stale prediction");
            return false;
        }
        self.result = Some(outcome.result);
        self.in_flight = None;
        self.is_loading = false;
        true
    }

    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            debug!(generation = self.generation, "Cancelling in-flight prediction");
            token.cancel();
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> SelectedFile {
        SelectedFile::new(name, vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
    }

    fn healthy() -> PredictionResult {
        PredictionResult {
            label: "Tomato - healthy".into(),
            cause: "None.".into(),
            solution: "None needed.".into(),
            treatment: "N/A".into(),
        }
    }

    #[test]
    fn open_and_close_only_touch_visibility() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        session.open();
        assert!(session.is_open);
        session.close();
        assert!(!session.is_open);
        assert!(session.selected_file.is_some());
    }

    #[test]
    fn predict_without_file_is_a_no_op() {
        let mut session = Session::default();
        assert!(session.begin_predict().is_none());
        assert!(!session.is_loading);
        assert!(session.result.is_none());
    }

    #[test]
    fn second_predict_is_refused_while_loading() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        let first = session.begin_predict().expect("first dispatch");
        assert!(session.is_loading);
        assert!(session.begin_predict().is_none());

        assert!(session.finish_predict(Outcome {
            generation: first.generation,
            result: healthy(),
        }));
        assert!(!session.is_loading);
        assert!(session.begin_predict().is_some());
    }

    #[test]
    fn new_selection_clears_previous_result() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        let ticket = session.begin_predict().unwrap();
        session.finish_predict(Outcome {
            generation: ticket.generation,
            result: healthy(),
        });
        assert_eq!(session.result, Some(healthy()));

        session.select_file(leaf("b.png"));
        assert!(session.result.is_none());
        assert_eq!(session.selected_file.as_ref().unwrap().name, "b.png");
    }

    #[test]
    fn failure_sets_sentinel_and_clears_loading() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        let ticket = session.begin_predict().unwrap();
        session.finish_predict(Outcome {
            generation: ticket.generation,
            result: PredictionResult::failed(),
        });
        assert_eq!(
            session.result,
            Some(PredictionResult {
                label: "Prediction failed.".into(),
                cause: String::new(),
                solution: String::new(),
                treatment: String::new(),
            })
        );
        assert!(!session.is_loading);
    }

    #[test]
    fn selection_mid_flight_cancels_and_discards() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        let ticket = session.begin_predict().unwrap();

        session.select_file(leaf("b.png"));
        assert!(ticket.token.is_cancelled());
        assert!(!session.is_loading);

        let applied = session.finish_predict(Outcome {
            generation: ticket.generation,
            result: healthy(),
        });
        assert!(!applied);
        assert!(session.result.is_none());
    }

    #[test]
    fn late_outcome_from_older_generation_is_ignored() {
        let mut session = Session::default();
        session.select_file(leaf("a.png"));
        let old = session.begin_predict().unwrap();
        session.select_file(leaf("b.png"));
        let new = session.begin_predict().unwrap();
        assert!(new.generation > old.generation);

        assert!(!session.finish_predict(Outcome {
            generation: old.generation,
            result: PredictionResult::failed(),
        }));
        assert!(session.is_loading);
        assert!(session.finish_predict(Outcome {
            generation: new.generation,
            result: healthy(),
        }));
    }

    #[test]
    fn zoom_is_independent() {
        let mut session = Session::default();
        session.toggle_zoom();
        assert!(session.is_zoomed);
        session.select_file(leaf("a.png"));
        assert!(session.is_zoomed);
        session.toggle_zoom();
        assert!(!session.is_zoomed);
    }
}

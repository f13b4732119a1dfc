//! Prediction client and request dispatch

use super::session::{Outcome, PredictTicket};
use super::App;
use crate::error::PredictError;
use crate::types::{PredictResponse, PredictionResult, SelectedFile};
use crate::ui::components::format_label;
use eframe::egui;
use reqwest::multipart::{Form, Part};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info};

/// Outcomes produced by background tasks, drained by the UI thread
pub type Mailbox = Arc<Mutex<Vec<Outcome>>>;

/// Uploads images to the prediction service
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the file as multipart/form-data with `file` and `filename` fields
    pub async fn predict(&self, file: &SelectedFile) -> Result<PredictionResult, PredictError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.mime)?;
        let form = Form::new()
            .part("file", part)
            .text("filename", file.name.clone());

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Status { status, body });
        }

        let body: PredictResponse = response.json().await?;
        Ok(body.into())
    }
}

impl From<PredictResponse> for PredictionResult {
    fn from(body: PredictResponse) -> Self {
        Self {
            label: body.label.as_deref().map(format_label).unwrap_or_default(),
            cause: body.cause.unwrap_or_default(),
            solution: body.solution.unwrap_or_default(),
            treatment: body.fertilizer.unwrap_or_default(),
        }
    }
}

/// Collapse any failure into the sentinel record, logging the cause
pub fn settle(outcome: Result<PredictionResult, PredictError>) -> PredictionResult {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Error during prediction");
            PredictionResult::failed()
        }
    }
}

/// Take every delivered outcome. A poisoned lock still yields its contents
/// so a pending request can always clear the loading state.
fn drain(mailbox: &Mailbox) -> Vec<Outcome> {
    mailbox
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .drain(..)
        .collect()
}

/// Run one prediction. Cancellation drops the outcome entirely.
async fn run_prediction(
    client: PredictionClient,
    ticket: PredictTicket,
    mailbox: Mailbox,
    ctx: egui::Context,
) {
    let PredictTicket {
        generation,
        file,
        token,
    } = ticket;

    let result = tokio::select! {
        biased;
        _ = token.cancelled() => {
            info!(generation, "Prediction cancelled");
            return;
        }
        outcome = client.predict(&file) => settle(outcome),
    };

    info!(generation, label = %result.label, "Prediction finished");
    mailbox
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Outcome { generation, result });
    ctx.request_repaint();
}

impl App {
    pub fn predict(&mut self, ctx: &egui::Context) {
        let Some(ticket) = self.session.begin_predict() else {
            return;
        };

        info!(
            file = %ticket.file.name,
            bytes = ticket.file.bytes.len(),
            endpoint = self.client.endpoint(),
            generation = ticket.generation,
            "Dispatching prediction"
        );

        self.runtime.spawn(run_prediction(
            self.client.clone(),
            ticket,
            self.mailbox.clone(),
            ctx.clone(),
        ));
    }

    /// Apply outcomes delivered since the last frame
    pub fn poll_prediction(&mut self) {
        for outcome in drain(&self.mailbox) {
            self.session.finish_predict(outcome);
        }
    }
}

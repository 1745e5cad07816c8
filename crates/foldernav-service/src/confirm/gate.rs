//! Single-slot confirmation channel.
//!
//! A caller asks a question and awaits a `bool`; the UI answers it. Only
//! one question may be outstanding at a time, and a question that is
//! cancelled or abandoned resolves to `false` instead of hanging.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::debug;

use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;

/// Visual weight of the confirm button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmVariant {
    /// Regular action.
    #[default]
    Default,
    /// Irreversible action such as a delete.
    Destructive,
}

/// The question shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    /// Dialog title.
    pub title: String,
    /// Longer explanation.
    pub description: String,
    /// Button styling.
    #[serde(default)]
    pub variant: ConfirmVariant,
    /// Label of the confirm button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,
    /// Label of the cancel button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
}

impl ConfirmRequest {
    /// A destructive question with default button labels.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ConfirmVariant::Destructive,
            confirm_text: None,
            cancel_text: None,
        }
    }
}

/// Resolves to the user's answer; `false` if the question was abandoned.
#[derive(Debug)]
pub struct PendingConfirmation {
    rx: oneshot::Receiver<bool>,
}

impl Future for PendingConfirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}

/// Holds at most one outstanding confirmation question.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<(ConfirmRequest, oneshot::Sender<bool>)>,
}

impl ConfirmationGate {
    /// Creates an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks a question.
    ///
    /// Fails with a conflict while another question is still waiting for
    /// an answer. A question whose asker stopped waiting is discarded.
    pub fn request(&mut self, request: ConfirmRequest) -> AppResult<PendingConfirmation> {
        if let Some((current, tx)) = &self.pending {
            if !tx.is_closed() {
                return Err(AppError::conflict(format!(
                    "Confirmation '{}' is still pending",
                    current.title
                )));
            }
        }

        let (tx, rx) = oneshot::channel();
        debug!(title = %request.title, variant = ?request.variant, "Confirmation requested");
        self.pending = Some((request, tx));
        Ok(PendingConfirmation { rx })
    }

    /// The question currently shown, if any.
    pub fn pending(&self) -> Option<&ConfirmRequest> {
        self.pending.as_ref().map(|(request, _)| request)
    }

    /// Answers the outstanding question. Returns `false` if there was none.
    pub fn resolve(&mut self, answer: bool) -> bool {
        match self.pending.take() {
            Some((request, tx)) => {
                debug!(title = %request.title, answer, "Confirmation resolved");
                // The asker may have stopped waiting; that is not an error.
                let _ = tx.send(answer);
                true
            }
            None => false,
        }
    }

    /// Dismisses the outstanding question, resolving it to `false`.
    pub fn cancel(&mut self) -> bool {
        self.resolve(false)
    }
}

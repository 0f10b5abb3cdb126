use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::Author;
use super::ChatRequest;
use super::Event;

#[derive(Debug, PartialEq, Eq)]
pub struct BackendResponse {
    pub author: Author,
    pub text: String,
    pub done: bool,
    /// Session id of the request this answers.
    pub session_id: String,
}

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the backend is reachable.
    async fn health_check(&self) -> Result<()>;

    /// Sends a single chat request and forwards the reply to the UI as a
    /// `done` response. Non-success statuses, transport failures and timeouts
    /// are returned as errors; the caller decides how to surface them.
    async fn get_completion<'a>(
        &self,
        request: ChatRequest,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::LogoSynthesizer;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendResponse;
use crate::domain::models::ChatRequest;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::infrastructure::logos::LogoFiles;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /feature (/f) [FEATURE_ID] - Starts a guided brief for a feature. Run /features to see the ids.
- /features (/fl) - Lists every feature and how many questions it asks.
- /new (/n) - Starts a new chat, clearing the transcript and any answers.
- /retry (/r) - Generates the result of a finished brief again, after a failed request.
- /quit /exit (/q) - Exit BrandCraft.
- /help (/h) - Provides this help menu.

Anything else you type answers the current question. With no brief running, it is sent to BrandCraft as a free form request.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Cancel a pending request if in progress, otherwise exit.
- CTRL+R - Same as /retry.
        "#;

    return text.trim().to_string();
}

/// Error turn for a failed dispatch. Guided results and free form replies
/// are worded differently.
pub fn failure_message(request: &ChatRequest, err: &anyhow::Error) -> Message {
    let mut text = format!("Error: {err}");
    if request.is_guided() {
        text = format!("Error generating result: {err}");
    }

    return Message::new_with_type(Author::BrandCraft, MessageType::Error, &text);
}

fn worker_error(
    request: &ChatRequest,
    err: anyhow::Error,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::error!(session_id = %request.session_id, error = ?err, "Dispatch failed");
    tx.send(Event::BackendFailure(
        request.session_id.to_string(),
        failure_message(request, &err),
    ))?;

    return Ok(());
}

async fn generate_logo(
    files: &LogoFiles,
    request: &ChatRequest,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let answers = match &request.answers {
        Some(answers) => answers,
        None => bail!("No logo answers to generate from"),
    };

    let image = LogoSynthesizer::synthesize(answers);
    let file_path = files.save(&image, &request.session_id).await?;

    let design = &image.design;
    let mut layout = design.layout.to_string();
    if !design.show_text {
        layout = format!("{layout} (no text)");
    }
    let text = format!(
        "Here is your logo for {brand}.\n\n- Palette: {primary} with {secondary}\n- Symbol: {glyph}\n- Layout: {layout}\n- Style: {style}\n\nSaved to {path}",
        brand = design.brand,
        primary = design.palette.primary,
        secondary = design.palette.secondary,
        glyph = image.glyph_name(),
        style = design.style,
        path = file_path.to_string_lossy(),
    );

    tx.send(Event::BackendPromptResponse(BackendResponse {
        author: Author::BrandCraft,
        text,
        done: true,
        session_id: request.session_id.to_string(),
    }))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs dispatches on a worker task, one at a time. Results and failures
    /// are sent back as `Event`s. Returns once every action sender is dropped.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        return ActionsService::start_with_files(backend, LogoFiles::default(), tx, rx).await;
    }

    pub async fn start_with_files(
        backend: BackendBox,
        files: LogoFiles,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend = Arc::new(backend);
        let files = Arc::new(files);

        // Lazy default.
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            match action {
                Action::BackendAbort() => {
                    worker.abort();
                }
                Action::BackendRequest(request) => {
                    let worker_backend = backend.clone();
                    worker = tokio::spawn(async move {
                        let res = worker_backend
                            .get_completion(request.clone(), &worker_tx)
                            .await;

                        if let Err(err) = res {
                            worker_error(&request, err, &worker_tx)?;
                        }

                        return Ok(());
                    });
                }
                Action::GenerateLogo(request) => {
                    let worker_files = files.clone();
                    worker = tokio::spawn(async move {
                        let res = generate_logo(&worker_files, &request, &worker_tx).await;

                        if let Err(err) = res {
                            worker_error(&request, err, &worker_tx)?;
                        }

                        return Ok(());
                    });
                }
            }
        }

        worker.abort();
        return Ok(());
    }
}

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::BubbleList;
use super::FlowController;
use super::Scroll;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendResponse;
use crate::domain::models::Feature;
use crate::domain::models::Finalize;
use crate::domain::models::FlowStep;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SlashCommand;

pub fn catalog_text() -> String {
    return Feature::catalog()
        .iter()
        .map(|feature| {
            return format!(
                "- {id} - {title} ({count} questions)",
                id = feature.id(),
                title = feature.title(),
                count = feature.questions().len()
            );
        })
        .collect::<Vec<String>>()
        .join("\n");
}

fn welcome_text() -> String {
    return format!(
        "Hey there! I'm BrandCraft. Start a guided brief with `/feature ID`, or just tell me what you need.\n\n{}",
        catalog_text()
    );
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub flow: FlowController,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub waiting_for_backend: bool,
}

impl AppState {
    pub async fn new(
        backend: &BackendBox,
        feature: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<AppState> {
        let mut app_state = AppState {
            bubble_list: BubbleList::default(),
            flow: FlowController::default(),
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            waiting_for_backend: false,
        };

        app_state
            .messages
            .push(Message::new(Author::BrandCraft, &welcome_text()));

        if let Err(err) = backend.health_check().await {
            let url = Config::get(ConfigKey::BackendURL);
            app_state.messages.push(Message::new_with_type(
                Author::BrandCraft,
                MessageType::Error,
                &format!("Hey, it looks like the BrandCraft backend at {url} isn't running, I can't connect to it. Logos still work, but every other result needs the backend.\n\nError: {err}"),
            ));
        }

        if !feature.trim().is_empty() {
            let step = app_state.flow.start_feature(feature);
            app_state.handle_flow_step(step, tx)?;
        }

        return Ok(app_state);
    }

    /// Title for the input box, describing where the user is in the flow.
    pub fn input_title(&self) -> String {
        let session = self.flow.session();
        if let Some(feature) = &session.active_feature {
            let count = session.question_count();
            if session.cursor < count {
                return format!(
                    "{} - question {} of {count}",
                    feature.title(),
                    session.cursor + 1
                );
            }

            return format!("{} - finished, /retry to generate again", feature.title());
        }

        return "Ask BrandCraft anything, or /feature ID".to_string();
    }

    /// Returns `(should_break, should_continue)` for the UI loop.
    pub fn handle_slash_commands(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        let command = match SlashCommand::parse(input_str) {
            Some(command) => command,
            None => return Ok((false, false)),
        };

        if command.is_quit() {
            return Ok((true, false));
        }

        if command.is_help() {
            self.add_message(Message::new(Author::BrandCraft, &help_text()));
            return Ok((false, true));
        }

        if command.is_feature_list() {
            self.add_message(Message::new(Author::BrandCraft, &catalog_text()));
            return Ok((false, true));
        }

        if command.is_feature() {
            if command.args.is_empty() {
                self.add_message(Message::new_with_type(
                    Author::BrandCraft,
                    MessageType::Error,
                    "You must specify a feature with `/feature` or `/f`. Run `/features` to see them all.",
                ));
                return Ok((false, true));
            }

            let step = self.flow.start_feature(&command.args[0]);
            self.handle_flow_step(step, tx)?;
            return Ok((false, true));
        }

        if command.is_new_chat() {
            self.new_chat();
            return Ok((false, true));
        }

        if command.is_retry() {
            self.retry(tx)?;
            return Ok((false, true));
        }

        return Ok((false, false));
    }

    /// Anything that isn't a slash command answers the current question, or
    /// becomes a free form request when no brief is running.
    pub fn handle_input(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let step = self.flow.submit_answer(input_str);
        return self.handle_flow_step(step, tx);
    }

    pub fn retry(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let step = self.flow.retry();
        if step == FlowStep::Ignored {
            self.add_message(Message::new_with_type(
                Author::BrandCraft,
                MessageType::Error,
                "There is no finished brief to retry. Answer every question first, or start one with `/feature`.",
            ));
            return Ok(());
        }

        return self.handle_flow_step(step, tx);
    }

    fn handle_flow_step(
        &mut self,
        step: FlowStep,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match step {
            FlowStep::Ask(prompt) => {
                self.add_message(Message::new(Author::BrandCraft, &prompt));
            }
            FlowStep::Finalize(finalize) => {
                if let Finalize::Guided { feature, .. } = &finalize {
                    self.add_message(Message::new(
                        Author::BrandCraft,
                        &format!("Thank you! Generating your {} now...", feature.title()),
                    ));
                }
                self.waiting_for_backend = true;
                tracing::debug!(session_id = finalize.session_id(), "Dispatching");

                let request = finalize.request().clone();
                if finalize.is_local() {
                    tx.send(Action::GenerateLogo(request))?;
                } else {
                    tx.send(Action::BackendRequest(request))?;
                }
            }
            FlowStep::Busy => {
                self.add_message(Message::new_with_type(
                    Author::BrandCraft,
                    MessageType::Error,
                    "Still working on your last request. Press CTRL+C to cancel it.",
                ));
            }
            FlowStep::Ignored => (),
        }

        return Ok(());
    }

    pub fn handle_backend_response(&mut self, msg: BackendResponse) {
        if !msg.done {
            return;
        }

        if !self.flow.complete_dispatch(&msg.session_id, true) {
            return;
        }

        self.waiting_for_backend = false;
        self.add_message(Message::new(msg.author, &msg.text));
    }

    pub fn handle_backend_failure(&mut self, session_id: &str, message: Message) {
        if !self.flow.complete_dispatch(session_id, false) {
            return;
        }

        self.waiting_for_backend = false;
        self.add_message(message);
    }

    /// Cancels the pending request. The session is kept, so a guided brief can
    /// be retried.
    pub fn abort_dispatch(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        tx.send(Action::BackendAbort())?;
        self.flow.cancel_dispatch();
        self.waiting_for_backend = false;
        self.add_message(Message::new_with_type(
            Author::BrandCraft,
            MessageType::Error,
            "Request cancelled.",
        ));

        return Ok(());
    }

    pub fn new_chat(&mut self) {
        self.flow.reset();
        self.waiting_for_backend = false;
        self.messages = vec![Message::new(Author::BrandCraft, &welcome_text())];
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width.into());

        self.scroll.set_state(
            self.bubble_list.len().try_into().unwrap_or(u16::MAX),
            self.last_known_height,
        );

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;

use uuid::Uuid;

use crate::domain::models::Answers;
use crate::domain::models::ChatRequest;
use crate::domain::models::Feature;
use crate::domain::models::Finalize;
use crate::domain::models::FlowSession;
use crate::domain::models::FlowStep;

pub const GUIDED_REQUEST_TEXT: &str = "Generate final output";

/// Drives the guided question flow and decides when to finalize.
///
/// Holds the only `FlowSession`. While a finalize dispatch is pending, every
/// mutating operation except `reset` returns `FlowStep::Busy`.
#[derive(Default)]
pub struct FlowController {
    session: FlowSession,
    pending: Option<String>,
}

impl FlowController {
    pub fn create_session_id(prefix: &str) -> String {
        let id = Uuid::new_v4()
            .to_string()
            .split('-')
            .take(2)
            .collect::<Vec<&str>>()
            .join("-");

        return format!("{prefix}-{id}");
    }

    pub fn session(&self) -> &FlowSession {
        return &self.session;
    }

    pub fn is_pending(&self) -> bool {
        return self.pending.is_some();
    }

    pub fn start_feature(&mut self, tag: &str) -> FlowStep {
        if self.is_pending() {
            return FlowStep::Busy;
        }

        let feature = Feature::parse(tag);
        tracing::debug!(feature = feature.id(), "Starting feature");

        self.session
            .answers
            .insert(feature.clone(), Answers::default());
        self.session.active_feature = Some(feature);
        self.session.cursor = 0;

        return self.advance();
    }

    pub fn submit_answer(&mut self, text: &str) -> FlowStep {
        let text = text.trim();
        if text.is_empty() {
            return FlowStep::Ignored;
        }

        if self.is_pending() {
            return FlowStep::Busy;
        }

        let feature = match &self.session.active_feature {
            Some(feature) => feature.clone(),
            None => return self.finalize_free_form(text),
        };

        self.session
            .answers
            .entry(feature)
            .or_default()
            .push(text);
        self.session.cursor += 1;

        return self.advance();
    }

    /// Asks the question at the cursor, or finalizes once every question is
    /// answered.
    pub fn advance(&mut self) -> FlowStep {
        let feature = match &self.session.active_feature {
            Some(feature) => feature.clone(),
            None => return FlowStep::Ignored,
        };

        let questions = feature.questions();
        if self.session.cursor >= questions.len() {
            return self.finalize(feature);
        }

        let question = questions[self.session.cursor];
        if let Some(recap) = self.recap() {
            return FlowStep::Ask(format!("{recap}\n\n{question}"));
        }

        return FlowStep::Ask(question.to_string());
    }

    /// Finalizes a completed guided flow again, typically after a failed
    /// dispatch.
    pub fn retry(&mut self) -> FlowStep {
        if self.is_pending() {
            return FlowStep::Busy;
        }

        if let Some(feature) = self.session.active_feature.clone() {
            if self.session.cursor >= feature.questions().len() {
                return self.finalize(feature);
            }
        }

        return FlowStep::Ignored;
    }

    /// Settles the pending dispatch. Success resets the session; failure keeps
    /// it so answers are not lost. Replies for anything other than the
    /// pending dispatch are ignored.
    pub fn complete_dispatch(&mut self, session_id: &str, success: bool) -> bool {
        if self.pending.as_deref() != Some(session_id) {
            tracing::debug!(session_id, "Ignoring reply for stale dispatch");
            return false;
        }

        self.pending = None;
        if success {
            self.reset();
        }

        return true;
    }

    pub fn cancel_dispatch(&mut self) {
        self.pending = None;
    }

    pub fn reset(&mut self) {
        self.session = FlowSession::default();
        self.pending = None;
    }

    fn recap(&self) -> Option<String> {
        let answers = self.session.active_answers()?;
        if answers.is_empty() {
            return None;
        }

        let lines = answers
            .iter()
            .enumerate()
            .map(|(idx, (_, answer))| {
                let n = idx + 1;
                return format!("{n}. {answer}");
            })
            .collect::<Vec<String>>()
            .join("\n");

        return Some(format!("So far you've said:\n{lines}"));
    }

    fn finalize(&mut self, feature: Feature) -> FlowStep {
        let answers = self
            .session
            .answers
            .get(&feature)
            .cloned()
            .unwrap_or_default();

        let request = ChatRequest {
            text: GUIDED_REQUEST_TEXT.to_string(),
            feature: Some(feature.id().to_string()),
            answers: Some(answers),
            session_id: FlowController::create_session_id("flow"),
        };
        self.pending = Some(request.session_id.to_string());

        return FlowStep::Finalize(Finalize::Guided { feature, request });
    }

    fn finalize_free_form(&mut self, text: &str) -> FlowStep {
        let request = ChatRequest {
            text: text.to_string(),
            feature: None,
            answers: None,
            session_id: FlowController::create_session_id("free"),
        };
        self.pending = Some(request.session_id.to_string());

        return FlowStep::Finalize(Finalize::FreeForm { request });
    }
}

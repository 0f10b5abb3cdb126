use std::collections::HashMap;

use super::Answers;
use super::ChatRequest;
use super::Feature;

/// Conversation state for the guided flow.
///
/// While `active_feature` is set, `answers[active_feature]` exists and holds
/// exactly `cursor` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowSession {
    pub active_feature: Option<Feature>,
    pub cursor: usize,
    pub answers: HashMap<Feature, Answers>,
}

impl FlowSession {
    pub fn active_answers(&self) -> Option<&Answers> {
        return self
            .active_feature
            .as_ref()
            .and_then(|feature| return self.answers.get(feature));
    }

    pub fn question_count(&self) -> usize {
        return self
            .active_feature
            .as_ref()
            .map(|feature| return feature.questions().len())
            .unwrap_or(0);
    }
}

/// Output of a completed flow, ready to hand to a dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finalize {
    Guided {
        feature: Feature,
        request: ChatRequest,
    },
    FreeForm {
        request: ChatRequest,
    },
}

impl Finalize {
    pub fn request(&self) -> &ChatRequest {
        match self {
            Finalize::Guided { request, .. } => return request,
            Finalize::FreeForm { request } => return request,
        }
    }

    pub fn session_id(&self) -> &str {
        return &self.request().session_id;
    }

    pub fn is_local(&self) -> bool {
        match self {
            Finalize::Guided { feature, .. } => return feature.is_local(),
            Finalize::FreeForm { .. } => return false,
        }
    }
}

/// What the caller should render after driving the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStep {
    /// Next question, recap included.
    Ask(String),
    Finalize(Finalize),
    /// Blank input, nothing happened.
    Ignored,
    /// A dispatch is in flight and the session is locked.
    Busy,
}

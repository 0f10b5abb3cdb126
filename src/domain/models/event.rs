use tui_textarea::Input;

use super::BackendResponse;
use super::Message;

pub enum Event {
    /// A dispatch failed. Carries the session id of the request and the
    /// error turn to render.
    BackendFailure(String, Message),
    BackendPromptResponse(BackendResponse),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}

mod action;
mod author;
mod backend;
mod chat;
mod event;
mod feature;
mod flow;
mod loading;
mod logo;
mod message;
mod slash_commands;
mod textarea;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use chat::*;
pub use event::*;
pub use feature::*;
pub use flow::*;
pub use loading::*;
pub use logo::*;
pub use message::*;
pub use slash_commands::*;
pub use textarea::*;

mod action;
mod author;
mod event;
mod message;
mod session;

pub use action::Action;
pub use author::Author;
pub use event::Event;
pub use message::{Message, MessageType};
pub use session::SessionPhase;

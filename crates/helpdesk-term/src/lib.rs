//! Terminal chat client for the helpdesk assistant.
//!
//! This crate renders a scrolling transcript against a remote assistant
//! backend: it creates one session per run, sends user messages, shows
//! replies with their escalation marker, and can request an on-demand
//! conversation summary. The HTTP contract itself lives in
//! `helpdesk-client`; this crate only consumes it through the
//! `SupportClient` trait.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Author, Event, Message, MessageType, SessionPhase};
pub use domain::services::{ActionsService, AppState, EventsService};

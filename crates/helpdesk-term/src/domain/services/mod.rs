mod actions;
mod app_state;
mod events;
mod scroll;

pub use actions::ActionsService;
pub use app_state::AppState;
pub use events::EventsService;
pub use scroll::Scroll;

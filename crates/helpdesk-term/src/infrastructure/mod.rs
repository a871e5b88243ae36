//! Infrastructure for reaching the outside world from the terminal UI.

mod backend;

pub use backend::BackendManager;

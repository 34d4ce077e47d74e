// Application state and the behaviour behind key and mouse input

pub mod actions;
pub mod input;
pub mod state;

pub use input::{handle_key, handle_mouse};
pub use state::{App, CommitView, Focus, Page};

mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyEvent, MouseEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    screens::dispatch_key(app, key);
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    screens::dispatch_mouse(app, mouse);
}

mod layout;
mod menu;
mod puzzle;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Puzzle => puzzle::draw_puzzle(f, app),
    }
}

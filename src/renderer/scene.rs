//! Frame composition
//!
//! Draws a `GameState` front to back. Reads only; the state is never touched.

use super::surface::Surface;
use crate::sim::GameState;

/// Palette
pub const PLAYER_COLOR: &str = "blue";
pub const COLLECTIBLE_COLOR: &str = "red";
pub const TEXT_COLOR: &str = "black";
pub const OVERLAY_COLOR: &str = "black";
pub const OVERLAY_TEXT_COLOR: &str = "white";

const TITLE_FONT: &str = "20px Arial";
const HINT_FONT: &str = "16px Arial";

pub const START_PROMPT: &str = "Click to Begin";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RETRY_TEXT: &str = "Click space to try again";
pub const INSTRUCTIONS: [&str; 3] = [
    "Move with arrow keys",
    "Get big by eating circles",
    "Avoid the yellow obstacles",
];

/// Draw one frame of `state` onto `surface`
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let width = state.settings.width as f64;
    let height = state.settings.height as f64;

    surface.clear(width, height);

    if !state.started {
        surface.set_font(TITLE_FONT);
        surface.set_fill(TEXT_COLOR);
        surface.fill_text(START_PROMPT, 150.0, 200.0);
    }

    let player = &state.player;
    surface.set_fill(PLAYER_COLOR);
    surface.fill_circle(player.pos.x as f64, player.pos.y as f64, player.radius as f64);

    surface.set_fill(COLLECTIBLE_COLOR);
    for c in &state.collectibles {
        surface.fill_circle(c.pos.x as f64, c.pos.y as f64, c.radius as f64);
    }

    // Obstacles share a colour in practice; only switch when it changes
    let mut current_color: Option<&str> = None;
    for o in &state.obstacles {
        if current_color != Some(o.color.as_str()) {
            surface.set_fill(&o.color);
            current_color = Some(o.color.as_str());
        }
        let size = o.size as f64;
        surface.fill_rect(o.pos.x as f64, o.pos.y as f64, size, size);
    }

    surface.set_font(HINT_FONT);
    surface.set_fill(TEXT_COLOR);
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let y = height - 60.0 + 20.0 * i as f64;
        surface.fill_text(line, 20.0, y);
    }

    if state.over {
        surface.set_fill(OVERLAY_COLOR);
        surface.fill_rect(0.0, 0.0, width, height);
        surface.set_font(TITLE_FONT);
        surface.set_fill(OVERLAY_TEXT_COLOR);
        surface.fill_text(GAME_OVER_TEXT, 180.0, 200.0);
        surface.fill_text(RETRY_TEXT, 140.0, 230.0);
    }
}

//! Per-frame input bookkeeping shared by the demo loops.

use std::collections::HashSet;

use glam::Vec2;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// The current state of the keyboard. `pressed` is rebuilt every frame;
/// `down` tracks held keys across frames.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub delta: Vec2,
    pub down: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}


use std::collections::HashMap;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Frame-coherent input snapshot. Events accumulate between frames; `update`
/// rolls the current key map into the previous one so edge queries
/// (`is_key_pressed`) fire exactly once per physical press.
#[derive(Default)]
pub struct Input {
    keys_current: HashMap<KeyCode, ElementState>,
    keys_previous: HashMap<KeyCode, ElementState>,
    mouse_delta: (f64, f64),
    scroll_delta: f64,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_input(&mut self, key: KeyCode, state: ElementState) {
        self.keys_current.insert(key, state);
    }

    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta.0 += delta.0;
        self.mouse_delta.1 += delta.1;
    }

    pub fn handle_mouse_scroll(&mut self, delta: f64) {
        self.scroll_delta += delta;
    }

    /// Called once at the end of each frame.
    pub fn update(&mut self) {
        self.keys_previous = self.keys_current.clone();
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_current.get(&key) == Some(&ElementState::Pressed)
            && self.keys_previous.get(&key) != Some(&ElementState::Pressed)
    }

    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_current.get(&key) == Some(&ElementState::Released)
            && self.keys_previous.get(&key) == Some(&ElementState::Pressed)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_current.get(&key) == Some(&ElementState::Pressed)
    }

    pub fn mouse_delta(&self) -> (f64, f64) {
        self.mouse_delta
    }

    pub fn scroll_delta(&self) -> f64 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_edge_fires_once() {
        let mut input = Input::new();
        input.handle_key_input(KeyCode::Digit1, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::Digit1));
        assert!(input.is_key_down(KeyCode::Digit1));

        // Still held on the next frame: down but no longer an edge.
        input.update();
        assert!(!input.is_key_pressed(KeyCode::Digit1));
        assert!(input.is_key_down(KeyCode::Digit1));

        input.handle_key_input(KeyCode::Digit1, ElementState::Released);
        assert!(input.is_key_released(KeyCode::Digit1));
    }

    #[test]
    fn mouse_deltas_accumulate_and_reset() {
        let mut input = Input::new();
        input.handle_mouse_motion((2.0, -1.0));
        input.handle_mouse_motion((1.0, 1.0));
        input.handle_mouse_scroll(0.5);
        assert_eq!(input.mouse_delta(), (3.0, 0.0));
        assert_eq!(input.scroll_delta(), 0.5);

        input.update();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
        assert_eq!(input.scroll_delta(), 0.0);
    }
}

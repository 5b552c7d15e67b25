//! Title screen state

use volley_core::Color;
use volley_render::{font, Frame};
use volley_runtime::{Button, State, StateId};

/// Blink period for the prompt, in ticks (half a second at 60 Hz)
const BLINK_TICKS: u64 = 30;

/// The title screen. Start begins a game; everything else is ignored.
pub struct MenuState {
    ticks: u64,
    start_requested: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            start_requested: false,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for MenuState {
    fn init(&mut self) {
        self.ticks = 0;
        self.start_requested = false;
    }

    fn update(&mut self) -> Option<StateId> {
        self.ticks += 1;
        if self.start_requested {
            return Some(StateId::Play);
        }
        None
    }

    fn render(&self, frame: &mut Frame) {
        let width = frame.width() as i32;
        let center = |text: &str| (width - font::text_width(text) as i32) / 2;

        let title = "VOLLEY";
        frame.draw_text(center(title), 60, title, Color::WHITE);

        // Blinking prompt
        if (self.ticks / BLINK_TICKS) % 2 == 0 {
            let prompt = "PRESS ENTER";
            frame.draw_text(center(prompt), 100, prompt, Color::YELLOW);
        }

        let hint = "ARROWS MOVE - SPACE SHOOTS";
        frame.draw_text(center(hint), 160, hint, Color::new(128, 128, 128, 255));
    }

    fn on_key_down(&mut self, button: Button) {
        if button == Button::Start {
            self.start_requested = true;
        }
    }

    fn on_key_up(&mut self, _button: Button) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_requests_play() {
        let mut menu = MenuState::new();
        assert_eq!(menu.update(), None);

        menu.on_key_down(Button::Start);
        assert_eq!(menu.update(), Some(StateId::Play));
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut menu = MenuState::new();
        menu.on_key_down(Button::Shoot);
        menu.on_key_down(Button::Back);
        assert_eq!(menu.update(), None);
    }

    #[test]
    fn test_init_resets_pending_start() {
        let mut menu = MenuState::new();
        menu.on_key_down(Button::Start);
        menu.init();
        assert_eq!(menu.update(), None);
        assert_eq!(menu.ticks, 1);
    }

    #[test]
    fn test_render_draws_title() {
        let menu = MenuState::new();
        let mut frame = Frame::new(320, 180);
        menu.render(&mut frame);
        let black = u32::from_le_bytes(Color::BLACK.to_bytes());
        let lit = frame.pixels().iter().filter(|&&p| p != black).count();
        assert!(lit > 0);
    }
}

//! Input mapping
//!
//! Raw platform key codes stop here: states only ever see the `Button`
//! enumeration, so rebinding or adding an input backend touches this one
//! table.

use winit::keyboard::KeyCode;

/// The game's logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    Start,
    Back,
}

/// Translate a winit key code into a logical button.
///
/// Arrows and WASD both steer, Space shoots, Enter confirms, Escape backs
/// out. Keys without a binding are dropped at the boundary.
pub fn map_key(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Button::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Button::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Button::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Button::Right),
        KeyCode::Space => Some(Button::Shoot),
        KeyCode::Enter => Some(Button::Start),
        KeyCode::Escape => Some(Button::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_agree() {
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Button::Left));
        assert_eq!(map_key(KeyCode::KeyA), Some(Button::Left));
        assert_eq!(map_key(KeyCode::ArrowUp), map_key(KeyCode::KeyW));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(KeyCode::Space), Some(Button::Shoot));
        assert_eq!(map_key(KeyCode::Enter), Some(Button::Start));
        assert_eq!(map_key(KeyCode::Escape), Some(Button::Back));
    }

    #[test]
    fn test_unbound_keys_dropped() {
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_key(KeyCode::F1), None);
    }
}

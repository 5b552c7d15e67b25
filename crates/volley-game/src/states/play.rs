//! Active gameplay state
//!
//! A minimal shooter: the ship steers with held direction intents and
//! fires bullets upward on a cooldown. Key handlers only latch boolean
//! intent flags; `update` reads them once per tick, so input timing never
//! affects the simulation mid-step.

use volley_core::Color;
use volley_render::Frame;
use volley_runtime::{Button, State, StateId};

const SHIP_WIDTH: u32 = 9;
const SHIP_HEIGHT: u32 = 7;
/// Ship speed in pixels per tick
const SHIP_SPEED: f32 = 2.0;
/// Bullet speed in pixels per tick (upward)
const BULLET_SPEED: f32 = 4.0;
const BULLET_WIDTH: u32 = 1;
const BULLET_HEIGHT: u32 = 3;
/// Ticks between shots while the shoot intent is held
const SHOOT_COOLDOWN_TICKS: u32 = 10;

const SHIP_COLOR: Color = Color::GREEN;
const BULLET_COLOR: Color = Color::YELLOW;

struct Bullet {
    x: f32,
    y: f32,
}

/// Held-key intents, latched by the key handlers
#[derive(Default)]
struct Intents {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    shoot: bool,
}

pub struct PlayState {
    bounds: (u32, u32),
    ship_x: f32,
    ship_y: f32,
    bullets: Vec<Bullet>,
    intents: Intents,
    cooldown: u32,
    back_requested: bool,
}

impl PlayState {
    pub fn new(logical_width: u32, logical_height: u32) -> Self {
        let mut state = Self {
            bounds: (logical_width, logical_height),
            ship_x: 0.0,
            ship_y: 0.0,
            bullets: Vec::new(),
            intents: Intents::default(),
            cooldown: 0,
            back_requested: false,
        };
        state.init();
        state
    }

    fn spawn_bullet(&mut self) {
        self.bullets.push(Bullet {
            x: self.ship_x + (SHIP_WIDTH / 2) as f32,
            y: self.ship_y - BULLET_HEIGHT as f32,
        });
    }
}

impl State for PlayState {
    /// Reset the run: ship centered at the bottom, no bullets, intents
    /// cleared (held keys re-latch from fresh key events).
    fn init(&mut self) {
        let (width, height) = self.bounds;
        self.ship_x = ((width - SHIP_WIDTH) / 2) as f32;
        self.ship_y = (height - SHIP_HEIGHT - 4) as f32;
        self.bullets.clear();
        self.intents = Intents::default();
        self.cooldown = 0;
        self.back_requested = false;
    }

    fn update(&mut self) -> Option<StateId> {
        if self.back_requested {
            return Some(StateId::Menu);
        }

        let (width, height) = self.bounds;

        // Steer, clamped to the frame
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.intents.left {
            dx -= SHIP_SPEED;
        }
        if self.intents.right {
            dx += SHIP_SPEED;
        }
        if self.intents.up {
            dy -= SHIP_SPEED;
        }
        if self.intents.down {
            dy += SHIP_SPEED;
        }
        self.ship_x = (self.ship_x + dx).clamp(0.0, (width - SHIP_WIDTH) as f32);
        self.ship_y = (self.ship_y + dy).clamp(0.0, (height - SHIP_HEIGHT) as f32);

        // Fire on cooldown while the intent is held
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
        if self.intents.shoot && self.cooldown == 0 {
            self.spawn_bullet();
            self.cooldown = SHOOT_COOLDOWN_TICKS;
        }

        // Advance bullets, dropping the ones past the top edge
        for bullet in &mut self.bullets {
            bullet.y -= BULLET_SPEED;
        }
        self.bullets.retain(|b| b.y + BULLET_HEIGHT as f32 > 0.0);

        None
    }

    fn render(&self, frame: &mut Frame) {
        for bullet in &self.bullets {
            frame.fill_rect(
                bullet.x as i32,
                bullet.y as i32,
                BULLET_WIDTH,
                BULLET_HEIGHT,
                BULLET_COLOR,
            );
        }

        // Hull with a nose block on top
        let x = self.ship_x as i32;
        let y = self.ship_y as i32;
        frame.fill_rect(x, y + 2, SHIP_WIDTH, SHIP_HEIGHT - 2, SHIP_COLOR);
        frame.fill_rect(x + 3, y, 3, 2, SHIP_COLOR);
    }

    fn on_key_down(&mut self, button: Button) {
        match button {
            Button::Left => self.intents.left = true,
            Button::Right => self.intents.right = true,
            Button::Up => self.intents.up = true,
            Button::Down => self.intents.down = true,
            Button::Shoot => self.intents.shoot = true,
            Button::Back => self.back_requested = true,
            Button::Start => {}
        }
    }

    fn on_key_up(&mut self, button: Button) {
        match button {
            Button::Left => self.intents.left = false,
            Button::Right => self.intents.right = false,
            Button::Up => self.intents.up = false,
            Button::Down => self.intents.down = false,
            Button::Shoot => self.intents.shoot = false,
            Button::Back | Button::Start => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play() -> PlayState {
        PlayState::new(320, 180)
    }

    #[test]
    fn test_init_centers_ship() {
        let state = play();
        assert_eq!(state.ship_x, ((320 - SHIP_WIDTH) / 2) as f32);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_held_direction_moves_ship() {
        let mut state = play();
        let start_x = state.ship_x;
        state.on_key_down(Button::Right);
        state.update();
        state.update();
        assert_eq!(state.ship_x, start_x + 2.0 * SHIP_SPEED);

        state.on_key_up(Button::Right);
        state.update();
        assert_eq!(state.ship_x, start_x + 2.0 * SHIP_SPEED);
    }

    #[test]
    fn test_ship_clamped_to_bounds() {
        let mut state = play();
        state.on_key_down(Button::Left);
        for _ in 0..500 {
            state.update();
        }
        assert_eq!(state.ship_x, 0.0);
    }

    #[test]
    fn test_shoot_respects_cooldown() {
        let mut state = play();
        state.on_key_down(Button::Shoot);
        state.update();
        assert_eq!(state.bullets.len(), 1);

        // Held intent fires nothing until the cooldown drains
        for _ in 0..(SHOOT_COOLDOWN_TICKS - 1) {
            state.update();
        }
        assert_eq!(state.bullets.len(), 1);
        state.update();
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullets_despawn_off_top() {
        let mut state = play();
        state.on_key_down(Button::Shoot);
        state.update();
        state.on_key_up(Button::Shoot);
        assert_eq!(state.bullets.len(), 1);

        // Far more ticks than the frame height needs at bullet speed
        for _ in 0..200 {
            state.update();
        }
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_back_requests_menu() {
        let mut state = play();
        assert_eq!(state.update(), None);
        state.on_key_down(Button::Back);
        assert_eq!(state.update(), Some(StateId::Menu));
    }

    #[test]
    fn test_init_resets_run() {
        let mut state = play();
        state.on_key_down(Button::Shoot);
        state.on_key_down(Button::Right);
        for _ in 0..5 {
            state.update();
        }
        assert!(!state.bullets.is_empty());

        state.init();
        assert!(state.bullets.is_empty());
        assert_eq!(state.ship_x, ((320 - SHIP_WIDTH) / 2) as f32);
        assert_eq!(state.update(), None);
        // Intents were cleared: the ship holds still
        let x = state.ship_x;
        state.update();
        assert_eq!(state.ship_x, x);
    }

    #[test]
    fn test_render_draws_ship() {
        let state = play();
        let mut frame = Frame::new(320, 180);
        state.render(&mut frame);
        let ship = frame.get_pixel(state.ship_x as i32 + 1, state.ship_y as i32 + 3);
        assert_eq!(ship, Some(SHIP_COLOR));
    }
}

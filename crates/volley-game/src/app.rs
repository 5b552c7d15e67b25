//! Game application implementing winit ApplicationHandler
//!
//! Runs the fixed-timestep loop: each redraw drains the clock's owed
//! steps, performing one state update + one framebuffer render per step,
//! then presents the framebuffer scaled onto the window.

use crate::states::{MenuState, PlayState};
use std::sync::Arc;
use volley_core::{Color, GameConfig, Result};
use volley_render::{BlitPipeline, Frame, RenderContext};
use volley_runtime::{map_key, FpsCounter, GameClock, State, StateId, StateMachine};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

const BACKGROUND: Color = Color::BLACK;
const FPS_TEXT_POS: (i32, i32) = (4, 4);

pub struct GameApp {
    config: GameConfig,
    fullscreen: bool,

    // Simulation
    machine: StateMachine,
    clock: GameClock,
    fps: FpsCounter,
    frame: Frame,

    // Presentation (created once the event loop hands us a window)
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    blit: Option<BlitPipeline>,
}

impl GameApp {
    /// Build the app with the fixed state catalog: Menu first, then Play.
    ///
    /// The config is validated here as well as at load time, so
    /// programmatically built configs get the same fail-fast check.
    pub fn new(config: GameConfig, fullscreen: bool) -> Result<Self> {
        config.validate()?;

        let machine = StateMachine::new(vec![
            (
                StateId::Menu,
                Box::new(MenuState::new()) as Box<dyn State>,
            ),
            (
                StateId::Play,
                Box::new(PlayState::new(config.logical_width, config.logical_height))
                    as Box<dyn State>,
            ),
        ])?;

        Ok(Self {
            machine,
            clock: GameClock::with_fixed_timestep(config.target_fps as f64),
            fps: FpsCounter::new(),
            frame: Frame::new(config.logical_width, config.logical_height),
            window: None,
            render_context: None,
            blit: None,
            config,
            fullscreen,
        })
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        let render_context =
            pollster::block_on(RenderContext::new(window, self.config.pacing)).unwrap();
        let blit = BlitPipeline::new(
            &render_context,
            self.config.logical_width,
            self.config.logical_height,
        );

        self.render_context = Some(render_context);
        self.blit = Some(blit);
    }

    /// One loop iteration: drain owed steps, one update+render pair each.
    ///
    /// A stall of N periods replays N full pairs (render stays coupled 1:1
    /// with update); if no step is owed the framebuffer is left untouched.
    fn tick(&mut self) {
        self.clock.tick();

        while self.clock.should_step() {
            self.machine.update();

            self.frame.clear(BACKGROUND);
            self.machine.render(&mut self.frame);
            let fps_text = format!("FPS: {}", self.fps.fps());
            self.frame
                .draw_text(FPS_TEXT_POS.0, FPS_TEXT_POS.1, &fps_text, Color::WHITE);

            self.clock.consume_step();
            self.fps.record_step();
        }

        self.fps.advance(self.clock.delta_time);
    }

    /// Blit the framebuffer to the window. An unready surface skips the
    /// frame; the next iteration retries.
    fn present(&mut self) {
        let (Some(context), Some(blit)) = (&self.render_context, &self.blit) else {
            return;
        };
        if let Err(e) = blit.present(context, &self.frame) {
            log::error!("present failed: {e}");
        }
    }
}

impl ApplicationHandler for GameApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    let Some(button) = map_key(key_code) else {
                        return;
                    };
                    match event.state {
                        ElementState::Pressed => self.machine.on_key_down(button),
                        ElementState::Released => self.machine.on_key_up(button),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
                self.present();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volley_core::VolleyError;

    #[test]
    fn test_default_config_builds() {
        let app = GameApp::new(GameConfig::default(), false).unwrap();
        assert_eq!(app.machine.current(), StateId::Menu);
    }

    #[test]
    fn test_undersized_resolution_rejected() {
        // A 4px-wide framebuffer cannot hold the ship; construction must
        // fail instead of underflowing sprite placement later
        let config = GameConfig {
            logical_width: 4,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameApp::new(config, false),
            Err(VolleyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_fps_rejected() {
        // target_fps = 0 would make the clock's timestep infinite and
        // freeze the loop
        let config = GameConfig {
            target_fps: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameApp::new(config, false),
            Err(VolleyError::InvalidConfig(_))
        ));
    }
}

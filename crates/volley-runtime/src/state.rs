//! Game state machine — flat automaton routing the loop to one active state.
//!
//! The machine holds the fixed catalog of states built at startup and
//! forwards update/render/input calls to exactly one of them. Switching
//! states re-runs the target's `init` (entry hook only, no exit hooks), so
//! a state resets its own data every time it becomes active.

use crate::input::Button;
use volley_core::{Result, VolleyError};
use volley_render::Frame;

/// Stable identifiers for the cataloged states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    /// Title screen
    Menu,
    /// Active gameplay
    Play,
    /// Reserved: declared but no state is registered for it, so switching
    /// here is currently a no-op. Kept as the catalog's open third slot.
    GameOver,
}

/// Behavior contract for a game state.
///
/// States are created once and live for the process lifetime; `init` runs
/// each time the state becomes active. `render` draws the current frame
/// and must not mutate simulation state. Transitions are requested by
/// returning the target id from `update`.
pub trait State {
    /// Reset internal data; called every time this state becomes active
    fn init(&mut self);

    /// Advance one fixed timestep. Returning `Some(id)` requests a switch.
    fn update(&mut self) -> Option<StateId>;

    /// Draw this state into the frame
    fn render(&self, frame: &mut Frame);

    /// A logical button went down
    fn on_key_down(&mut self, button: Button);

    /// A logical button came up
    fn on_key_up(&mut self, button: Button);
}

/// Routes update/render/input to the active state.
///
/// The catalog is fixed at construction (insertion order is catalog
/// order); only the active index changes afterwards.
pub struct StateMachine {
    states: Vec<(StateId, Box<dyn State>)>,
    current: usize,
}

impl StateMachine {
    /// Build the machine from an ordered catalog. The first entry becomes
    /// active and its `init` runs once.
    ///
    /// Fails on an empty catalog or a duplicated id — both are
    /// construction-time programmer errors, unreachable through normal
    /// operation.
    pub fn new(mut states: Vec<(StateId, Box<dyn State>)>) -> Result<Self> {
        if states.is_empty() {
            return Err(VolleyError::EmptyStateCatalog);
        }
        for i in 1..states.len() {
            if states[..i].iter().any(|(id, _)| *id == states[i].0) {
                return Err(VolleyError::DuplicateState(format!("{:?}", states[i].0)));
            }
        }

        states[0].1.init();
        Ok(Self { states, current: 0 })
    }

    /// The id of the active state
    pub fn current(&self) -> StateId {
        self.states[self.current].0
    }

    /// Switch the active state and run its `init`.
    ///
    /// An id with no registered state leaves the previous state active and
    /// returns `false`; no error is surfaced.
    pub fn set_current(&mut self, id: StateId) -> bool {
        match self.states.iter().position(|(sid, _)| *sid == id) {
            Some(index) => {
                self.current = index;
                self.states[index].1.init();
                true
            }
            None => {
                log::debug!("ignoring switch to unregistered state {:?}", id);
                false
            }
        }
    }

    /// Advance the active state one step, applying any transition it requests
    pub fn update(&mut self) {
        if let Some(next) = self.states[self.current].1.update() {
            self.set_current(next);
        }
    }

    /// Draw the active state into the frame
    pub fn render(&self, frame: &mut Frame) {
        self.states[self.current].1.render(frame);
    }

    /// Forward a button press to the active state
    pub fn on_key_down(&mut self, button: Button) {
        self.states[self.current].1.on_key_down(button);
    }

    /// Forward a button release to the active state
    pub fn on_key_up(&mut self, button: Button) {
        self.states[self.current].1.on_key_up(button);
    }
}

//! Input source trait and idle implementation.
//!
//! Once per frame the runner asks an [`InputSource`] what the player is
//! doing: which movement keys are held and which discrete actions were
//! triggered since the last frame. The source could be a keyboard bridge,
//! a scripted bot, a replay file, or a test stub.

use frostvale_types::{MoveIntent, PlayerAction};

use crate::tick::SimulationState;

/// Everything the player did during one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    /// Movement keys held this frame.
    pub intent: MoveIntent,
    /// Discrete actions, applied in order before the tick runs.
    pub actions: Vec<PlayerAction>,
}

impl FrameInput {
    /// Hold `intent` with no discrete actions.
    pub const fn moving(intent: MoveIntent) -> Self {
        Self {
            intent,
            actions: Vec::new(),
        }
    }
}

/// A source of player input.
///
/// The runner calls [`poll`](InputSource::poll) once per frame, before the
/// tick, with read access to the current state.
pub trait InputSource {
    /// Report the input for the frame that is about to run `tick`.
    fn poll(&mut self, tick: u64, state: &SimulationState) -> FrameInput;
}

/// An input source that never presses anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl IdleInput {
    /// Create a new idle input source.
    pub const fn new() -> Self {
        Self
    }
}

impl InputSource for IdleInput {
    fn poll(&mut self, _tick: u64, _state: &SimulationState) -> FrameInput {
        FrameInput::default()
    }
}

/// Replays a fixed list of frames, then goes idle.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<FrameInput>,
}

impl ScriptedInput {
    /// Queue `frames` for playback in order.
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet played.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _tick: u64, _state: &SimulationState) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

use tracing::warn;

use crate::core::flight::controls::{Axis, Intent, PointerTarget};
use crate::input::keys::{InputKey, KeyAction, action_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys held while another key changed state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Shift alone never blocks a binding.
    #[must_use]
    pub fn blocks_bindings(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: InputKey,
    pub state: KeyState,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: InputKey, state: KeyState) -> Self {
        Self {
            key,
            state,
            modifiers: Modifiers::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Pointer or touch event, positioned as a fraction of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub u: f64,
    pub v: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(phase: PointerPhase, u: f64, v: f64) -> Self {
        Self { phase, u, v }
    }

    /// Normalizes an absolute position within a `width` x `height` area.
    #[must_use]
    pub fn from_absolute(phase: PointerPhase, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            phase,
            u: x / width,
            v: y / height,
        }
    }
}

/// Turns raw key and pointer events into intents.
///
/// Keeps only the pointer drag state; everything else lives in the
/// controller.
#[derive(Debug, Default)]
pub struct InputTranslator {
    dragging: bool,
}

impl InputTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn key(&mut self, event: KeyEvent) -> Option<Intent> {
        if event.key.is_modifier() || event.modifiers.blocks_bindings() {
            return None;
        }

        let pressed = event.state == KeyState::Pressed;

        match action_for(event.key)? {
            KeyAction::Pan { axis, direction } if pressed => Some(Intent::Pan { axis, direction }),
            KeyAction::Pan { axis, .. } => Some(Intent::StopPan { axis }),
            KeyAction::Zoom(direction) if pressed => Some(Intent::Zoom(direction)),
            KeyAction::Zoom(_) => Some(Intent::StopZoom),
            KeyAction::Reset if pressed => Some(Intent::Reset),
            KeyAction::Recolor if !pressed => Some(Intent::Recolor),
            KeyAction::ToggleHelp if pressed => Some(Intent::ToggleHelp),
            _ => None,
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Option<Intent> {
        match event.phase {
            PointerPhase::Down => {
                self.dragging = true;
                self.pointer_target(event)
            }
            PointerPhase::Move if self.dragging => self.pointer_target(event),
            PointerPhase::Move => None,
            PointerPhase::Up => {
                self.dragging = false;
                Some(Intent::PointerRelease)
            }
        }
    }

    /// Intents that stop every held motion, e.g. when the window loses focus.
    pub fn release_all(&mut self) -> [Intent; 4] {
        self.dragging = false;

        [
            Intent::StopPan {
                axis: Axis::Horizontal,
            },
            Intent::StopPan {
                axis: Axis::Vertical,
            },
            Intent::StopZoom,
            Intent::PointerRelease,
        ]
    }

    fn pointer_target(&self, event: PointerEvent) -> Option<Intent> {
        match PointerTarget::new(event.u, event.v) {
            Some(target) => Some(Intent::PointerZoom(target)),
            None => {
                warn!(u = event.u, v = event.v, "pointer outside frame ignored");
                None
            }
        }
    }
}

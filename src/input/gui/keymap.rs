use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::keys::InputKey;
use crate::input::translator::Modifiers;

/// Maps a physical key onto the explorer's key set.
#[must_use]
pub fn input_key(key: PhysicalKey) -> InputKey {
    let PhysicalKey::Code(code) = key else {
        return InputKey::Unidentified;
    };

    match code {
        KeyCode::ArrowLeft => InputKey::ArrowLeft,
        KeyCode::ArrowRight => InputKey::ArrowRight,
        KeyCode::ArrowUp => InputKey::ArrowUp,
        KeyCode::ArrowDown => InputKey::ArrowDown,
        KeyCode::KeyA => InputKey::A,
        KeyCode::KeyD => InputKey::D,
        KeyCode::KeyW => InputKey::W,
        KeyCode::KeyS => InputKey::S,
        KeyCode::Equal | KeyCode::NumpadAdd => InputKey::Equal,
        KeyCode::Minus | KeyCode::NumpadSubtract => InputKey::Minus,
        KeyCode::KeyE => InputKey::E,
        KeyCode::KeyQ => InputKey::Q,
        KeyCode::KeyR => InputKey::R,
        KeyCode::Home => InputKey::Home,
        KeyCode::KeyC => InputKey::C,
        KeyCode::KeyH => InputKey::H,
        KeyCode::Slash => InputKey::Slash,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => InputKey::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => InputKey::Control,
        KeyCode::AltLeft | KeyCode::AltRight => InputKey::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => InputKey::Meta,
        _ => InputKey::Unidentified,
    }
}

#[must_use]
pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

use crate::core::flight::controls::{Axis, PanDirection, ZoomDirection};

/// Host-independent key identifiers understood by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
    Equal,
    Minus,
    E,
    Q,
    R,
    Home,
    C,
    H,
    Slash,
    Shift,
    Control,
    Alt,
    Meta,
    Unidentified,
}

impl InputKey {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ArrowLeft => "Left",
            Self::ArrowRight => "Right",
            Self::ArrowUp => "Up",
            Self::ArrowDown => "Down",
            Self::A => "A",
            Self::D => "D",
            Self::W => "W",
            Self::S => "S",
            Self::Equal => "=",
            Self::Minus => "-",
            Self::E => "E",
            Self::Q => "Q",
            Self::R => "R",
            Self::Home => "Home",
            Self::C => "C",
            Self::H => "H",
            Self::Slash => "?",
            Self::Shift => "Shift",
            Self::Control => "Ctrl",
            Self::Alt => "Alt",
            Self::Meta => "Meta",
            Self::Unidentified => "?",
        }
    }

    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(self, Self::Shift | Self::Control | Self::Alt | Self::Meta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Held: pan while down, stop on release.
    Pan { axis: Axis, direction: PanDirection },
    /// Held: zoom while down, stop on release.
    Zoom(ZoomDirection),
    Reset,
    /// Fires on release.
    Recolor,
    ToggleHelp,
}

pub struct KeyBinding {
    pub keys: &'static [InputKey],
    pub action: KeyAction,
    pub label: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: &[InputKey::ArrowLeft, InputKey::A],
        action: KeyAction::Pan {
            axis: Axis::Horizontal,
            direction: PanDirection::Negative,
        },
        label: "Pan left",
    },
    KeyBinding {
        keys: &[InputKey::ArrowRight, InputKey::D],
        action: KeyAction::Pan {
            axis: Axis::Horizontal,
            direction: PanDirection::Positive,
        },
        label: "Pan right",
    },
    KeyBinding {
        keys: &[InputKey::ArrowUp, InputKey::W],
        action: KeyAction::Pan {
            axis: Axis::Vertical,
            direction: PanDirection::Negative,
        },
        label: "Pan up",
    },
    KeyBinding {
        keys: &[InputKey::ArrowDown, InputKey::S],
        action: KeyAction::Pan {
            axis: Axis::Vertical,
            direction: PanDirection::Positive,
        },
        label: "Pan down",
    },
    KeyBinding {
        keys: &[InputKey::Equal, InputKey::E],
        action: KeyAction::Zoom(ZoomDirection::In),
        label: "Zoom in",
    },
    KeyBinding {
        keys: &[InputKey::Minus, InputKey::Q],
        action: KeyAction::Zoom(ZoomDirection::Out),
        label: "Zoom out",
    },
    KeyBinding {
        keys: &[InputKey::R, InputKey::Home],
        action: KeyAction::Reset,
        label: "Reset view",
    },
    KeyBinding {
        keys: &[InputKey::C],
        action: KeyAction::Recolor,
        label: "Random colours",
    },
    KeyBinding {
        keys: &[InputKey::H, InputKey::Slash],
        action: KeyAction::ToggleHelp,
        label: "Toggle help",
    },
];

#[must_use]
pub fn action_for(key: InputKey) -> Option<KeyAction> {
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&key))
        .map(|binding| binding.action)
}

/// Keys of a binding joined for display, e.g. `"Left / A"`.
#[must_use]
pub fn keys_label(binding: &KeyBinding) -> String {
    binding
        .keys
        .iter()
        .map(|key| key.display_name())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Negative,
    Positive,
}

impl PanDirection {
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Normalized pointer position on the display surface, `(0, 0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTarget {
    u: f64,
    v: f64,
}

impl PointerTarget {
    /// Returns `None` unless both fractions lie in `[0, 1]`.
    #[must_use]
    pub fn new(u: f64, v: f64) -> Option<Self> {
        let in_range = |f: f64| (0.0..=1.0).contains(&f);

        (in_range(u) && in_range(v)).then_some(Self { u, v })
    }

    #[must_use]
    pub fn u(&self) -> f64 {
        self.u
    }

    #[must_use]
    pub fn v(&self) -> f64 {
        self.v
    }
}

impl Default for PointerTarget {
    fn default() -> Self {
        Self { u: 0.5, v: 0.5 }
    }
}

/// Motion intents produced by input translation and consumed by the
/// explorer controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Pan { axis: Axis, direction: PanDirection },
    StopPan { axis: Axis },
    Zoom(ZoomDirection),
    StopZoom,
    PointerZoom(PointerTarget),
    PointerRelease,
    Reset,
    Recolor,
    ToggleHelp,
}

impl Intent {
    /// Intents that dismiss the legend overlay.
    #[must_use]
    pub const fn hides_help(&self) -> bool {
        matches!(
            self,
            Self::Pan { .. } | Self::Zoom(_) | Self::PointerZoom(_) | Self::Recolor
        )
    }
}

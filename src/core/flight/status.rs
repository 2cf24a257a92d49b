use crate::core::data::complex::Complex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightPhase {
    #[default]
    Idle,
    Moving,
    Settling,
}

impl FlightPhase {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Moving => "Moving",
            Self::Settling => "Settling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightWarning {
    ZoomRejected,
    PanRejected,
    RenderFailed,
}

/// Snapshot of the explorer shown alongside a presented frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightStatus {
    pub phase: FlightPhase,
    pub pixel_block: u32,
    pub max_iterations: u32,
    pub center: Complex,
    pub half_width: f64,
    pub help_visible: bool,
    pub last_frame_duration: Option<Duration>,
    pub last_warning: Option<FlightWarning>,
}

impl Default for FlightStatus {
    fn default() -> Self {
        Self {
            phase: FlightPhase::Idle,
            pixel_block: 1,
            max_iterations: 0,
            center: Complex::default(),
            half_width: 0.0,
            help_visible: true,
            last_frame_duration: None,
            last_warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlightPhase, FlightStatus, FlightWarning};

    #[test]
    fn default_status_is_idle_at_full_detail() {
        let status = FlightStatus::default();

        assert_eq!(status.phase, FlightPhase::Idle);
        assert_eq!(status.pixel_block, 1);
        assert!(status.help_visible);
        assert_eq!(status.last_warning, None);
    }

    #[test]
    fn warning_can_be_attached_to_status() {
        let status = FlightStatus {
            last_warning: Some(FlightWarning::ZoomRejected),
            ..FlightStatus::default()
        };

        assert_eq!(status.last_warning, Some(FlightWarning::ZoomRejected));
    }

    #[test]
    fn phase_display_names_are_unique() {
        let names = [
            FlightPhase::Idle.display_name(),
            FlightPhase::Moving.display_name(),
            FlightPhase::Settling.display_name(),
        ];

        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_ne!(names[0], names[2]);
    }
}

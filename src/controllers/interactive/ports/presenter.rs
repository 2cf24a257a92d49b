use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::flight::status::FlightStatus;

/// Receives every completed frame, once per tick.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameBuffer, status: &FlightStatus);
}

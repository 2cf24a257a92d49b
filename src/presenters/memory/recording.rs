use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::flight::status::FlightStatus;

/// Keeps every presented status and the most recent frame.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    statuses: Vec<FlightStatus>,
    last_frame: Option<FrameBuffer>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn statuses(&self) -> &[FlightStatus] {
        &self.statuses
    }

    #[must_use]
    pub fn last_status(&self) -> Option<&FlightStatus> {
        self.statuses.last()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    /// Pixel block of every presented frame, in order.
    #[must_use]
    pub fn pixel_blocks(&self) -> Vec<u32> {
        self.statuses.iter().map(|status| status.pixel_block).collect()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
        self.last_frame = None;
    }
}

impl FramePresenterPort for RecordingPresenter {
    fn present(&mut self, frame: &FrameBuffer, status: &FlightStatus) {
        self.statuses.push(status.clone());

        match &mut self.last_frame {
            Some(last) if last.dims() == frame.dims() => {
                last.pixels_mut().copy_from_slice(frame.pixels());
            }
            _ => self.last_frame = Some(frame.clone()),
        }
    }
}

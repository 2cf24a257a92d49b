pub mod errors;
pub mod render_frame;

pub mod errors;
pub mod hsl;
pub mod palette;
pub mod seeds;

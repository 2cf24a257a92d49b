pub mod colour_map;
pub mod escape_algorithm;

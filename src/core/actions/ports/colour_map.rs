pub trait ColourMap {
    /// Packed opaque ARGB colour for an escape value computed with the given
    /// iteration budget.
    fn argb(&self, value: f64, max_iterations: u32) -> u32;
}

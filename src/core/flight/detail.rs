/// Sampling stride of the renderer: one sample per `pixel_block` square.
///
/// Always a power of two in `1..=max_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLevel {
    pixel_block: u32,
    max_block: u32,
}

impl DetailLevel {
    /// `max_block` is rounded up to a power of two.
    #[must_use]
    pub fn new(max_block: u32) -> Self {
        Self {
            pixel_block: 1,
            max_block: max_block.max(1).next_power_of_two(),
        }
    }

    #[must_use]
    pub fn pixel_block(&self) -> u32 {
        self.pixel_block
    }

    #[must_use]
    pub fn max_block(&self) -> u32 {
        self.max_block
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pixel_block == 1
    }

    /// Doubles the block size, capped at the maximum.
    pub fn coarsen(&mut self) {
        self.pixel_block = (self.pixel_block * 2).min(self.max_block);
    }

    /// Halves the block size, down to full detail.
    pub fn refine(&mut self) {
        self.pixel_block = (self.pixel_block / 2).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::DetailLevel;

    #[test]
    fn starts_at_full_detail() {
        let detail = DetailLevel::new(8);

        assert_eq!(detail.pixel_block(), 1);
        assert!(detail.is_full());
    }

    #[test]
    fn coarsen_doubles_up_to_cap() {
        let mut detail = DetailLevel::new(8);
        let mut seen = Vec::new();

        for _ in 0..5 {
            detail.coarsen();
            seen.push(detail.pixel_block());
        }

        assert_eq!(seen, vec![2, 4, 8, 8, 8]);
    }

    #[test]
    fn refine_halves_down_to_one() {
        let mut detail = DetailLevel::new(8);
        for _ in 0..3 {
            detail.coarsen();
        }
        let mut seen = Vec::new();

        for _ in 0..4 {
            detail.refine();
            seen.push(detail.pixel_block());
        }

        assert_eq!(seen, vec![4, 2, 1, 1]);
    }

    #[test]
    fn max_block_is_rounded_to_power_of_two() {
        assert_eq!(DetailLevel::new(6).max_block(), 8);
        assert_eq!(DetailLevel::new(0).max_block(), 1);
    }

    #[test]
    fn single_level_never_coarsens() {
        let mut detail = DetailLevel::new(1);
        detail.coarsen();

        assert_eq!(detail.pixel_block(), 1);
    }
}

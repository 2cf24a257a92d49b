/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Invoke `tick` again as soon as possible.
    Continue,
    /// Nothing left to render until the next intent or resize.
    Idle,
}

/// Tracks whether a render loop is running so that only one is ever started.
#[derive(Debug, Default)]
pub struct TickScheduler {
    ticking: bool,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self { ticking: false }
    }

    /// Marks the loop as running. Returns `true` if it was idle, meaning the
    /// caller is responsible for scheduling the first tick.
    pub fn request(&mut self) -> bool {
        let start = !self.ticking;
        self.ticking = true;

        start
    }

    pub fn finish(&mut self, outcome: TickOutcome) {
        if outcome == TickOutcome::Idle {
            self.ticking = false;
        }
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

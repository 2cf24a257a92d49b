pub mod scheduler;

pub use scheduler::{TickOutcome, TickScheduler};

//! Time-of-day source for opening-hours checks.
//!
//! [`Restaurant`](crate::restaurant::Restaurant) never reads the wall clock directly.
//! It asks a [`Clock`], so tests can hand it a [`mock::FixedClock`] and probe any
//! instant without sleeping or touching the system time.

pub mod mock;

use chrono::{Local, NaiveTime};
use std::fmt::Debug;

pub use mock::FixedClock;

/// Abstraction over the current time of day.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Production clock backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

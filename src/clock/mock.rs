//! # Mock Clock
//!
//! Utilities for testing time-dependent behavior in isolation.
//!
//! [`FixedClock`] always answers the instant it was given. Call [`FixedClock::set`]
//! to move it; every clone observes the move, so a clone handed to a
//! [`Restaurant`](crate::restaurant::Restaurant) can be re-stubbed from the test body.
//!
//! # Example
//! ```
//! use chrono::NaiveTime;
//! use restaurant_recipe::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::at(12, 30);
//! assert_eq!(clock.now(), NaiveTime::from_hms_opt(12, 30, 0).unwrap());
//!
//! clock.set(NaiveTime::from_hms_opt(23, 30, 0).unwrap());
//! assert_eq!(clock.now(), NaiveTime::from_hms_opt(23, 30, 0).unwrap());
//! ```

use super::Clock;
use chrono::NaiveTime;
use std::sync::{Arc, RwLock};

/// A clock frozen at a caller-chosen instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<RwLock<NaiveTime>>,
}

impl FixedClock {
    /// Creates a clock frozen at `time`.
    pub fn new(time: NaiveTime) -> Self {
        Self {
            instant: Arc::new(RwLock::new(time)),
        }
    }

    /// Creates a clock frozen at `hour:minute:00`.
    ///
    /// # Panics
    /// Panics if `hour` or `minute` is out of range. Meant for test setup only.
    pub fn at(hour: u32, minute: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .unwrap_or_else(|| panic!("invalid time of day {hour:02}:{minute:02}"));
        Self::new(time)
    }

    /// Moves the clock to `time`. All clones see the new instant.
    pub fn set(&self, time: NaiveTime) {
        // A poisoned lock still holds a valid NaiveTime.
        let mut instant = self.instant.write().unwrap_or_else(|e| e.into_inner());
        *instant = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        *self.instant.read().unwrap_or_else(|e| e.into_inner())
    }
}

//! Wall-clock access for reminder scheduling.
//!
//! # Responsibility
//! - Provide the local date/time used to resolve reminder due dates.
//! - Allow tests to pin "now" without touching the system clock.

use chrono::{Local, NaiveDateTime};

/// Source of the current local date/time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system clock, no timezone conversion applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

//! Date sources for vote processing
//!
//! The record-date cutoff compares calendar dates only, so the current
//! date is supplied through the [`Clock`] trait instead of being read
//! from a global. Production callers use [`SystemClock`]; tests pin the
//! date with [`FixedClock`] to exercise the cutoff deterministically.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// The current date, at day granularity
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system wall clock.
///
/// Dates are taken in the system default time zone. A shareholder voting
/// from another zone near midnight may be on a different calendar date
/// than this clock reports; callers that need a specific zone should
/// supply their own [`Clock`] implementation instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

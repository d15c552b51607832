//! World calendar: the global, non-decreasing day counter.

use std::sync::atomic::{AtomicI64, Ordering};

use bevy_ecs::prelude::*;
use thiserror::Error;

/// Game ticks in one calendar day.
pub const TICKS_IN_DAY: i64 = 24_000;

/// Source of the current total day count.
pub trait DayCounter {
    fn total_days(&self) -> i64;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("calendar cannot move backwards (requested {0})")]
    Backwards(i64),

    #[error("calendar overflow advancing by {0}")]
    Overflow(i64),
}

/// Thread-safe tick counter.
///
/// Readers may live on other threads (inspection, reporting); advances publish
/// with release ordering and reads acquire.
#[derive(Resource, Debug)]
pub struct Calendar {
    total_ticks: AtomicI64,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Calendar {
    pub fn new(start_ticks: i64) -> Self {
        Self {
            total_ticks: AtomicI64::new(start_ticks),
        }
    }

    /// Calendar starting at the first tick of `day`.
    pub fn starting_on_day(day: i64) -> Self {
        Self::new(day.saturating_mul(TICKS_IN_DAY))
    }

    pub fn total_ticks(&self) -> i64 {
        self.total_ticks.load(Ordering::Acquire)
    }

    /// Advance by `ticks`, returning the new tick count.
    ///
    /// The counter is left untouched when the advance would overflow.
    pub fn advance_ticks(&self, ticks: i64) -> Result<i64, CalendarError> {
        if ticks < 0 {
            return Err(CalendarError::Backwards(ticks));
        }
        let previous = self
            .total_ticks
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                now.checked_add(ticks)
            })
            .map_err(|_| CalendarError::Overflow(ticks))?;
        Ok(previous + ticks)
    }

    /// Advance by whole days, returning the new day count.
    pub fn advance_days(&self, days: i64) -> Result<i64, CalendarError> {
        if days < 0 {
            return Err(CalendarError::Backwards(days));
        }
        let ticks = days
            .checked_mul(TICKS_IN_DAY)
            .ok_or(CalendarError::Overflow(days))?;
        let ticks = self
            .advance_ticks(ticks)
            .map_err(|_| CalendarError::Overflow(days))?;
        Ok(ticks.div_euclid(TICKS_IN_DAY))
    }
}

impl DayCounter for Calendar {
    fn total_days(&self) -> i64 {
        self.total_ticks().div_euclid(TICKS_IN_DAY)
    }
}

//! Timestamp stepper that hands out evenly spaced instants.
//!
//! Provides [`Stepper`], which starts at the current time of a [`TimeSource`]
//! and advances by a fixed step each time a value is taken.

use crate::time::{CalendarInstant, TimeSource};
use crate::types::{CalendarError, Unit};

/// Step used by [`Stepper::with_default_step`], in milliseconds.
pub const DEFAULT_STEP_MILLIS: i64 = 1_000;

/// Converts a step expressed in `unit` to milliseconds.
fn step_to_millis(value: i64, unit: Unit) -> Result<i64, CalendarError> {
    let unit_millis = unit
        .fixed_millis()
        .ok_or(CalendarError::InvalidArgument("step unit has no fixed length"))?;
    value
        .checked_mul(unit_millis)
        .ok_or(CalendarError::InvalidArgument("step out of range"))
}

/// Produces successive timestamps spaced by a fixed step.
///
/// The stepper is an [`Iterator`]: each call to `next` returns the current
/// timestamp and then advances it. It only ends if an advance leaves the
/// calendar's representable range.
///
/// Mutation goes through `&mut self`. Use one stepper per thread, or serialize
/// access externally.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Instant type produced
/// * `T` - Time source implementation type
pub struct Stepper<'t, I: CalendarInstant, T: TimeSource<I>> {
    time_source: &'t T,
    current: Option<I>,
    step_millis: i64,
}

impl<'t, I: CalendarInstant, T: TimeSource<I>> Stepper<'t, I, T> {
    /// Creates a stepper starting now, advancing by `value` units per call.
    ///
    /// # Errors
    /// * `InvalidArgument` - `unit` is [`Unit::Month`] or [`Unit::Year`], or the
    ///   step does not fit in milliseconds
    pub fn new(time_source: &'t T, value: i64, unit: Unit) -> Result<Self, CalendarError> {
        let step_millis = step_to_millis(value, unit)?;
        Ok(Self {
            time_source,
            current: Some(time_source.now()),
            step_millis,
        })
    }

    /// Creates a stepper starting now with a one-second step.
    pub fn with_default_step(time_source: &'t T) -> Self {
        Self {
            time_source,
            current: Some(time_source.now()),
            step_millis: DEFAULT_STEP_MILLIS,
        }
    }

    /// Restarts from the time source's current time.
    pub fn reset(&mut self) {
        self.current = Some(self.time_source.now());

        #[cfg(feature = "defmt")]
        defmt::trace!("stepper reset, step {=i64} ms", self.step_millis);
    }

    /// Changes the step used by subsequent advances.
    ///
    /// The timestamp already queued is not moved. On error the previous step
    /// is kept.
    ///
    /// # Errors
    /// * `InvalidArgument` - Same conditions as [`Stepper::new`]
    pub fn set_step(&mut self, value: i64, unit: Unit) -> Result<(), CalendarError> {
        self.step_millis = step_to_millis(value, unit)?;
        Ok(())
    }

    /// Returns the timestamp the next call to `next` will return.
    #[inline]
    pub fn peek(&self) -> Option<&I> {
        self.current.as_ref()
    }

    /// Returns the step in milliseconds.
    #[inline]
    pub fn step_millis(&self) -> i64 {
        self.step_millis
    }
}

impl<I: CalendarInstant, T: TimeSource<I>> Iterator for Stepper<'_, I, T> {
    type Item = I;

    /// Returns the current timestamp, then advances it by the step.
    ///
    /// Returns `None` once an advance has overflowed the calendar range;
    /// [`reset`](Stepper::reset) starts it again.
    fn next(&mut self) -> Option<I> {
        let current = self.current.take()?;
        self.current = current.checked_add_units(Unit::Millisecond, self.step_millis);

        #[cfg(feature = "defmt")]
        if self.current.is_none() {
            defmt::trace!("stepper reached the end of the calendar range");
        }

        Some(current)
    }
}

impl<I: CalendarInstant + core::fmt::Debug, T: TimeSource<I>> core::fmt::Debug
    for Stepper<'_, I, T>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stepper")
            .field("current", &self.current)
            .field("step_millis", &self.step_millis)
            .finish()
    }
}

//! World clock and day/night cycle for the Frostvale simulation.
//!
//! The clock tracks the tick counter and the cumulative simulated time in
//! milliseconds. Day progress, the day/night phase, and every light level
//! are derived from elapsed time on demand and never stored.
//!
//! # Day/night
//!
//! `progress = (elapsed mod day_length) / day_length`. The first and last
//! quarter of each day are night, so a fresh clock starts at midnight.
//! During the day the sun follows `0.3 + 0.7 * sin(2 * pi * progress)`
//! with floors of 0.2 (sun) and 0.1 (ambient); at night both sit at
//! their floor.

use core::f64::consts::TAU;

use frostvale_types::{DayPhase, Lighting};

use crate::config::TimeConfig;

/// Fog and sky colour by day.
pub const DAY_FOG: u32 = 0x0087_CEEB;

/// Fog and sky colour by night.
pub const NIGHT_FOG: u32 = 0x0019_1970;

/// Lowest sun intensity.
const SUN_FLOOR: f64 = 0.2;

/// Lowest ambient intensity.
const AMBIENT_FLOOR: f64 = 0.1;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid time configuration (e.g. zero day length).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// A time step that is negative or not a number.
    #[error("invalid time step: {delta_ms} ms")]
    InvalidDelta {
        /// The rejected step.
        delta_ms: f64,
    },
}

/// What one clock advance did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockAdvance {
    /// The tick number just completed.
    pub tick: u64,
    /// Set when the phase flipped during this advance.
    pub transition: Option<DayPhase>,
}

/// World clock tracking the simulation's temporal state.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldClock {
    /// Completed ticks.
    tick: u64,
    /// Cumulative simulated milliseconds.
    elapsed_ms: f64,
    /// Length of a full day/night cycle in milliseconds.
    day_length_ms: f64,
}

impl WorldClock {
    /// Create a new world clock from a time configuration.
    ///
    /// The clock starts at tick 0, elapsed 0, which is night.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the day length is not a
    /// positive finite number.
    pub fn new(config: &TimeConfig) -> Result<Self, ClockError> {
        Self::from_parts(0, 0.0, config.day_length_ms)
    }

    /// Create a clock from explicit parameters (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the day length is not a
    /// positive finite number or elapsed time is negative.
    pub fn from_parts(tick: u64, elapsed_ms: f64, day_length_ms: f64) -> Result<Self, ClockError> {
        if !(day_length_ms.is_finite() && day_length_ms > 0.0) {
            return Err(ClockError::InvalidConfig {
                reason: format!("day_length_ms must be positive, got {day_length_ms}"),
            });
        }
        if !(elapsed_ms.is_finite() && elapsed_ms >= 0.0) {
            return Err(ClockError::InvalidConfig {
                reason: format!("elapsed_ms must be non-negative, got {elapsed_ms}"),
            });
        }
        Ok(Self {
            tick,
            elapsed_ms,
            day_length_ms,
        })
    }

    /// Advance the clock by one tick of `delta_ms` simulated milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidDelta`] for a negative or non-finite
    /// step and [`ClockError::TickOverflow`] if the tick counter would
    /// exceed `u64::MAX`. The clock is unchanged on error.
    pub fn advance(&mut self, delta_ms: f64) -> Result<ClockAdvance, ClockError> {
        if !(delta_ms.is_finite() && delta_ms >= 0.0) {
            return Err(ClockError::InvalidDelta { delta_ms });
        }
        let tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        let before = self.phase();
        self.tick = tick;
        self.elapsed_ms += delta_ms;
        let after = self.phase();
        Ok(ClockAdvance {
            tick,
            transition: (before != after).then_some(after),
        })
    }

    /// Return the number of completed ticks.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Return cumulative simulated milliseconds.
    pub const fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Return the configured day length in milliseconds.
    pub const fn day_length_ms(&self) -> f64 {
        self.day_length_ms
    }

    /// Fraction of the current day elapsed, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.elapsed_ms.rem_euclid(self.day_length_ms) / self.day_length_ms
    }

    /// Whether it is currently night.
    pub fn is_night(&self) -> bool {
        let progress = self.progress();
        progress > 0.75 || progress < 0.25
    }

    /// The current phase.
    pub fn phase(&self) -> DayPhase {
        if self.is_night() {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }

    /// Raw sun curve before flooring.
    fn sun_curve(&self) -> f64 {
        0.7f64.mul_add((TAU * self.progress()).sin(), 0.3)
    }

    /// Directional light intensity.
    pub fn sun_intensity(&self) -> f64 {
        if self.is_night() {
            SUN_FLOOR
        } else {
            self.sun_curve().max(SUN_FLOOR)
        }
    }

    /// Ambient light intensity.
    pub fn ambient_intensity(&self) -> f64 {
        if self.is_night() {
            AMBIENT_FLOOR
        } else {
            (0.5 * self.sun_curve()).max(AMBIENT_FLOOR)
        }
    }

    /// Fog and sky colour as `0xRRGGBB`.
    pub fn fog_color(&self) -> u32 {
        if self.is_night() { NIGHT_FOG } else { DAY_FOG }
    }

    /// All light levels at once.
    pub fn lighting(&self) -> Lighting {
        Lighting {
            is_night: self.is_night(),
            sun_intensity: self.sun_intensity(),
            ambient_intensity: self.ambient_intensity(),
            fog_color: self.fog_color(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn clock_at(elapsed_ms: f64) -> WorldClock {
        WorldClock {
            tick: 0,
            elapsed_ms,
            day_length_ms: 120_000.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_clock_starts_at_night() {
        let clock = WorldClock::new(&TimeConfig::default()).unwrap();
        assert_eq!(clock.tick(), 0);
        assert!(clock.is_night());
        assert_eq!(clock.fog_color(), NIGHT_FOG);
    }

    #[test]
    fn zero_day_length_is_rejected() {
        let config = TimeConfig { day_length_ms: 0.0 };
        assert!(matches!(
            WorldClock::new(&config),
            Err(ClockError::InvalidConfig { .. })
        ));
        let config = TimeConfig {
            day_length_ms: f64::NAN,
        };
        assert!(WorldClock::new(&config).is_err());
    }

    #[test]
    fn quarter_boundaries() {
        // Exactly 0.25 and 0.75 are day.
        assert!(!clock_at(30_000.0).is_night());
        assert!(!clock_at(90_000.0).is_night());
        assert!(clock_at(29_999.0).is_night());
        assert!(clock_at(90_001.0).is_night());
    }

    #[test]
    fn noon_is_brightest() {
        let noon = clock_at(60_000.0);
        // sin(pi) = 0 at progress 0.5, so noon sits at 0.3.
        assert!(approx(noon.sun_intensity(), 0.3));
        let morning = clock_at(45_000.0);
        // progress 0.375: 0.3 + 0.7 * sin(0.75 pi)
        let expected = 0.3 + 0.7 * (0.75 * core::f64::consts::PI).sin();
        assert!(approx(morning.sun_intensity(), expected));
        assert!(approx(morning.ambient_intensity(), 0.5 * expected));
        assert_eq!(morning.fog_color(), DAY_FOG);
    }

    #[test]
    fn afternoon_sun_is_floored() {
        let late = clock_at(85_000.0);
        assert!(!late.is_night());
        assert!(approx(late.sun_intensity(), 0.2));
        assert!(approx(late.ambient_intensity(), 0.1));
    }

    #[test]
    fn night_lighting_is_fixed() {
        let lighting = clock_at(100_000.0).lighting();
        assert!(lighting.is_night);
        assert!(approx(lighting.sun_intensity, 0.2));
        assert!(approx(lighting.ambient_intensity, 0.1));
        assert_eq!(lighting.fog_color, NIGHT_FOG);
    }

    #[test]
    fn progress_wraps_each_day() {
        let clock = clock_at(150_000.0);
        assert!(approx(clock.progress(), 0.25));
        for ms in [0.0, 1.0, 59_999.0, 119_999.0, 240_000.0, 1.0e9] {
            let p = clock_at(ms).progress();
            assert!((0.0..1.0).contains(&p));
        }
    }

    #[test]
    fn advance_reports_dawn_and_dusk() {
        let mut clock = clock_at(29_990.0);
        let dawn = clock.advance(16.67);
        assert!(matches!(
            dawn,
            Ok(ClockAdvance {
                tick: 1,
                transition: Some(DayPhase::Day)
            })
        ));
        let quiet = clock.advance(16.67);
        assert!(matches!(quiet, Ok(ClockAdvance { transition: None, .. })));

        let mut clock = clock_at(89_990.0);
        let dusk = clock.advance(16.67);
        assert!(matches!(
            dusk,
            Ok(ClockAdvance {
                transition: Some(DayPhase::Night),
                ..
            })
        ));
    }

    #[test]
    fn invalid_delta_leaves_clock_untouched() {
        let mut clock = clock_at(1_000.0);
        assert!(matches!(
            clock.advance(-1.0),
            Err(ClockError::InvalidDelta { .. })
        ));
        assert_eq!(clock.tick(), 0);
        assert!(approx(clock.elapsed_ms(), 1_000.0));
    }

    #[test]
    fn tick_overflow_is_an_error() {
        let mut clock = WorldClock::from_parts(u64::MAX, 0.0, 1_000.0).unwrap();
        assert!(matches!(clock.advance(1.0), Err(ClockError::TickOverflow)));
    }
}

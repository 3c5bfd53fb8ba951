//! Core units, constants, and shared primitives for the Hohmann calculator workspace.
//!
//! Every crate in the workspace works in kilometres, seconds and km³/s²; the helpers here
//! only convert for presentation.

/// Physical constants in km/s units.
pub mod constants {
    /// Earth's gravitational parameter (km³/s²), the default central body.
    pub const MU_EARTH_KM3_S2: f64 = 398_600.4418;
    /// Earth's equatorial radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_378.137;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert an altitude above a body of radius `body_radius_km` into an orbital radius.
    #[inline]
    pub fn altitude_to_radius(altitude_km: f64, body_radius_km: f64) -> f64 {
        altitude_km + body_radius_km
    }

    /// Convert an orbital radius into an altitude above a body of radius `body_radius_km`.
    #[inline]
    pub fn radius_to_altitude(radius_km: f64, body_radius_km: f64) -> f64 {
        radius_km - body_radius_km
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Split a non-negative duration into whole days, hours and minutes.
    pub fn split_duration(seconds: f64) -> (i64, i64, i64) {
        let total_seconds = seconds.max(0.0);
        let days = (total_seconds / SECONDS_PER_DAY).floor() as i64;
        let remaining = total_seconds - days as f64 * SECONDS_PER_DAY;
        let hours = (remaining / SECONDS_PER_HOUR).floor() as i64;
        let minutes = ((remaining - hours as f64 * SECONDS_PER_HOUR) / 60.0).floor() as i64;
        (days, hours, minutes)
    }
}

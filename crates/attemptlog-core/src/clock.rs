//! Clock and timestamp formatting
//!
//! Timestamps are always rendered in a configured reference zone, never the
//! process locale: `[MM/DD/YY H:MMAM]` with an unpadded hour.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// strftime pattern for the bracketed timestamp body
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %-I:%M%p";

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Formats the current instant in a fixed zone
#[derive(Debug, Clone)]
pub struct Timestamper<C = SystemClock> {
    zone: Tz,
    clock: C,
}

impl Timestamper<SystemClock> {
    /// Wall-clock timestamps in `zone`
    pub fn system(zone: Tz) -> Self {
        Self::new(zone, SystemClock)
    }
}

impl<C: Clock> Timestamper<C> {
    pub fn new(zone: Tz, clock: C) -> Self {
        Self { zone, clock }
    }

    /// Swap the clock, keeping the zone
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Timestamper<C2> {
        Timestamper {
            zone: self.zone,
            clock,
        }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The current instant converted into the reference zone
    pub fn now_in_zone(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.zone)
    }

    /// Bracketed timestamp for an arbitrary instant
    pub fn format_instant(&self, instant: DateTime<Utc>) -> String {
        format!(
            "[{}]",
            instant.with_timezone(&self.zone).format(TIMESTAMP_FORMAT)
        )
    }

    /// Bracketed timestamp for now
    pub fn timestamp(&self) -> String {
        self.format_instant(self.clock.now())
    }
}

/// Calendar-day helpers over the configured day-boundary zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayZones {
    boundary: Tz,
    earliest: Tz,
    latest: Tz,
}

impl DayZones {
    pub fn new(boundary: Tz, earliest: Tz, latest: Tz) -> Self {
        Self {
            boundary,
            earliest,
            latest,
        }
    }

    /// The calendar date `instant` belongs to
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.boundary).date_naive()
    }

    /// The date in the zone where days start last
    pub fn earliest_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.earliest).date_naive()
    }

    /// The date in the zone where days start first
    pub fn latest_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.latest).date_naive()
    }

    /// Whether two instants fall on the same boundary-zone day
    pub fn same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.local_date(a) == self.local_date(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_afternoon_in_pacific_daylight_time() {
        // 22:05 UTC is 15:05 PDT
        let stamper = Timestamper::new(
            chrono_tz::America::Los_Angeles,
            FixedClock::new(at(2026, 7, 4, 22, 5)),
        );
        assert_eq!(stamper.timestamp(), "[07/04/26 3:05PM]");
    }

    #[test]
    fn test_morning_in_pacific_standard_time() {
        // 17:30 UTC is 09:30 PST
        let stamper = Timestamper::new(
            chrono_tz::America::Los_Angeles,
            FixedClock::new(at(2026, 1, 15, 17, 30)),
        );
        assert_eq!(stamper.timestamp(), "[01/15/26 9:30AM]");
    }

    #[test]
    fn test_midnight_renders_as_twelve_am() {
        // 08:00 UTC is 00:00 PST
        let stamper = Timestamper::new(
            chrono_tz::America::Los_Angeles,
            FixedClock::new(at(2026, 12, 1, 8, 0)),
        );
        assert_eq!(stamper.timestamp(), "[12/01/26 12:00AM]");
    }

    #[test]
    fn test_conversion_crosses_date_line() {
        // 03:00 UTC on Mar 2 is still Mar 1 in Pacific
        let stamper = Timestamper::new(
            chrono_tz::America::Los_Angeles,
            FixedClock::new(at(2026, 3, 2, 3, 0)),
        );
        assert_eq!(stamper.timestamp(), "[03/01/26 7:00PM]");
    }

    #[test]
    fn test_with_clock_keeps_zone() {
        let stamper = Timestamper::system(chrono_tz::UTC)
            .with_clock(FixedClock::new(at(2026, 10, 19, 13, 7)));
        assert_eq!(stamper.zone(), chrono_tz::UTC);
        assert_eq!(stamper.timestamp(), "[10/19/26 1:07PM]");
    }

    #[test]
    fn test_day_zones_span_dates() {
        let zones = DayZones::new(
            chrono_tz::America::New_York,
            chrono_tz::Pacific::Honolulu,
            chrono_tz::Pacific::Guam,
        );
        // 06:00 UTC Jan 10: Jan 10 01:00 in New York, Jan 9 20:00 in Honolulu,
        // Jan 10 16:00 in Guam
        let instant = at(2026, 1, 10, 6, 0);
        assert_eq!(zones.local_date(instant), NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(zones.earliest_date(instant), NaiveDate::from_ymd_opt(2026, 1, 9).unwrap());
        assert_eq!(zones.latest_date(instant), NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
    }

    #[test]
    fn test_same_day_uses_boundary_zone() {
        let zones = DayZones::new(
            chrono_tz::America::New_York,
            chrono_tz::Pacific::Honolulu,
            chrono_tz::Pacific::Guam,
        );
        // 04:00 UTC and 06:00 UTC on Jan 10 straddle midnight in New York
        assert!(!zones.same_day(at(2026, 1, 10, 4, 0), at(2026, 1, 10, 6, 0)));
        assert!(zones.same_day(at(2026, 1, 10, 6, 0), at(2026, 1, 10, 20, 0)));
    }
}

//! Timestamp value generators.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;
use seeder_core::SeedValue;

/// Generate a random timestamp between January 1st of `now`'s year and `now`.
///
/// Seconds precision; the value renders as `YYYY-MM-DD HH:MM:SS`.
pub fn generate_timestamp_this_year<R: Rng>(rng: &mut R, now: NaiveDateTime) -> SeedValue {
    let start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(now);

    let span = (now - start).num_seconds();
    if span <= 0 {
        return SeedValue::Timestamp(start);
    }

    let offset = rng.gen_range(0..=span);
    let ts = start + TimeDelta::seconds(offset);
    SeedValue::Timestamp(ts)
}

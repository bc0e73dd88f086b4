// Uptime heat-strip: status classification, fixed-length windows and summary figures.
// Pure functions over an already-fetched UptimeHistory; no I/O here.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{
    DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};
use tracing::debug;

use crate::models::{
    DisplayPoint, Granularity, HealthPoint, Status, UptimeHistory, UptimeReport, UptimeSummary,
};

/// Reported when the daily sequence holds no probes at all.
const FULL_UPTIME: f64 = 100.0;

/// Status of one slot. Absent bucket and empty bucket are both `Unknown`.
pub fn classify(point: Option<&HealthPoint>) -> Status {
    point.map_or(Status::Unknown, |p| {
        Status::from_counts(p.up_count, p.down_count)
    })
}

/// Builds the `granularity.slots()`-long window ending at the unit containing `now`.
///
/// Index 0 is the oldest slot, the last index is `now`'s own day or hour. Days are calendar
/// days in `now`'s zone, each resolved with the offset in force on that day; hours are
/// consecutive clock hours. When the source holds more than one bucket for the same unit,
/// the first one in sequence order wins.
pub fn build_window<Tz: TimeZone>(
    history: &UptimeHistory,
    granularity: Granularity,
    now: &DateTime<Tz>,
) -> Vec<DisplayPoint> {
    let len = granularity.slots();
    let index = index_by_unit(history.points(granularity), granularity, &now.timezone());

    (0..len)
        .map(|i| {
            let (key, boundary) = slot(now, granularity, (len - 1 - i) as u32);
            let data = index.get(&key).copied();
            let date = boundary.fixed_offset();
            DisplayPoint {
                label: date.format(granularity.label_format()).to_string(),
                status: classify(data),
                data: data.cloned(),
                date,
            }
        })
        .collect()
}

/// Lookup key and boundary of the slot `back` units before `now`'s own unit.
fn slot<Tz: TimeZone>(
    now: &DateTime<Tz>,
    granularity: Granularity,
    back: u32,
) -> (NaiveDateTime, DateTime<Tz>) {
    match granularity {
        Granularity::Daily => {
            let day = now.date_naive() - Days::new(u64::from(back));
            (
                day.and_time(NaiveTime::MIN),
                local_midnight(day, &now.timezone()),
            )
        }
        Granularity::Hourly => {
            let start = hour_start(now) - TimeDelta::hours(i64::from(back));
            (start.naive_utc(), start)
        }
    }
}

/// Maps each bucket to its unit key. Earlier entries take precedence.
fn index_by_unit<'a, Tz: TimeZone>(
    points: &'a [HealthPoint],
    granularity: Granularity,
    tz: &Tz,
) -> HashMap<NaiveDateTime, &'a HealthPoint> {
    let mut index = HashMap::with_capacity(points.len());
    for point in points {
        let key = unit_key(&point.timestamp.with_timezone(tz), granularity);
        match index.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(point);
            }
            Entry::Occupied(_) => {
                debug!(unit = %key, ?granularity, "duplicate health bucket ignored");
            }
        }
    }
    index
}

/// Local date at midnight for days; UTC instant of the hour start for hours, so the repeated
/// hour of a DST fall-back stays two distinct slots.
fn unit_key<Tz: TimeZone>(local: &DateTime<Tz>, granularity: Granularity) -> NaiveDateTime {
    match granularity {
        Granularity::Daily => local.date_naive().and_time(NaiveTime::MIN),
        Granularity::Hourly => hour_start(local).naive_utc(),
    }
}

/// Start of the local day (daily) or clock hour (hourly) containing `local`.
pub fn unit_start<Tz: TimeZone>(local: &DateTime<Tz>, granularity: Granularity) -> DateTime<Tz> {
    match granularity {
        Granularity::Daily => local_midnight(local.date_naive(), &local.timezone()),
        Granularity::Hourly => hour_start(local),
    }
}

fn hour_start<Tz: TimeZone>(local: &DateTime<Tz>) -> DateTime<Tz> {
    let past_hour = TimeDelta::seconds(i64::from(local.minute() * 60 + local.second()))
        + TimeDelta::nanoseconds(i64::from(local.nanosecond()));
    local.clone() - past_hour
}

fn local_midnight<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::MIN);
    // midnight may not exist on a spring-forward day; use the first local time that does
    (0..24)
        .find_map(|h| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(h)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// `100 * up / (up + down)` over the whole daily sequence; 100 when nothing was probed.
/// Counts are summed as u128 so any pair of u64 counts fits.
pub fn overall_uptime(daily: &[HealthPoint]) -> f64 {
    let up: u128 = daily.iter().map(|p| u128::from(p.up_count)).sum();
    let down: u128 = daily.iter().map(|p| u128::from(p.down_count)).sum();
    let total = up + down;
    if total == 0 {
        return FULL_UPTIME;
    }
    up as f64 / total as f64 * 100.0
}

pub fn format_uptime(percent: f64) -> String {
    format!("{:.2}", percent)
}

/// Mean latency rounded to the nearest millisecond; 0 for an empty sequence.
pub fn avg_latency(points: &[HealthPoint]) -> u64 {
    if points.is_empty() {
        return 0;
    }
    let sum: f64 = points.iter().map(|p| p.latency).sum();
    (sum / points.len() as f64).round() as u64
}

impl UptimeSummary {
    /// Uptime always comes from the daily sequence; latency from the selected one.
    pub fn compute(history: &UptimeHistory, granularity: Granularity) -> Self {
        Self {
            overall_uptime: format_uptime(overall_uptime(&history.daily)),
            avg_latency_ms: avg_latency(history.points(granularity)),
        }
    }
}

impl UptimeReport {
    pub fn build<Tz: TimeZone>(
        history: &UptimeHistory,
        granularity: Granularity,
        now: &DateTime<Tz>,
    ) -> Self {
        Self {
            service_id: history.service_id.clone(),
            granularity,
            window: build_window(history, granularity, now),
            summary: UptimeSummary::compute(history, granularity),
        }
    }
}

// Health buckets from the Nexus API and the slots derived from them

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One aggregate bucket of probe results, as served by `/api/services/{id}/uptime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPoint {
    pub timestamp: DateTime<Utc>,
    pub up_count: u64,
    pub down_count: u64,
    /// Representative latency for the bucket, in milliseconds.
    pub latency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeHistory {
    pub service_id: String,
    pub hourly: Vec<HealthPoint>,
    pub daily: Vec<HealthPoint>,
}

impl UptimeHistory {
    /// The full sequence backing the given granularity.
    pub fn points(&self, granularity: Granularity) -> &[HealthPoint] {
        match granularity {
            Granularity::Daily => &self.daily,
            Granularity::Hourly => &self.hourly,
        }
    }
}

/// Slot status; serializes to lowercase JSON (e.g. "partial").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Offline,
    Partial,
    Unknown,
}

impl Status {
    /// A bucket with no probes at all is indistinguishable from no data.
    pub fn from_counts(up_count: u64, down_count: u64) -> Self {
        match (up_count, down_count) {
            (0, 0) => Status::Unknown,
            (_, 0) => Status::Online,
            (0, _) => Status::Offline,
            _ => Status::Partial,
        }
    }
}

/// Bucket width selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Hourly,
}

impl Granularity {
    /// Fixed number of slots in the rendered window.
    pub fn slots(self) -> usize {
        match self {
            Granularity::Daily => 30,
            Granularity::Hourly => 24,
        }
    }

    /// Tooltip heading format for a slot boundary.
    pub fn label_format(self) -> &'static str {
        match self {
            Granularity::Daily => "%b %d, %Y",
            Granularity::Hourly => "%b %d, %H:00",
        }
    }
}

/// One slot of the rendered timeline. Built fresh on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    /// Slot boundary (start of the local day or hour).
    pub date: DateTime<FixedOffset>,
    pub label: String,
    pub status: Status,
    pub data: Option<HealthPoint>,
}

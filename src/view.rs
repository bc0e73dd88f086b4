// Render-or-error state of one uptime card. No partial rendering on failure.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::models::{Granularity, UptimeHistory, UptimeReport};
use crate::upstream::FetchError;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch uptime history";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UptimeView {
    Loading,
    Ready(UptimeReport),
    Failed { message: String },
}

impl UptimeView {
    pub fn from_fetch<Tz: TimeZone>(
        result: Result<UptimeHistory, FetchError>,
        granularity: Granularity,
        now: &DateTime<Tz>,
    ) -> Self {
        match result {
            Ok(history) => UptimeView::Ready(UptimeReport::build(&history, granularity, now)),
            Err(_) => UptimeView::Failed {
                message: FETCH_FAILED_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UptimeView::Failed { .. })
    }
}

// Rendered uptime window plus its summary figures

use serde::{Deserialize, Serialize};

use super::{DisplayPoint, Granularity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeSummary {
    /// Percentage over the full daily sequence, two decimals (e.g. "99.75").
    pub overall_uptime: String,
    pub avg_latency_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeReport {
    pub service_id: String,
    pub granularity: Granularity,
    pub window: Vec<DisplayPoint>,
    pub summary: UptimeSummary,
}

// Domain models: Nexus API payloads and derived views

mod health;
mod report;
mod service;

pub use health::{DisplayPoint, Granularity, HealthPoint, Status, UptimeHistory};
pub use report::{UptimeReport, UptimeSummary};
pub use service::{DashboardStats, Service, ServiceGroup};

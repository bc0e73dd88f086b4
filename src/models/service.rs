// Service launcher entries as listed by /api/services

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub auth_required: bool,
    #[serde(default)]
    pub new_tab: bool,
}

/// One titled section of the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub group: String,
    pub services: Vec<Service>,
}

/// Header counters for the admin view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub public: usize,
    pub groups: usize,
}

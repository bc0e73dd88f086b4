// Landing page shaping: visibility, search and grouping of upstream services.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::models::{DashboardStats, Service, ServiceGroup};

/// Who is looking at the board. Secured services are hidden from anonymous viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated,
}

/// Groups items by key. Keys keep first-appearance order; items keep input order within a key.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match positions.get(&key) {
            Some(&pos) => groups[pos].1.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }
    groups
}

pub fn is_visible(service: &Service, viewer: Viewer) -> bool {
    service.public && (!service.auth_required || viewer == Viewer::Authenticated)
}

/// Case-insensitive substring match on name or group. Blank query matches everything.
pub fn matches_search(service: &Service, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    service.name.to_lowercase().contains(&query) || service.group.to_lowercase().contains(&query)
}

/// Visible services matching `query`, grouped into landing page sections.
/// Within a section services are ordered by `order`; ties keep upstream order.
pub fn landing_page(services: Vec<Service>, viewer: Viewer, query: &str) -> Vec<ServiceGroup> {
    let shown = services
        .into_iter()
        .filter(|s| is_visible(s, viewer) && matches_search(s, query));
    group_by(shown, |s| s.group.clone())
        .into_iter()
        .map(|(group, mut services)| {
            services.sort_by_key(|s| s.order);
            ServiceGroup { group, services }
        })
        .collect()
}

impl DashboardStats {
    pub fn from_services(services: &[Service]) -> Self {
        let groups: HashSet<&str> = services.iter().map(|s| s.group.as_str()).collect();
        Self {
            total: services.len(),
            public: services.iter().filter(|s| s.public).count(),
            groups: groups.len(),
        }
    }
}

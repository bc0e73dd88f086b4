// Landing page tests: group_by, visibility, search, stats

mod common;

use common::service;
use nexus_board::dashboard::*;
use nexus_board::models::DashboardStats;

#[test]
fn group_by_keeps_first_appearance_order() {
    let words = vec!["apple", "bean", "avocado", "carrot", "beet"];
    let grouped = group_by(words, |w| w.chars().next().unwrap());
    assert_eq!(
        grouped,
        vec![
            ('a', vec!["apple", "avocado"]),
            ('b', vec!["bean", "beet"]),
            ('c', vec!["carrot"]),
        ]
    );
}

#[test]
fn group_by_empty_input() {
    let grouped = group_by(Vec::<u32>::new(), |n| n % 2);
    assert!(grouped.is_empty());
}

#[test]
fn visibility_respects_public_and_auth() {
    let open = service("a", "A", "G", true, false);
    let secured = service("b", "B", "G", true, true);
    let private = service("c", "C", "G", false, false);
    assert!(is_visible(&open, Viewer::Anonymous));
    assert!(!is_visible(&secured, Viewer::Anonymous));
    assert!(is_visible(&secured, Viewer::Authenticated));
    assert!(!is_visible(&private, Viewer::Authenticated));
}

#[test]
fn search_matches_name_or_group_case_insensitive() {
    let s = service("graf", "Grafana", "Monitoring", true, false);
    assert!(matches_search(&s, ""));
    assert!(matches_search(&s, "  "));
    assert!(matches_search(&s, "GRAF"));
    assert!(matches_search(&s, "monit"));
    assert!(!matches_search(&s, "plex"));
}

#[test]
fn landing_page_filters_then_groups() {
    let services = vec![
        service("grafana", "Grafana", "Monitoring", true, false),
        service("jellyfin", "Jellyfin", "Media", true, false),
        service("vault", "Vault", "Monitoring", true, true),
        service("prom", "Prometheus", "Monitoring", true, false),
        service("router", "Router", "Network", false, false),
    ];
    let page = landing_page(services.clone(), Viewer::Anonymous, "");
    let groups: Vec<&str> = page.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(groups, vec!["Monitoring", "Media"]);
    let monitoring: Vec<&str> = page[0].services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(monitoring, vec!["grafana", "prom"]);

    let signed_in = landing_page(services.clone(), Viewer::Authenticated, "monitoring");
    assert_eq!(signed_in.len(), 1);
    assert_eq!(signed_in[0].services.len(), 3);

    assert!(landing_page(services, Viewer::Anonymous, "router").is_empty());
}

#[test]
fn stats_count_total_public_and_groups() {
    let services = vec![
        service("a", "A", "Media", true, false),
        service("b", "B", "Media", false, false),
        service("c", "C", "Network", true, true),
    ];
    assert_eq!(
        DashboardStats::from_services(&services),
        DashboardStats {
            total: 3,
            public: 2,
            groups: 2,
        }
    );
    assert_eq!(DashboardStats::from_services(&[]), DashboardStats::default());
}

#[test]
fn landing_page_orders_services_within_a_group() {
    let ranked = |id: &str, order: i64| {
        let mut s = service(id, id, "Media", true, false);
        s.order = order;
        s
    };
    let services = vec![
        ranked("plex", 3),
        ranked("sonarr", 1),
        service("grafana", "grafana", "Monitoring", true, false),
        ranked("radarr", 1),
        ranked("jellyfin", -2),
    ];
    let page = landing_page(services, Viewer::Anonymous, "");
    assert_eq!(page[0].group, "Media");
    let ids: Vec<&str> = page[0].services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["jellyfin", "sonarr", "radarr", "plex"]);
    assert_eq!(page[1].group, "Monitoring");
}

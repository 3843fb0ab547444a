use hashbrown::HashMap;
use log::{debug, info, trace, warn};
use petgraph::graph::NodeIndex;

use super::config::NetworkConfig;
use super::records::{RouteEntry, RouteRecord, StopRecord};
use super::route_filter::{classify, is_ambiguous};
use super::transfers::{add_transfer_edges, assign_intervals, wait_intervals};
use crate::{
    Error,
    model::{Connection, RouteNode, Stop, TransitGraph},
};

/// Builds the stop network from stop and route records
pub struct GraphBuilder<'a> {
    config: &'a NetworkConfig,
}

/// Canonical stops keyed by name, reachable through their raw IDs
struct StopIndex {
    by_name: HashMap<String, Stop>,
    id_to_name: HashMap<String, String>,
}

impl StopIndex {
    fn new(records: &[StopRecord], aliases: &[(String, String)]) -> Result<Self, Error> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut id_to_name = HashMap::with_capacity(records.len());

        for record in records {
            if record.name.is_empty() {
                debug!("Stop {} has no name - skipping", record.id);
                continue;
            }
            let stop = Stop::new(record.id.clone(), record.name.clone(), record.lat, record.lon)?;
            id_to_name.insert(record.id.clone(), record.name.clone());
            by_name.insert(record.name.clone(), stop);
        }

        for (known, alias) in aliases {
            if let Some(name) = id_to_name.get(known).cloned() {
                trace!("Stop ID {alias} resolves to {known} ({name})");
                id_to_name.insert(alias.clone(), name);
            }
        }

        Ok(Self {
            by_name,
            id_to_name,
        })
    }

    fn resolve(&self, stop_id: &str) -> Option<&Stop> {
        self.id_to_name
            .get(stop_id)
            .and_then(|name| self.by_name.get(name))
    }
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a NetworkConfig) -> Self {
        Self { config }
    }

    /// Builds the network graph
    ///
    /// # Errors
    ///
    /// Returns an error if an accepted route has no usable schedule or
    /// references a stop missing from the stop records
    pub fn build(
        &self,
        stops: &[StopRecord],
        routes: &[RouteRecord],
    ) -> Result<TransitGraph, Error> {
        info!(
            "Building network from {} stops and {} routes",
            stops.len(),
            routes.len()
        );
        let index = StopIndex::new(stops, &self.config.stop_aliases)?;

        let mut graph = TransitGraph::new();
        // schedules of every route title, space separated
        let mut schedules: HashMap<String, String> = HashMap::new();
        let mut accepted = 0usize;

        for route in routes {
            let decision = classify(route.title.as_deref(), &self.config.excluded_routes);
            if let Some(title) = route.title.as_deref() {
                if is_ambiguous(title) {
                    warn!("Route title '{title}' does not follow the usual line numbering ({decision:?})");
                }
            }
            if !decision.is_accepted() {
                debug!("Skipping route {:?}: {decision:?}", route.title);
                continue;
            }
            let Some(title) = route.title.as_deref() else {
                continue;
            };
            accepted += 1;

            self.add_route(&mut graph, &index, title, route)?;

            let schedule = route
                .schedule
                .as_deref()
                .ok_or_else(|| Error::MissingSchedule(title.to_string()))?;
            let group = schedules.entry(title.to_string()).or_default();
            group.push_str(schedule);
            group.push(' ');
        }
        info!("Accepted {accepted} of {} routes", routes.len());

        let intervals = wait_intervals(&schedules)?;
        assign_intervals(&mut graph, &intervals)?;
        let transfers = add_transfer_edges(&mut graph);

        info!(
            "Network has {} nodes and {} edges ({transfers} transfers)",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Walks the members of one route and links consecutive stops
    fn add_route(
        &self,
        graph: &mut TransitGraph,
        index: &StopIndex,
        title: &str,
        route: &RouteRecord,
    ) -> Result<(), Error> {
        let rail = self.config.is_rail_mode(&route.mode);
        // previous node of the traversal and its vertex, once materialized
        let mut previous: Option<(RouteNode, Option<NodeIndex>)> = None;

        for entry in route.entries.iter().filter(|e| self.selects(rail, e)) {
            if self.config.is_excluded_stop(&entry.stop_id) {
                trace!("Skipping excluded stop {} on route {title}", entry.stop_id);
                continue;
            }
            let stop = index
                .resolve(&entry.stop_id)
                .ok_or_else(|| Error::UnknownStop {
                    stop_id: entry.stop_id.clone(),
                    route: title.to_string(),
                })?;
            let node = RouteNode::new(stop, title);

            previous = match (previous, entry.travel_time) {
                (Some((from, from_idx)), Some(minutes)) => {
                    let from_idx = from_idx.unwrap_or_else(|| graph.add_node(from));
                    let to_idx = graph.add_node(node.clone());
                    graph.add_edge(from_idx, to_idx, Connection::travel(f64::from(minutes)));
                    Some((node, Some(to_idx)))
                }
                _ => Some((node, None)),
            };
        }

        Ok(())
    }

    /// Members defining the stops of a route: timed members on rail routes,
    /// platforms otherwise
    fn selects(&self, rail: bool, entry: &RouteEntry) -> bool {
        if rail {
            entry.travel_time.is_some()
        } else {
            entry.role == self.config.platform_role
        }
    }
}

/// Builds the network graph with the given configuration
///
/// # Errors
///
/// See [`GraphBuilder::build`]
pub fn build_graph(
    stops: &[StopRecord],
    routes: &[RouteRecord],
    config: &NetworkConfig,
) -> Result<TransitGraph, Error> {
    GraphBuilder::new(config).build(stops, routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConnectionKind;

    fn stop(id: &str, name: &str, lat: f64) -> StopRecord {
        StopRecord::new(id, lat, 15.44, name)
    }

    fn timed(stop_id: &str, minutes: u32) -> RouteEntry {
        RouteEntry {
            stop_id: stop_id.to_string(),
            role: "stop".to_string(),
            travel_time: Some(minutes),
        }
    }

    fn tram(title: &str, entries: Vec<RouteEntry>, schedule: &str) -> RouteRecord {
        RouteRecord {
            title: Some(title.to_string()),
            mode: "tram".to_string(),
            entries,
            schedule: Some(schedule.to_string()),
        }
    }

    fn stops() -> Vec<StopRecord> {
        vec![
            stop("1", "Jakominiplatz", 47.067),
            stop("2", "Hauptplatz", 47.071),
            stop("3", "Südtirolerplatz", 47.069),
            stop("4", "Hauptbahnhof", 47.072),
        ]
    }

    #[test]
    fn test_travel_edges_follow_route_order() {
        let routes = vec![tram("1", vec![timed("1", 1), timed("2", 3), timed("3", 2)], "06:00 06:10")];
        let graph = build_graph(&stops(), &routes, &NetworkConfig::default()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let a = graph.find("Jakominiplatz (1)").unwrap();
        let b = graph.find("Hauptplatz (1)").unwrap();
        let c = graph.find("Südtirolerplatz (1)").unwrap();
        assert_eq!(graph.connections(a, b), vec![Connection::travel(3.0)]);
        assert_eq!(graph.connections(b, c), vec![Connection::travel(2.0)]);
        assert!(graph.connections(b, a).is_empty());
    }

    #[test]
    fn test_intervals_from_all_schedules_of_a_title() {
        // both directions of line 1 contribute: 4 departures in total
        let routes = vec![
            tram("1", vec![timed("1", 1), timed("2", 3)], "06:00 06:30"),
            tram("1", vec![timed("2", 1), timed("1", 3)], "06:15 06:45"),
        ];
        let graph = build_graph(&stops(), &routes, &NetworkConfig::default()).unwrap();

        for idx in graph.node_indices() {
            assert!((graph.node(idx).unwrap().interval - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_transfer_edges_between_routes() {
        let routes = vec![
            tram("1", vec![timed("1", 1), timed("2", 3)], "a b c d"),
            tram("3", vec![timed("1", 1), timed("4", 4)], "a b"),
            tram("5", vec![timed("3", 1), timed("1", 2)], "a b c d e f"),
        ];
        let graph = build_graph(&stops(), &routes, &NetworkConfig::default()).unwrap();

        let on_1 = graph.find("Jakominiplatz (1)").unwrap();
        let on_3 = graph.find("Jakominiplatz (3)").unwrap();
        let on_5 = graph.find("Jakominiplatz (5)").unwrap();
        let group = [on_1, on_3, on_5];

        for &n in &group {
            assert!(graph.connections(n, n).is_empty());
            for &m in &group {
                if n == m {
                    continue;
                }
                let interval = graph.node(m).unwrap().interval;
                assert_eq!(graph.connections(n, m), vec![Connection::transfer(interval)]);
            }
        }
        assert_eq!(graph.transfer_count(), 6);
        assert!((graph.node(on_3).unwrap().interval - 30.0).abs() < 1e-9);
        assert!((graph.node(on_5).unwrap().interval - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_filter_applies() {
        let routes = vec![
            tram("N5", vec![timed("1", 1), timed("2", 3)], "a b"),
            tram("65E", vec![timed("1", 1), timed("2", 3)], "a b"),
            RouteRecord {
                title: None,
                ..tram("x", vec![timed("1", 1), timed("2", 3)], "a b")
            },
        ];
        let graph = build_graph(&stops(), &routes, &NetworkConfig::default()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_platform_routes_select_by_role() {
        let platform = |id: &str, minutes: Option<u32>| RouteEntry {
            stop_id: id.to_string(),
            role: "platform".to_string(),
            travel_time: minutes,
        };
        let route = RouteRecord {
            title: Some("30".to_string()),
            mode: "bus".to_string(),
            entries: vec![
                platform("1", None),
                timed("4", 9),
                platform("2", Some(4)),
                platform("3", None),
            ],
            schedule: Some("a b".to_string()),
        };
        let graph = build_graph(&stops(), &[route], &NetworkConfig::default()).unwrap();

        // the timed member is not a platform, the last hop has no travel time
        assert_eq!(graph.node_count(), 2);
        let a = graph.find("Jakominiplatz (30)").unwrap();
        let b = graph.find("Hauptplatz (30)").unwrap();
        assert_eq!(graph.connections(a, b), vec![Connection::travel(4.0)]);
        assert!(graph.find("Südtirolerplatz (30)").is_none());
    }

    #[test]
    fn test_aliases_and_excluded_stops() {
        let mut records = stops();
        records.push(stop("794705419", "Griesplatz", 47.066));
        let routes = vec![tram(
            "4",
            vec![timed("1", 1), timed("458195176", 2), timed("336334047", 3)],
            "a b",
        )];
        let graph = build_graph(&records, &routes, &NetworkConfig::default()).unwrap();

        assert_eq!(graph.node_count(), 2);
        let a = graph.find("Jakominiplatz (4)").unwrap();
        let b = graph.find("Griesplatz (4)").unwrap();
        assert_eq!(graph.connections(a, b)[0].kind, ConnectionKind::Travel);
    }

    #[test]
    fn test_last_stop_record_wins_for_a_name() {
        let records = vec![
            stop("1", "Jakominiplatz", 47.0),
            stop("9", "Jakominiplatz", 47.5),
            stop("2", "Hauptplatz", 47.1),
        ];
        let routes = vec![tram("1", vec![timed("1", 1), timed("2", 3)], "a b")];
        let graph = build_graph(&records, &routes, &NetworkConfig::default()).unwrap();

        let a = graph.find("Jakominiplatz (1)").unwrap();
        assert_eq!(graph.node(a).unwrap().stop_id, "9");
        assert!((graph.node(a).unwrap().geometry.y() - 47.5).abs() < 1e-12);
    }

    #[test]
    fn test_data_integrity_errors() {
        let config = NetworkConfig::default();

        let unknown = vec![tram("1", vec![timed("1", 1), timed("42", 3)], "a b")];
        assert!(matches!(
            build_graph(&stops(), &unknown, &config),
            Err(Error::UnknownStop { stop_id, route }) if stop_id == "42" && route == "1"
        ));

        let mut no_schedule = tram("1", vec![timed("1", 1), timed("2", 3)], "");
        no_schedule.schedule = None;
        assert!(matches!(
            build_graph(&stops(), &[no_schedule], &config),
            Err(Error::MissingSchedule(title)) if title == "1"
        ));

        let empty = vec![tram("1", vec![timed("1", 1), timed("2", 3)], "   ")];
        assert!(matches!(
            build_graph(&stops(), &empty, &config),
            Err(Error::EmptySchedule(_))
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let routes = vec![
            tram("1", vec![timed("1", 1), timed("2", 3), timed("4", 2)], "a b c d"),
            tram("3", vec![timed("4", 1), timed("1", 4)], "a b"),
        ];
        let config = NetworkConfig::default();
        let first = build_graph(&stops(), &routes, &config).unwrap();
        let second = build_graph(&stops(), &routes, &config).unwrap();

        let names = |g: &TransitGraph| g.node_indices().map(|i| g.display_name(i)).collect::<Vec<_>>();
        let edges = |g: &TransitGraph| {
            g.inner()
                .raw_edges()
                .iter()
                .map(|e| (e.source(), e.target(), e.weight))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(edges(&first), edges(&second));
    }
}

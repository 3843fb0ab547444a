use std::path::Path;

use hashbrown::HashMap;
use log::info;

use super::parser::deserialize_feed_file;
use super::raw_types::{FeedMember, FeedRoute, FeedStop};
use crate::{
    Error,
    loading::{
        NetworkConfig,
        records::{RouteEntry, RouteRecord, StopRecord},
    },
};

/// Reads and concatenates the records of every feed directory in the config
///
/// # Errors
///
/// Returns an error if a directory is missing or a feed file is malformed
pub fn read_feed(config: &NetworkConfig) -> Result<(Vec<StopRecord>, Vec<RouteRecord>), Error> {
    config.validate()?;

    let mut stops = Vec::new();
    let mut routes = Vec::new();
    for dir in &config.feed_dirs {
        let (dir_stops, dir_routes) = read_feed_dir(dir)?;
        stops.extend(dir_stops);
        routes.extend(dir_routes);
    }
    Ok((stops, routes))
}

/// Reads `stops.txt`, `routes.txt` and `route_members.txt` of one directory
///
/// # Errors
///
/// Returns an error if a file is missing or malformed, or a member refers to
/// an unknown route
pub fn read_feed_dir(dir: &Path) -> Result<(Vec<StopRecord>, Vec<RouteRecord>), Error> {
    info!("Reading feed from {}", dir.display());

    let feed_stops: Vec<FeedStop> = deserialize_feed_file(&dir.join("stops.txt"))?;
    let feed_routes: Vec<FeedRoute> = deserialize_feed_file(&dir.join("routes.txt"))?;
    let members: Vec<FeedMember> = deserialize_feed_file(&dir.join("route_members.txt"))?;

    let stops = feed_stops
        .into_iter()
        .map(|s| StopRecord::new(s.stop_id, s.stop_lat, s.stop_lon, s.stop_name))
        .collect::<Vec<_>>();

    let routes = assemble_routes(feed_routes, members)?;
    info!(
        "Read {} stops and {} routes from {}",
        stops.len(),
        routes.len(),
        dir.display()
    );
    Ok((stops, routes))
}

/// Attaches members to their routes in sequence order, keeping the route order of the file
fn assemble_routes(
    feed_routes: Vec<FeedRoute>,
    members: Vec<FeedMember>,
) -> Result<Vec<RouteRecord>, Error> {
    let route_index: HashMap<String, usize> = feed_routes
        .iter()
        .enumerate()
        .map(|(idx, route)| (route.route_id.clone(), idx))
        .collect();

    let mut route_members: Vec<Vec<FeedMember>> = vec![Vec::new(); feed_routes.len()];
    for member in members {
        let idx = *route_index.get(&member.route_id).ok_or_else(|| {
            Error::InvalidData(format!(
                "Member of stop {} refers to unknown route {}",
                member.stop_id, member.route_id
            ))
        })?;
        route_members[idx].push(member);
    }

    Ok(feed_routes
        .into_iter()
        .zip(route_members)
        .map(|(route, mut members)| {
            members.sort_by_key(|m| m.member_sequence);
            RouteRecord {
                title: route.route_ref.filter(|r| !r.is_empty()),
                mode: route.route_mode,
                entries: members
                    .into_iter()
                    .map(|m| RouteEntry {
                        stop_id: m.stop_id,
                        role: m.role,
                        travel_time: m.travel_time,
                    })
                    .collect(),
                schedule: route.schedule,
            }
        })
        .collect())
}

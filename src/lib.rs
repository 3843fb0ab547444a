//! Accessibility metrics for public transit stop networks.
//!
//! ```ignore
//! use transnet::{Metric, Network, NetworkConfig};
//!
//! let config = NetworkConfig::default().with_feed_dirs(vec!["data/graz_tram".into()]);
//! let network = Network::from_feed(&config)?;
//! for (name, minutes) in network.scores(Metric::TravelTime)? {
//!     println!("{minutes:.3} {name}");
//! }
//! ```

pub mod metric;
pub mod network;

pub use metric::Metric;
pub use network::Network;

pub use transnet_core::prelude::*;

//! Reading stop and route records from a tabular feed directory

mod parser;
mod processor;
mod raw_types;

pub use parser::deserialize_feed_file;
pub use processor::{read_feed, read_feed_dir};
pub use raw_types::{FeedMember, FeedRoute, FeedStop};

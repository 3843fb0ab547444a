pub mod centrality;

pub use centrality::{betweenness, eigenvector};

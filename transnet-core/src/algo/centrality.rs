//! Generic centralities computed by `rustworkx-core` on the stop network.
//! Both ignore edge weights.

use std::convert::Infallible;

use rustworkx_core::centrality::{betweenness_centrality, eigenvector_centrality};

use crate::{Error, metrics::NodeScores, model::TransitGraph};

const EIGENVECTOR_MAX_ITER: usize = 1000;
const EIGENVECTOR_TOLERANCE: f64 = 1e-6;
/// Node count from which betweenness runs in parallel
const PARALLEL_THRESHOLD: usize = 50;

/// Normalized betweenness centrality, endpoints excluded
pub fn betweenness(graph: &TransitGraph) -> NodeScores {
    betweenness_centrality(graph.inner(), false, true, PARALLEL_THRESHOLD)
        .into_iter()
        .map(|value| value.unwrap_or(0.0))
        .collect::<Vec<_>>()
        .into()
}

/// Eigenvector centrality by power iteration
///
/// # Errors
///
/// Returns [`Error::Centrality`] if the iteration does not converge
pub fn eigenvector(graph: &TransitGraph) -> Result<NodeScores, Error> {
    let values = eigenvector_centrality(
        graph.inner(),
        |_| Ok::<f64, Infallible>(1.0),
        Some(EIGENVECTOR_MAX_ITER),
        Some(EIGENVECTOR_TOLERANCE),
    )
    .unwrap_or_else(|never| match never {})
    .ok_or_else(|| {
        Error::Centrality(format!(
            "eigenvector centrality did not converge within {EIGENVECTOR_MAX_ITER} iterations"
        ))
    })?;
    Ok(values.into())
}

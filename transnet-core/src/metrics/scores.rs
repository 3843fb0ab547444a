use petgraph::graph::NodeIndex;

use crate::model::TransitGraph;

/// One score per graph node, indexed by [`NodeIndex`]
#[derive(Debug, Clone, PartialEq)]
pub struct NodeScores {
    values: Vec<f64>,
}

impl NodeScores {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn get(&self, node: NodeIndex) -> Option<f64> {
        self.values.get(node.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (NodeIndex::new(idx), value))
    }

    /// Scores keyed by the display name of their node, in node order
    pub fn named(&self, graph: &TransitGraph) -> Vec<(String, f64)> {
        self.iter()
            .map(|(idx, value)| (graph.display_name(idx), value))
            .collect()
    }
}

impl From<Vec<f64>> for NodeScores {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

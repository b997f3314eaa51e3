use std::cmp::Ordering;
use std::collections::HashSet;

use ndarray::Array2;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

use crate::error::IsomapError;

pub type Graph = UnGraph<(), f64>;

/// Weighted undirected graph over the observations, one node per row of the
/// distance matrix. Node indices coincide with observation indices.
pub struct NeighborhoodGraph {
    pub graph: Graph,
}

pub struct NeighborAndWeightIterator<'a> {
    edge_iter: petgraph::graph::Edges<'a, f64, petgraph::Undirected>,
    home_node: usize,
}

impl<'a> Iterator for NeighborAndWeightIterator<'a> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.edge_iter.next().map(|edge_ref| {
            let neighbor = if edge_ref.source().index() == self.home_node {
                edge_ref.target().index()
            } else {
                edge_ref.source().index()
            };
            (neighbor, *edge_ref.weight())
        })
    }
}

impl NeighborhoodGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, node: usize) -> NeighborAndWeightIterator<'_> {
        NeighborAndWeightIterator {
            edge_iter: self.graph.edges(petgraph::graph::NodeIndex::new(node)),
            home_node: node,
        }
    }

    /// Number of connected components. Anything other than 1 means the
    /// geodesic solver will fail; useful for diagnostics before solving.
    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }
}

fn check_square(distances: &Array2<f64>) -> Result<usize, IsomapError> {
    let n = distances.nrows();
    if distances.ncols() != n {
        return Err(IsomapError::InvalidInput(format!(
            "distance matrix must be square, got {}x{}",
            n,
            distances.ncols()
        )));
    }
    Ok(n)
}

/// Builds the k-nearest-neighbor graph from a pairwise distance matrix.
///
/// Each node selects its k closest other nodes (ties broken by lower index)
/// and contributes a bidirectional edge per selection; mutual selections are
/// collapsed into a single edge. Edge weight is the stored distance.
pub fn build_knn_graph(
    distances: &Array2<f64>,
    n_neighbors: usize,
) -> Result<NeighborhoodGraph, IsomapError> {
    let n = check_square(distances)?;
    if n_neighbors < 1 || n_neighbors >= n {
        return Err(IsomapError::InvalidParameter(format!(
            "n_neighbors must be between 1 and {} for {} observations, got {}",
            n - 1,
            n,
            n_neighbors
        )));
    }

    let mut graph = Graph::with_capacity(n, n * n_neighbors);
    let node_indices: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    let mut seen = HashSet::new();

    for i in 0..n {
        let mut candidates: Vec<usize> = (0..n).filter(|&j| j != i).collect();
        candidates.sort_by(|&a, &b| {
            distances[[i, a]]
                .partial_cmp(&distances[[i, b]])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        for &j in candidates.iter().take(n_neighbors) {
            let key = (i.min(j), i.max(j));
            if seen.insert(key) {
                graph.add_edge(node_indices[i], node_indices[j], distances[[i, j]]);
            }
        }
    }

    Ok(NeighborhoodGraph { graph })
}

/// Epsilon-ball variant: connects every pair at distance <= `radius`.
pub fn build_radius_graph(
    distances: &Array2<f64>,
    radius: f64,
) -> Result<NeighborhoodGraph, IsomapError> {
    let n = check_square(distances)?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(IsomapError::InvalidParameter(format!(
            "radius must be finite and positive, got {}",
            radius
        )));
    }

    let mut graph = Graph::with_capacity(n, n);
    let node_indices: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();

    for i in 0..n {
        for j in (i + 1)..n {
            if distances[[i, j]] <= radius {
                graph.add_edge(node_indices[i], node_indices[j], distances[[i, j]]);
            }
        }
    }

    Ok(NeighborhoodGraph { graph })
}

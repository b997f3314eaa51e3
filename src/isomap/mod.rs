use log::{debug, info, warn};
use ndarray::{Array1, Array2, ArrayView2};

use crate::distance::{pairwise_distances, DistanceMeasure, EuclideanDistance};
use crate::error::{IsomapError, NonEuclideanWarning};
use crate::geodesic::geodesic_distances;
use crate::graph::{build_knn_graph, build_radius_graph};
use crate::mds::classical_mds;

pub struct IsomapBuilder<D: DistanceMeasure = EuclideanDistance> {
    n_neighbors: Option<usize>,
    n_components: usize,
    radius: Option<f64>,
    metric: D,
}

impl IsomapBuilder<EuclideanDistance> {
    pub fn new() -> Self {
        IsomapBuilder {
            n_neighbors: None,
            n_components: 2,
            radius: None,
            metric: EuclideanDistance,
        }
    }
}

impl Default for IsomapBuilder<EuclideanDistance> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DistanceMeasure> IsomapBuilder<D> {
    pub fn n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.n_neighbors = Some(n_neighbors);
        self
    }

    pub fn n_components(mut self, n_components: usize) -> Self {
        self.n_components = n_components;
        self
    }

    /// Epsilon-ball neighborhoods instead of k-NN selection.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn metric<M: DistanceMeasure>(self, metric: M) -> IsomapBuilder<M> {
        IsomapBuilder {
            n_neighbors: self.n_neighbors,
            n_components: self.n_components,
            radius: self.radius,
            metric,
        }
    }

    pub fn build(self) -> Isomap<D> {
        Isomap {
            n_neighbors: self.n_neighbors,
            n_components: self.n_components,
            radius: self.radius,
            metric: self.metric,
        }
    }
}

pub struct Isomap<D: DistanceMeasure = EuclideanDistance> {
    n_neighbors: Option<usize>,
    n_components: usize,
    radius: Option<f64>,
    metric: D,
}

#[derive(Debug)]
pub struct IsomapResult {
    /// N×d coordinates, one row per input observation.
    pub embedding: Array2<f64>,
    /// Eigenvalue spectrum of the centered geodesic Gram matrix, descending.
    pub eigenvalues: Array1<f64>,
    pub warning: Option<NonEuclideanWarning>,
}

impl<D: DistanceMeasure> Isomap<D> {
    /// Runs the full pipeline: pairwise distances, neighborhood graph,
    /// geodesic distances, classical MDS. Strict sequence; the first failing
    /// stage aborts the run and no partial embedding is returned.
    /// Deterministic for fixed input and parameters.
    pub fn embed(&self, x: ArrayView2<f64>) -> Result<IsomapResult, IsomapError> {
        info!(
            "isomap: n_samples={}, n_features={}, n_components={}",
            x.nrows(),
            x.ncols(),
            self.n_components
        );

        debug!("computing pairwise distances");
        let distances = pairwise_distances(x, &self.metric)?;

        debug!("building neighborhood graph");
        let graph = match self.radius {
            Some(radius) => build_radius_graph(&distances, radius)?,
            None => {
                let n_neighbors = self.n_neighbors.ok_or_else(|| {
                    IsomapError::InvalidParameter(
                        "either n_neighbors or radius must be set".into(),
                    )
                })?;
                build_knn_graph(&distances, n_neighbors)?
            }
        };
        debug!(
            "neighborhood graph: {} nodes, {} edges, {} component(s)",
            graph.node_count(),
            graph.edge_count(),
            graph.connected_components()
        );

        debug!("solving geodesic distances");
        let geodesics = geodesic_distances(&graph)?;

        debug!("running classical MDS");
        let mds = classical_mds(geodesics.view(), self.n_components)?;
        if let Some(warning) = &mds.warning {
            warn!("{}", warning);
        }

        Ok(IsomapResult {
            embedding: mds.embedding,
            eigenvalues: mds.eigenvalues,
            warning: mds.warning,
        })
    }
}

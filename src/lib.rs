//! # isomap-embed
//!
//! A self-contained implementation of the ISOMAP manifold-learning algorithm:
//! embed high-dimensional observations into a low-dimensional space while
//! preserving geodesic (along-manifold) distances instead of straight-line
//! distances.
//!
//! ## Pipeline
//! - **Distances** ([`distance`]): pairwise distance matrix over the observations
//! - **Neighborhood graph** ([`graph`]): sparse k-NN (or epsilon-ball) graph
//! - **Geodesics** ([`geodesic`]): all-pairs shortest paths over the graph
//! - **Classical MDS** ([`mds`]): double-centering and eigen-decomposition
//!
//! The [`isomap`] module ties the stages together behind a builder:
//!
//! ```no_run
//! use isomap_embed::IsomapBuilder;
//! use ndarray::Array2;
//!
//! let x: Array2<f64> = Array2::zeros((200, 3));
//! let isomap = IsomapBuilder::new().n_neighbors(8).n_components(2).build();
//! let result = isomap.embed(x.view())?;
//! # Ok::<(), isomap_embed::IsomapError>(())
//! ```

pub mod distance;
pub mod error;
pub mod geodesic;
pub mod graph;
pub mod isomap;
pub mod mds;

pub use distance::{DistanceMeasure, EuclideanDistance, ManhattanDistance};
pub use error::{IsomapError, NonEuclideanWarning};
pub use isomap::{Isomap, IsomapBuilder, IsomapResult};

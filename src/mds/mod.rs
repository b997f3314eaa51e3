use std::cmp::Ordering;

use nalgebra::SymmetricEigen;
use ndarray::{Array1, Array2, ArrayView2};
use nshare::IntoNalgebra;

use crate::error::{IsomapError, NonEuclideanWarning};

pub struct MdsOutput {
    /// N×d coordinate matrix, one row per observation.
    pub embedding: Array2<f64>,
    /// Full eigenvalue spectrum of the double-centered matrix, descending.
    /// Useful for inspecting how much structure the retained rank captures.
    pub eigenvalues: Array1<f64>,
    pub warning: Option<NonEuclideanWarning>,
}

/// Classical multidimensional scaling of a distance matrix.
///
/// Squares the distances entrywise, double-centers with J = I − (1/N)·𝟙𝟙ᵗ
/// to form B = −½·J·S·J, then eigen-decomposes B with a direct symmetric
/// solver. Embedding column j is the j-th eigenvector scaled by the square
/// root of its eigenvalue, taking the top `n_components` eigenvalues in
/// descending order.
///
/// Negative retained eigenvalues are clamped to zero and reported through
/// `MdsOutput::warning` rather than producing complex coordinates.
pub fn classical_mds(
    distances: ArrayView2<f64>,
    n_components: usize,
) -> Result<MdsOutput, IsomapError> {
    let n = distances.nrows();
    if distances.ncols() != n {
        return Err(IsomapError::InvalidInput(format!(
            "distance matrix must be square, got {}x{}",
            n,
            distances.ncols()
        )));
    }
    if n_components < 1 || n_components > n {
        return Err(IsomapError::InvalidParameter(format!(
            "n_components must be between 1 and {} for {} observations, got {}",
            n, n, n_components
        )));
    }

    let squared = distances.mapv(|v| v * v);
    let centering = Array2::eye(n) - Array2::from_elem((n, n), 1.0 / n as f64);
    let gram = centering.dot(&squared).dot(&centering) * -0.5;

    let gram_na = gram.view().into_nalgebra().clone_owned();
    let eigen = SymmetricEigen::new(gram_na);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(Ordering::Equal)
    });
    let eigenvalues = Array1::from_iter(order.iter().map(|&i| eigen.eigenvalues[i]));

    let mut embedding = Array2::zeros((n, n_components));
    let mut clamped = Vec::new();
    for (component, &idx) in order.iter().take(n_components).enumerate() {
        let value = eigen.eigenvalues[idx];
        let scale = if value < 0.0 {
            clamped.push(component);
            0.0
        } else {
            value.sqrt()
        };
        for i in 0..n {
            embedding[[i, component]] = eigen.eigenvectors[(i, idx)] * scale;
        }
    }

    let warning = if clamped.is_empty() {
        None
    } else {
        Some(NonEuclideanWarning { clamped })
    };

    Ok(MdsOutput {
        embedding,
        eigenvalues,
        warning,
    })
}

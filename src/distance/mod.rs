use ndarray::{Array2, ArrayView1, ArrayView2};
use num_traits::{Float, FromPrimitive, ToPrimitive};

use crate::error::IsomapError;

pub trait DistanceMeasure {
    fn calculate<T>(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> f64
    where
        T: Float + FromPrimitive + ToPrimitive;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EuclideanDistance;

impl DistanceMeasure for EuclideanDistance {
    fn calculate<T>(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> f64
    where
        T: Float + FromPrimitive + ToPrimitive,
    {
        let mut squared_dist = T::zero();
        for i in 0..a.len() {
            let diff = a[i] - b[i];
            squared_dist = squared_dist + diff * diff;
        }
        squared_dist.sqrt().to_f64().unwrap()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ManhattanDistance;

impl DistanceMeasure for ManhattanDistance {
    fn calculate<T>(&self, a: ArrayView1<T>, b: ArrayView1<T>) -> f64
    where
        T: Float + FromPrimitive + ToPrimitive,
    {
        let mut dist = T::zero();
        for i in 0..a.len() {
            dist = dist + (a[i] - b[i]).abs();
        }
        dist.to_f64().unwrap()
    }
}

/// Pairwise distances between the rows of `x`, as a symmetric matrix with a
/// zero diagonal. O(N²D); each pair is evaluated once and mirrored.
pub fn pairwise_distances<T, D>(
    x: ArrayView2<T>,
    metric: &D,
) -> Result<Array2<f64>, IsomapError>
where
    T: Float + FromPrimitive + ToPrimitive,
    D: DistanceMeasure,
{
    let n_samples = x.nrows();
    if n_samples < 2 {
        return Err(IsomapError::InvalidInput(format!(
            "need at least 2 observations, got {}",
            n_samples
        )));
    }
    if x.ncols() < 1 {
        return Err(IsomapError::InvalidInput(
            "observations must have at least one feature".into(),
        ));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(IsomapError::InvalidInput(
            "observations contain non-finite values".into(),
        ));
    }

    let mut distances = Array2::zeros((n_samples, n_samples));
    for i in 0..n_samples {
        for j in (i + 1)..n_samples {
            let d = metric.calculate(x.row(i), x.row(j));
            distances[[i, j]] = d;
            distances[[j, i]] = d;
        }
    }
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_euclidean_pairwise() {
        let x = array![[0.0, 0.0], [3.0, 4.0], [0.0, 1.0]];
        let d = pairwise_distances(x.view(), &EuclideanDistance).unwrap();

        assert_relative_eq!(d[[0, 1]], 5.0);
        assert_relative_eq!(d[[0, 2]], 1.0);
        assert_relative_eq!(d[[1, 2]], (9.0f64 + 9.0).sqrt());
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 0.0, -1.0], [2.0, 2.0, 2.0], [0.5, 0.5, 9.0]];
        let d = pairwise_distances(x.view(), &EuclideanDistance).unwrap();

        for i in 0..4 {
            assert_relative_eq!(d[[i, i]], 0.0);
            for j in 0..4 {
                assert_relative_eq!(d[[i, j]], d[[j, i]]);
                assert!(d[[i, j]] >= 0.0);
            }
        }
    }

    #[test]
    fn test_manhattan() {
        let x = array![[0.0, 0.0], [3.0, 4.0]];
        let d = pairwise_distances(x.view(), &ManhattanDistance).unwrap();
        assert_relative_eq!(d[[0, 1]], 7.0);
    }

    #[test]
    fn test_invalid_input() {
        let x = array![[1.0, 2.0]];
        assert!(pairwise_distances(x.view(), &EuclideanDistance).is_err());

        let x = array![[1.0, f64::NAN], [0.0, 0.0]];
        let err = pairwise_distances(x.view(), &EuclideanDistance).unwrap_err();
        assert!(matches!(err, IsomapError::InvalidInput(_)));
    }
}

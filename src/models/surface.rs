//! Option-price surface grids
//!
//! This module contains the data structure for a solved option-price surface:
//! three congruent square grids of spot prices, times to maturity, and option
//! prices, reshaped from the flat point list a finite-difference solver emits.

use crate::error::{Result, SurfaceError};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Option-price surface on a square (spot, maturity) grid
///
/// Grids are row-major over the input point order: row r, column c holds the
/// point at index `r * side + c` of the original file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSurface {
    /// Spot prices S (2D grid)
    pub spots: Array2<f64>,
    /// Times to maturity T - t (2D grid)
    pub maturities: Array2<f64>,
    /// Option prices C(S, t) (2D grid)
    pub prices: Array2<f64>,
}

impl PriceSurface {
    /// Build a surface from the three flat columns of the input table
    ///
    /// The columns must have equal, nonzero, perfect-square length; each is
    /// reshaped row-major into a side x side grid. Anything else is a fatal
    /// grid error: the solver writes one row per (maturity step, spot node)
    /// pair, so a non-square count means truncated or mixed output.
    pub fn from_columns(
        spots: Vec<f64>,
        maturities: Vec<f64>,
        prices: Vec<f64>,
    ) -> Result<Self> {
        if spots.len() != maturities.len() || spots.len() != prices.len() {
            return Err(SurfaceError::GridError(format!(
                "column lengths differ: {} spots, {} maturities, {} prices",
                spots.len(),
                maturities.len(),
                prices.len()
            )));
        }

        let num_points = spots.len();
        if num_points == 0 {
            return Err(SurfaceError::GridError(
                "input contains no data rows".to_string(),
            ));
        }

        let side = (num_points as f64).sqrt().round() as usize;
        if side * side != num_points {
            return Err(SurfaceError::GridError(format!(
                "{} points do not form a square grid; the point count must be a perfect square",
                num_points
            )));
        }

        let spots = Array2::from_shape_vec((side, side), spots)
            .map_err(|e| SurfaceError::GridError(e.to_string()))?;
        let maturities = Array2::from_shape_vec((side, side), maturities)
            .map_err(|e| SurfaceError::GridError(e.to_string()))?;
        let prices = Array2::from_shape_vec((side, side), prices)
            .map_err(|e| SurfaceError::GridError(e.to_string()))?;

        let surface = Self {
            spots,
            maturities,
            prices,
        };

        let (s, m, p) = (
            surface.spots.dim(),
            surface.maturities.dim(),
            surface.prices.dim(),
        );
        if s != m || s != p {
            return Err(SurfaceError::GridError(format!(
                "reshaped grids are not congruent: spots {:?}, maturities {:?}, prices {:?}",
                s, m, p
            )));
        }

        Ok(surface)
    }

    /// Side length of the square grids
    pub fn side(&self) -> usize {
        self.prices.nrows()
    }

    /// Grid shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.prices.dim()
    }

    /// Total number of grid points
    pub fn num_points(&self) -> usize {
        self.prices.len()
    }

    /// Minimum and maximum over the finite option prices
    ///
    /// Returns `None` when the grid holds no finite price at all.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &price in self.prices.iter() {
            if price.is_finite() {
                min = min.min(price);
                max = max.max(price);
            }
        }

        if min.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reshapes_four_points_into_two_by_two_grids() {
        let surface = PriceSurface::from_columns(
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 0.0, 1.0],
            vec![0.1, 0.2, 0.3, 0.4],
        )
        .unwrap();

        assert_eq!(surface.shape(), (2, 2));
        assert_eq!(surface.num_points(), 4);

        assert_abs_diff_eq!(surface.spots[[0, 0]], 0.0);
        assert_abs_diff_eq!(surface.spots[[1, 0]], 1.0);
        assert_abs_diff_eq!(surface.maturities[[0, 1]], 1.0);
        assert_abs_diff_eq!(surface.maturities[[1, 0]], 0.0);

        // Row-major: Z = [[0.1, 0.2], [0.3, 0.4]]
        assert_abs_diff_eq!(surface.prices[[0, 0]], 0.1);
        assert_abs_diff_eq!(surface.prices[[0, 1]], 0.2);
        assert_abs_diff_eq!(surface.prices[[1, 0]], 0.3);
        assert_abs_diff_eq!(surface.prices[[1, 1]], 0.4);
    }

    #[test]
    fn grids_are_congruent_for_several_sides() {
        for side in [2usize, 3, 10] {
            let n = side * side;
            let spots: Vec<f64> = (0..n).map(|i| (i % side) as f64).collect();
            let maturities: Vec<f64> = (0..n).map(|i| (i / side) as f64).collect();
            let prices: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();

            let surface = PriceSurface::from_columns(spots, maturities, prices).unwrap();

            assert_eq!(surface.side(), side);
            assert_eq!(surface.spots.dim(), surface.maturities.dim());
            assert_eq!(surface.spots.dim(), surface.prices.dim());
        }
    }

    #[test]
    fn rejects_columns_of_unequal_length() {
        let result = PriceSurface::from_columns(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![0.0, 1.0, 2.0],
            vec![0.1, 0.2, 0.3, 0.4],
        );

        match result {
            Err(SurfaceError::GridError(msg)) => {
                assert!(msg.contains("column lengths differ"), "message: {msg}");
            }
            other => panic!("expected GridError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let result = PriceSurface::from_columns(Vec::new(), Vec::new(), Vec::new());
        assert!(matches!(result, Err(SurfaceError::GridError(_))));
    }

    #[test]
    fn rejects_point_counts_that_are_not_perfect_squares() {
        for n in [2usize, 3, 5, 8, 99] {
            let column: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let result =
                PriceSurface::from_columns(column.clone(), column.clone(), column.clone());

            match result {
                Err(SurfaceError::GridError(msg)) => {
                    assert!(msg.contains("perfect square"), "n={n}, message: {msg}");
                }
                other => panic!("n={n}: expected GridError, got {other:?}"),
            }
        }
    }

    #[test]
    fn price_range_skips_non_finite_values() {
        let surface = PriceSurface::from_columns(
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 0.0, 1.0],
            vec![0.25, f64::NAN, 0.75, f64::INFINITY],
        )
        .unwrap();

        let (min, max) = surface.price_range().unwrap();
        assert_abs_diff_eq!(min, 0.25);
        assert_abs_diff_eq!(max, 0.75);
    }

    #[test]
    fn price_range_is_none_without_finite_prices() {
        let surface = PriceSurface::from_columns(
            vec![0.0],
            vec![0.0],
            vec![f64::NAN],
        )
        .unwrap();

        assert!(surface.price_range().is_none());
    }
}

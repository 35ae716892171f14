use crate::math::random::{random_vector, RandomSource};

/// Row-major matrix backed by nested vectors.
///
/// Dense layers store one row per node and one column per input, so
/// `data[i][j]` is the weight from input `j` to node `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Draws every element independently from `rng` in `[min, max)`, row by row.
    pub fn random(rows: usize, cols: usize, min: f64, max: f64, rng: &mut dyn RandomSource) -> Matrix {
        let data = (0..rows)
            .map(|_| random_vector(rng, cols, min, max))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Wraps existing rows. The column count is taken from the first row (0 if empty).
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data,
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i]
    }

    /// Sum of `coeffs[r] * data[r][col]` over all rows, i.e. one element of `coeffsᵀ · self`.
    pub fn weighted_column_sum(&self, col: usize, coeffs: &[f64]) -> f64 {
        self.data
            .iter()
            .zip(coeffs)
            .fold(0.0, |acc, (row, c)| acc + c * row[col])
    }
}

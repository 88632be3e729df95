//! Edge-cost kernel blending spatial displacement and intensity variation.
//!
//! The cost of stepping between two adjacent cells p and q with geometric
//! separation g under the weighting parameter lambda is
//!
//! ```text
//! cost(p, q) = g * sqrt((1 - lambda)^2 + lambda^2 * (I_p - I_q)^2)
//! ```
//!
//! lambda = 0 reduces to pure Euclidean length, lambda = 1 to pure
//! intensity variation. The square-root form keeps the cost a metric on
//! each edge, so shortest-path distances accumulated from it are geodesic
//! lengths.

use crate::error::{Error, Result};

/// Cost of traversing the edge between two adjacent cells.
///
/// # Arguments
/// * `a`, `b` - intensities of the two endpoint cells
/// * `geom` - geometric edge length (1 for axis-aligned steps, sqrt(2) for
///   in-plane diagonals)
/// * `lambda` - weighting in [0, 1] between spatial and intensity terms
#[inline]
#[must_use]
pub fn edge_cost(a: f32, b: f32, geom: f32, lambda: f32) -> f32 {
    let spatial = 1.0 - lambda;
    let grad = lambda * (a - b);
    geom * (spatial * spatial + grad * grad).sqrt()
}

/// Reject weighting parameters outside [0, 1].
///
/// NaN fails the range check and is rejected with the same error.
pub(crate) fn validate_lambda(lambda: f32) -> Result<()> {
    if (0.0..=1.0).contains(&lambda) {
        Ok(())
    } else {
        Err(Error::LambdaOutOfRange(lambda))
    }
}

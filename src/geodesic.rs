//! Geodesic distance transform entry points.
//!
//! Four operations cover both solver families in both dimensions: an
//! intensity grid plus a binary seed mask in, a freshly allocated distance
//! grid out. The fast-marching operations use a gradient-only metric
//! (lambda fixed at 1, as in the interactive-segmentation tools this API
//! comes from); the raster-scan operations take the blending weight and
//! the pass count explicitly. Callers that want fast marching under a
//! blended metric can use [`fast_marching_2d`] and [`fast_marching_3d`]
//! from the [`crate::marching`] module directly.

use crate::error::Result;
use crate::grid::{Grid2, Grid3};
use crate::marching::{fast_marching_2d, fast_marching_3d};
use crate::raster;

/// Geodesic distance transform of a 2D image by fast marching.
///
/// The metric is gradient-only: stepping between adjacent cells costs the
/// absolute intensity difference. Seed cells end at distance zero.
///
/// # Example
/// ```rust
/// use geodist::{geodesic2d_fast_marching, Grid2};
///
/// let image = Grid2::from_raw((0..10).map(|k| k as f32).collect(), 1, 10).unwrap();
/// let mut seeds = Grid2::new(1, 10, 0u8);
/// seeds[(0, 0)] = 1;
///
/// let distance = geodesic2d_fast_marching(&image, &seeds).unwrap();
/// assert!((distance[(0, 9)] - 9.0).abs() < 1e-4);
/// ```
pub fn geodesic2d_fast_marching(image: &Grid2<f32>, seeds: &Grid2<u8>) -> Result<Grid2<f32>> {
    fast_marching_2d(image, seeds, 1.0)
}

/// Geodesic distance transform of a 2D image by raster scanning.
///
/// # Arguments
/// * `lambda` - weighting in [0, 1]: 0 gives spatial Euclidean distance
///   without the intensity term, 1 gives gradient-only distance without
///   the spatial term
/// * `iterations` - number of full passes (at least 1); four passes are
///   enough for smooth fields
pub fn geodesic2d_raster_scan(
    image: &Grid2<f32>,
    seeds: &Grid2<u8>,
    lambda: f32,
    iterations: u32,
) -> Result<Grid2<f32>> {
    raster::raster_scan_2d(image, seeds, lambda, iterations)
}

/// Geodesic distance transform of a 3D volume by fast marching.
///
/// Gradient-only metric, like [`geodesic2d_fast_marching`].
pub fn geodesic3d_fast_marching(image: &Grid3<f32>, seeds: &Grid3<u8>) -> Result<Grid3<f32>> {
    fast_marching_3d(image, seeds, 1.0)
}

/// Geodesic distance transform of a 3D volume by raster scanning.
///
/// Takes the same `lambda` and `iterations` parameters as
/// [`geodesic2d_raster_scan`].
pub fn geodesic3d_raster_scan(
    image: &Grid3<f32>,
    seeds: &Grid3<u8>,
    lambda: f32,
    iterations: u32,
) -> Result<Grid3<f32>> {
    raster::raster_scan_3d(image, seeds, lambda, iterations)
}

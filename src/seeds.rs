//! Seed-mask initialization for the distance solvers.
//!
//! A cell is a seed iff its mask byte is nonzero. Seeds start at distance
//! zero; every other cell starts unreachable at positive infinity.

use crate::error::{Error, Result};
use crate::grid::{Grid2, Grid3};

/// Build the initial 2D distance field from a seed mask.
///
/// Returns the seeded field together with the linear indices of the seed
/// cells, which the fast-marching solver uses to prime its frontier.
pub fn seed_distances_2d(seeds: &Grid2<u8>) -> Result<(Grid2<f32>, Vec<usize>)> {
    let mut distance = Grid2::new(seeds.height(), seeds.width(), f32::INFINITY);
    let cells = mark_seeds(seeds.as_slice(), distance.as_mut_slice())?;
    Ok((distance, cells))
}

/// Build the initial 3D distance field from a seed mask.
pub fn seed_distances_3d(seeds: &Grid3<u8>) -> Result<(Grid3<f32>, Vec<usize>)> {
    let mut distance = Grid3::new(seeds.depth(), seeds.height(), seeds.width(), f32::INFINITY);
    let cells = mark_seeds(seeds.as_slice(), distance.as_mut_slice())?;
    Ok((distance, cells))
}

fn mark_seeds(mask: &[u8], distance: &mut [f32]) -> Result<Vec<usize>> {
    let mut cells = Vec::new();
    for (cell, &flag) in mask.iter().enumerate() {
        if flag != 0 {
            distance[cell] = 0.0;
            cells.push(cell);
        }
    }
    if cells.is_empty() {
        return Err(Error::EmptySeeds);
    }
    Ok(cells)
}

//! Fast-marching geodesic distance solvers.
//!
//! Distances expand outward from the seed set in a single causal sweep:
//! the cell with the smallest tentative distance is frozen, its neighbors
//! are relaxed through the edge-cost kernel, and the frontier heap keeps
//! extraction monotone. Each cell freezes at most once, so a solve is
//! O(N log N) over N grid cells.
//!
//! Propagation is axis-aligned: 4-connected in 2D, 6-connected in 3D.
//! Cells that only become reachable through a non-finite edge cost are
//! never queued and keep their infinite distance.

use crate::cost::{edge_cost, validate_lambda};
use crate::error::Result;
use crate::grid::{
    ensure_same_shape_2d, ensure_same_shape_3d, Grid2, Grid3, AXIAL_OFFSETS_2D, AXIAL_OFFSETS_3D,
};
use crate::heap::IndexedHeap;
use crate::seeds::{seed_distances_2d, seed_distances_3d};

/// Marching state of a grid cell.
///
/// Transitions are one-way: Far -> Trial -> Frozen. A frozen cell's
/// distance is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CellState {
    /// Not yet reached by the expanding front
    #[default]
    Far,
    /// Queued with a tentative distance that may still decrease
    Trial,
    /// Distance settled; never revisited
    Frozen,
}

/// Geodesic distance transform of a 2D image by fast marching.
///
/// The seed mask and image must share a shape and lambda must lie in
/// [0, 1]. Seed cells end at distance zero; unreachable cells end at
/// positive infinity.
pub fn fast_marching_2d(
    image: &Grid2<f32>,
    seeds: &Grid2<u8>,
    lambda: f32,
) -> Result<Grid2<f32>> {
    ensure_same_shape_2d(image, seeds)?;
    validate_lambda(lambda)?;

    let (mut distance, seed_cells) = seed_distances_2d(seeds)?;
    let mut state = vec![CellState::Far; image.len()];
    for &cell in &seed_cells {
        state[cell] = CellState::Frozen;
    }

    let mut frontier = IndexedHeap::with_cells(image.len());
    for &cell in &seed_cells {
        relax_from_2d(image, &mut distance, &mut state, &mut frontier, cell, lambda);
    }
    while let Some((cell, settled)) = frontier.pop() {
        state[cell] = CellState::Frozen;
        debug_assert_eq!(distance.as_slice()[cell], settled);
        relax_from_2d(image, &mut distance, &mut state, &mut frontier, cell, lambda);
    }

    Ok(distance)
}

/// Geodesic distance transform of a 3D volume by fast marching.
pub fn fast_marching_3d(
    image: &Grid3<f32>,
    seeds: &Grid3<u8>,
    lambda: f32,
) -> Result<Grid3<f32>> {
    ensure_same_shape_3d(image, seeds)?;
    validate_lambda(lambda)?;

    let (mut distance, seed_cells) = seed_distances_3d(seeds)?;
    let mut state = vec![CellState::Far; image.len()];
    for &cell in &seed_cells {
        state[cell] = CellState::Frozen;
    }

    let mut frontier = IndexedHeap::with_cells(image.len());
    for &cell in &seed_cells {
        relax_from_3d(image, &mut distance, &mut state, &mut frontier, cell, lambda);
    }
    while let Some((cell, settled)) = frontier.pop() {
        state[cell] = CellState::Frozen;
        debug_assert_eq!(distance.as_slice()[cell], settled);
        relax_from_3d(image, &mut distance, &mut state, &mut frontier, cell, lambda);
    }

    Ok(distance)
}

/// Relax the axial neighbors of a newly frozen 2D cell
fn relax_from_2d(
    image: &Grid2<f32>,
    distance: &mut Grid2<f32>,
    state: &mut [CellState],
    frontier: &mut IndexedHeap,
    cell: usize,
    lambda: f32,
) {
    let (y, x) = image.coords(cell);
    let here = image[(y, x)];
    let settled = distance[(y, x)];
    for &(dy, dx) in &AXIAL_OFFSETS_2D {
        let Some((ny, nx)) = image.offset(y, x, dy, dx) else {
            continue;
        };
        let neighbor = image.linear(ny, nx);
        let candidate = settled + edge_cost(here, image[(ny, nx)], 1.0, lambda);
        match state[neighbor] {
            CellState::Far => {
                // a non-finite candidate marks an impassable edge
                if candidate.is_finite() {
                    distance.as_mut_slice()[neighbor] = candidate;
                    state[neighbor] = CellState::Trial;
                    frontier.insert(neighbor, candidate);
                }
            }
            CellState::Trial => {
                if candidate < distance.as_slice()[neighbor] {
                    distance.as_mut_slice()[neighbor] = candidate;
                    frontier.decrease_key(neighbor, candidate);
                }
            }
            CellState::Frozen => {}
        }
    }
}

/// Relax the axial neighbors of a newly frozen 3D cell
fn relax_from_3d(
    image: &Grid3<f32>,
    distance: &mut Grid3<f32>,
    state: &mut [CellState],
    frontier: &mut IndexedHeap,
    cell: usize,
    lambda: f32,
) {
    let (z, y, x) = image.coords(cell);
    let here = image[(z, y, x)];
    let settled = distance[(z, y, x)];
    for &(dz, dy, dx) in &AXIAL_OFFSETS_3D {
        let Some((nz, ny, nx)) = image.offset(z, y, x, dz, dy, dx) else {
            continue;
        };
        let neighbor = image.linear(nz, ny, nx);
        let candidate = settled + edge_cost(here, image[(nz, ny, nx)], 1.0, lambda);
        match state[neighbor] {
            CellState::Far => {
                if candidate.is_finite() {
                    distance.as_mut_slice()[neighbor] = candidate;
                    state[neighbor] = CellState::Trial;
                    frontier.insert(neighbor, candidate);
                }
            }
            CellState::Trial => {
                if candidate < distance.as_slice()[neighbor] {
                    distance.as_mut_slice()[neighbor] = candidate;
                    frontier.decrease_key(neighbor, candidate);
                }
            }
            CellState::Frozen => {}
        }
    }
}

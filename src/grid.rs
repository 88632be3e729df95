//! Dense row-major grid storage for 2D images and 3D volumes.
//!
//! Cells are addressed either by coordinates or by a linear index with the
//! last axis varying fastest, so a grid maps directly onto the contiguous
//! buffers exchanged with host numeric environments. 2D layout is (y, x),
//! 3D layout is (z, y, x).

use crate::error::{Error, Result};

/// Axis-aligned neighbor offsets in 2D, as (dy, dx)
pub const AXIAL_OFFSETS_2D: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Axis-aligned neighbor offsets in 3D, as (dz, dy, dx)
pub const AXIAL_OFFSETS_3D: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Dense 2D grid with (y, x) addressing
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

impl<T: Copy> Grid2<T> {
    /// Create a grid filled with a single value
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Self {
            data: vec![fill; height * width],
            height,
            width,
        }
    }

    /// Wrap an existing row-major buffer, validating its length
    pub fn from_raw(data: Vec<T>, height: usize, width: usize) -> Result<Self> {
        let expected = height * width;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                len: data.len(),
                shape: vec![height, width],
                expected,
            });
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid extents as (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total cell count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has zero cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether another grid has identical extents
    pub fn same_shape<U: Copy>(&self, other: &Grid2<U>) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Linear index of (y, x)
    #[inline]
    pub fn linear(&self, y: usize, x: usize) -> usize {
        debug_assert!(y < self.height && x < self.width);
        y * self.width + x
    }

    /// Coordinates (y, x) of a linear index
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.data.len());
        (index / self.width, index % self.width)
    }

    /// Step from (y, x) by a signed offset, returning the target only if it
    /// stays in bounds
    #[inline]
    pub fn offset(&self, y: usize, x: usize, dy: i32, dx: i32) -> Option<(usize, usize)> {
        let ny = y.checked_add_signed(dy as isize)?;
        let nx = x.checked_add_signed(dx as isize)?;
        if ny < self.height && nx < self.width {
            Some((ny, nx))
        } else {
            None
        }
    }

    /// In-bounds axis-aligned neighbors of (y, x)
    pub fn axial_neighbors(&self, y: usize, x: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        AXIAL_OFFSETS_2D
            .iter()
            .filter_map(move |&(dy, dx)| self.offset(y, x, dy, dx))
    }

    /// Borrow the backing row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the backing row-major buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Unwrap into the backing row-major buffer
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> std::ops::Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (y, x): (usize, usize)) -> &T {
        &self.data[self.linear(y, x)]
    }
}

impl<T: Copy> std::ops::IndexMut<(usize, usize)> for Grid2<T> {
    #[inline]
    fn index_mut(&mut self, (y, x): (usize, usize)) -> &mut T {
        let i = self.linear(y, x);
        &mut self.data[i]
    }
}

/// Dense 3D grid with (z, y, x) addressing
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3<T> {
    data: Vec<T>,
    depth: usize,
    height: usize,
    width: usize,
}

impl<T: Copy> Grid3<T> {
    /// Create a grid filled with a single value
    pub fn new(depth: usize, height: usize, width: usize, fill: T) -> Self {
        Self {
            data: vec![fill; depth * height * width],
            depth,
            height,
            width,
        }
    }

    /// Wrap an existing row-major buffer, validating its length
    pub fn from_raw(data: Vec<T>, depth: usize, height: usize, width: usize) -> Result<Self> {
        let expected = depth * height * width;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                len: data.len(),
                shape: vec![depth, height, width],
                expected,
            });
        }
        Ok(Self {
            data,
            depth,
            height,
            width,
        })
    }

    /// Number of slices
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of rows per slice
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid extents as (depth, height, width)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.depth, self.height, self.width)
    }

    /// Total cell count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has zero cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether another grid has identical extents
    pub fn same_shape<U: Copy>(&self, other: &Grid3<U>) -> bool {
        self.depth == other.depth && self.height == other.height && self.width == other.width
    }

    /// Linear index of (z, y, x)
    #[inline]
    pub fn linear(&self, z: usize, y: usize, x: usize) -> usize {
        debug_assert!(z < self.depth && y < self.height && x < self.width);
        (z * self.height + y) * self.width + x
    }

    /// Coordinates (z, y, x) of a linear index
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        debug_assert!(index < self.data.len());
        let x = index % self.width;
        let rest = index / self.width;
        (rest / self.height, rest % self.height, x)
    }

    /// Step from (z, y, x) by a signed offset, returning the target only if
    /// it stays in bounds
    #[inline]
    pub fn offset(
        &self,
        z: usize,
        y: usize,
        x: usize,
        dz: i32,
        dy: i32,
        dx: i32,
    ) -> Option<(usize, usize, usize)> {
        let nz = z.checked_add_signed(dz as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        let nx = x.checked_add_signed(dx as isize)?;
        if nz < self.depth && ny < self.height && nx < self.width {
            Some((nz, ny, nx))
        } else {
            None
        }
    }

    /// In-bounds axis-aligned neighbors of (z, y, x)
    pub fn axial_neighbors(
        &self,
        z: usize,
        y: usize,
        x: usize,
    ) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        AXIAL_OFFSETS_3D
            .iter()
            .filter_map(move |&(dz, dy, dx)| self.offset(z, y, x, dz, dy, dx))
    }

    /// Borrow the backing row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the backing row-major buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Unwrap into the backing row-major buffer
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> std::ops::Index<(usize, usize, usize)> for Grid3<T> {
    type Output = T;

    #[inline]
    fn index(&self, (z, y, x): (usize, usize, usize)) -> &T {
        &self.data[self.linear(z, y, x)]
    }
}

impl<T: Copy> std::ops::IndexMut<(usize, usize, usize)> for Grid3<T> {
    #[inline]
    fn index_mut(&mut self, (z, y, x): (usize, usize, usize)) -> &mut T {
        let i = self.linear(z, y, x);
        &mut self.data[i]
    }
}

/// Reject companion grids whose extents differ from the image
pub(crate) fn ensure_same_shape_2d<U: Copy>(image: &Grid2<f32>, other: &Grid2<U>) -> Result<()> {
    if image.same_shape(other) {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            image: vec![image.height(), image.width()],
            other: vec![other.height(), other.width()],
        })
    }
}

/// Reject companion grids whose extents differ from the volume
pub(crate) fn ensure_same_shape_3d<U: Copy>(image: &Grid3<f32>, other: &Grid3<U>) -> Result<()> {
    if image.same_shape(other) {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            image: vec![image.depth(), image.height(), image.width()],
            other: vec![other.depth(), other.height(), other.width()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_roundtrip_2d() {
        let grid = Grid2::new(3, 5, 0.0f32);
        for y in 0..3 {
            for x in 0..5 {
                let i = grid.linear(y, x);
                assert_eq!(grid.coords(i), (y, x));
            }
        }
        // last axis varies fastest
        assert_eq!(grid.linear(1, 0), 5);
        assert_eq!(grid.linear(0, 1), 1);
    }

    #[test]
    fn test_linear_roundtrip_3d() {
        let grid = Grid3::new(2, 3, 4, 0.0f32);
        for z in 0..2 {
            for y in 0..3 {
                for x in 0..4 {
                    let i = grid.linear(z, y, x);
                    assert_eq!(grid.coords(i), (z, y, x));
                }
            }
        }
        assert_eq!(grid.linear(1, 0, 0), 12);
        assert_eq!(grid.linear(0, 1, 0), 4);
        assert_eq!(grid.linear(0, 0, 1), 1);
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(Grid2::from_raw(vec![0u8; 12], 3, 4).is_ok());
        let err = Grid2::from_raw(vec![0u8; 11], 3, 4).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSizeMismatch {
                len: 11,
                shape: vec![3, 4],
                expected: 12,
            }
        );
        assert!(Grid3::from_raw(vec![0u8; 24], 2, 3, 4).is_ok());
        assert!(Grid3::from_raw(vec![0u8; 23], 2, 3, 4).is_err());
    }

    #[test]
    fn test_indexing() {
        let mut grid = Grid2::new(2, 2, 0.0f32);
        grid[(1, 0)] = 7.0;
        assert_eq!(grid[(1, 0)], 7.0);
        assert_eq!(grid.as_slice()[2], 7.0);

        let mut vol = Grid3::new(2, 2, 2, 0u8);
        vol[(1, 1, 1)] = 9;
        assert_eq!(vol.as_slice()[7], 9);
    }

    #[test]
    fn test_axial_neighbors_2d() {
        let grid = Grid2::new(3, 3, 0.0f32);
        // interior cell sees all four neighbors
        assert_eq!(grid.axial_neighbors(1, 1).count(), 4);
        // corner sees two
        let corner: Vec<_> = grid.axial_neighbors(0, 0).collect();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_axial_neighbors_3d() {
        let vol = Grid3::new(3, 3, 3, 0.0f32);
        assert_eq!(vol.axial_neighbors(1, 1, 1).count(), 6);
        assert_eq!(vol.axial_neighbors(0, 0, 0).count(), 3);
        assert_eq!(vol.axial_neighbors(2, 2, 2).count(), 3);
    }

    #[test]
    fn test_offset_bounds() {
        let grid = Grid2::new(2, 2, 0u8);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(1, 1, 1, 0), None);
        assert_eq!(grid.offset(0, 0, 1, 1), Some((1, 1)));
    }
}

//! Regular terrain grids.
//!
//! Vertices are laid out row-major: vertex `(i, j)` (column `i` along X, row
//! `j` along Z) has index `i + j * width_segments`. Every cell is split along
//! the same diagonal, from its `+X` corner to its `+Z` corner.

use lab_core::{LabError, Result};
use lab_math::Point3;

use crate::mesh_data::MeshData;
use crate::params::{require_addressable, require_dimension, require_segments};

/// Builder for a `width_segments × depth_segments` vertex grid.
///
/// The grid starts at the origin and spans `[0, extent_x] × [0, extent_z]`
/// (the unit square by default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainGrid {
    width_segments: u32,
    depth_segments: u32,
    extent_x: f64,
    extent_z: f64,
}

impl TerrainGrid {
    /// `width_segments` and `depth_segments` count vertices per axis.
    pub fn new(width_segments: u32, depth_segments: u32) -> Self {
        Self {
            width_segments,
            depth_segments,
            extent_x: 1.0,
            extent_z: 1.0,
        }
    }

    pub fn extent(mut self, x: f64, z: f64) -> Self {
        self.extent_x = x;
        self.extent_z = z;
        self
    }

    /// Flat grid at `y = 0`.
    pub fn build(&self) -> Result<MeshData> {
        self.build_with_heights(|_, _| 0.0)
    }

    /// Grid displaced by `height(x, z)`, sampled at every vertex.
    pub fn build_with_heights<F>(&self, height: F) -> Result<MeshData>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (w, d) = (self.width_segments, self.depth_segments);
        require_segments("width_segments", w, 2)?;
        require_segments("depth_segments", d, 2)?;
        require_dimension("extent_x", self.extent_x)?;
        require_dimension("extent_z", self.extent_z)?;
        require_addressable("terrain grid", u64::from(w) * u64::from(d))?;

        let mut positions = Vec::with_capacity(w as usize * d as usize);
        for j in 0..d {
            let z = f64::from(j) / f64::from(d - 1) * self.extent_z;
            for i in 0..w {
                let x = f64::from(i) / f64::from(w - 1) * self.extent_x;
                let y = height(x, z);
                if !y.is_finite() {
                    return Err(LabError::InvalidArgument(format!(
                        "height at ({x}, {z}) is not finite: {y}"
                    )));
                }
                positions.push(Point3::new(x, y, z));
            }
        }

        let cells = (w as usize - 1) * (d as usize - 1);
        let mut indices = Vec::with_capacity(cells * 6);
        for row in 0..d - 1 {
            for col in 0..w - 1 {
                let i0 = col + row * w;
                let i1 = i0 + 1;
                let i2 = i0 + w;
                let i3 = i2 + 1;
                indices.extend([i0, i2, i1, i1, i2, i3]);
            }
        }

        log::debug!(
            "terrain grid {w}x{d}: {} positions, {} indices",
            positions.len(),
            indices.len()
        );
        Ok(MeshData::from_parts(positions, indices))
    }
}

/// Flat grid over the unit square.
pub fn create_terrain_grid(width_segments: u32, depth_segments: u32) -> Result<MeshData> {
    TerrainGrid::new(width_segments, depth_segments).build()
}

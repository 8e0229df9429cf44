use lab_core::{LabError, Result, Validate};
use lab_math::{Aabb3, Point3, Vector3};

use crate::params::require_addressable;

/// Vertex positions plus a triangle list indexing into them.
///
/// Every index is smaller than `positions().len()` and the index list holds
/// whole triangles. Generators in this crate uphold both; [`MeshData::new`]
/// checks them for data assembled elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    positions: Vec<Point3>,
    indices: Vec<u32>,
    normals: Vec<Vector3>,
}

impl MeshData {
    /// Build a mesh from caller-supplied arrays, rejecting broken topology.
    pub fn new(positions: Vec<Point3>, indices: Vec<u32>) -> Result<Self> {
        let mesh = Self {
            positions,
            indices,
            normals: Vec::new(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    pub(crate) fn from_parts(positions: Vec<Point3>, indices: Vec<u32>) -> Self {
        let mesh = Self {
            positions,
            indices,
            normals: Vec::new(),
        };
        debug_assert!(mesh.validate().is_ok(), "generator produced invalid topology");
        mesh
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-vertex normals; empty until [`MeshData::compute_normals`] runs.
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Merge another mesh into this one, offsetting indices appropriately.
    ///
    /// Normals survive only when both meshes carry them. Fails without
    /// touching `self` when the combined vertices would not fit `u32` indices.
    pub fn merge(&mut self, other: &MeshData) -> Result<()> {
        let offset = merge_offset(self.positions.len(), other.positions.len())?;
        let keep_normals = self.has_normals() && other.has_normals();
        self.positions.extend_from_slice(&other.positions);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
        if keep_normals {
            self.normals.extend_from_slice(&other.normals);
        } else {
            self.normals.clear();
        }
        Ok(())
    }

    /// Accumulate face normals onto each referenced vertex and normalize.
    ///
    /// Shapes that duplicate vertices per face (cube, cylinder caps) end up
    /// with flat normals; shared vertices get the smooth average.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let p1 = self.positions[i1];
            let p2 = self.positions[i2];
            let normal = (p1 - p0).cross(p2 - p0);
            self.normals[i0] += normal;
            self.normals[i1] += normal;
            self.normals[i2] += normal;
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.positions)
    }

    fn has_normals(&self) -> bool {
        !self.positions.is_empty() && self.normals.len() == self.positions.len()
    }
}

/// Index offset for appending `incoming` vertices after `existing` ones.
fn merge_offset(existing: usize, incoming: usize) -> Result<u32> {
    let total = existing
        .checked_add(incoming)
        .and_then(|total| u64::try_from(total).ok())
        .unwrap_or(u64::MAX);
    require_addressable("merged mesh", total)?;
    u32::try_from(existing).map_err(|_| {
        LabError::InvalidArgument(format!("{existing} vertices cannot be offset by a u32 index"))
    })
}

impl Validate for MeshData {
    fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(LabError::Topology(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let n = self.positions.len();
        if let Some((slot, &idx)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &idx)| idx as usize >= n)
        {
            return Err(LabError::Topology(format!(
                "index {} at slot {} is out of bounds for {} positions",
                idx, slot, n
            )));
        }

        if !self.normals.is_empty() && self.normals.len() != n {
            return Err(LabError::Topology(format!(
                "{} normals for {} positions",
                self.normals.len(),
                n
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_math::DVec3;

    fn single_triangle() -> MeshData {
        MeshData::new(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn test_vertex_and_triangle_count() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_new_rejects_out_of_bounds_index() {
        let err = MeshData::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 3]).unwrap_err();
        assert!(matches!(err, LabError::Topology(_)));
    }

    #[test]
    fn test_new_rejects_partial_triangle() {
        let err = MeshData::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1]).unwrap_err();
        assert!(matches!(err, LabError::Topology(_)));
    }

    #[test]
    fn test_merge() {
        let mut a = single_triangle();
        let b = MeshData::new(
            vec![
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(3.0, 0.0, 0.0),
                DVec3::new(2.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
        .unwrap();
        a.merge(&b).unwrap();
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        // Second triangle indices should be offset by 3
        assert_eq!(&a.indices()[3..], &[3, 4, 5]);
        a.validate().unwrap();
    }

    #[test]
    fn test_merge_drops_partial_normals() {
        let mut a = single_triangle();
        a.compute_normals();
        a.merge(&single_triangle()).unwrap();
        assert!(a.normals().is_empty());
        a.validate().unwrap();
    }

    #[test]
    fn test_merge_offset_limit() {
        let max = u32::MAX as usize;
        assert_eq!(merge_offset(3, 3).unwrap(), 3);
        assert_eq!(merge_offset(max - 10, 10).unwrap(), u32::MAX - 10);
        assert!(matches!(merge_offset(max, 1), Err(LabError::InvalidArgument(_))));
        assert!(matches!(merge_offset(usize::MAX, usize::MAX), Err(LabError::InvalidArgument(_))));
    }

    #[test]
    fn test_compute_normals() {
        let mut mesh = single_triangle();
        mesh.compute_normals();
        assert_eq!(mesh.normals().len(), 3);
        for n in mesh.normals() {
            // Normal should point in +Z direction for a CCW triangle on XY plane
            assert!((n.z - 1.0).abs() < 1e-10, "Expected +Z normal, got {:?}", n);
        }
    }

    #[test]
    fn test_bounding_box() {
        let mesh = single_triangle();
        let bb = mesh.bounding_box().unwrap();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshData::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.bounding_box().is_none());
        mesh.validate().unwrap();
    }
}
